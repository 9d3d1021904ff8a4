//! JSON export of generated layouts

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::algorithm::parameters::ParameterSet;
use crate::io::error::{AlgorithmError, Result, ensure_directory};
use crate::mesh::instances::{InstanceBuffer, TileInstance};
use crate::spatial::{Canvas, Tile};

/// Everything a mesh builder needs to reproduce a layout
#[derive(Debug, Serialize)]
pub struct LayoutDocument<'a> {
    /// Seed the layout was generated from
    pub seed: u64,
    /// Canvas the tiles cover
    pub canvas: &'a Canvas,
    /// Parameters the layout was generated with
    pub parameters: &'a ParameterSet,
    /// Tiles in generation order
    pub tiles: &'a [Tile],
    /// Instance attributes in tile order
    pub instances: &'a [TileInstance],
}

impl<'a> LayoutDocument<'a> {
    /// Bundle a layout with its instance data
    pub fn new(
        seed: u64,
        canvas: &'a Canvas,
        parameters: &'a ParameterSet,
        tiles: &'a [Tile],
        instances: &'a InstanceBuffer,
    ) -> Self {
        Self {
            seed,
            canvas,
            parameters,
            tiles,
            instances: instances.instances(),
        }
    }

    /// Render the document as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| AlgorithmError::Serialization {
            path: "<memory>".into(),
            source,
        })
    }

    /// Write the document to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The layout holds no tiles
    /// - The parent directory or the file cannot be created
    /// - Serialization or writing fails
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if self.tiles.is_empty() {
            return Err(AlgorithmError::EmptyLayout);
        }

        if let Some(parent) = path.parent() {
            ensure_directory(parent)?;
        }

        let file = File::create(path).map_err(|source| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation: "create file",
            source,
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| {
            AlgorithmError::Serialization {
                path: path.to_path_buf(),
                source,
            }
        })?;

        writer.flush().map_err(|source| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation: "write file",
            source,
        })
    }
}
