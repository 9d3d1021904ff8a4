//! Conversion of tiles into instanced-quad attributes
//!
//! The renderer draws one unit quad per tile. Each instance is scaled to
//! the tile size and moved to the tile center in a coordinate system whose
//! origin sits in the middle of the canvas.

use serde::Serialize;

use crate::spatial::{Canvas, Tile};

/// Attributes of one instanced quad
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TileInstance {
    /// Quad scale (tile width, tile height)
    pub scale: [f32; 2],
    /// Quad center relative to the canvas center
    pub position: [f32; 2],
    /// Direction payload read by the shader
    pub direction: f32,
}

impl TileInstance {
    /// Instance for a tile on `canvas`
    pub fn from_tile(tile: &Tile, canvas: &Canvas) -> Self {
        let [cx, cy] = tile.center();
        Self {
            scale: [tile.width as f32, tile.height as f32],
            position: [
                (cx - canvas.width / 2.0) as f32,
                (cy - canvas.height / 2.0) as f32,
            ],
            direction: tile.direction.payload(),
        }
    }

    /// Column-major 4x4 model matrix (scale, then translate; z stays 0)
    #[rustfmt::skip]
    pub const fn model_matrix(&self) -> [f32; 16] {
        [
            self.scale[0], 0.0, 0.0, 0.0,
            0.0, self.scale[1], 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            self.position[0], self.position[1], 0.0, 1.0,
        ]
    }
}

/// Instance data for a whole layout, in tile order
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InstanceBuffer {
    instances: Vec<TileInstance>,
}

impl InstanceBuffer {
    /// Build instance data for every tile
    pub fn from_tiles(tiles: &[Tile], canvas: &Canvas) -> Self {
        Self {
            instances: tiles
                .iter()
                .map(|tile| TileInstance::from_tile(tile, canvas))
                .collect(),
        }
    }

    /// Number of instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the buffer holds no instances
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// All instances
    pub fn instances(&self) -> &[TileInstance] {
        &self.instances
    }

    /// Flat per-instance direction attribute
    pub fn direction_attribute(&self) -> Vec<f32> {
        self.instances.iter().map(|i| i.direction).collect()
    }

    /// Flat per-instance model matrices, 16 floats each
    pub fn matrix_attribute(&self) -> Vec<f32> {
        self.instances
            .iter()
            .flat_map(|i| i.model_matrix())
            .collect()
    }
}
