//! Owner of the instance data currently handed to the renderer

use log::debug;

use crate::algorithm::executor::TilePartitioner;
use crate::algorithm::parameters::ParameterSet;
use crate::algorithm::random::RandomSource;
use crate::io::error::Result;
use crate::mesh::instances::InstanceBuffer;
use crate::spatial::{Canvas, Tile};

/// Current layout and its instance data
///
/// Rebuilding always releases the previous buffer first, on every path,
/// including when the new parameters are rejected.
#[derive(Debug)]
pub struct TileLayer {
    canvas: Canvas,
    tiles: Vec<Tile>,
    buffer: Option<InstanceBuffer>,
    builds: u64,
}

impl TileLayer {
    /// Empty layer for a canvas
    pub const fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            tiles: Vec::new(),
            buffer: None,
            builds: 0,
        }
    }

    /// Partition the canvas with `parameters` and rebuild the instance data
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter set fails validation; the layer is
    /// left empty in that case
    pub fn regenerate<R: RandomSource>(
        &mut self,
        parameters: &ParameterSet,
        rng: &mut R,
    ) -> Result<&InstanceBuffer> {
        self.release();
        let partitioner = TilePartitioner::new(self.canvas, *parameters)?;
        let tiles = partitioner.generate(rng);
        Ok(self.install(tiles))
    }

    /// Rebuild the instance data from a caller-supplied tile list
    pub fn rebuild_from_tiles(&mut self, tiles: Vec<Tile>) -> &InstanceBuffer {
        self.release();
        self.install(tiles)
    }

    /// Drop the current tiles and instance data
    pub fn release(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            debug!("releasing {} tile instances", buffer.len());
        }
        self.tiles.clear();
    }

    fn install(&mut self, tiles: Vec<Tile>) -> &InstanceBuffer {
        self.builds += 1;
        let buffer = InstanceBuffer::from_tiles(&tiles, &self.canvas);
        self.tiles = tiles;
        self.buffer.insert(buffer)
    }

    /// Instance data of the current layout, if any
    pub const fn buffer(&self) -> Option<&InstanceBuffer> {
        self.buffer.as_ref()
    }

    /// Tiles of the current layout
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of builds performed so far
    pub const fn build_count(&self) -> u64 {
        self.builds
    }

    /// Canvas the layer covers
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}
