//! Rectangular canvas the partitioner subdivides

use serde::Serialize;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Axis, Tile};

/// Extent of the scene in scene units
///
/// Scenes are usually normalized so that `height == 1.0` and the width
/// carries the aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Canvas {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Canvas {
    /// Create a canvas with explicit dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is non-finite or not strictly positive
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(invalid_parameter(
                "canvas.width",
                &width,
                &"must be a finite positive number",
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(invalid_parameter(
                "canvas.height",
                &height,
                &"must be a finite positive number",
            ));
        }
        Ok(Self { width, height })
    }

    /// Create a canvas of unit height whose width is the aspect ratio
    ///
    /// # Errors
    ///
    /// Returns an error if the aspect ratio is non-finite or not strictly positive
    pub fn normalized(aspect_ratio: f64) -> Result<Self> {
        Self::new(aspect_ratio, 1.0)
    }

    /// Extent along an axis
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Area of the canvas
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The full-canvas tile every partition starts from
    pub const fn root_tile(&self) -> Tile {
        Tile::root(self.width, self.height)
    }

    /// Check that a tile lies inside the canvas within `tolerance`
    pub fn contains(&self, tile: &Tile, tolerance: f64) -> bool {
        tile.x >= -tolerance
            && tile.y >= -tolerance
            && tile.width >= 0.0
            && tile.height >= 0.0
            && tile.x + tile.width <= self.width + tolerance
            && tile.y + tile.height <= self.height + tolerance
    }
}
