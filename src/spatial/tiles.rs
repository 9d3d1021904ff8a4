//! Tile record produced by the partitioner

use serde::Serialize;

use crate::spatial::{Axis, GradientDirection};

/// One rectangle of the partition
///
/// Tiles are immutable values: splitting never edits a tile in place, it
/// emits new tiles and retires the parent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Tile {
    /// Horizontal offset from the canvas origin
    pub x: f64,
    /// Vertical offset from the canvas origin
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
    /// Iteration at which the tile was last finalized
    pub level: u32,
    /// Gradient flow tag
    pub direction: GradientDirection,
}

impl Tile {
    /// Full-canvas tile at level 0
    pub const fn root(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            level: 0,
            direction: GradientDirection::Up,
        }
    }

    /// Extent along an axis
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Offset along an axis
    pub const fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.x,
            Axis::Height => self.y,
        }
    }

    /// Copy of this tile occupying `[start, start + extent)` along `axis`
    #[must_use]
    pub const fn slice(&self, axis: Axis, start: f64, extent: f64) -> Self {
        let mut tile = *self;
        match axis {
            Axis::Width => {
                tile.x = start;
                tile.width = extent;
            }
            Axis::Height => {
                tile.y = start;
                tile.height = extent;
            }
        }
        tile
    }

    /// Copy with a new level
    #[must_use]
    pub const fn at_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Copy with a new direction
    #[must_use]
    pub const fn with_direction(mut self, direction: GradientDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Area covered by the tile
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether the tile has collapsed to a line or a point
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Center of the tile
    pub fn center(&self) -> [f64; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }
}
