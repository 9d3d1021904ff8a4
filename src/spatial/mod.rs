//! Spatial data structures for the partitioned canvas
//!
//! This module contains spatial-related functionality including:
//! - Canvas bounds and containment tests
//! - Gradient direction tags and split axes
//! - The tile record produced by the partitioner

/// Canvas bounds that every tile must stay inside
pub mod canvas;
/// Gradient direction tags and direction-tagging helpers
pub mod direction;
/// Tile records and axis-generic accessors
pub mod tiles;

pub use canvas::Canvas;
pub use direction::{Axis, GradientDirection};
pub use tiles::Tile;
