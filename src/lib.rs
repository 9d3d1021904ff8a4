//! Recursive multi-strategy tile partitioning for gradient tile layouts
//!
//! A rectangular canvas is subdivided level by level into adjacent (or
//! deliberately nested) tiles. Each frontier tile draws one of five
//! strategies by weight, falls back along a fixed chain when the chosen
//! split is infeasible, and tags every resulting tile with a gradient
//! direction for the renderer.

#![forbid(unsafe_code)]

/// Partition driver, strategy selection, splitters and randomness
pub mod algorithm;
/// Statistics and invariant checks over generated layouts
pub mod analysis;
/// Configuration, errors and file output
pub mod io;
/// Weighted selection helpers
pub mod math;
/// Renderer-facing instance data
pub mod mesh;
/// Canvas, tiles and gradient directions
pub mod spatial;

pub use algorithm::executor::{Partition, TilePartitioner};
pub use algorithm::parameters::ParameterSet;
pub use io::error::{AlgorithmError, Result};
