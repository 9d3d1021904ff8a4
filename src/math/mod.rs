//! Mathematical utilities for the algorithm

/// Categorical selection over weight tables
pub mod probability;
