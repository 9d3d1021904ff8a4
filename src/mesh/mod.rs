//! Renderer-facing instance data built from a finished layout

/// Per-tile instance transforms and direction attributes
pub mod instances;
/// Regeneration with release-before-rebuild of instance data
pub mod layer;
