//! Configuration, error handling and output of generated layouts

/// Command-line interface and batch processing
pub mod cli;
/// Limits and default parameters
pub mod configuration;
/// Error types
pub mod error;
/// JSON layout export
pub mod export;
/// PNG layout preview
pub mod image;
/// Batch progress display
pub mod progress;
