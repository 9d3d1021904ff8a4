//! Algorithm limits and runtime configuration defaults

use crate::algorithm::parameters::IntRange;
use crate::algorithm::selection::StrategyWeights;

// Limits mirror the bounds of the interactive parameter panel
/// Largest allowed iteration count
pub const MAX_ITERATIONS: u32 = 30;
/// Largest allowed division count
pub const MAX_DIVISIONS: u32 = 30;
/// Largest allowed concentric ring count
pub const MAX_CONCENTRIC_RINGS: u32 = 30;

/// Default iteration bounds
pub const DEFAULT_ITERATION_RANGE: IntRange = IntRange::new(1, 4);
/// Default division bounds
pub const DEFAULT_DIVISION_RANGE: IntRange = IntRange::new(2, 8);
/// Default concentric ring bounds
pub const DEFAULT_CONCENTRIC_RANGE: IntRange = IntRange::new(5, 8);

/// Default strategy weights
pub const DEFAULT_WEIGHTS: StrategyWeights = StrategyWeights {
    none: 0.1,
    concentric: 0.1,
    unequal_thirds: 0.2,
    unequal_halves: 0.2,
    regular: 0.4,
};

/// Default minimum split size as a fraction of the canvas width
pub const DEFAULT_THINNEST_TILE_SIZE: f64 = 0.02;

/// Default canvas aspect ratio (width over unit height)
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of layouts per run
pub const DEFAULT_LAYOUT_COUNT: u32 = 1;

// Output settings
/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "layouts";
/// Prefix of every generated file name
pub const OUTPUT_PREFIX: &str = "layout_";
/// Default preview width in pixels
pub const DEFAULT_PREVIEW_WIDTH: u32 = 1024;
/// Largest accepted preview width in pixels
pub const MAX_PREVIEW_WIDTH: u32 = 8192;
/// Largest preview height in pixels a canvas may scale to
pub const MAX_PREVIEW_HEIGHT: u32 = 8192;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
