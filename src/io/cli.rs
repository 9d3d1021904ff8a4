//! Command-line interface for batch generation of tile layouts

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, warn};

use crate::algorithm::executor::TilePartitioner;
use crate::algorithm::parameters::{IntRange, ParameterSet};
use crate::algorithm::random::SeededRandom;
use crate::algorithm::selection::StrategyWeights;
use crate::analysis::statistics::{LayoutStatistics, OutcomeTally};
use crate::analysis::validation::validate_partition;
use crate::io::configuration::{
    DEFAULT_ASPECT_RATIO, DEFAULT_CONCENTRIC_RANGE, DEFAULT_DIVISION_RANGE,
    DEFAULT_ITERATION_RANGE, DEFAULT_LAYOUT_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_PREVIEW_WIDTH,
    DEFAULT_SEED, DEFAULT_THINNEST_TILE_SIZE, DEFAULT_WEIGHTS, OUTPUT_PREFIX,
};
use crate::io::error::Result;
use crate::io::export::LayoutDocument;
use crate::io::image::export_layout_as_png;
use crate::io::progress::ProgressManager;
use crate::mesh::instances::InstanceBuffer;
use crate::spatial::Canvas;

#[derive(Parser, Debug)]
#[command(name = "gradtile")]
#[command(
    author,
    version,
    about = "Partition a canvas into gradient tiles with recursive random splits"
)]
/// Command-line arguments for the layout generator
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Seed of the first layout; further layouts use consecutive seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of layouts to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_LAYOUT_COUNT)]
    pub count: u32,

    /// Canvas aspect ratio (width over a unit height)
    #[arg(short, long, default_value_t = DEFAULT_ASPECT_RATIO)]
    pub aspect: f64,

    /// Levels that always split
    #[arg(long, default_value_t = DEFAULT_ITERATION_RANGE.min)]
    pub iterations_min: u32,

    /// Total number of levels
    #[arg(long, default_value_t = DEFAULT_ITERATION_RANGE.max)]
    pub iterations_max: u32,

    /// Fewest strips per regular split
    #[arg(long, default_value_t = DEFAULT_DIVISION_RANGE.min)]
    pub divisions_min: u32,

    /// Most strips per regular split
    #[arg(long, default_value_t = DEFAULT_DIVISION_RANGE.max)]
    pub divisions_max: u32,

    /// Lower concentric ring bound
    #[arg(long, default_value_t = DEFAULT_CONCENTRIC_RANGE.min)]
    pub concentric_min: u32,

    /// Most concentric rings per tile
    #[arg(long, default_value_t = DEFAULT_CONCENTRIC_RANGE.max)]
    pub concentric_max: u32,

    /// Weight of leaving a tile unsplit
    #[arg(long, default_value_t = DEFAULT_WEIGHTS.none)]
    pub weight_none: f64,

    /// Weight of concentric rings
    #[arg(long, default_value_t = DEFAULT_WEIGHTS.concentric)]
    pub weight_concentric: f64,

    /// Weight of the quarter / half / quarter split
    #[arg(long, default_value_t = DEFAULT_WEIGHTS.unequal_thirds)]
    pub weight_thirds: f64,

    /// Weight of the third / two thirds split
    #[arg(long, default_value_t = DEFAULT_WEIGHTS.unequal_halves)]
    pub weight_halves: f64,

    /// Weight of the equal split
    #[arg(long, default_value_t = DEFAULT_WEIGHTS.regular)]
    pub weight_regular: f64,

    /// Smallest split dimension as a fraction of the canvas width
    #[arg(short, long, default_value_t = DEFAULT_THINNEST_TILE_SIZE)]
    pub thinnest: f64,

    /// Directory receiving the generated files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Also write a PNG outline preview per layout
    #[arg(short, long)]
    pub preview: bool,

    /// Preview width in pixels
    #[arg(long, default_value_t = DEFAULT_PREVIEW_WIDTH)]
    pub preview_width: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate layouts even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Parameter set described by the flags
    pub const fn parameters(&self) -> ParameterSet {
        ParameterSet {
            iteration_range: IntRange::new(self.iterations_min, self.iterations_max),
            division_range: IntRange::new(self.divisions_min, self.divisions_max),
            concentric_range: IntRange::new(self.concentric_min, self.concentric_max),
            weights: StrategyWeights {
                none: self.weight_none,
                concentric: self.weight_concentric,
                unequal_thirds: self.weight_thirds,
                unequal_halves: self.weight_halves,
                regular: self.weight_regular,
            },
            thinnest_tile_size: self.thinnest,
        }
    }
}

/// Generates, checks and writes every layout a run asks for
pub struct LayoutProcessor {
    cli: Cli,
    progress: ProgressManager,
}

impl LayoutProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let count = u64::from(cli.count);
        let progress = if cli.should_show_progress() {
            ProgressManager::new(count)
        } else {
            ProgressManager::hidden(count)
        };
        Self { cli, progress }
    }

    /// Generate every requested layout
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas or parameters are invalid, or if
    /// writing any output file fails
    pub fn process(&mut self) -> Result<()> {
        let canvas = Canvas::normalized(self.cli.aspect)?;
        let parameters = self.cli.parameters();
        let partitioner = TilePartitioner::new(canvas, parameters)?;

        for offset in 0..u64::from(self.cli.count) {
            let seed = self.cli.seed.wrapping_add(offset);
            let json_path = Self::layout_path(&self.cli.output, seed, "json");

            if self.cli.skip_existing() && json_path.exists() {
                warn!("Skipping seed {seed}: {} exists", json_path.display());
                self.progress.skip_layout(seed);
                continue;
            }

            let tile_count = self.process_seed(&partitioner, seed, &json_path)?;
            self.progress.complete_layout(seed, tile_count);
        }

        self.progress.finish();
        Ok(())
    }

    fn process_seed(
        &self,
        partitioner: &TilePartitioner,
        seed: u64,
        json_path: &Path,
    ) -> Result<usize> {
        let canvas = partitioner.canvas();
        let parameters = partitioner.parameters();

        let mut rng = SeededRandom::new(seed);
        let partition = partitioner.generate_traced(&mut rng);

        for violation in validate_partition(&partition, canvas, parameters) {
            warn!("seed {seed}: {violation}");
        }

        let stats = LayoutStatistics::from_tiles(&partition.tiles);
        let tally = OutcomeTally::from_partition(&partition);
        info!(
            "seed {seed}: {} tiles, deepest level {}, {} degenerate, {} fallbacks",
            stats.tile_count,
            stats.deepest_level(),
            stats.degenerate_count,
            tally.fallbacks
        );

        let instances = InstanceBuffer::from_tiles(&partition.tiles, canvas);
        LayoutDocument::new(seed, canvas, parameters, &partition.tiles, &instances)
            .write_to(json_path)?;

        if self.cli.preview {
            let png_path = Self::layout_path(&self.cli.output, seed, "png");
            export_layout_as_png(&partition.tiles, canvas, self.cli.preview_width, &png_path)?;
        }

        Ok(partition.tiles.len())
    }

    /// Output path of the layout generated from `seed`
    pub fn layout_path(output_dir: &Path, seed: u64, extension: &str) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}{seed}.{extension}"))
    }

    /// Progress of the batch so far
    pub const fn progress(&self) -> &ProgressManager {
        &self.progress
    }
}
