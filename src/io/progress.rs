//! Progress display for batch layout generation

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Layouts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many layouts of a batch are done
pub struct ProgressManager {
    bar: ProgressBar,
    generated: u64,
    skipped: u64,
}

impl ProgressManager {
    /// Create a bar for `layout_count` layouts
    pub fn new(layout_count: u64) -> Self {
        let bar = ProgressBar::new(layout_count);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            generated: 0,
            skipped: 0,
        }
    }

    /// Hidden bar that still counts, for quiet runs and tests
    pub fn hidden(layout_count: u64) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(layout_count);
        Self {
            bar,
            generated: 0,
            skipped: 0,
        }
    }

    /// Record a finished layout
    pub fn complete_layout(&mut self, seed: u64, tile_count: usize) {
        self.generated += 1;
        self.bar.set_message(format!("seed {seed}: {tile_count} tiles"));
        self.bar.inc(1);
    }

    /// Record a layout skipped because its output already exists
    pub fn skip_layout(&mut self, seed: u64) {
        self.skipped += 1;
        self.bar.set_message(format!("seed {seed}: skipped"));
        self.bar.inc(1);
    }

    /// Number of layouts generated so far
    pub const fn generated(&self) -> u64 {
        self.generated
    }

    /// Number of layouts skipped so far
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Close the bar with a summary
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} generated, {} skipped",
            self.generated, self.skipped
        ));
    }
}
