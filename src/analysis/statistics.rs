//! Summary statistics over a generated layout

use std::collections::BTreeMap;

use serde::Serialize;

use crate::algorithm::executor::{Partition, SplitOutcome};
use crate::algorithm::selection::Strategy;
use crate::spatial::{GradientDirection, Tile};

/// Aggregate view of a tile sequence
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LayoutStatistics {
    /// Number of tiles
    pub tile_count: usize,
    /// Tiles per final level
    pub per_level: BTreeMap<u32, usize>,
    /// Tiles per gradient direction, indexed by [`GradientDirection::index`]
    pub per_direction: [usize; 4],
    /// Zero-area tiles (collapsed concentric rings)
    pub degenerate_count: usize,
    /// Smallest non-degenerate width and height seen
    pub smallest_extent: Option<[f64; 2]>,
    /// Summed area of every tile, nested rings included
    pub total_area: f64,
}

impl LayoutStatistics {
    /// Summarize a tile sequence
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut stats = Self {
            tile_count: tiles.len(),
            ..Self::default()
        };

        for tile in tiles {
            *stats.per_level.entry(tile.level).or_insert(0) += 1;
            if let Some(count) = stats.per_direction.get_mut(tile.direction.index()) {
                *count += 1;
            }
            stats.total_area += tile.area();

            if tile.is_degenerate() {
                stats.degenerate_count += 1;
                continue;
            }

            stats.smallest_extent = Some(match stats.smallest_extent {
                Some([w, h]) => [w.min(tile.width), h.min(tile.height)],
                None => [tile.width, tile.height],
            });
        }

        stats
    }

    /// Number of tiles carrying a direction
    pub fn direction_count(&self, direction: GradientDirection) -> usize {
        self.per_direction
            .get(direction.index())
            .copied()
            .unwrap_or(0)
    }

    /// Deepest level any tile reached
    pub fn deepest_level(&self) -> u32 {
        self.per_level.keys().next_back().copied().unwrap_or(0)
    }
}

/// How often each strategy settled a frontier tile
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeTally {
    /// Successful splits per strategy name
    pub splits: BTreeMap<&'static str, usize>,
    /// Frozen tiles per strategy name
    pub frozen: BTreeMap<&'static str, usize>,
    /// Frontier tiles that needed at least one fallback
    pub fallbacks: usize,
}

impl OutcomeTally {
    /// Count the outcomes recorded in a traced partition
    pub fn from_partition(partition: &Partition) -> Self {
        let mut tally = Self::default();
        for record in &partition.records {
            let bucket = match record.outcome {
                SplitOutcome::Split(_) => &mut tally.splits,
                SplitOutcome::Frozen(_) => &mut tally.frozen,
            };
            *bucket.entry(record.outcome.strategy().name()).or_insert(0) += 1;
            if record.attempts.len() > 1 {
                tally.fallbacks += 1;
            }
        }
        tally
    }

    /// Successful splits by one strategy
    pub fn split_count(&self, strategy: Strategy) -> usize {
        self.splits.get(strategy.name()).copied().unwrap_or(0)
    }

    /// Frozen tiles settled by one strategy
    pub fn frozen_count(&self, strategy: Strategy) -> usize {
        self.frozen.get(strategy.name()).copied().unwrap_or(0)
    }
}
