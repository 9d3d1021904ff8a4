//! Level-by-level subdivision of the canvas

use log::{debug, trace};
use serde::Serialize;

use crate::algorithm::concentric::concentric_split;
use crate::algorithm::parameters::{ParameterSet, SplitContext};
use crate::algorithm::random::RandomSource;
use crate::algorithm::regular::regular_split;
use crate::algorithm::selection::{CandidateSet, Strategy, pick_strategy};
use crate::algorithm::unequal::{unequal_halves_split, unequal_thirds_split};
use crate::io::error::Result;
use crate::spatial::{Canvas, Tile};

/// How a frontier tile left its level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "strategy", rename_all = "snake_case")]
pub enum SplitOutcome {
    /// The strategy replaced the tile with its output
    Split(Strategy),
    /// The tile was kept unchanged with a stale level
    Frozen(Strategy),
}

impl SplitOutcome {
    /// Strategy that settled the tile
    pub const fn strategy(self) -> Strategy {
        match self {
            Self::Split(strategy) | Self::Frozen(strategy) => strategy,
        }
    }
}

/// Trace of one frontier tile's subdivision
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SplitRecord {
    /// Iteration that expanded the tile
    pub level: u32,
    /// Division count drawn for the tile
    pub divisions: u32,
    /// Strategies in the order they were tried
    pub attempts: Vec<Strategy>,
    /// Final result for the tile
    pub outcome: SplitOutcome,
    /// The frontier tile as it was before the attempt
    pub parent: Tile,
    /// Tiles the tile was replaced with (the parent itself when frozen)
    pub children: Vec<Tile>,
}

/// Result of a traced generation
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Partition {
    /// Final tile sequence
    pub tiles: Vec<Tile>,
    /// One record per frontier tile, in processing order
    pub records: Vec<SplitRecord>,
}

/// Level-by-level driver of the recursive subdivision
///
/// Each iteration splits the frontier (tiles finalized at the previous
/// level) and passes every other tile through untouched. A tile whose level
/// is left stale, because it drew None or could not be split, never rejoins
/// the frontier.
#[derive(Clone, Debug)]
pub struct TilePartitioner {
    canvas: Canvas,
    parameters: ParameterSet,
}

impl TilePartitioner {
    /// Create a partitioner for a canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter set fails validation
    pub fn new(canvas: Canvas, parameters: ParameterSet) -> Result<Self> {
        parameters.validate()?;
        Ok(Self { canvas, parameters })
    }

    /// Canvas being partitioned
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Parameters driving the partition
    pub const fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Produce the tile sequence
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Vec<Tile> {
        self.run(self.canvas.root_tile(), rng, None)
    }

    /// Produce the tile sequence together with a record per frontier tile
    pub fn generate_traced<R: RandomSource>(&self, rng: &mut R) -> Partition {
        let mut records = Vec::new();
        let tiles = self.run(self.canvas.root_tile(), rng, Some(&mut records));
        Partition { tiles, records }
    }

    fn run<R: RandomSource>(
        &self,
        root: Tile,
        rng: &mut R,
        mut records: Option<&mut Vec<SplitRecord>>,
    ) -> Vec<Tile> {
        let mut tiles = vec![root];

        for level in 1..=self.parameters.iteration_range.max {
            let context = SplitContext::new(self.canvas, &self.parameters, level);
            let candidates = CandidateSet::for_depth(
                &self.parameters.weights,
                level,
                self.parameters.iteration_range.min,
            );

            let mut next = Vec::with_capacity(tiles.len());
            let mut frontier_size = 0usize;

            for tile in tiles {
                if tile.level + 1 != level {
                    next.push(tile);
                    continue;
                }
                frontier_size += 1;
                let record = self.subdivide(&tile, &context, candidates.clone(), rng);
                next.extend_from_slice(&record.children);
                if let Some(records) = records.as_deref_mut() {
                    records.push(record);
                }
            }

            debug!(
                "level {level}: {frontier_size} frontier tiles, {} tiles total",
                next.len()
            );
            tiles = next;
        }

        tiles
    }

    /// Run the strategy and fallback chain on one tile as if it sat on the
    /// frontier of `level`
    pub fn split_tile<R: RandomSource>(
        &self,
        tile: &Tile,
        level: u32,
        rng: &mut R,
    ) -> SplitRecord {
        let context = SplitContext::new(self.canvas, &self.parameters, level);
        let candidates = CandidateSet::for_depth(
            &self.parameters.weights,
            level,
            self.parameters.iteration_range.min,
        );
        self.subdivide(tile, &context, candidates, rng)
    }

    fn subdivide<R: RandomSource>(
        &self,
        tile: &Tile,
        context: &SplitContext,
        mut candidates: CandidateSet,
        rng: &mut R,
    ) -> SplitRecord {
        let level = context.level;
        let range = self.parameters.division_range;
        let divisions = rng.uniform_int(range.min, range.max.saturating_add(1));

        let mut attempts = Vec::new();
        let mut strategy = pick_strategy(&candidates, level, divisions, rng);

        let (outcome, children) = loop {
            attempts.push(strategy);
            let produced = match strategy {
                Strategy::None => break (SplitOutcome::Frozen(Strategy::None), vec![*tile]),
                Strategy::Concentric => concentric_split(tile, context, rng),
                Strategy::UnequalThirds => unequal_thirds_split(tile, context, rng),
                Strategy::UnequalHalves => unequal_halves_split(tile, context, rng),
                Strategy::Regular => regular_split(tile, divisions, context, rng),
            };

            if let Some(children) = produced {
                break (SplitOutcome::Split(strategy), children);
            }

            trace!("level {level}: {} infeasible for {tile:?}", strategy.name());
            strategy = match strategy {
                Strategy::Concentric => {
                    candidates.remove(Strategy::Concentric);
                    pick_strategy(&candidates, level, divisions, rng)
                }
                Strategy::UnequalThirds | Strategy::UnequalHalves => Strategy::Regular,
                Strategy::None | Strategy::Regular => {
                    break (SplitOutcome::Frozen(Strategy::Regular), vec![*tile]);
                }
            };
        };

        SplitRecord {
            level,
            divisions,
            attempts,
            outcome,
            parent: *tile,
            children,
        }
    }
}
