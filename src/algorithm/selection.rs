use serde::Serialize;

use crate::algorithm::random::RandomSource;

/// Weights at or below this fraction of the total weight are ignored
pub const NEGLIGIBLE_WEIGHT_FRACTION: f64 = 1e-5;

/// Deepest iteration at which the unequal strategies may be picked
pub const UNEQUAL_SPLIT_MAX_DEPTH: u32 = 2;

/// Division count the UnequalThirds strategy requires
pub const THIRDS_DIVISION_COUNT: u32 = 3;

/// Division count the UnequalHalves strategy requires
pub const HALVES_DIVISION_COUNT: u32 = 2;

/// Ways a frontier tile can be subdivided
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Leave the tile as it is and freeze it
    None,
    /// Nest inset rings inside the tile
    Concentric,
    /// Quarter / half / quarter along the longer axis
    UnequalThirds,
    /// One third and two thirds along the longer axis, in random order
    UnequalHalves,
    /// Equal strips along a random axis
    Regular,
}

impl Strategy {
    /// All strategies in weight-table order
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Concentric,
        Self::UnequalThirds,
        Self::UnequalHalves,
        Self::Regular,
    ];

    /// Whether the strategy cuts the tile into new tiles
    ///
    /// Non-structural strategies are withheld at the earliest levels.
    pub const fn is_structural(self) -> bool {
        !matches!(self, Self::None | Self::Concentric)
    }

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Concentric => "concentric",
            Self::UnequalThirds => "unequal_thirds",
            Self::UnequalHalves => "unequal_halves",
            Self::Regular => "regular",
        }
    }
}

/// Relative weight of each strategy
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrategyWeights {
    /// Weight of leaving a tile unsplit
    pub none: f64,
    /// Weight of concentric rings
    pub concentric: f64,
    /// Weight of the quarter / half / quarter split
    pub unequal_thirds: f64,
    /// Weight of the third / two thirds split
    pub unequal_halves: f64,
    /// Weight of the equal split
    pub regular: f64,
}

impl StrategyWeights {
    /// Weights putting all mass on one strategy
    pub const fn only(strategy: Strategy) -> Self {
        let mut weights = Self {
            none: 0.0,
            concentric: 0.0,
            unequal_thirds: 0.0,
            unequal_halves: 0.0,
            regular: 0.0,
        };
        match strategy {
            Strategy::None => weights.none = 1.0,
            Strategy::Concentric => weights.concentric = 1.0,
            Strategy::UnequalThirds => weights.unequal_thirds = 1.0,
            Strategy::UnequalHalves => weights.unequal_halves = 1.0,
            Strategy::Regular => weights.regular = 1.0,
        }
        weights
    }

    /// Weight assigned to a strategy
    pub const fn weight(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::None => self.none,
            Strategy::Concentric => self.concentric,
            Strategy::UnequalThirds => self.unequal_thirds,
            Strategy::UnequalHalves => self.unequal_halves,
            Strategy::Regular => self.regular,
        }
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        Strategy::ALL.iter().map(|&s| self.weight(s)).sum()
    }
}

/// Strategies still in play for one frontier tile, with their weights
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateSet {
    entries: Vec<(f64, Strategy)>,
}

impl CandidateSet {
    /// Candidates allowed at `depth`
    ///
    /// Drops negligible weights, and drops None and Concentric while
    /// `depth <= min_iterations` so that early levels always split.
    pub fn for_depth(weights: &StrategyWeights, depth: u32, min_iterations: u32) -> Self {
        let threshold = weights.total() * NEGLIGIBLE_WEIGHT_FRACTION;
        let entries = Strategy::ALL
            .iter()
            .map(|&strategy| (weights.weight(strategy), strategy))
            .filter(|(weight, _)| weight.is_finite() && *weight > threshold)
            .filter(|(_, strategy)| depth > min_iterations || strategy.is_structural())
            .collect();
        Self { entries }
    }

    /// Remove a strategy from play
    pub fn remove(&mut self, strategy: Strategy) {
        self.entries.retain(|(_, s)| *s != strategy);
    }

    /// Whether a strategy is still in play
    pub fn contains(&self, strategy: Strategy) -> bool {
        self.entries.iter().any(|(_, s)| *s == strategy)
    }

    /// Whether no strategy is left
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strategies in play, in weight-table order
    pub fn strategies(&self) -> Vec<Strategy> {
        self.entries.iter().map(|(_, s)| *s).collect()
    }

    /// Candidates eligible for a tile at `depth` with `divisions` drawn
    pub fn eligible(&self, depth: u32, divisions: u32) -> Vec<(f64, Strategy)> {
        self.entries
            .iter()
            .copied()
            .filter(|(_, strategy)| match strategy {
                Strategy::UnequalThirds => {
                    depth <= UNEQUAL_SPLIT_MAX_DEPTH && divisions == THIRDS_DIVISION_COUNT
                }
                Strategy::UnequalHalves => {
                    depth <= UNEQUAL_SPLIT_MAX_DEPTH && divisions == HALVES_DIVISION_COUNT
                }
                _ => true,
            })
            .collect()
    }
}

/// Pick a strategy for a tile at `depth` given the drawn division count
///
/// Selection is proportional to weight over the eligible candidates.
/// Falls back to Regular when nothing is eligible.
pub fn pick_strategy<R: RandomSource>(
    candidates: &CandidateSet,
    depth: u32,
    divisions: u32,
    rng: &mut R,
) -> Strategy {
    let eligible = candidates.eligible(depth, divisions);
    if eligible.is_empty() {
        return Strategy::Regular;
    }
    rng.weighted_pick(&eligible).unwrap_or(Strategy::Regular)
}
