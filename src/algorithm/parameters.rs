//! Parameter set driving a partition and its validation

use serde::Serialize;

use crate::algorithm::selection::StrategyWeights;
use crate::io::configuration::{
    DEFAULT_CONCENTRIC_RANGE, DEFAULT_DIVISION_RANGE, DEFAULT_ITERATION_RANGE,
    DEFAULT_THINNEST_TILE_SIZE, DEFAULT_WEIGHTS, MAX_CONCENTRIC_RINGS, MAX_DIVISIONS,
    MAX_ITERATIONS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Canvas;

/// Inclusive integer range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IntRange {
    /// Lower bound (inclusive)
    pub min: u32,
    /// Upper bound (inclusive)
    pub max: u32,
}

impl IntRange {
    /// Create a range
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Check whether a value falls inside the range
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, parameter: &'static str, limit: u32) -> Result<()> {
        if self.min > self.max {
            return Err(invalid_parameter(
                parameter,
                &format!("{}..={}", self.min, self.max),
                &"min must not exceed max",
            ));
        }
        if self.max > limit {
            return Err(invalid_parameter(
                parameter,
                &self.max,
                &format!("max must not exceed {limit}"),
            ));
        }
        Ok(())
    }
}

/// Everything that shapes a partition besides the canvas and the randomness
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParameterSet {
    /// Levels that always split (`min`) and the total number of levels (`max`)
    pub iteration_range: IntRange,
    /// Number of strips a Regular split produces
    pub division_range: IntRange,
    /// Concentric ring bounds; `max` caps the ring count
    pub concentric_range: IntRange,
    /// Relative weight per strategy
    pub weights: StrategyWeights,
    /// Smallest allowed split dimension as a fraction of the canvas width
    pub thinnest_tile_size: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            iteration_range: DEFAULT_ITERATION_RANGE,
            division_range: DEFAULT_DIVISION_RANGE,
            concentric_range: DEFAULT_CONCENTRIC_RANGE,
            weights: DEFAULT_WEIGHTS,
            thinnest_tile_size: DEFAULT_THINNEST_TILE_SIZE,
        }
    }
}

impl ParameterSet {
    /// Check every field against its domain
    ///
    /// # Errors
    ///
    /// Returns an error if a range is inverted or exceeds its limit, the
    /// division minimum is zero, the thinnest tile size is outside `(0, 1]`,
    /// or a weight is negative or non-finite
    pub fn validate(&self) -> Result<()> {
        self.iteration_range
            .validate("iteration_range", MAX_ITERATIONS)?;
        self.division_range
            .validate("division_range", MAX_DIVISIONS)?;
        self.concentric_range
            .validate("concentric_range", MAX_CONCENTRIC_RINGS)?;

        if self.division_range.min == 0 {
            return Err(invalid_parameter(
                "division_range",
                &self.division_range.min,
                &"a split needs at least one division",
            ));
        }

        let size = self.thinnest_tile_size;
        if !size.is_finite() || size <= 0.0 || size > 1.0 {
            return Err(invalid_parameter(
                "thinnest_tile_size",
                &size,
                &"must lie in (0, 1]",
            ));
        }

        let weights = [
            ("weights.none", self.weights.none),
            ("weights.concentric", self.weights.concentric),
            ("weights.unequal_thirds", self.weights.unequal_thirds),
            ("weights.unequal_halves", self.weights.unequal_halves),
            ("weights.regular", self.weights.regular),
        ];
        for (parameter, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &weight,
                    &"must be a finite non-negative number",
                ));
            }
        }

        Ok(())
    }

    /// Smallest dimension a Regular split may produce on `canvas`
    pub fn min_split_size(&self, canvas: &Canvas) -> f64 {
        self.thinnest_tile_size * canvas.width
    }
}

/// Per-level inputs shared by every splitter
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitContext {
    /// Canvas the partition lives on
    pub canvas: Canvas,
    /// Minimum split dimension and concentric ring step
    pub min_split_size: f64,
    /// Largest number of concentric rings
    pub max_rings: u32,
    /// Iteration currently being expanded
    pub level: u32,
}

impl SplitContext {
    /// Context for expanding `level`
    pub fn new(canvas: Canvas, parameters: &ParameterSet, level: u32) -> Self {
        Self {
            canvas,
            min_split_size: parameters.min_split_size(&canvas),
            max_rings: parameters.concentric_range.max,
            level,
        }
    }
}
