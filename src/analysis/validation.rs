//! Structural checks over a traced partition
//!
//! Every check reports violations instead of failing fast so a single run
//! shows everything that went wrong with a layout.

use std::fmt;

use crate::algorithm::executor::{Partition, SplitOutcome};
use crate::algorithm::parameters::ParameterSet;
use crate::algorithm::selection::Strategy;
use crate::spatial::direction::dominant_axis;
use crate::spatial::{Axis, Canvas, Tile};

/// Absolute tolerance for geometric comparisons
pub const GEOMETRY_TOLERANCE: f64 = 1e-6;

/// A broken layout property
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutViolation {
    /// Tile extends past the canvas
    OutOfBounds {
        /// Position in the tile sequence
        index: usize,
        /// The offending tile
        tile: Tile,
    },
    /// Tile level is deeper than the iteration count
    LevelTooDeep {
        /// Position in the tile sequence
        index: usize,
        /// Level found
        level: u32,
        /// Largest allowed level
        max: u32,
    },
    /// Children of a cut do not add up to the parent along the split axis
    NotConserved {
        /// Strategy that produced the children
        strategy: Strategy,
        /// Parent extent along the split axis
        expected: f64,
        /// Summed child extent along the split axis
        actual: f64,
    },
    /// Regular child thinner than the minimum split size
    BelowMinimum {
        /// The offending child
        tile: Tile,
        /// Minimum split size
        minimum: f64,
    },
    /// Concentric group holds more rings than allowed
    TooManyRings {
        /// Rings in the group
        rings: usize,
        /// Largest allowed ring count
        max: u32,
    },
}

impl fmt::Display for LayoutViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, tile } => {
                write!(f, "tile {index} leaves the canvas: {tile:?}")
            }
            Self::LevelTooDeep { index, level, max } => {
                write!(f, "tile {index} has level {level} above {max}")
            }
            Self::NotConserved {
                strategy,
                expected,
                actual,
            } => write!(
                f,
                "{} children span {actual} instead of {expected}",
                strategy.name()
            ),
            Self::BelowMinimum { tile, minimum } => {
                write!(f, "regular child thinner than {minimum}: {tile:?}")
            }
            Self::TooManyRings { rings, max } => {
                write!(f, "concentric group has {rings} rings, limit {max}")
            }
        }
    }
}

/// Axis along which a cut laid its children out
fn split_axis(parent: &Tile, children: &[Tile]) -> Axis {
    let varies_along_width = children
        .iter()
        .any(|child| (child.width - parent.width).abs() > GEOMETRY_TOLERANCE);
    if varies_along_width {
        Axis::Width
    } else if children
        .iter()
        .any(|child| (child.height - parent.height).abs() > GEOMETRY_TOLERANCE)
    {
        Axis::Height
    } else {
        dominant_axis(parent.width, parent.height)
    }
}

/// Check every testable layout property of a traced partition
pub fn validate_partition(
    partition: &Partition,
    canvas: &Canvas,
    parameters: &ParameterSet,
) -> Vec<LayoutViolation> {
    let mut violations = Vec::new();
    let max_level = parameters.iteration_range.max;

    for (index, tile) in partition.tiles.iter().enumerate() {
        if !canvas.contains(tile, GEOMETRY_TOLERANCE) {
            violations.push(LayoutViolation::OutOfBounds { index, tile: *tile });
        }
        if tile.level > max_level {
            violations.push(LayoutViolation::LevelTooDeep {
                index,
                level: tile.level,
                max: max_level,
            });
        }
    }

    let minimum = parameters.min_split_size(canvas);
    for record in &partition.records {
        let SplitOutcome::Split(strategy) = record.outcome else {
            continue;
        };

        match strategy {
            Strategy::Concentric => {
                let rings = record.children.len().saturating_sub(1);
                if rings > parameters.concentric_range.max as usize {
                    violations.push(LayoutViolation::TooManyRings {
                        rings,
                        max: parameters.concentric_range.max,
                    });
                }
            }
            Strategy::Regular | Strategy::UnequalThirds | Strategy::UnequalHalves => {
                let axis = split_axis(&record.parent, &record.children);
                let expected = record.parent.extent(axis);
                let actual: f64 = record.children.iter().map(|c| c.extent(axis)).sum();
                if (expected - actual).abs() > GEOMETRY_TOLERANCE {
                    violations.push(LayoutViolation::NotConserved {
                        strategy,
                        expected,
                        actual,
                    });
                }

                if strategy == Strategy::Regular {
                    for child in &record.children {
                        if child.extent(axis) + GEOMETRY_TOLERANCE < minimum {
                            violations.push(LayoutViolation::BelowMinimum {
                                tile: *child,
                                minimum,
                            });
                        }
                    }
                }
            }
            Strategy::None => {}
        }
    }

    violations
}
