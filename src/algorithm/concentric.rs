//! Nested inset rings inside a tile

use crate::algorithm::parameters::SplitContext;
use crate::algorithm::random::RandomSource;
use crate::spatial::direction::{alternating, dominant_axis, random_along};
use crate::spatial::{Axis, GradientDirection, Tile};

/// How the rings of one group are tagged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingTagging {
    /// Walk the axis pair by ring index parity
    Alternating,
    /// One tag for every ring
    Fixed(GradientDirection),
}

impl RingTagging {
    /// Tag for ring `index`
    pub const fn direction(self, axis: Axis, index: usize) -> GradientDirection {
        match self {
            Self::Alternating => alternating(axis, index),
            Self::Fixed(direction) => direction,
        }
    }
}

/// Number of rings that fit inside `tile`, capped at `max_rings`
///
/// Each ring insets all edges by one more step, so the shorter side bounds
/// the count.
pub fn ring_count(tile: &Tile, step: f64, max_rings: u32) -> u32 {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let fit = (tile.width.min(tile.height) / (2.0 * step)).floor();
    if !fit.is_finite() || fit <= 0.0 {
        return 0;
    }
    if fit >= f64::from(max_rings) {
        max_rings
    } else {
        fit as u32
    }
}

/// Emit the tile followed by its inset rings
///
/// Ring `i` insets every edge by `step * (i + 1)` where the step is the
/// minimum split size; sizes clamp to `[0, canvas extent]` so the innermost
/// ring may collapse to a line or a point. The whole group keeps the
/// parent's level. Returns `None` when no ring fits.
pub fn concentric_split<R: RandomSource>(
    tile: &Tile,
    context: &SplitContext,
    rng: &mut R,
) -> Option<Vec<Tile>> {
    let step = context.min_split_size;
    let rings = ring_count(tile, step, context.max_rings);
    if rings == 0 {
        return None;
    }

    let axis = dominant_axis(tile.width, tile.height);
    let tagging = if rng.uniform_bool(0.5) {
        RingTagging::Alternating
    } else {
        RingTagging::Fixed(random_along(axis, rng))
    };

    let mut group = Vec::with_capacity(rings as usize + 1);
    group.push(tile.with_direction(tagging.direction(axis, 1)));

    for i in 0..rings as usize {
        let inset = step * (i + 1) as f64;
        group.push(Tile {
            x: tile.x + inset,
            y: tile.y + inset,
            width: (tile.width - inset * 2.0).clamp(0.0, context.canvas.width),
            height: (tile.height - inset * 2.0).clamp(0.0, context.canvas.height),
            level: tile.level,
            direction: tagging.direction(axis, i),
        });
    }

    Some(group)
}
