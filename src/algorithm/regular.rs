//! Equal-strip split along a randomly chosen axis

use crate::algorithm::parameters::SplitContext;
use crate::algorithm::random::RandomSource;
use crate::spatial::direction::{alternating, random_along};
use crate::spatial::{Axis, Tile};

/// Strip size along `axis` if it clears the minimum split size
fn feasible_strip(tile: &Tile, axis: Axis, divisions: u32, min_size: f64) -> Option<f64> {
    let strip = tile.extent(axis) / f64::from(divisions);
    (strip >= min_size).then_some(strip)
}

/// Cut `tile` into `divisions` equal strips
///
/// The axis is a fair coin; if strips along it would be thinner than the
/// minimum split size the other axis is tried. Returns `None` when neither
/// axis is feasible.
///
/// Direction tags per strip `k`: wide strips alternate RIGHT/LEFT; tall
/// strips of a height split share one tag drawn for the group; tall strips
/// of a width split alternate DOWN/UP.
pub fn regular_split<R: RandomSource>(
    tile: &Tile,
    divisions: u32,
    context: &SplitContext,
    rng: &mut R,
) -> Option<Vec<Tile>> {
    if divisions == 0 {
        return None;
    }

    let first_axis = if rng.uniform_bool(0.5) {
        Axis::Width
    } else {
        Axis::Height
    };

    let (axis, strip) = feasible_strip(tile, first_axis, divisions, context.min_split_size)
        .map(|strip| (first_axis, strip))
        .or_else(|| {
            let other = first_axis.other();
            feasible_strip(tile, other, divisions, context.min_split_size)
                .map(|strip| (other, strip))
        })?;

    let shared = random_along(Axis::Height, rng);
    let start = tile.offset(axis);

    let children = (0..divisions as usize)
        .map(|k| {
            let child = tile
                .slice(axis, start + strip * k as f64, strip)
                .at_level(context.level);
            let direction = if child.width > child.height {
                alternating(Axis::Width, k)
            } else if axis == Axis::Height {
                shared
            } else {
                alternating(Axis::Height, k)
            };
            child.with_direction(direction)
        })
        .collect();

    Some(children)
}
