//! Uneven splits along the longer axis of a tile
//!
//! Both strategies lay their pieces out back to back from the tile's origin
//! along its dominant axis, so the pieces always sum to the parent extent.

use crate::algorithm::parameters::SplitContext;
use crate::algorithm::random::RandomSource;
use crate::spatial::direction::{conform_to_extent, dominant_axis, random_along};
use crate::spatial::{Axis, Tile};

/// Section multiples of the quarter / half / quarter split
const THIRDS_SECTIONS: [f64; 3] = [1.0, 2.0, 1.0];

/// Section multiples of the third / two thirds split, before shuffling
const HALVES_SECTIONS: [f64; 2] = [1.0, 2.0];

fn lay_out(tile: &Tile, axis: Axis, extents: &[f64], level: u32) -> Vec<Tile> {
    let mut cursor = tile.offset(axis);
    extents
        .iter()
        .map(|&extent| {
            let child = tile.slice(axis, cursor, extent).at_level(level);
            cursor += extent;
            child
        })
        .collect()
}

fn splittable_axis(tile: &Tile) -> Option<Axis> {
    let axis = dominant_axis(tile.width, tile.height);
    let extent = tile.extent(axis);
    (extent.is_finite() && extent > 0.0).then_some(axis)
}

/// Split the longer axis into quarter, half and quarter
///
/// All three pieces share one tag drawn along the split axis. No minimum
/// size applies. Returns `None` only for a tile with no extent to split.
pub fn unequal_thirds_split<R: RandomSource>(
    tile: &Tile,
    context: &SplitContext,
    rng: &mut R,
) -> Option<Vec<Tile>> {
    let axis = splittable_axis(tile)?;
    let section = tile.extent(axis) / 4.0;
    let extents = THIRDS_SECTIONS.map(|multiple| section * multiple);

    let direction = random_along(axis, rng);
    let children = lay_out(tile, axis, &extents, context.level)
        .into_iter()
        .map(|child| child.with_direction(direction))
        .collect();

    Some(children)
}

/// Split the longer axis into one third and two thirds, in random order
///
/// Pieces inherit the parent's tag and redraw it whenever it runs across
/// the piece's own dominant axis. A redrawn tag carries over to the next
/// piece. Returns `None` only for a tile with no extent to split.
pub fn unequal_halves_split<R: RandomSource>(
    tile: &Tile,
    context: &SplitContext,
    rng: &mut R,
) -> Option<Vec<Tile>> {
    let axis = splittable_axis(tile)?;
    let section = tile.extent(axis) / 3.0;
    let mut extents = HALVES_SECTIONS.map(|multiple| section * multiple);
    rng.shuffle(&mut extents);

    let mut direction = tile.direction;
    let children = lay_out(tile, axis, &extents, context.level)
        .into_iter()
        .map(|child| {
            direction = conform_to_extent(direction, child.width, child.height, rng);
            child.with_direction(direction)
        })
        .collect();

    Some(children)
}
