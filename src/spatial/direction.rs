//! Gradient direction tags and the split axes they follow
//!
//! Every tile carries a direction telling the renderer along which axis and
//! with which sign its gradient runs. Horizontal tags (RIGHT, LEFT) belong to
//! the width axis, vertical tags (DOWN, UP) to the height axis.

use serde::Serialize;

use crate::algorithm::random::RandomSource;

/// Axis along which a tile is measured or split
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal extent
    Width,
    /// Vertical extent
    Height,
}

impl Axis {
    /// The orthogonal axis
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }

    /// Direction pair whose gradients run along this axis
    ///
    /// Index parity alternation walks the pair in this order.
    pub const fn directions(self) -> (GradientDirection, GradientDirection) {
        match self {
            Self::Width => (GradientDirection::Right, GradientDirection::Left),
            Self::Height => (GradientDirection::Down, GradientDirection::Up),
        }
    }
}

/// Four-valued gradient flow tag attached to every tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GradientDirection {
    /// Gradient runs upward
    Up,
    /// Gradient runs downward
    Down,
    /// Gradient runs leftward
    Left,
    /// Gradient runs rightward
    Right,
}

impl GradientDirection {
    /// All tags in payload order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    /// Numeric payload consumed by the tile shader
    pub const fn payload(self) -> f32 {
        match self {
            Self::Up => 0.0,
            Self::Down => 0.25,
            Self::Right => 0.5,
            Self::Left => 0.75,
        }
    }

    /// Axis the gradient runs along
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Width,
            Self::Up | Self::Down => Axis::Height,
        }
    }

    /// Stable index used for tallies and color lookups
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Right => 2,
            Self::Left => 3,
        }
    }
}

/// Pick a member of an axis pair by index parity
pub const fn alternating(axis: Axis, index: usize) -> GradientDirection {
    let (first, second) = axis.directions();
    if index % 2 == 0 { first } else { second }
}

/// Draw one direction uniformly from an axis pair
pub fn random_along<R: RandomSource>(axis: Axis, rng: &mut R) -> GradientDirection {
    rng.choose_pair(axis.directions())
}

/// Axis a tile of the given extent is dominated by
///
/// Square tiles count as tall.
pub fn dominant_axis(width: f64, height: f64) -> Axis {
    if width > height {
        Axis::Width
    } else {
        Axis::Height
    }
}

/// Keep `current` unless it runs across the dominant axis of the tile
///
/// A wide tile holding a vertical tag, or a tall tile holding a horizontal
/// tag, gets a fresh tag drawn along its dominant axis. Square tiles keep
/// whatever they inherited.
pub fn conform_to_extent<R: RandomSource>(
    current: GradientDirection,
    width: f64,
    height: f64,
    rng: &mut R,
) -> GradientDirection {
    if width > height && current.axis() == Axis::Height {
        random_along(Axis::Width, rng)
    } else if height > width && current.axis() == Axis::Width {
        random_along(Axis::Height, rng)
    } else {
        current
    }
}
