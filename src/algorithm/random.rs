//! Injectable randomness for the partitioner
//!
//! Every stochastic choice the algorithm makes goes through [`RandomSource`],
//! consumed strictly in algorithm order. Swapping the source is how callers
//! get reproducible layouts: [`SeededRandom`] for seeded generation,
//! [`ScriptedRandom`] for hand-written draw sequences, and
//! [`RecordingRandom`] to capture a live sequence for exact replay.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::math::probability::{cumulative_index, usable_total};

/// Source of the four primitive draws the algorithm needs
pub trait RandomSource {
    /// `true` with probability `p` (clamped to `[0, 1]`)
    fn uniform_bool(&mut self, p: f64) -> bool;

    /// Uniform integer in `[min_inclusive, max_exclusive)`
    ///
    /// Returns `min_inclusive` when the range is empty.
    fn uniform_int(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32;

    /// Categorical draw proportional to `weights`
    ///
    /// Returns `None` when no weight carries probability mass.
    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize>;

    /// Uniformly random permutation of `0..len`
    fn permutation(&mut self, len: usize) -> Vec<usize>;

    /// Weighted pick over `(weight, value)` pairs
    fn weighted_pick<T: Copy>(&mut self, items: &[(f64, T)]) -> Option<T>
    where
        Self: Sized,
    {
        let weights: Vec<f64> = items.iter().map(|(weight, _)| *weight).collect();
        let index = self.weighted_index(&weights)?;
        items.get(index).map(|(_, value)| *value)
    }

    /// Reorder `items` by a drawn permutation
    fn shuffle<T: Copy>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        let order = self.permutation(items.len());
        let reordered: Vec<T> = order
            .iter()
            .filter_map(|&index| items.get(index).copied())
            .collect();
        if reordered.len() == items.len() {
            items.copy_from_slice(&reordered);
        }
    }

    /// Uniform pick between two values
    fn choose_pair<T>(&mut self, pair: (T, T)) -> T
    where
        Self: Sized,
    {
        if self.uniform_int(0, 2) == 0 {
            pair.0
        } else {
            pair.1
        }
    }
}

/// Seeded pseudo-random source for reproducible generation
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_bool(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.rng.random_bool(p)
    }

    fn uniform_int(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32 {
        if max_exclusive <= min_inclusive {
            return min_inclusive;
        }
        self.rng.random_range(min_inclusive..max_exclusive)
    }

    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let total = usable_total(weights);
        if total <= 0.0 {
            return None;
        }
        let target = self.rng.random::<f64>() * total;
        cumulative_index(weights, target)
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

/// Deterministic source replaying queued draws
///
/// Each draw kind has its own queue. Exhausted queues fall back to `true`,
/// the range minimum, index `0` and the identity permutation, so a test only
/// scripts the draws it cares about. Scripted values outside the requested
/// range are clamped into it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedRandom {
    bools: VecDeque<bool>,
    ints: VecDeque<u32>,
    indices: VecDeque<usize>,
    permutations: VecDeque<Vec<usize>>,
}

impl ScriptedRandom {
    /// Source with empty queues; every draw takes its fallback
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue boolean draws
    #[must_use]
    pub fn with_bools(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.bools.extend(values);
        self
    }

    /// Queue integer draws
    #[must_use]
    pub fn with_ints(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(values);
        self
    }

    /// Queue categorical draws as indices into the offered weight table
    #[must_use]
    pub fn with_indices(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(values);
        self
    }

    /// Queue permutation draws
    #[must_use]
    pub fn with_permutations(mut self, values: impl IntoIterator<Item = Vec<usize>>) -> Self {
        self.permutations.extend(values);
        self
    }

    /// Number of scripted draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.bools.len() + self.ints.len() + self.indices.len() + self.permutations.len()
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

impl RandomSource for ScriptedRandom {
    fn uniform_bool(&mut self, _p: f64) -> bool {
        self.bools.pop_front().unwrap_or(true)
    }

    fn uniform_int(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32 {
        let value = self.ints.pop_front().unwrap_or(min_inclusive);
        if max_exclusive <= min_inclusive {
            min_inclusive
        } else {
            value.clamp(min_inclusive, max_exclusive - 1)
        }
    }

    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let scripted = self.indices.pop_front().unwrap_or(0);
        if usable_total(weights) <= 0.0 {
            return None;
        }
        Some(scripted.min(weights.len().saturating_sub(1)))
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        match self.permutations.pop_front() {
            Some(order) if is_permutation(&order, len) => order,
            _ => (0..len).collect(),
        }
    }
}

/// Wrapper that records every draw of an inner source
///
/// The captured sequence replays exactly through [`RecordingRandom::into_replay`].
pub struct RecordingRandom<R> {
    inner: R,
    log: ScriptedRandom,
    draws: usize,
}

impl<R: RandomSource> RecordingRandom<R> {
    /// Start recording draws taken from `inner`
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            log: ScriptedRandom::new(),
            draws: 0,
        }
    }

    /// Number of draws recorded so far
    pub const fn draw_count(&self) -> usize {
        self.draws
    }

    /// Scripted source replaying the recorded draws in order
    pub fn into_replay(self) -> ScriptedRandom {
        self.log
    }
}

impl<R: RandomSource> RandomSource for RecordingRandom<R> {
    fn uniform_bool(&mut self, p: f64) -> bool {
        let value = self.inner.uniform_bool(p);
        self.log.bools.push_back(value);
        self.draws += 1;
        value
    }

    fn uniform_int(&mut self, min_inclusive: u32, max_exclusive: u32) -> u32 {
        let value = self.inner.uniform_int(min_inclusive, max_exclusive);
        self.log.ints.push_back(value);
        self.draws += 1;
        value
    }

    fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let value = self.inner.weighted_index(weights);
        // A missing index replays as None because the table has no mass either way
        self.log.indices.push_back(value.unwrap_or(0));
        self.draws += 1;
        value
    }

    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let value = self.inner.permutation(len);
        self.log.permutations.push_back(value.clone());
        self.draws += 1;
        value
    }
}
