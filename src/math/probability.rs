/// Sum of the weights that can carry probability mass
///
/// Negative, NaN and infinite weights contribute nothing.
pub fn usable_total(weights: &[f64]) -> f64 {
    weights
        .iter()
        .filter(|weight| weight.is_finite() && **weight > 0.0)
        .sum()
}

/// Index selected by walking the cumulative distribution of `weights`
///
/// `target` is a point in `[0, usable_total(weights))`. Weights that carry no
/// mass are never selected. Returns `None` when no weight carries mass.
pub fn cumulative_index(weights: &[f64], target: f64) -> Option<usize> {
    let mut remaining = target;
    let mut last_usable = None;

    for (i, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight <= 0.0 {
            continue;
        }
        last_usable = Some(i);
        remaining -= weight;
        if remaining < 0.0 {
            return Some(i);
        }
    }

    // Rounding can leave a sliver past the final bucket
    last_usable
}
