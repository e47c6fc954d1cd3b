use crate::vectorizer::TermWeights;

/// Default smoothing added to the cosine denominator
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// dot積
/// Σ(a_i * b_i) over the terms of `vec` that `other` also holds
#[inline]
pub fn dot(vec: &TermWeights<'_>, other: &TermWeights<'_>) -> f64 {
    vec.iter()
        .filter_map(|(&term, &a)| other.get(term).map(|&b| a * b))
        .sum()
}

/// Σ(a_i^2)
#[inline]
pub fn norm_sq(vec: &TermWeights<'_>) -> f64 {
    vec.values().map(|&v| v * v).sum()
}

/// コサイン類似度
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b|| + epsilon)
///
/// The epsilon keeps empty or zero vectors at 0.0 instead of NaN, and shifts
/// every other score slightly below the unsmoothed value.
pub fn cosine_similarity(vec: &TermWeights<'_>, other: &TermWeights<'_>, epsilon: f64) -> f64 {
    dot(vec, other) / (norm_sq(vec).sqrt() * norm_sq(other).sqrt() + epsilon)
}
