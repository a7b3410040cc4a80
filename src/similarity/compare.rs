use crate::utils::math::vector::ZeroSpVec;

/// Cosine similarity with precomputed norms.
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// A zero vector has no direction; its similarity to anything, itself
/// included, is 0.
#[inline]
pub fn cosine_with_norms(a: &ZeroSpVec<u32>, norm_a: f64, b: &ZeroSpVec<u32>, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    a.dot::<f64>(b) / (norm_a * norm_b)
}

/// Cosine similarity of two count vectors
#[inline]
pub fn cosine_similarity(a: &ZeroSpVec<u32>, b: &ZeroSpVec<u32>) -> f64 {
    cosine_with_norms(a, a.norm::<f64>(), b, b.norm::<f64>())
}
