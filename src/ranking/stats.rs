/// Arithmetic mean, `None` for an empty input
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percentile `q` in [0, 1] with linear interpolation between the two
/// closest ranks (position `q * (n - 1)` over the sorted values).
/// `None` for an empty input.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[9.0, 9.0, 9.0, 5.0]), Some(8.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn percentile_interpolates_linearly() {
        // pos = 0.9 * 3 = 2.7 -> 10 + 0.7 * 990
        let m = percentile(&[10.0, 1000.0, 10.0, 10.0], 0.9).unwrap();
        assert!((m - 703.0).abs() < 1e-9);
    }

    #[test]
    fn percentile_endpoints_and_exact_ranks() {
        let v = [4.0, 1.0, 3.0, 2.0, 5.0];
        assert_eq!(percentile(&v, 0.0), Some(1.0));
        assert_eq!(percentile(&v, 1.0), Some(5.0));
        assert_eq!(percentile(&v, 0.5), Some(3.0));
        assert_eq!(percentile(&[7.0], 0.9), Some(7.0));
        assert_eq!(percentile(&[], 0.9), None);
    }
}
