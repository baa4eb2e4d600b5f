/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to the nearest integer, ties toward positive infinity (`89.5` -> `90`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[80.0, 60.0]), 70.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(89.5), 90.0);
        assert_eq!(round_half_up(89.49), 89.0);
        assert_eq!(round_half_up(0.0), 0.0);
        assert_eq!(round_half_up(-0.5), 0.0);
    }
}
