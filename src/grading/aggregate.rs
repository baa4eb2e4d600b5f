use crate::grading::grade::LetterGrade;
use crate::grading::types::{AggregationResult, SubjectEntry};
use crate::grading::utility::mean;

/// Aggregates a list of [`SubjectEntry`] rows into a single [`AggregationResult`].
///
/// Rows missing a score or weight, or with a weight that is not positive, are
/// skipped. The remaining rows are averaged by weight and the average is
/// mapped to a [`LetterGrade`]. Never fails; a list with no usable rows yields
/// [`AggregationResult::undefined`].
pub fn aggregate(entries: &[SubjectEntry]) -> AggregationResult {
    let mut valid: Vec<(f64, f64)> = entries
        .iter()
        .filter_map(SubjectEntry::valid_pair)
        .collect();

    if valid.is_empty() {
        return AggregationResult::undefined();
    }

    // Sum in a fixed order so that reordering rows cannot change the last bits.
    valid.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let total_weight: f64 = valid.iter().map(|(_, weight)| weight).sum();

    // Only reachable if non-positive weights are ever admitted above.
    if total_weight == 0.0 {
        let scores: Vec<f64> = valid.iter().map(|(score, _)| *score).collect();
        let avg = mean(&scores);
        return AggregationResult {
            weighted_average: Some(avg),
            total_weight: 0.0,
            letter_grade: Some(LetterGrade::from_average(avg)),
        };
    }

    // Divide weights by a power of two near the largest one. Exact, and keeps
    // score * weight and the sums finite for any finite weights.
    let max_weight = valid.iter().fold(0.0_f64, |acc, (_, weight)| acc.max(*weight));
    let scale = max_weight.log2().floor().exp2();

    let scaled_total: f64 = valid.iter().map(|(_, weight)| weight / scale).sum();
    let scaled_sum: f64 = valid
        .iter()
        .map(|(score, weight)| score * (weight / scale))
        .sum();
    let weighted_average = scaled_sum / scaled_total;

    AggregationResult {
        weighted_average: Some(weighted_average),
        total_weight,
        letter_grade: Some(LetterGrade::from_average(weighted_average)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: Option<f64>, weight: Option<f64>) -> SubjectEntry {
        SubjectEntry::new("subject", score, weight)
    }

    #[test]
    fn test_empty_input_is_undefined() {
        assert_eq!(aggregate(&[]), AggregationResult::undefined());
    }

    #[test]
    fn test_all_invalid_matches_empty() {
        let rows = vec![
            entry(None, Some(1.0)),
            entry(Some(90.0), None),
            entry(Some(90.0), Some(0.0)),
            entry(Some(90.0), Some(-2.0)),
            entry(None, None),
        ];
        assert_eq!(aggregate(&rows), aggregate(&[]));
    }

    #[test]
    fn test_single_entry() {
        let result = aggregate(&[entry(Some(100.0), Some(1.0))]);
        assert_eq!(result.weighted_average, Some(100.0));
        assert_eq!(result.total_weight, 1.0);
        assert_eq!(result.letter_grade, Some(LetterGrade::A));
    }

    #[test]
    fn test_equal_weights() {
        let result = aggregate(&[entry(Some(80.0), Some(1.0)), entry(Some(60.0), Some(1.0))]);
        assert_eq!(result.weighted_average, Some(70.0));
        assert_eq!(result.total_weight, 2.0);
        assert_eq!(result.letter_grade, Some(LetterGrade::C));
    }

    #[test]
    fn test_weighted_skew() {
        let result = aggregate(&[entry(Some(100.0), Some(3.0)), entry(Some(0.0), Some(1.0))]);
        assert_eq!(result.weighted_average, Some(75.0));
        assert_eq!(result.total_weight, 4.0);
        // 75 falls in the 70..80 band
        assert_eq!(result.letter_grade, Some(LetterGrade::C));
    }

    #[test]
    fn test_rounding_boundary() {
        let a = aggregate(&[entry(Some(89.5), Some(1.0))]);
        assert_eq!(a.letter_grade, Some(LetterGrade::A));

        let b = aggregate(&[entry(Some(89.49), Some(1.0))]);
        assert_eq!(b.letter_grade, Some(LetterGrade::B));
    }

    #[test]
    fn test_absent_score_is_ignored() {
        let with_blank = vec![
            entry(Some(92.0), Some(20.0)),
            entry(None, Some(50.0)),
            entry(Some(88.0), Some(20.0)),
        ];
        let without = vec![entry(Some(92.0), Some(20.0)), entry(Some(88.0), Some(20.0))];

        let result = aggregate(&with_blank);
        assert_eq!(result, aggregate(&without));
        assert_eq!(result.total_weight, 40.0);
        assert_eq!(result.weighted_average, Some(90.0));
    }

    #[test]
    fn test_non_finite_values_are_ignored() {
        let rows = vec![
            entry(Some(f64::NAN), Some(1.0)),
            entry(Some(70.0), Some(f64::INFINITY)),
            entry(Some(65.0), Some(1.0)),
        ];
        let result = aggregate(&rows);
        assert_eq!(result.weighted_average, Some(65.0));
        assert_eq!(result.letter_grade, Some(LetterGrade::D));
    }

    #[test]
    fn test_huge_weights_stay_finite() {
        let single = aggregate(&[SubjectEntry::from_raw("x", "100", "1e307")]);
        let avg = single.weighted_average.unwrap();
        assert!((avg - 100.0).abs() < 1e-9);
        assert_eq!(single.total_weight, 1e307);
        assert_eq!(single.letter_grade, Some(LetterGrade::A));

        let pair = aggregate(&[entry(Some(50.0), Some(1e308)), entry(Some(50.0), Some(1e308))]);
        let avg = pair.weighted_average.unwrap();
        assert!(avg.is_finite());
        assert!((avg - 50.0).abs() < 1e-9);
        assert_eq!(pair.letter_grade, Some(LetterGrade::F));

        let mixed = aggregate(&[entry(Some(90.0), Some(f64::MAX)), entry(Some(10.0), Some(1.0))]);
        let avg = mixed.weighted_average.unwrap();
        assert!((avg - 90.0).abs() < 1e-9);
        assert_eq!(mixed.letter_grade, Some(LetterGrade::A));
    }

    #[test]
    fn test_permutation_invariance() {
        let rows = vec![
            entry(Some(95.0), Some(30.0)),
            entry(Some(88.1), Some(0.3)),
            entry(Some(91.7), Some(25.0)),
            entry(None, Some(10.0)),
            entry(Some(82.3), Some(0.1)),
            entry(Some(59.9), Some(15.0)),
        ];
        let expected = aggregate(&rows);

        let mut reversed = rows.clone();
        reversed.reverse();
        assert_eq!(aggregate(&reversed), expected);

        for shift in 1..rows.len() {
            let mut rotated = rows.clone();
            rotated.rotate_left(shift);
            assert_eq!(aggregate(&rotated), expected);
        }
    }

    #[test]
    fn test_name_does_not_matter() {
        let a = aggregate(&[SubjectEntry::new("", Some(70.0), Some(2.0))]);
        let b = aggregate(&[SubjectEntry::new("Physics", Some(70.0), Some(2.0))]);
        assert_eq!(a, b);
    }
}
