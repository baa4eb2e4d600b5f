//! Data types used by the grading pipeline.

use serde::{Deserialize, Serialize};

use crate::grading::grade::LetterGrade;

/// One subject row: a label plus an optional score and weight.
///
/// `None` means the value was left blank or could not be read as a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub name: String,
    pub score: Option<f64>,
    pub weight: Option<f64>,
}

impl SubjectEntry {
    pub fn new(name: impl Into<String>, score: Option<f64>, weight: Option<f64>) -> Self {
        Self {
            name: name.into(),
            score,
            weight,
        }
    }

    /// Returns `(score, weight)` when this row takes part in the average.
    pub(crate) fn valid_pair(&self) -> Option<(f64, f64)> {
        match (self.score, self.weight) {
            (Some(score), Some(weight))
                if score.is_finite() && weight.is_finite() && weight > 0.0 =>
            {
                Some((score, weight))
            }
            _ => None,
        }
    }
}

/// Weighted average, total weight and letter grade for a list of subjects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregationResult {
    pub weighted_average: Option<f64>,
    pub total_weight: f64,
    pub letter_grade: Option<LetterGrade>,
}

impl AggregationResult {
    /// Result for a list with no usable rows.
    pub fn undefined() -> Self {
        Self {
            weighted_average: None,
            total_weight: 0.0,
            letter_grade: None,
        }
    }
}
