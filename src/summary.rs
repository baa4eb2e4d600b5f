//! Display formatting for an aggregation.
//!
//! Turns an [`AggregationResult`] into the strings a front end shows: the
//! average to two decimals, the total weight as a whole number and the
//! letter with its style class. Undefined values render as [`PLACEHOLDER`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::grading::{AggregationResult, SubjectEntry, aggregate};
use crate::grading::utility::round_half_up;

pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub subject_count: usize,
    pub weighted_average: String,
    pub total_weight: String,
    pub letter: String,
    pub class: String,
    #[serde(skip)]
    pub result: AggregationResult,
}

impl Summary {
    /// Aggregates `entries` and formats the result.
    pub fn from_entries(entries: &[SubjectEntry]) -> Self {
        Self::from_result(entries.len(), aggregate(entries))
    }

    pub fn from_result(subject_count: usize, result: AggregationResult) -> Self {
        let weighted_average = match result.weighted_average {
            Some(avg) => format!("{:.2}", round_half_up(avg * 100.0) / 100.0),
            None => PLACEHOLDER.to_string(),
        };

        let total_weight = if result.total_weight == 0.0 {
            "0".to_string()
        } else {
            format!("{}", round_half_up(result.total_weight))
        };

        let (letter, class) = match result.letter_grade {
            Some(grade) => (grade.to_string(), grade.class_name()),
            None => (PLACEHOLDER.to_string(), "letter".to_string()),
        };

        Self {
            subject_count,
            weighted_average,
            total_weight,
            letter,
            class,
            result,
        }
    }
}

/// Machine-readable form of an aggregation, printed by `--json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub subject_count: usize,
    #[serde(flatten)]
    pub result: AggregationResult,
}

impl Report {
    pub fn from_entries(entries: &[SubjectEntry]) -> Self {
        Self {
            generated_at: Utc::now(),
            subject_count: entries.len(),
            result: aggregate(entries),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Subjects:         {}", self.subject_count)?;
        writeln!(f, "Total weight:     {}", self.total_weight)?;
        writeln!(f, "Weighted average: {}", self.weighted_average)?;
        write!(f, "Letter grade:     {}", self.letter)
    }
}
