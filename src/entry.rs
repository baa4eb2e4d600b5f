//! Normalization of raw form text into [`SubjectEntry`] values.
//!
//! This is the only place where text becomes numbers. Anything that is not a
//! finite number turns into `None` instead of an error.

use crate::grading::SubjectEntry;

/// Reads a score or weight field. Blank, unparseable and non-finite input is absent.
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl SubjectEntry {
    /// Builds an entry from the three raw text fields of a row.
    pub fn from_raw(name: &str, score: &str, weight: &str) -> Self {
        SubjectEntry {
            name: name.trim().to_string(),
            score: parse_field(score),
            weight: parse_field(weight),
        }
    }
}
