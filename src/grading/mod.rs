//! Weighted-average computation and letter grading.
//!
//! Everything in here is pure: callers hand in a snapshot of the subject list
//! and get back an [`AggregationResult`]. Nothing is cached between calls.

pub mod aggregate;
pub mod grade;
pub mod types;
pub mod utility;

pub use aggregate::aggregate;
pub use grade::LetterGrade;
pub use types::{AggregationResult, SubjectEntry};
