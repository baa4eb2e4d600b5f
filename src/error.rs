use thiserror::Error;

/// User-facing failures of the outer surfaces. Aggregation itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradeError {
    #[error("No subjects to export")]
    NothingToExport,

    #[error("No subject at row {index} (list has {len} rows)")]
    NoSuchRow { index: usize, len: usize },
}
