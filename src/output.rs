//! CSV export of the subject list.
//!
//! Every cell is quoted, embedded quotes are doubled and rows end in `\n`.
//! Absent scores and weights are written as empty cells.

use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use tracing::{debug, info};

use crate::entry::parse_field;
use crate::error::GradeError;
use crate::grading::SubjectEntry;

/// Default file name offered for exports.
pub const DEFAULT_EXPORT_FILE: &str = "grades.csv";

const HEADER: [&str; 3] = ["Subject", "Score", "Weight"];

/// Text form of a score or weight: shortest decimal that reads back exactly,
/// or an empty string when absent.
pub fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes `entries` as a CSV document with a `Subject,Score,Weight` header.
pub fn write_csv<W: Write>(writer: W, entries: &[SubjectEntry]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for entry in entries {
        writer.write_record([
            entry.name.clone(),
            format_value(entry.score),
            format_value(entry.weight),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

/// Exports `entries` to a CSV file at `path`.
///
/// # Errors
///
/// Returns [`GradeError::NothingToExport`] for an empty list; no file is created.
#[tracing::instrument(skip(entries), fields(rows = entries.len()))]
pub fn export_csv(path: &str, entries: &[SubjectEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(GradeError::NothingToExport.into());
    }

    let file = File::create(path).with_context(|| format!("failed to create '{path}'"))?;
    write_csv(file, entries)?;

    info!(path, "Exported subjects");
    Ok(())
}

/// Parses a document produced by [`write_csv`] back into entries.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<SubjectEntry>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        entries.push(SubjectEntry {
            name: record.get(0).unwrap_or_default().to_string(),
            score: record.get(1).and_then(parse_field),
            weight: record.get(2).and_then(parse_field),
        });
    }

    debug!(rows = entries.len(), "Parsed CSV");
    Ok(entries)
}

/// Reads an exported CSV file from disk.
pub fn read_csv_file(path: &str) -> Result<Vec<SubjectEntry>> {
    let file = File::open(path).with_context(|| format!("failed to open '{path}'"))?;
    read_csv(file)
}
