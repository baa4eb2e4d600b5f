//! Local persistence for the subject list.
//!
//! [`SubjectStore`] is the trait the list controller persists through.
//! [`JsonFileStore`] keeps a flat JSON object on disk and stores the list
//! under [`STORAGE_KEY`], leaving any other keys in the file untouched:
//! ```json
//! {
//!   "gradeCalculatorSubjects": [
//!     { "name": "Mathematics", "score": 92.0, "weight": 20.0 },
//!     { "name": "", "score": null, "weight": null }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::grading::SubjectEntry;

/// Key the subject list is stored under.
pub const STORAGE_KEY: &str = "gradeCalculatorSubjects";

/// Somewhere the current subject list can be saved and read back.
pub trait SubjectStore {
    /// Returns the saved list, or `None` if nothing has been saved.
    fn load(&self) -> Result<Option<Vec<SubjectEntry>>>;

    /// Replaces the saved list.
    fn save(&self, entries: &[SubjectEntry]) -> Result<()>;
}

/// [`SubjectStore`] backed by a JSON key-value file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read store '{}'", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        let map = serde_json::from_str(&content)
            .with_context(|| format!("store '{}' is not a JSON object", self.path.display()))?;
        Ok(map)
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write store '{}'", self.path.display()))?;
        Ok(())
    }
}

impl SubjectStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<SubjectEntry>>> {
        let mut map = self.read_map()?;
        match map.remove(STORAGE_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => {
                let entries: Vec<SubjectEntry> = serde_json::from_value(value)
                    .with_context(|| format!("malformed '{STORAGE_KEY}' entry"))?;
                debug!(rows = entries.len(), "Loaded saved subjects");
                Ok(Some(entries))
            }
        }
    }

    fn save(&self, entries: &[SubjectEntry]) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(STORAGE_KEY.to_string(), serde_json::to_value(entries)?);
        self.write_map(&map)?;
        debug!(rows = entries.len(), path = %self.path.display(), "Saved subjects");
        Ok(())
    }
}
