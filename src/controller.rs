//! The editable subject list.
//!
//! [`SubjectList`] owns the current rows and saves them through a
//! [`SubjectStore`] after every change, so the stored list always matches
//! what was last shown. Reading the list never writes.

use anyhow::Result;
use rand::Rng;
use tracing::info;

use crate::error::GradeError;
use crate::grading::SubjectEntry;
use crate::output::format_value;
use crate::samples;
use crate::store::SubjectStore;
use crate::summary::Summary;

/// Field changes for [`SubjectList::edit`]. `None` leaves a field as it is.
#[derive(Debug, Default, Clone)]
pub struct RowUpdate {
    pub name: Option<String>,
    pub score: Option<String>,
    pub weight: Option<String>,
}

pub struct SubjectList<S: SubjectStore> {
    store: S,
    entries: Vec<SubjectEntry>,
}

impl<S: SubjectStore> SubjectList<S> {
    /// Loads the saved list, falling back to the default seed rows when
    /// nothing has been saved yet. A saved empty list stays empty.
    pub fn open(store: S) -> Result<Self> {
        let entries = match store.load()? {
            Some(saved) => saved,
            None => {
                info!("No saved subjects, starting from seed rows");
                samples::default_seed()
            }
        };
        Ok(Self { store, entries })
    }

    pub fn entries(&self) -> &[SubjectEntry] {
        &self.entries
    }

    pub fn summary(&self) -> Summary {
        Summary::from_entries(&self.entries)
    }

    /// Appends a row built from raw text fields.
    pub fn add(&mut self, name: &str, score: &str, weight: &str) -> Result<&SubjectEntry> {
        self.entries.push(SubjectEntry::from_raw(name, score, weight));
        self.persist()?;
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Updates the row at 1-based `index`.
    pub fn edit(&mut self, index: usize, update: RowUpdate) -> Result<&SubjectEntry> {
        let slot = self.slot(index)?;
        let current = &self.entries[slot];
        let updated = SubjectEntry::from_raw(
            update.name.as_deref().unwrap_or(&current.name),
            &update.score.unwrap_or_else(|| format_value(current.score)),
            &update.weight.unwrap_or_else(|| format_value(current.weight)),
        );
        self.entries[slot] = updated;
        self.persist()?;
        Ok(&self.entries[slot])
    }

    /// Removes and returns the row at 1-based `index`.
    pub fn remove(&mut self, index: usize) -> Result<SubjectEntry> {
        let slot = self.slot(index)?;
        let removed = self.entries.remove(slot);
        self.persist()?;
        Ok(removed)
    }

    /// Empties the list. The saved copy is replaced by an empty list.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }

    /// Replaces the list with `count` random subjects from the example pool.
    pub fn load_examples<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> Result<()> {
        self.entries = samples::pick_examples(rng, count);
        self.persist()
    }

    fn slot(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.entries.len() {
            return Err(GradeError::NoSuchRow {
                index,
                len: self.entries.len(),
            }
            .into());
        }
        Ok(index - 1)
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.entries)
    }
}
