//! Edit entry use case

use crate::domain::{EntryDraft, JournalEntry};
use crate::error::{JournalError, Result};
use crate::infrastructure::KeyValueStorage;
use crate::store::EntryStore;

/// Loads an entry into an edit form and submits the form back
pub struct EditEntryService<'a, S: KeyValueStorage> {
    entries: &'a mut EntryStore<S>,
}

impl<'a, S: KeyValueStorage> EditEntryService<'a, S> {
    pub fn new(entries: &'a mut EntryStore<S>) -> Self {
        EditEntryService { entries }
    }

    /// Pre-filled draft for the entry with `id`
    pub fn draft_for(&self, id: i64) -> Result<EntryDraft> {
        self.entries
            .get_entry(id)
            .map(EntryDraft::from_entry)
            .ok_or(JournalError::EntryNotFound(id))
    }

    /// Validate the draft and write all four form fields over the entry
    pub fn submit(&mut self, id: i64, draft: EntryDraft) -> Result<JournalEntry> {
        let patch = draft.into_patch()?;
        self.entries.update_entry(id, patch)
    }
}
