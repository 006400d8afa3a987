//! Create entry use case

use crate::domain::{EntryDraft, JournalEntry};
use crate::error::Result;
use crate::infrastructure::KeyValueStorage;
use crate::store::EntryStore;

/// Submits a new-entry form to the entry store
pub struct NewEntryService<'a, S: KeyValueStorage> {
    entries: &'a mut EntryStore<S>,
}

impl<'a, S: KeyValueStorage> NewEntryService<'a, S> {
    pub fn new(entries: &'a mut EntryStore<S>) -> Self {
        NewEntryService { entries }
    }

    /// Validate the draft and add it. Nothing is stored if validation fails.
    pub fn submit(&mut self, draft: &EntryDraft) -> Result<JournalEntry> {
        let new_entry = draft.validate()?;
        self.entries.add_entry(new_entry)
    }
}
