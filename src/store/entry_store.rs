//! Entry collection, newest first

use crate::domain::{format_instant, seed_entries, EntryPatch, IdGenerator, JournalEntry, NewEntry};
use crate::error::{JournalError, Result};
use crate::infrastructure::KeyValueStorage;
use crate::store::{load_slot, persist_slot, Slot, StoreSettings, ENTRIES_KEY};
use tracing::{debug, info};

/// Ordered journal entries mirrored to the `journalEntries` slot
///
/// New entries are prepended. Required fields are not checked here; the
/// form layer owns validation.
#[derive(Debug)]
pub struct EntryStore<S: KeyValueStorage> {
    storage: S,
    settings: StoreSettings,
    entries: Vec<JournalEntry>,
    ids: IdGenerator,
}

impl<S: KeyValueStorage> EntryStore<S> {
    /// Hydrate from storage, seeding and persisting the fixture entries on
    /// first run
    pub fn open(storage: S, settings: StoreSettings) -> Result<Self> {
        let entries = match load_slot(&storage, ENTRIES_KEY, settings.on_corrupt)? {
            Slot::Loaded(entries) => entries,
            Slot::Missing | Slot::Reset => {
                let seeded = seed_entries();
                persist_slot(&storage, ENTRIES_KEY, &seeded)?;
                info!(count = seeded.len(), "seeded journal entries");
                seeded
            }
        };
        debug!(count = entries.len(), "entry store hydrated");

        let ids = IdGenerator::seeded(entries.iter().map(|e: &JournalEntry| e.id));
        Ok(EntryStore {
            storage,
            settings,
            entries,
            ids,
        })
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_entry(&self, id: i64) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Stamp a fresh id and today's date, then prepend
    pub fn add_entry(&mut self, new_entry: NewEntry) -> Result<JournalEntry> {
        let now = self.settings.clock.now();
        let entry = JournalEntry {
            id: self.ids.next_id(now)?,
            title: new_entry.title,
            date: format_instant(now, &self.settings.date_format)?,
            location: new_entry.location,
            content: new_entry.content,
            image: new_entry.image,
        };

        self.entries.insert(0, entry.clone());
        if let Err(e) = self.persist() {
            self.entries.remove(0);
            return Err(e);
        }

        info!(id = entry.id, title = %entry.title, "entry added");
        Ok(entry)
    }

    /// Merge the present fields of `patch` into the entry with `id`
    ///
    /// `id` and `date` are never changed. An unknown id leaves the
    /// collection and storage untouched and yields `EntryNotFound`.
    pub fn update_entry(&mut self, id: i64, patch: EntryPatch) -> Result<JournalEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(JournalError::EntryNotFound(id))?;

        let previous = self.entries[index].clone();
        self.entries[index].apply(patch);

        if let Err(e) = self.persist() {
            self.entries[index] = previous;
            return Err(e);
        }

        info!(id, "entry updated");
        Ok(self.entries[index].clone())
    }

    fn persist(&self) -> Result<()> {
        persist_slot(&self.storage, ENTRIES_KEY, &self.entries)
    }
}
