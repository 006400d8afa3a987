//! Journal session: the two stores, constructed once and handed out by
//! reference

use crate::error::Result;
use crate::infrastructure::{FileSystemStorage, JournalRepository, KeyValueStorage};
use crate::store::{CommentStore, EntryStore, StoreSettings};

/// One entry store and one comment store over the same storage backend
#[derive(Debug)]
pub struct Journal<S: KeyValueStorage> {
    entries: EntryStore<S>,
    comments: CommentStore<S>,
}

impl<S: KeyValueStorage + Clone> Journal<S> {
    pub fn open(storage: S, settings: StoreSettings) -> Result<Self> {
        // Comments first: opening them never seeds, so a corrupt slot fails
        // before the entry fixtures are written
        let comments = CommentStore::open(storage.clone(), settings.clone())?;
        let entries = EntryStore::open(storage, settings)?;
        Ok(Journal { entries, comments })
    }
}

impl Journal<FileSystemStorage> {
    /// Open the journal in a discovered directory using its config
    pub fn open_repository(repository: FileSystemStorage) -> Result<Self> {
        let config = repository.load_config()?;
        Self::open(repository, StoreSettings::from_config(&config))
    }
}

impl<S: KeyValueStorage> Journal<S> {
    pub fn entries(&self) -> &EntryStore<S> {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut EntryStore<S> {
        &mut self.entries
    }

    pub fn comments(&self) -> &CommentStore<S> {
        &self.comments
    }

    pub fn comments_mut(&mut self) -> &mut CommentStore<S> {
        &mut self.comments
    }
}
