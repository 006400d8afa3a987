//! State containers for entries and comments
//!
//! Each store keeps its whole collection in memory and mirrors it to one
//! storage slot. Every mutation rewrites the full slot.

pub mod comment_store;
pub mod entry_store;

pub use comment_store::CommentStore;
pub use entry_store::EntryStore;

use crate::domain::{Clock, SystemClock};
use crate::error::{JournalError, Result};
use crate::infrastructure::config::{DEFAULT_DATE_FORMAT, DEFAULT_TIMESTAMP_FORMAT};
use crate::infrastructure::{Config, CorruptPolicy, KeyValueStorage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;
use tracing::{debug, warn};

/// Storage slot holding the entry collection
pub const ENTRIES_KEY: &str = "journalEntries";

/// Storage slot holding the comment collection
pub const COMMENTS_KEY: &str = "comments";

/// Settings shared by both stores
#[derive(Clone)]
pub struct StoreSettings {
    pub clock: Rc<dyn Clock>,
    pub date_format: String,
    pub timestamp_format: String,
    pub on_corrupt: CorruptPolicy,
}

impl StoreSettings {
    pub fn from_config(config: &Config) -> Self {
        StoreSettings {
            date_format: config.date_format.clone(),
            timestamp_format: config.timestamp_format.clone(),
            on_corrupt: config.on_corrupt,
            ..Self::default()
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            clock: Rc::new(SystemClock),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            on_corrupt: CorruptPolicy::default(),
        }
    }
}

impl std::fmt::Debug for StoreSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreSettings")
            .field("date_format", &self.date_format)
            .field("timestamp_format", &self.timestamp_format)
            .field("on_corrupt", &self.on_corrupt)
            .finish_non_exhaustive()
    }
}

/// Outcome of reading a collection slot
#[derive(Debug)]
pub(crate) enum Slot<T> {
    Missing,
    Loaded(T),
    /// Value was malformed, backed up, and must be replaced with defaults
    Reset,
}

/// Key the raw value of a corrupt slot is preserved under
pub fn backup_key(key: &str) -> String {
    format!("{}.corrupt", key)
}

pub(crate) fn load_slot<T, S>(storage: &S, key: &str, policy: CorruptPolicy) -> Result<Slot<T>>
where
    T: DeserializeOwned,
    S: KeyValueStorage,
{
    let Some(raw) = storage.get_item(key)? else {
        debug!(key, "storage slot empty");
        return Ok(Slot::Missing);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Slot::Loaded(value)),
        Err(source) => match policy {
            CorruptPolicy::Fail => Err(JournalError::CorruptStorage {
                key: key.to_string(),
                source,
            }),
            CorruptPolicy::Reset => {
                let backup = backup_key(key);
                storage.set_item(&backup, &raw)?;
                warn!(key, backup = %backup, error = %source, "corrupt storage slot reset");
                Ok(Slot::Reset)
            }
        },
    }
}

pub(crate) fn persist_slot<T, S>(storage: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStorage,
{
    let serialized = serde_json::to_string(value)?;
    storage.set_item(key, &serialized)?;
    debug!(key, "persisted collection");
    Ok(())
}
