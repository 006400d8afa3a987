//! Durable key-value storage abstraction

use crate::error::{JournalError, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// String-keyed slots holding whole string values
///
/// A write replaces the full value of one key; partial writes are never
/// observable.
pub trait KeyValueStorage {
    /// Read a slot; `None` if it was never written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Drop a slot (no-op if absent)
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

/// Keys become file names, so only a conservative charset is allowed
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if valid {
        Ok(())
    } else {
        Err(JournalError::InvalidStorageKey(key.to_string()))
    }
}

/// In-memory storage; clones share the same slots
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
