//! Durable key/value persistence used by the cart and the age gate.
//!
//! The browser implementation talks to `window.localStorage`. Callers treat
//! every failure as non-fatal: in-memory state stays authoritative.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::rc::Rc;

use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read key: {0}")]
    Read(String),
    #[error("failed to write key: {0}")]
    Write(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{}: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write(format!("{}: {:?}", key, e)))
    }
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what a store wrote.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<RefCell<bool>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Makes every subsequent write fail, like a full quota.
    pub fn fail_writes(&self) {
        *self.fail_writes.borrow_mut() = true;
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl PartialEq for MemoryStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.fail_writes.borrow() {
            return Err(StorageError::Write(format!("{}: quota exceeded", key)));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if *self.fail_writes.borrow() {
            return Err(StorageError::Write(format!("{}: quota exceeded", key)));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap(), Some("v".to_string()));
        handle.remove("k").unwrap();
        assert_eq!(storage.raw("k"), None);
    }

    #[test]
    fn failing_writes_leave_entries_untouched() {
        let storage = MemoryStorage::with_entry("k", "old");
        storage.fail_writes();
        assert!(matches!(storage.set("k", "new"), Err(StorageError::Write(_))));
        assert!(storage.remove("k").is_err());
        assert_eq!(storage.raw("k"), Some("old".to_string()));
    }
}
