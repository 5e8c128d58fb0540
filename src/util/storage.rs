//! Key-value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme manager is the only writer. `BrowserStore` talks to
//! `localStorage` in `csr` builds and behaves like an always-empty,
//! never-writable store elsewhere, which is also how the page behaves when a
//! browser refuses storage access. `MemoryStore` backs tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::PageError;

pub trait PreferenceStore {
    /// Stored value for `key`; `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Origin-scoped `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        let read = crate::util::dom::local_storage().and_then(|storage| Ok(storage.get_item(key)?));
        match read {
            Ok(value) => value,
            Err(err) => {
                leptos::logging::warn!("preference {key} unreadable: {err}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        crate::util::dom::local_storage()?.set_item(key, value)?;
        Ok(())
    }
}

#[cfg(not(feature = "csr"))]
impl PreferenceStore for BrowserStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PageError> {
        Err(PageError::NoStorage)
    }
}

/// In-memory store. `unavailable()` builds one that refuses every write and
/// reads nothing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn unavailable() -> Self {
        Self { entries: RefCell::default(), unavailable: true }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        if self.unavailable {
            return Err(PageError::NoStorage);
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
