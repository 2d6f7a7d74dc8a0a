//! In-memory preference store.
//!
//! Lives only as long as the page. Used as the session fallback when the
//! browser store is unusable, and as the store in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use uiprefs_domain::error::PrefsError;

use crate::ports::PreferenceStore;

/// [`PreferenceStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RefCell::new(entries),
        }
    }

    /// Direct read without going through the port.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
