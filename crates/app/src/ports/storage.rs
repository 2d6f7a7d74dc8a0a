//! Storage port — persistent string key/value pairs.

use std::rc::Rc;

use uiprefs_domain::error::PrefsError;

/// Synchronous key/value store that survives page reloads.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Storage`] when the backing store is unusable.
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Storage`] when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        (**self).set(key, value)
    }
}
