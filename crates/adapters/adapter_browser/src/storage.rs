//! `localStorage`-backed preference store.

use uiprefs_app::ports::PreferenceStore;
use uiprefs_domain::error::PrefsError;

use crate::error::BrowserError;

/// [`PreferenceStore`] over the window's `localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the current window's storage.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::NoWindow`] outside a window, or
    /// [`BrowserError::StorageUnavailable`] when storage is disabled.
    pub fn open() -> Result<Self, BrowserError> {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        Self::from_window(&window)
    }

    /// Open `window`'s storage.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::StorageUnavailable`] when the property is
    /// missing or throws, as in some private browsing modes.
    pub fn from_window(window: &web_sys::Window) -> Result<Self, BrowserError> {
        window
            .local_storage()
            .ok()
            .flatten()
            .map(|storage| Self { storage })
            .ok_or(BrowserError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        self.storage
            .get_item(key)
            .map_err(|err| BrowserError::js(&err).into())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| BrowserError::js(&err).into())
    }
}
