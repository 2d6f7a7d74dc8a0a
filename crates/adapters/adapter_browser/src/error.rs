//! Browser adapter error types.

use uiprefs_domain::error::PrefsError;
use wasm_bindgen::JsValue;

/// Errors specific to the browser adapter.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// Not running inside a window (e.g. a worker).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// `window.localStorage` is missing or threw on access.
    #[error("local storage unavailable")]
    StorageUnavailable,

    /// A DOM or storage call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl BrowserError {
    /// Capture a thrown JS value as text.
    pub fn js(value: &JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<BrowserError> for PrefsError {
    fn from(err: BrowserError) -> Self {
        PrefsError::storage(err)
    }
}

impl From<BrowserError> for JsValue {
    fn from(err: BrowserError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_storage_unavailable() {
        let err = BrowserError::StorageUnavailable;
        assert_eq!(err.to_string(), "local storage unavailable");
    }

    #[test]
    fn should_display_js_message() {
        let err = BrowserError::Js("QuotaExceededError".to_string());
        assert_eq!(err.to_string(), "javascript error: QuotaExceededError");
    }

    #[test]
    fn should_convert_to_storage_error() {
        let err: PrefsError = BrowserError::NoWindow.into();
        assert!(matches!(err, PrefsError::Storage(_)));
    }
}
