//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PrefsError`]
//! via `#[from]` when crossing a port boundary.

/// Failure to interpret a persisted or user-supplied preference value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value is neither `dark` nor `light`.
    #[error("unknown theme mode {0:?}")]
    UnknownTheme(String),
}

/// Top-level error for preference operations.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    /// The persistent store rejected a read or write.
    #[error("preference storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A stored value could not be parsed.
    #[error("invalid preference value")]
    Parse(#[from] ParseError),

    /// The controller was configured with unusable settings.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PrefsError {
    /// Wrap any error as a [`PrefsError::Storage`].
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }
}
