//! Store that degrades to memory when the persistent store fails.

use std::cell::Cell;

use uiprefs_domain::error::PrefsError;

use crate::memory_store::InMemoryStore;
use crate::ports::PreferenceStore;

/// Wraps a persistent store and keeps preferences working for the rest of
/// the page lifetime once it fails.
///
/// Every successful write is mirrored in memory. After the first failure the
/// primary is never consulted again and all reads and writes go to the
/// mirror, so a toggle made after the failure is still remembered until the
/// page unloads. This store never returns an error.
pub struct FallbackStore<S> {
    primary: Option<S>,
    mirror: InMemoryStore,
    degraded: Cell<bool>,
}

impl<S: PreferenceStore> FallbackStore<S> {
    /// Wrap `primary`.
    pub fn new(primary: S) -> Self {
        Self {
            primary: Some(primary),
            mirror: InMemoryStore::new(),
            degraded: Cell::new(false),
        }
    }

    /// A store that is degraded from the start, for hosts without any
    /// persistent store.
    #[must_use]
    pub fn memory_only() -> Self {
        Self {
            primary: None,
            mirror: InMemoryStore::new(),
            degraded: Cell::new(true),
        }
    }

    /// Whether the primary store has been abandoned.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    fn live_primary(&self) -> Option<&S> {
        if self.degraded.get() {
            None
        } else {
            self.primary.as_ref()
        }
    }

    fn degrade(&self, operation: &str, key: &str, err: &PrefsError) {
        tracing::warn!(
            operation,
            key,
            error = %err,
            "preference store failed, keeping preferences in memory for this page"
        );
        self.degraded.set(true);
    }
}

impl<S: PreferenceStore> PreferenceStore for FallbackStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        if let Some(primary) = self.live_primary() {
            match primary.get(key) {
                Ok(value) => {
                    if let Some(value) = &value {
                        self.mirror.set(key, value)?;
                    }
                    return Ok(value);
                }
                Err(err) => self.degrade("get", key, &err),
            }
        }
        self.mirror.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let rejected = self
            .live_primary()
            .and_then(|primary| primary.set(key, value).err());
        if let Some(err) = rejected {
            self.degrade("set", key, &err);
        }
        self.mirror.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose reads and writes can be made to fail.
    #[derive(Default)]
    struct FlakyStore {
        inner: InMemoryStore,
        fail_get: Cell<bool>,
        fail_set: Cell<bool>,
        calls: Cell<usize>,
    }

    impl PreferenceStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail_get.get() {
                return Err(PrefsError::storage(std::io::Error::other("denied")));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail_set.get() {
                return Err(PrefsError::storage(std::io::Error::other("quota")));
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn should_pass_through_while_primary_works() {
        let store = FallbackStore::new(FlakyStore::default());
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
        assert!(!store.is_degraded());
        assert_eq!(
            store.primary.as_ref().unwrap().inner.value("theme").as_deref(),
            Some("light")
        );
    }

    #[test]
    fn should_keep_write_in_memory_when_primary_rejects_it() {
        let primary = FlakyStore::default();
        primary.fail_set.set(true);
        let store = FallbackStore::new(primary);

        store.set("theme", "light").unwrap();

        assert!(store.is_degraded());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn should_return_none_when_primary_read_fails_and_nothing_cached() {
        let primary = FlakyStore::default();
        primary.fail_get.set(true);
        let store = FallbackStore::new(primary);

        assert_eq!(store.get("theme").unwrap(), None);
        assert!(store.is_degraded());
    }

    #[test]
    fn should_serve_previously_read_values_after_degrading() {
        let primary = FlakyStore::default();
        primary.inner.set("sidebarCollapsed", "true").unwrap();
        let store = FallbackStore::new(primary);
        assert_eq!(
            store.get("sidebarCollapsed").unwrap().as_deref(),
            Some("true")
        );

        store.primary.as_ref().unwrap().fail_set.set(true);
        store.set("theme", "light").unwrap();

        assert_eq!(
            store.get("sidebarCollapsed").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn should_stop_calling_primary_once_degraded() {
        let primary = FlakyStore::default();
        primary.fail_get.set(true);
        let store = FallbackStore::new(primary);

        store.get("theme").unwrap();
        store.set("theme", "dark").unwrap();
        store.get("theme").unwrap();

        assert_eq!(store.primary.as_ref().unwrap().calls.get(), 1);
    }

    #[test]
    fn should_work_without_primary() {
        let store: FallbackStore<InMemoryStore> = FallbackStore::memory_only();
        assert!(store.is_degraded());
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }
}
