//! Preference controller — restores, applies, toggles, and persists the
//! page theme and sidebar state.

use uiprefs_domain::event::PreferenceChanged;
use uiprefs_domain::sidebar::SidebarState;
use uiprefs_domain::theme::ThemeMode;

use crate::config::ControllerConfig;
use crate::ports::{ChangePublisher, Document, PreferenceStore};

/// Snapshot of both preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub sidebar: SidebarState,
}

/// Application service keeping the document and the store in step.
///
/// The value shown by the document always equals the value last handed to
/// the store. Store failures are logged and never interrupt the visual
/// update; missing control elements are skipped silently.
pub struct PreferenceController<D, S, P = ()> {
    document: D,
    store: S,
    publisher: P,
    config: ControllerConfig,
    theme: ThemeMode,
    sidebar: SidebarState,
}

impl<D, S, P> PreferenceController<D, S, P>
where
    D: Document,
    S: PreferenceStore,
    P: ChangePublisher,
{
    /// Create a controller. Nothing is read or applied until
    /// [`initialize`](Self::initialize).
    pub fn new(document: D, store: S, publisher: P, config: ControllerConfig) -> Self {
        let theme = config.theme.default;
        Self {
            document,
            store,
            publisher,
            config,
            theme,
            sidebar: SidebarState::default(),
        }
    }

    /// Read both preferences and apply the theme to the root element.
    ///
    /// Meant to run before the document is parsed so the page never paints
    /// with the wrong theme.
    pub fn initialize(&mut self) -> Preferences {
        let default = self.config.theme.default;
        self.theme = match self.read(&self.config.theme.storage_key) {
            None => default,
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, fallback = %default, "ignoring stored theme");
                default
            }),
        };
        self.document
            .set_root_attribute(&self.config.theme.attribute, self.theme.as_str());

        let stored = self.read(&self.config.sidebar.storage_key);
        self.sidebar = SidebarState::from_stored(stored.as_deref());

        tracing::debug!(theme = %self.theme, sidebar = ?self.sidebar, "preferences restored");
        self.preferences()
    }

    /// Sync the controls, and the sidebar container, once the document is
    /// parsed.
    pub fn on_ready(&self) {
        self.update_theme_icon(self.theme);

        let sidebar = &self.config.sidebar;
        if !sidebar.enabled {
            return;
        }
        if !self.document.set_class(
            &sidebar.container_id,
            &sidebar.collapsed_class,
            self.sidebar.is_collapsed(),
        ) {
            tracing::trace!(id = %sidebar.container_id, "no sidebar container on this page");
        }
        self.update_sidebar_icon(self.sidebar);
    }

    /// Flip the theme currently shown by the document.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let shown = self.document.root_attribute(&self.config.theme.attribute);
        let current = ThemeMode::from_attribute(shown.as_deref());
        let next = current.toggled();
        tracing::debug!(from = %current, to = %next, "toggling theme");
        self.set_theme(next);
        next
    }

    /// Apply, persist, and display `mode`.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.document
            .set_root_attribute(&self.config.theme.attribute, mode.as_str());
        self.persist(&self.config.theme.storage_key, mode.as_str());
        self.update_theme_icon(mode);

        let previous = std::mem::replace(&mut self.theme, mode);
        if previous != mode {
            self.publisher.publish(&PreferenceChanged::Theme(mode));
        }
    }

    /// Flip the collapsed class on the dashboard container.
    ///
    /// Without a container, or with sidebar support disabled, nothing is
    /// changed or persisted and the current state is returned.
    pub fn toggle_sidebar(&mut self) -> SidebarState {
        let sidebar = &self.config.sidebar;
        if !sidebar.enabled {
            tracing::debug!("sidebar support disabled, toggle ignored");
            return self.sidebar;
        }
        let Some(collapsed) = self
            .document
            .toggle_class(&sidebar.container_id, &sidebar.collapsed_class)
        else {
            tracing::debug!(id = %sidebar.container_id, "no sidebar container, toggle ignored");
            return self.sidebar;
        };

        let next = SidebarState::from_collapsed(collapsed);
        tracing::debug!(from = ?self.sidebar, to = ?next, "toggling sidebar");
        self.commit_sidebar(next);
        next
    }

    /// Force the sidebar into `state`.
    ///
    /// Returns `false`, without persisting, when sidebar support is disabled
    /// or the container is absent.
    pub fn set_sidebar(&mut self, state: SidebarState) -> bool {
        let sidebar = &self.config.sidebar;
        if !sidebar.enabled
            || !self.document.set_class(
                &sidebar.container_id,
                &sidebar.collapsed_class,
                state.is_collapsed(),
            )
        {
            return false;
        }
        self.commit_sidebar(state);
        true
    }

    /// Show the control for switching away from `mode`.
    pub fn update_theme_icon(&self, mode: ThemeMode) {
        let label = mode.control_label();
        let id = &self.config.theme.control_id;
        if !self.document.set_control_label(id, label.glyph, label.title) {
            tracing::trace!(%id, "no theme control on this page");
        }
    }

    /// Show the control for switching away from `state`.
    pub fn update_sidebar_icon(&self, state: SidebarState) {
        let label = state.control_label();
        let id = &self.config.sidebar.control_id;
        if !self.document.set_control_label(id, label.glyph, label.title) {
            tracing::trace!(%id, "no sidebar control on this page");
        }
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            theme: self.theme,
            sidebar: self.sidebar,
        }
    }

    fn commit_sidebar(&mut self, state: SidebarState) {
        self.persist(&self.config.sidebar.storage_key, state.as_stored());
        self.update_sidebar_icon(state);

        let previous = std::mem::replace(&mut self.sidebar, state);
        if previous != state {
            self.publisher.publish(&PreferenceChanged::Sidebar(state));
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store.get(key).unwrap_or_else(|err| {
            tracing::warn!(key, error = %err, "failed to read preference, using default");
            None
        })
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!(key, value, error = %err, "failed to persist preference");
        }
    }
}
