//! Change records emitted when a preference takes a new value.

use serde::{Deserialize, Serialize};

use crate::sidebar::SidebarState;
use crate::theme::ThemeMode;

/// A preference changed to the carried value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PreferenceChanged {
    Theme(ThemeMode),
    Sidebar(SidebarState),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_theme_change_as_tagged_json() {
        let json = serde_json::to_value(PreferenceChanged::Theme(ThemeMode::Light)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "theme", "value": "light"}));
    }

    #[test]
    fn should_serialize_sidebar_change_as_tagged_json() {
        let json =
            serde_json::to_value(PreferenceChanged::Sidebar(SidebarState::Collapsed)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "sidebar", "value": "collapsed"})
        );
    }
}
