//! Sidebar state — collapsed or expanded dashboard navigation.

use serde::{Deserialize, Serialize};

use crate::label::ControlLabel;

/// Whether the dashboard sidebar is collapsed.
///
/// Persisted as the strings `"true"` (collapsed) and `"false"` (expanded).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarState {
    Collapsed,
    #[default]
    Expanded,
}

impl SidebarState {
    #[must_use]
    pub const fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }

    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self::from_collapsed(!self.is_collapsed())
    }

    /// Only the exact string `"true"` means collapsed.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        Self::from_collapsed(value == Some("true"))
    }

    #[must_use]
    pub const fn as_stored(self) -> &'static str {
        if self.is_collapsed() { "true" } else { "false" }
    }

    /// Hamburger while collapsed, cross while expanded.
    #[must_use]
    pub const fn control_label(self) -> ControlLabel {
        match self {
            Self::Collapsed => ControlLabel {
                glyph: "\u{2630}",
                title: "Expand Sidebar",
            },
            Self::Expanded => ControlLabel {
                glyph: "\u{2715}",
                title: "Collapse Sidebar",
            },
        }
    }
}
