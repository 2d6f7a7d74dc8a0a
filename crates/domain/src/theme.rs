//! Theme mode — the light/dark presentation preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::label::ControlLabel;

/// Colour scheme applied to the document root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The string written to storage and to the root attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Interpret a persisted value, falling back to `default` when the value
    /// is absent or not a known mode.
    #[must_use]
    pub fn from_stored(value: Option<&str>, default: Self) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    /// Interpret the root presentation attribute.
    ///
    /// Only an exact `dark` counts as dark; anything else, including a
    /// missing attribute, reads as light so that a toggle lands on dark.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        if value == Some(Self::Dark.as_str()) {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Sun while dark (switch to light), moon while light (switch to dark).
    #[must_use]
    pub const fn control_label(self) -> ControlLabel {
        match self {
            Self::Dark => ControlLabel {
                glyph: "\u{2600}\u{fe0f}",
                title: "Switch to Light Mode",
            },
            Self::Light => ControlLabel {
                glyph: "\u{1f319}",
                title: "Switch to Dark Mode",
            },
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseError::UnknownTheme(other.to_string())),
        }
    }
}
