//! Controller configuration — storage keys, element ids, and defaults.
//!
//! Every field has a default matching the stock dashboard markup, so an
//! empty document (`{}` or an empty TOML file) is a valid configuration.

use serde::Deserialize;
use uiprefs_domain::theme::ThemeMode;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Theme preference settings.
    pub theme: ThemeConfig,
    /// Sidebar preference settings.
    pub sidebar: SidebarConfig,
}

/// Where the theme is stored and how it is shown.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key holding `dark` or `light`.
    pub storage_key: String,
    /// Root element attribute consumed by the stylesheet.
    pub attribute: String,
    /// Id of the theme toggle button.
    pub control_id: String,
    /// Mode used when nothing valid is stored.
    pub default: ThemeMode,
}

/// Where the sidebar state is stored and which elements reflect it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Pages without a sidebar turn this off.
    pub enabled: bool,
    /// Storage key holding `"true"` or `"false"`.
    pub storage_key: String,
    /// Id of the dashboard container carrying the collapsed class.
    pub container_id: String,
    /// Class whose presence means collapsed.
    pub collapsed_class: String,
    /// Id of the sidebar toggle button.
    pub control_id: String,
}

impl ControllerConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input or
    /// [`ConfigError::Validation`] when a field is unusable.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed input or
    /// [`ConfigError::Validation`] when a field is unusable.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every key and id is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("theme.storage_key", &self.theme.storage_key),
            ("theme.attribute", &self.theme.attribute),
            ("theme.control_id", &self.theme.control_id),
            ("sidebar.storage_key", &self.sidebar.storage_key),
            ("sidebar.container_id", &self.sidebar.container_id),
            ("sidebar.collapsed_class", &self.sidebar.collapsed_class),
            ("sidebar.control_id", &self.sidebar.control_id),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Validation(format!("{name} must not be empty")));
        }
        // Attribute names and class tokens cannot contain whitespace.
        let tokens = [
            ("theme.attribute", &self.theme.attribute),
            ("sidebar.collapsed_class", &self.sidebar.collapsed_class),
        ];
        if let Some((name, _)) = tokens
            .iter()
            .find(|(_, value)| value.contains(|c: char| c.is_ascii_whitespace()))
        {
            return Err(ConfigError::Validation(format!(
                "{name} must be a single token"
            )));
        }
        if self.theme.storage_key == self.sidebar.storage_key {
            return Err(ConfigError::Validation(
                "theme and sidebar must use different storage keys".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
            control_id: "themeToggle".to_string(),
            default: ThemeMode::Dark,
        }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            storage_key: "sidebarCollapsed".to_string(),
            container_id: "dashboard".to_string(),
            collapsed_class: "sidebar-collapsed".to_string(),
            control_id: "sidebarToggle".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse JSON configuration")]
    Json(#[from] serde_json::Error),
    /// TOML parse failure.
    #[error("failed to parse TOML configuration")]
    Toml(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl From<ConfigError> for uiprefs_domain::error::PrefsError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.attribute, "data-theme");
        assert_eq!(config.theme.control_id, "themeToggle");
        assert_eq!(config.theme.default, ThemeMode::Dark);
        assert!(config.sidebar.enabled);
        assert_eq!(config.sidebar.storage_key, "sidebarCollapsed");
        assert_eq!(config.sidebar.container_id, "dashboard");
        assert_eq!(config.sidebar.collapsed_class, "sidebar-collapsed");
        assert_eq!(config.sidebar.control_id, "sidebarToggle");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_empty_json() {
        let config = ControllerConfig::from_json("{}").unwrap();
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn should_parse_partial_json_with_defaults() {
        let config =
            ControllerConfig::from_json(r#"{"theme": {"default": "light"}, "sidebar": {"enabled": false}}"#)
                .unwrap();
        assert_eq!(config.theme.default, ThemeMode::Light);
        assert_eq!(config.theme.attribute, "data-theme");
        assert!(!config.sidebar.enabled);
        assert_eq!(config.sidebar.storage_key, "sidebarCollapsed");
    }

    #[test]
    fn should_parse_empty_toml() {
        let config = ControllerConfig::from_toml("").unwrap();
        assert_eq!(config.sidebar.container_id, "dashboard");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [theme]
            storage_key = 'app-theme'
            attribute = 'data-mode'
            control_id = 'modeButton'
            default = 'light'

            [sidebar]
            enabled = true
            storage_key = 'app-sidebar'
            container_id = 'layout'
            collapsed_class = 'collapsed'
            control_id = 'menuButton'
        ";
        let config = ControllerConfig::from_toml(toml).unwrap();
        assert_eq!(config.theme.storage_key, "app-theme");
        assert_eq!(config.theme.attribute, "data-mode");
        assert_eq!(config.theme.control_id, "modeButton");
        assert_eq!(config.theme.default, ThemeMode::Light);
        assert_eq!(config.sidebar.storage_key, "app-sidebar");
        assert_eq!(config.sidebar.container_id, "layout");
        assert_eq!(config.sidebar.collapsed_class, "collapsed");
        assert_eq!(config.sidebar.control_id, "menuButton");
    }

    #[test]
    fn should_reject_unknown_default_theme() {
        let result = ControllerConfig::from_json(r#"{"theme": {"default": "sepia"}}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result = ControllerConfig::from_toml("invalid {{{");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn should_reject_empty_field() {
        let mut config = ControllerConfig::default();
        config.sidebar.collapsed_class = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: sidebar.collapsed_class must not be empty"
        );
    }

    #[test]
    fn should_reject_class_and_attribute_with_whitespace() {
        let result = ControllerConfig::from_toml(
            "
            [sidebar]
            collapsed_class = 'sidebar collapsed'
            ",
        );
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let err = ControllerConfig::from_json(r#"{"theme": {"attribute": "data theme"}}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: theme.attribute must be a single token"
        );
    }

    #[test]
    fn should_reject_shared_storage_key() {
        let mut config = ControllerConfig::default();
        config.sidebar.storage_key = "theme".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_convert_into_prefs_error() {
        let err: uiprefs_domain::error::PrefsError =
            ConfigError::Validation("bad".to_string()).into();
        assert!(matches!(err, uiprefs_domain::error::PrefsError::Config(_)));
    }
}
