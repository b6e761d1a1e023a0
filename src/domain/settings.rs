//! Settings - Persisted Application Settings

use serde::{Deserialize, Serialize};

use crate::domain::alert::AlertPresenter;
use crate::error::Result;

/// Main application settings, stored as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppSettings {
    /// Locale code ("en", "zh-CN"); detected from the system when unset
    pub locale: Option<String>,
    /// Alert presentation
    pub alert: AlertSettings,
    /// Main window size
    pub window: WindowSettings,
    /// Logging options
    pub log: LogSettings,
}

impl AppSettings {
    /// Parse settings from TOML text. Blank text yields defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut settings: Self = toml::from_str(text)?;
        settings.window = settings.window.clamped();
        Ok(settings)
    }

    /// Serialize settings to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Alert settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AlertSettings {
    pub presenter: AlertPresenter,
}

/// Main window size in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl WindowSettings {
    pub const MIN_WIDTH: f32 = 240.0;
    pub const MIN_HEIGHT: f32 = 160.0;

    /// Raise each dimension to its minimum; NaN or infinity falls back to the default size
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        let fix = |value: f32, min: f32, default: f32| {
            if value.is_finite() { value.max(min) } else { default }
        };
        Self {
            width: fix(self.width, Self::MIN_WIDTH, defaults.width),
            height: fix(self.height, Self::MIN_HEIGHT, defaults.height),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 320.0,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive used when RUST_LOG is not set
    pub level: String,
    /// Also write a daily-rolling log file to the data directory
    pub file: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_gives_defaults() {
        let settings = AppSettings::from_toml_str("  \n").expect("parse");
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.window.width, 480.0);
        assert_eq!(settings.log.level, "info");
        assert_eq!(settings.alert.presenter, AlertPresenter::Native);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let text = r#"
locale = "zh-CN"

[alert]
presenter = "overlay"
"#;
        let settings = AppSettings::from_toml_str(text).expect("parse");
        assert_eq!(settings.locale.as_deref(), Some("zh-CN"));
        assert_eq!(settings.alert.presenter, AlertPresenter::Overlay);
        assert_eq!(settings.window, WindowSettings::default());
        assert!(!settings.log.file);
    }

    #[test]
    fn partial_section_keeps_other_fields() {
        let text = r#"
[window]
width = 800.0
"#;
        let settings = AppSettings::from_toml_str(text).expect("parse");
        assert_eq!(settings.window.width, 800.0);
        assert_eq!(settings.window.height, 320.0);
    }

    #[test]
    fn undersized_window_is_clamped() {
        let text = r#"
[window]
width = 0.0
height = -50.0
"#;
        let settings = AppSettings::from_toml_str(text).expect("parse");
        assert_eq!(settings.window.width, WindowSettings::MIN_WIDTH);
        assert_eq!(settings.window.height, WindowSettings::MIN_HEIGHT);
    }

    #[test]
    fn nan_window_size_uses_default() {
        let text = r#"
[window]
width = nan
"#;
        let settings = AppSettings::from_toml_str(text).expect("parse");
        assert_eq!(settings.window.width, WindowSettings::default().width);
    }

    #[test]
    fn invalid_presenter_is_an_error() {
        let text = r#"
[alert]
presenter = "popup"
"#;
        assert!(AppSettings::from_toml_str(text).is_err());
    }

    #[test]
    fn serialized_settings_parse_back() {
        let mut settings = AppSettings::default();
        settings.locale = Some("en".to_string());
        settings.log.file = true;

        let text = settings.to_toml_string().expect("serialize");
        let parsed = AppSettings::from_toml_str(&text).expect("parse");
        assert_eq!(parsed, settings);
    }
}
