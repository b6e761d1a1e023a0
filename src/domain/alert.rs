//! Alert - Notification Requests

use serde::{Deserialize, Serialize};

/// Severity of an alert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertLevel {
    #[default]
    Info,
    /// Something the user should act on, e.g. unreadable settings
    Warning,
}

/// A request to show a notification to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    /// Identifier assigned by the alert queue (0 until queued)
    pub id: u64,
    pub level: AlertLevel,
    pub message: String,
}

impl AlertRequest {
    /// Create an informational alert
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            id: 0,
            level: AlertLevel::Info,
            message: message.into(),
        }
    }

    /// Create a warning alert
    pub fn warning(message: impl Into<String>) -> Self {
        Self::info(message).level(AlertLevel::Warning)
    }

    /// Set the alert level
    pub fn level(mut self, level: AlertLevel) -> Self {
        self.level = level;
        self
    }
}

/// How alerts are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPresenter {
    /// Platform dialog owned by the OS
    #[default]
    Native,
    /// Modal drawn inside the main window
    Overlay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_alert_defaults() {
        let alert = AlertRequest::info("You clicked me!");
        assert_eq!(alert.id, 0);
        assert_eq!(alert.level, AlertLevel::Info);
        assert_eq!(alert.message, "You clicked me!");
    }

    #[test]
    fn warning_alert_keeps_message() {
        let alert = AlertRequest::warning("settings unreadable");
        assert_eq!(alert.level, AlertLevel::Warning);
        assert_eq!(alert.message, "settings unreadable");
    }

    #[test]
    fn presenter_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            presenter: AlertPresenter,
        }

        let text = toml::to_string(&Wrapper {
            presenter: AlertPresenter::Overlay,
        })
        .expect("serialize");
        assert_eq!(text.trim(), r#"presenter = "overlay""#);

        let parsed: Wrapper = toml::from_str(r#"presenter = "native""#).expect("parse");
        assert_eq!(parsed.presenter, AlertPresenter::Native);
    }
}
