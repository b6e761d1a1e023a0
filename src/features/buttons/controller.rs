//! Alert Controller
//!
//! Routes alerts to the presenter chosen in settings.

use gpui::{App, PromptLevel, Window};
use tracing::{debug, warn};

use crate::app::entities::AppEntities;
use crate::domain::alert::{AlertLevel, AlertPresenter, AlertRequest};
use crate::i18n::tr;

/// Alert controller
pub struct AlertController;

impl AlertController {
    /// Show an alert using the configured presenter
    pub fn raise(alert: AlertRequest, window: &mut Window, cx: &mut App) {
        let Some(entities) = cx.try_global::<AppEntities>().cloned() else {
            warn!(message = %alert.message, "Alert raised before app entities were initialized");
            return;
        };

        match entities.settings.read(cx).alert_presenter() {
            AlertPresenter::Native => Self::show_native(alert, &entities, window, cx),
            AlertPresenter::Overlay => {
                entities.alerts.update(cx, |alerts, cx| {
                    let id = alerts.push(alert);
                    debug!(id, pending = alerts.len(), "Queued overlay alert");
                    cx.notify();
                });
            }
        }
    }

    /// Dismiss the overlay alert on screen
    pub fn dismiss(cx: &mut App) {
        let Some(entities) = cx.try_global::<AppEntities>().cloned() else {
            return;
        };

        entities.alerts.update(cx, |alerts, cx| {
            if let Some(alert) = alerts.dismiss() {
                debug!(id = alert.id, "Dismissed overlay alert");
                cx.notify();
            }
        });
    }

    fn show_native(alert: AlertRequest, entities: &AppEntities, window: &mut Window, cx: &mut App) {
        let locale = entities.i18n.read(cx).locale;
        let ok = tr(locale, "alert.ok");

        let answer = window.prompt(
            prompt_level(alert.level),
            &alert.message,
            None,
            &[ok.as_str()],
            cx,
        );

        cx.spawn(async move |_cx| {
            if answer.await.is_ok() {
                debug!("Native alert dismissed");
            }
        })
        .detach();
    }
}

fn prompt_level(level: AlertLevel) -> PromptLevel {
    match level {
        AlertLevel::Info => PromptLevel::Info,
        AlertLevel::Warning => PromptLevel::Warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_alert_levels_to_prompt_levels() {
        assert!(matches!(prompt_level(AlertLevel::Info), PromptLevel::Info));
        assert!(matches!(prompt_level(AlertLevel::Warning), PromptLevel::Warning));
    }
}
