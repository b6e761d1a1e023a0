//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.

use gpui::{App, AppContext, Entity, Global};
use tracing::info;

use crate::i18n::Locale;
use crate::state::alert_state::AlertState;
use crate::state::i18n_state::I18nState;
use crate::state::settings_state::{update_settings_and_save, SettingsState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Persisted settings
    pub settings: Entity<SettingsState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Pending overlay alerts
    pub alerts: Entity<AlertState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded settings
    pub fn init(settings: SettingsState, cx: &mut App) -> Self {
        let locale = settings.locale();
        Self {
            settings: cx.new(|_| settings),
            i18n: cx.new(|_| I18nState::new(locale)),
            alerts: cx.new(|_| AlertState::default()),
        }
    }

    /// True while an overlay alert is open
    pub fn input_blocked(&self, cx: &App) -> bool {
        self.alerts.read(cx).blocks_input()
    }

    /// Switch to the other locale and persist the choice
    pub fn toggle_locale(&self, cx: &mut App) -> Locale {
        let locale = self.i18n.update(cx, |i18n, cx| {
            let locale = i18n.toggle_locale();
            cx.notify();
            locale
        });

        update_settings_and_save(&self.settings, cx, "toggle_locale", move |state| {
            state.set_locale(locale);
        });

        info!(locale = locale.code(), "Locale changed");
        locale
    }
}
