//! SettingsState - Loaded Application Settings

use std::path::{Path, PathBuf};

use gpui::{App, Entity, Task};
use tracing::{debug, error, info};

use crate::domain::alert::AlertPresenter;
use crate::domain::settings::AppSettings;
use crate::error::Error;
use crate::i18n::Locale;
use crate::utils::settings_store::{load_from, save_to, settings_path};

/// Settings in effect plus where they are persisted
#[derive(Default)]
pub struct SettingsState {
    pub settings: AppSettings,
    /// None when the settings file is unusable; changes are then kept in memory only
    pub path: Option<PathBuf>,
    /// Most recent background save; each save waits for the previous one
    pending_save: Option<Task<()>>,
}

impl SettingsState {
    pub fn new(settings: AppSettings, path: Option<PathBuf>) -> Self {
        Self {
            settings,
            path,
            pending_save: None,
        }
    }

    /// Locale from settings, or the system locale when none is saved
    pub fn locale(&self) -> Locale {
        self.settings
            .locale
            .as_deref()
            .and_then(Locale::from_code)
            .unwrap_or_else(Locale::detect)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.settings.locale = Some(locale.code().to_string());
    }

    pub fn alert_presenter(&self) -> AlertPresenter {
        self.settings.alert.presenter
    }

    /// Load settings from the config directory.
    ///
    /// Never fails: on error the defaults are used and the error is handed
    /// back for logging once tracing is up.
    pub fn load() -> (Self, Option<Error>) {
        match settings_path() {
            Ok(path) => Self::load_at(&path),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load settings from `path`. A file that fails to parse is not written
    /// back, so the user's edits survive.
    pub fn load_at(path: &Path) -> (Self, Option<Error>) {
        match load_from(path) {
            Ok(settings) => (Self::new(settings, Some(path.to_path_buf())), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Where and what to write, or None when changes stay in memory
    fn save_snapshot(&self) -> Option<(PathBuf, AppSettings)> {
        let path = self.path.clone()?;
        Some((path, self.settings.clone()))
    }
}

// ==================== Persistence ====================

/// Update settings and save them to disk in the background.
///
/// Saves are chained: a new save runs only after the previous one finished,
/// so the file always ends up holding the latest settings.
pub fn update_settings_and_save<F>(
    entity: &Entity<SettingsState>,
    cx: &mut App,
    action_name: &'static str,
    mutation: F,
) where
    F: FnOnce(&mut SettingsState),
{
    let (snapshot, previous) = entity.update(cx, |state, cx| {
        mutation(state);
        cx.notify();
        (state.save_snapshot(), state.pending_save.take())
    });

    let Some((path, settings)) = snapshot else {
        debug!(action = action_name, "No settings path, keeping change in memory");
        return;
    };

    let task = cx.background_executor().spawn(async move {
        if let Some(previous) = previous {
            previous.await;
        }
        if let Err(e) = save_to(&path, &settings) {
            error!(error = %e, action = action_name, "Failed to save settings");
        } else {
            info!(action = action_name, "Settings saved");
        }
    });

    entity.update(cx, |state, _| state.pending_save = Some(task));
}
