//! SettingsStore - Local Settings Storage
//!
//! Platform-specific locations:
//! - **Linux**: `~/.config/click-demo/` or `$XDG_CONFIG_HOME/click-demo/`
//! - **macOS**: `~/Library/Application Support/dev.click-demo.click-demo/`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\click-demo\click-demo\config\`

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::domain::settings::AppSettings;
use crate::error::{Error, Result};

const SETTINGS_FILE: &str = "click-demo.toml";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "click-demo", "click-demo").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory (log files)
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();
    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }
    Ok(data_dir.to_path_buf())
}

/// Path of the settings file
pub fn settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE))
}

/// Load settings from a file. A missing file yields defaults.
pub fn load_from(path: &Path) -> Result<AppSettings> {
    if !path.exists() {
        debug!(path = ?path, "Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    info!(path = ?path, "Loading settings file");
    let text = fs::read_to_string(path)?;
    AppSettings::from_toml_str(&text)
}

/// Save settings to a file, creating parent directories as needed.
///
/// The text goes to a sibling temp file that is then renamed over `path`,
/// so readers see either the old or the new file, never a mix.
pub fn save_to(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, settings.to_toml_string()?)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::AlertPresenter;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("click-demo-test-{}-{name}", std::process::id()))
            .join(SETTINGS_FILE)
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = temp_path("missing");
        let settings = load_from(&path).expect("load");
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("save");
        let mut settings = AppSettings::default();
        settings.locale = Some("zh-CN".to_string());
        settings.alert.presenter = AlertPresenter::Overlay;

        save_to(&path, &settings).expect("save");
        let loaded = load_from(&path).expect("load");
        assert_eq!(loaded, settings);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn shorter_save_replaces_longer_one() {
        let path = temp_path("overwrite");

        let mut settings = AppSettings::default();
        settings.locale = Some("zh-CN".to_string());
        save_to(&path, &settings).expect("first save");

        settings.locale = Some("en".to_string());
        save_to(&path, &settings).expect("second save");

        let loaded = load_from(&path).expect("load");
        assert_eq!(loaded.locale.as_deref(), Some("en"));
        assert!(!path.with_extension("toml.tmp").exists());

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).expect("mkdir");
        }
        fs::write(&path, "locale = [").expect("write");

        let result = load_from(&path);
        assert!(matches!(result, Err(Error::TomlDe { .. })));

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
