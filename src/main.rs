//! Click Demo - Main Entry Point

use click_demo::app::application::run_app;
use click_demo::state::settings_state::SettingsState;
use tracing::{info, warn};

fn main() {
    let (settings, load_error) = SettingsState::load();

    // Held until exit so the file writer flushes
    let _log_guard = click_demo::logging::init(&settings.settings.log);

    let startup_warning = load_error.map(|e| {
        warn!(error = %e, "Failed to load settings, using defaults");
        e.to_string()
    });

    info!(path = ?settings.path, "Starting click-demo...");

    run_app(settings, startup_warning);
}
