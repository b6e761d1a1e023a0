//! Logging - tracing subscriber setup
//!
//! Console output always; a daily-rolling file in the data directory when
//! enabled in settings. `RUST_LOG` overrides the configured level.

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::settings::LogSettings;
use crate::utils::settings_store::get_or_create_data_dir;

const LOG_FILE_PREFIX: &str = "click-demo.log";

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered file output is flushed.
pub fn init(settings: &LogSettings) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let mut deferred_error = None;
    let (file_layer, guard) = if settings.file {
        match get_or_create_data_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir.join("logs"), LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_ansi(false)
                    .with_timer(LocalTime::rfc_3339())
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                deferred_error = Some(e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = deferred_error {
        warn!(error = %e, "File logging disabled");
    }

    guard
}
