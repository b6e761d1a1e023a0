//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use tracing::error;

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::alert::AlertRequest;
use crate::features::buttons::controller::AlertController;
use crate::i18n::{settings_load_failed, tr};
use crate::state::settings_state::SettingsState;

actions!(click_demo, [Quit, ToggleLocale]);

/// Run the application. `startup_warning` is shown as a warning alert once
/// the main window is open.
pub fn run_app(settings: SettingsState, startup_warning: Option<String>) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.on_action(|_: &ToggleLocale, cx: &mut App| {
            if let Some(entities) = cx.try_global::<AppEntities>().cloned() {
                entities.toggle_locale(cx);
            }
        });
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
            KeyBinding::new("cmd-l", ToggleLocale, None),
            KeyBinding::new("ctrl-l", ToggleLocale, None),
        ]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let window = settings.settings.window.clone();
        let locale = settings.locale();

        let entities = AppEntities::init(settings, cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(None, gpui::size(px(window.width), px(window.height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(tr(locale, "app.title")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });
        let handle = match opened {
            Ok(handle) => handle,
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
                return;
            }
        };

        if let Some(detail) = startup_warning {
            let message = settings_load_failed(locale, &detail);
            let shown = handle.update(cx, |_workspace, window, cx| {
                AlertController::raise(AlertRequest::warning(message.to_string()), window, cx);
            });
            if let Err(e) = shown {
                error!(error = %e, "Failed to show startup warning");
            }
        }

        cx.activate(true);
    });
}
