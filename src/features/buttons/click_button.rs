//! Click Button
//!
//! Shows an alert every time it is clicked.

use gpui::{App, ElementId, IntoElement, RenderOnce, Window};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::alert::AlertRequest;
use crate::features::buttons::controller::AlertController;
use crate::i18n::{tr, Locale};

/// Stateless button that raises "You clicked me!"
#[derive(IntoElement)]
pub struct ClickButton {
    id: ElementId,
    locale: Locale,
}

impl ClickButton {
    pub fn new(id: impl Into<ElementId>, locale: Locale) -> Self {
        Self {
            id: id.into(),
            locale,
        }
    }
}

impl RenderOnce for ClickButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let message = tr(self.locale, "click_button.message");

        Button::primary(self.id, tr(self.locale, "click_button.label"))
            .size(ButtonSize::Large)
            .on_click(move |_event, window, cx| {
                let blocked = cx
                    .try_global::<AppEntities>()
                    .is_some_and(|entities| entities.input_blocked(cx));
                if blocked {
                    debug!("Click button ignored while an alert is open");
                    return;
                }
                debug!("Click button pressed");
                AlertController::raise(AlertRequest::info(message.to_string()), window, cx);
            })
    }
}
