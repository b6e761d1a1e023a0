//! Count Button
//!
//! Counts its own clicks. The count lives in the view, so every instance
//! starts at zero and never shares state with another.

use gpui::{ClickEvent, Context, IntoElement, Render, Window};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::domain::counter::ClickCounter;
use crate::i18n::count_label;

/// Button labelled "Clicked {count} times"
pub struct CountButton {
    entities: AppEntities,
    counter: ClickCounter,
}

impl CountButton {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            counter: ClickCounter::new(),
        }
    }

    /// Clicks since this button was created
    pub fn count(&self) -> u64 {
        self.counter.count()
    }

    fn record_click(&mut self, cx: &mut Context<Self>) {
        if self.entities.input_blocked(cx) {
            debug!("Count button click ignored while an alert is open");
            return;
        }
        let count = self.counter.increment();
        debug!(count, "Count button clicked");
        cx.notify();
    }
}

impl Render for CountButton {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        Button::new("count-button", count_label(locale, self.count()))
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Large)
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.record_click(cx);
            }))
    }
}
