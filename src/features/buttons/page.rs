//! Buttons Page
//!
//! Hosts one click button and one count button.

use gpui::{div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::features::buttons::click_button::ClickButton;
use crate::features::buttons::count_button::CountButton;

/// Buttons page component
pub struct ButtonsPage {
    entities: AppEntities,
    count_button: Entity<CountButton>,
}

impl ButtonsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        let count_button = cx.new(|cx| CountButton::new(entities.clone(), cx));

        Self {
            entities,
            count_button,
        }
    }
}

impl Render for ButtonsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .child(ClickButton::new("click-button", locale))
            .child(self.count_button.clone())
    }
}
