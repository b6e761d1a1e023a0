//! Header Component
//!
//! The application header with title and language switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::tr;
use crate::theme::colors::AppColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        // The switcher shows the language it switches to
        let lang_label = locale.toggled().display_name();

        let entities = self.entities.clone();

        div()
            .h(px(44.0))
            .w_full()
            .bg(AppColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .text_color(AppColors::text_header())
                    .text_size(px(16.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(tr(locale, "app.title")),
            )
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(AppColors::header_control_bg())
                    .text_color(AppColors::text_header())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(AppColors::header_control_hover()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        entities.toggle_locale(cx);
                    })
                    .child(lang_label),
            )
    }
}
