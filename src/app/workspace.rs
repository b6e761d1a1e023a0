//! Workspace - Main Shell with Layout
//!
//! Holds the header and the buttons page, and draws the overlay alert on top
//! when one is pending.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::layout::header::Header;
use crate::components::primitives::button::Button;
use crate::domain::alert::AlertRequest;
use crate::features::buttons::controller::AlertController;
use crate::features::buttons::page::ButtonsPage;
use crate::i18n::{tr, Locale};
use crate::theme::colors::AppColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    page: Entity<ButtonsPage>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let page = cx.new(|cx| ButtonsPage::new(entities.clone(), cx));

        // Observe overlay alerts
        cx.observe(&entities.alerts, |_this, _, cx| cx.notify())
            .detach();

        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            page,
        }
    }

    fn render_alert(&self, alert: AlertRequest, locale: Locale) -> impl IntoElement {
        Modal::new(tr(locale, "alert.title"))
            .on_close(AlertController::dismiss)
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(AppColors::text_primary())
                    .child(alert.message),
            )
            .child(
                div().flex().justify_end().child(
                    Button::primary("alert-ok", tr(locale, "alert.ok"))
                        .on_click(|_event, _window, cx| AlertController::dismiss(cx)),
                ),
            )
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let pending = self.entities.alerts.read(cx).current().cloned();

        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(AppColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .bg(AppColors::content_bg())
                    .child(self.page.clone()),
            )
            .when_some(pending, |el, alert| el.child(self.render_alert(alert, locale)))
    }
}
