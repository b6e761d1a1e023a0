//! Modal Component
//!
//! A modal dialog drawn over the window content.

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::AppColors;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    children: Vec<AnyElement>,
    on_close: Option<Box<dyn Fn(&mut App) + 'static>>,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            on_close: None,
        }
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set the close handler; also shows the close button
    pub fn on_close(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        // Backdrop; occluding keeps clicks from reaching the content beneath
        div()
            .absolute()
            .inset_0()
            .occlude()
            .bg(AppColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .bg(AppColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(280.0))
                    .max_w(px(420.0))
                    .flex()
                    .flex_col()
                    // Header
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(AppColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(16.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(AppColors::text_primary())
                                    .child(self.title),
                            )
                            .when_some(self.on_close, |el, handler| {
                                el.child(
                                    div()
                                        .id("modal-close")
                                        .size(px(24.0))
                                        .rounded_sm()
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .text_color(AppColors::text_muted())
                                        .text_size(px(16.0))
                                        .cursor_pointer()
                                        .hover(|s| s.bg(AppColors::close_hover()))
                                        .on_click(move |_event: &ClickEvent, _window, cx| {
                                            handler(cx);
                                        })
                                        .child("×"),
                                )
                            }),
                    )
                    // Content
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .children(self.children),
                    ),
            )
    }
}
