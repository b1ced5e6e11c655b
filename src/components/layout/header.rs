//! Header Component
//!
//! The application header with title, the active page name, and the
//! search trigger that opens the global search panel.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::theme::colors::BeaconColors;

/// Header component
pub struct Header {
    entities: AppEntities,
    on_search: Option<Box<dyn Fn(&mut Window, &mut Context<Self>) + 'static>>,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            on_search: None,
        }
    }

    /// Set the handler that opens the search panel
    pub fn on_search(&mut self, handler: impl Fn(&mut Window, &mut Context<Self>) + 'static) {
        self.on_search = Some(Box::new(handler));
    }

    fn open_search(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_search.take() {
            handler(window, cx);
            self.on_search = Some(handler);
        }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;

        div()
            .h(px(48.0))
            .w_full()
            .bg(BeaconColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .text_color(BeaconColors::text_light())
                            .text_size(px(15.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("Beacon Admin"),
                    )
                    .child(
                        div()
                            .text_color(gpui::rgba(0xffffff99))
                            .text_size(px(13.0))
                            .child(active_page.title()),
                    ),
            )
            .child(
                div()
                    .id("open-search")
                    .w(px(260.0))
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(gpui::rgba(0xffffff22))
                    .flex()
                    .items_center()
                    .gap_2()
                    .cursor_pointer()
                    .hover(|s| s.bg(gpui::rgba(0xffffff33)))
                    .on_click(cx.listener(|this, _event: &ClickEvent, window, cx| {
                        this.open_search(window, cx);
                    }))
                    .child(
                        div()
                            .text_color(gpui::rgba(0xffffff99))
                            .text_size(px(12.0))
                            .child("⌕"),
                    )
                    .child(
                        div()
                            .text_color(gpui::rgba(0xffffff99))
                            .text_size(px(12.0))
                            .child("Search..."),
                    ),
            )
    }
}
