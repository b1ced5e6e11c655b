//! PageNavigator Component
//!
//! Pagination controls under each data table: item range, prev/next, a
//! sliding window of page buttons, and direct "go to page" entry with
//! inline validation. Hidden entirely while everything fits on one page.

use gpui::{
    Context, Entity, FocusHandle, Focusable, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::*, px,
};

use crate::components::primitives::text_input::{InputKey, classify_key};
use crate::helpers::paging::{self, PageEntry};
use crate::theme::colors::BeaconColors;

/// Pagination component driving page changes for a data table
pub struct PageNavigator {
    current_page: usize,
    total_items: usize,
    items_per_page: usize,
    loading: bool,
    entry: PageEntry,
    entry_focus: FocusHandle,
    on_page_change: Option<Box<dyn Fn(usize, &mut Context<Self>) + 'static>>,
}

impl PageNavigator {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            current_page: 1,
            total_items: 0,
            items_per_page: crate::constants::DEFAULT_PAGE_SIZE,
            loading: false,
            entry: PageEntry::default(),
            entry_focus: cx.focus_handle(),
            on_page_change: None,
        }
    }

    /// Update the paging figures after a load completes
    pub fn set_paging(&mut self, current_page: usize, total_items: usize, items_per_page: usize) {
        self.current_page = current_page;
        self.total_items = total_items;
        self.items_per_page = items_per_page;
        self.entry.reset();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        paging::total_pages(self.total_items, self.items_per_page)
    }

    /// Set the page-change handler
    pub fn on_page_change(&mut self, handler: impl Fn(usize, &mut Context<Self>) + 'static) {
        self.on_page_change = Some(Box::new(handler));
    }

    fn request_page(&mut self, target: usize, cx: &mut Context<Self>) {
        // Only out-of-range targets and in-flight loads suppress the
        // callback; re-requesting the displayed page goes through as a
        // reload.
        if !paging::can_change_page(target, self.total_pages(), self.loading) {
            return;
        }
        // A committed change clears the typed entry and its error.
        self.entry.reset();
        if let Some(handler) = self.on_page_change.take() {
            handler(target, cx);
            self.on_page_change = Some(handler);
        }
        cx.notify();
    }

    fn submit_entry(&mut self, cx: &mut Context<Self>) {
        let total_pages = self.total_pages();
        if let Some(page) = self.entry.submit(total_pages) {
            self.entry.reset();
            self.request_page(page, cx);
        }
        cx.notify();
    }

    fn handle_entry_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        match classify_key(event) {
            InputKey::Char(ch) => {
                self.entry.push_char(ch);
                cx.notify();
            }
            InputKey::Backspace => {
                self.entry.backspace();
                cx.notify();
            }
            InputKey::Enter => self.submit_entry(cx),
            InputKey::Escape => {
                self.entry.reset();
                cx.notify();
            }
            InputKey::Other => {}
        }
    }

    fn nav_button(
        &self,
        id: &'static str,
        label: &'static str,
        target: usize,
        enabled: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let mut button = div()
            .id(id)
            .px_3()
            .py_1()
            .rounded_md()
            .border_1()
            .border_color(BeaconColors::border())
            .text_sm()
            .child(label);

        if enabled {
            button = button
                .cursor_pointer()
                .text_color(BeaconColors::text_primary())
                .hover(|s| s.bg(BeaconColors::table_row_hover()))
                .on_click(cx.listener(move |this, _event, _window, cx| {
                    this.request_page(target, cx);
                }));
        } else {
            button = button.text_color(BeaconColors::text_muted()).opacity(0.5);
        }

        button
    }

    fn page_button(&self, page: usize, cx: &mut Context<Self>) -> impl IntoElement {
        let is_current = page == self.current_page;
        let mut button = div()
            .id(("page", page))
            .w(px(32.0))
            .h(px(28.0))
            .flex()
            .items_center()
            .justify_center()
            .rounded_md()
            .text_sm()
            .child(page.to_string());

        if is_current {
            button = button
                .bg(BeaconColors::accent())
                .text_color(BeaconColors::text_light());
        } else {
            button = button
                .cursor_pointer()
                .text_color(BeaconColors::text_primary())
                .hover(|s| s.bg(BeaconColors::table_row_hover()))
                .on_click(cx.listener(move |this, _event, _window, cx| {
                    this.request_page(page, cx);
                }));
        }

        button
    }

    fn render_entry(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.entry_focus.is_focused(window);
        let border_color = if self.entry.error().is_some() {
            BeaconColors::danger()
        } else if is_focused {
            BeaconColors::border_focus()
        } else {
            BeaconColors::input_border()
        };
        let (text, text_color) = if self.entry.raw().is_empty() {
            (
                SharedString::from("Page"),
                BeaconColors::input_placeholder(),
            )
        } else {
            (
                SharedString::from(self.entry.raw().to_string()),
                BeaconColors::text_primary(),
            )
        };
        let focus_handle = self.entry_focus.clone();

        let mut entry = div().flex().items_center().gap_2().child(
            div()
                .id("page-entry")
                .track_focus(&self.entry_focus)
                .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                    this.handle_entry_key(event, cx);
                }))
                .on_click(move |_event, window, _cx| {
                    window.focus(&focus_handle);
                })
                .w(px(64.0))
                .px_2()
                .py_1()
                .bg(BeaconColors::input_bg())
                .border_1()
                .border_color(border_color)
                .rounded_md()
                .text_sm()
                .text_color(text_color)
                .child(text),
        );

        entry = entry.child(
            div()
                .id("page-entry-go")
                .px_2()
                .py_1()
                .rounded_md()
                .text_sm()
                .text_color(BeaconColors::accent())
                .cursor_pointer()
                .hover(|s| s.bg(BeaconColors::table_row_hover()))
                .on_click(cx.listener(|this, _event, _window, cx| {
                    this.submit_entry(cx);
                }))
                .child("Go"),
        );

        if let Some(error) = self.entry.error() {
            entry = entry.child(
                div()
                    .text_sm()
                    .text_color(BeaconColors::danger())
                    .child(error.to_string()),
            );
        }

        entry
    }
}

impl Focusable for PageNavigator {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.entry_focus.clone()
    }
}

impl Render for PageNavigator {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let total_pages = self.total_pages();
        if total_pages <= 1 {
            return div();
        }

        let (start, end) = paging::item_range(self.current_page, self.items_per_page, self.total_items);
        let prev_enabled = !self.loading && self.current_page > 1;
        let next_enabled = !self.loading && self.current_page < total_pages;

        let pages: Vec<_> = paging::page_window(self.current_page, total_pages)
            .into_iter()
            .map(|page| self.page_button(page, cx).into_any_element())
            .collect();

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .py_2()
            .child(
                div()
                    .text_sm()
                    .text_color(BeaconColors::text_secondary())
                    .child(format!("{start}-{end} of {}", self.total_items)),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(self.nav_button(
                        "page-prev",
                        "Prev",
                        self.current_page.saturating_sub(1),
                        prev_enabled,
                        cx,
                    ))
                    .children(pages)
                    .child(self.nav_button(
                        "page-next",
                        "Next",
                        self.current_page + 1,
                        next_enabled,
                        cx,
                    )),
            )
            .child(self.render_entry(window, cx))
    }
}

/// Helper to create a PageNavigator entity
pub fn page_navigator<V: 'static>(
    on_page_change: impl Fn(usize, &mut Context<PageNavigator>) + 'static,
    cx: &mut Context<V>,
) -> Entity<PageNavigator> {
    cx.new(|cx| {
        let mut nav = PageNavigator::new(cx);
        nav.on_page_change(on_page_change);
        nav
    })
}
