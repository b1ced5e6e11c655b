//! GlobalSearch Component
//!
//! The command-palette style search panel opened from the header. Owns the
//! settling timer for debounced lookups; all other transitions live in
//! [`SearchState`]. Rendered as an overlay: a translucent backdrop that
//! dismisses on click, with the panel layered above it.

use std::time::Duration;

use gpui::{
    Context, Entity, FocusHandle, Focusable, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Task, Window, div,
    prelude::*, px,
};

use crate::app::navigation::NavigationTarget;
use crate::components::primitives::text_input::{InputKey, classify_key};
use crate::constants::SEARCH_DEBOUNCE_MS;
use crate::state::search_state::{SearchCategory, SearchHit, SearchPhase, SearchState};
use crate::theme::colors::BeaconColors;

/// Global search overlay component
pub struct GlobalSearch {
    state: SearchState,
    focus_handle: FocusHandle,
    /// Settling timer for the in-flight lookup. Replacing it cancels the
    /// previous timer, so only the last keystroke's lookup ever fires.
    debounce: Option<Task<()>>,
    on_navigate: Option<Box<dyn Fn(NavigationTarget, &mut Context<Self>) + 'static>>,
}

impl GlobalSearch {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            state: SearchState::default(),
            focus_handle: cx.focus_handle(),
            debounce: None,
            on_navigate: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Set the navigation handler fired when a hit is chosen
    pub fn on_navigate(&mut self, handler: impl Fn(NavigationTarget, &mut Context<Self>) + 'static) {
        self.on_navigate = Some(Box::new(handler));
    }

    /// Replace the candidate index (called when page data changes)
    pub fn set_candidates(&mut self, candidates: Vec<SearchHit>) {
        self.state.set_candidates(candidates);
    }

    /// Open the panel and focus the query input
    pub fn open(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.state.open_panel();
        // A query left over from the last dismissal re-runs after the delay.
        if self.state.phase() == SearchPhase::Pending {
            let query = self.state.query().to_string();
            if let Some(generation) = self.state.begin_query(query) {
                self.schedule_lookup(generation, cx);
            }
        }
        window.focus(&self.focus_handle);
        cx.notify();
    }

    /// Close the panel, keeping the query and recents untouched
    pub fn dismiss(&mut self, cx: &mut Context<Self>) {
        self.debounce = None;
        self.state.dismiss();
        cx.notify();
    }

    fn update_query(&mut self, query: String, cx: &mut Context<Self>) {
        match self.state.begin_query(query) {
            Some(generation) => self.schedule_lookup(generation, cx),
            // Empty query: results were cleared immediately, no timer.
            None => self.debounce = None,
        }
        cx.notify();
    }

    fn schedule_lookup(&mut self, generation: u64, cx: &mut Context<Self>) {
        self.debounce = Some(cx.spawn(async move |this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(SEARCH_DEBOUNCE_MS))
                .await;
            let _ = this.update(cx, |this, cx| {
                // Stale tokens are discarded inside complete().
                if this.state.complete(generation) {
                    cx.notify();
                }
            });
        }));
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        self.debounce = None;
        self.state.submit();
        cx.notify();
    }

    fn choose(&mut self, hit: &SearchHit, cx: &mut Context<Self>) {
        let target = self.state.choose(hit);
        self.debounce = None;
        if let Some(handler) = self.on_navigate.take() {
            handler(target, cx);
            self.on_navigate = Some(handler);
        }
        cx.notify();
    }

    /// Replay a recent query: fill the input and run it immediately
    fn replay_recent(&mut self, query: String, cx: &mut Context<Self>) {
        self.debounce = None;
        self.state.begin_query(query);
        self.state.submit();
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        match classify_key(event) {
            InputKey::Char(ch) => {
                let mut query = self.state.query().to_string();
                query.push(ch);
                self.update_query(query, cx);
            }
            InputKey::Backspace => {
                let mut query = self.state.query().to_string();
                if query.pop().is_some() {
                    self.update_query(query, cx);
                }
            }
            InputKey::Enter => self.submit(cx),
            InputKey::Escape => self.dismiss(cx),
            InputKey::Other => {}
        }
    }

    fn render_input(&self, window: &Window) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let (text, text_color) = if self.state.query().is_empty() {
            (
                SharedString::from("Search creators, campaigns, payments..."),
                BeaconColors::input_placeholder(),
            )
        } else {
            (
                SharedString::from(self.state.query().to_string()),
                BeaconColors::text_primary(),
            )
        };

        div()
            .w_full()
            .px_4()
            .py_3()
            .border_b_1()
            .border_color(if is_focused {
                BeaconColors::border_focus()
            } else {
                BeaconColors::border()
            })
            .flex()
            .items_center()
            .gap_2()
            .child(div().text_color(BeaconColors::text_muted()).child("⌕"))
            .child(div().text_sm().text_color(text_color).child(text))
    }

    fn render_recents(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut section = div().flex().flex_col().py_2();

        if self.state.recents().is_empty() {
            return section.child(
                div()
                    .px_4()
                    .py_6()
                    .text_sm()
                    .text_color(BeaconColors::text_muted())
                    .child("Type to search across pages, creators, campaigns and payments"),
            );
        }

        section = section.child(
            div()
                .px_4()
                .py_1()
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .text_xs()
                        .text_color(BeaconColors::text_muted())
                        .child("Recent searches"),
                )
                .child(
                    div()
                        .id("clear-recents")
                        .text_xs()
                        .text_color(BeaconColors::accent())
                        .cursor_pointer()
                        .on_click(cx.listener(|this, _event, _window, cx| {
                            cx.stop_propagation();
                            this.state.clear_recents();
                            cx.notify();
                        }))
                        .child("Clear"),
                ),
        );

        for (index, recent) in self.state.recents().entries().iter().enumerate() {
            let query = recent.clone();
            section = section.child(
                div()
                    .id(("recent", index))
                    .px_4()
                    .py_2()
                    .flex()
                    .items_center()
                    .gap_2()
                    .cursor_pointer()
                    .hover(|s| s.bg(BeaconColors::table_row_hover()))
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        cx.stop_propagation();
                        this.replay_recent(query.clone(), cx);
                    }))
                    .child(div().text_color(BeaconColors::text_muted()).child("↻"))
                    .child(
                        div()
                            .text_sm()
                            .text_color(BeaconColors::text_primary())
                            .child(recent.clone()),
                    ),
            );
        }

        section
    }

    fn render_results(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut list = div().flex().flex_col().py_1();

        if self.state.phase() == SearchPhase::Pending {
            return list.child(
                div()
                    .px_4()
                    .py_6()
                    .text_sm()
                    .text_color(BeaconColors::text_muted())
                    .child("Searching..."),
            );
        }

        if self.state.results().is_empty() {
            return list.child(
                div()
                    .px_4()
                    .py_6()
                    .text_sm()
                    .text_color(BeaconColors::text_muted())
                    .child(format!("No results for \"{}\"", self.state.query())),
            );
        }

        let categories = [
            SearchCategory::Page,
            SearchCategory::Creator,
            SearchCategory::Campaign,
            SearchCategory::Payment,
        ];
        let mut index = 0usize;
        for category in categories {
            let hits: Vec<SearchHit> = self
                .state
                .results()
                .iter()
                .filter(|hit| hit.category == category)
                .cloned()
                .collect();
            if hits.is_empty() {
                continue;
            }
            list = list.child(
                div()
                    .px_4()
                    .pt_2()
                    .pb_1()
                    .text_xs()
                    .text_color(BeaconColors::text_muted())
                    .child(category.label()),
            );
            for hit in hits {
                let chosen = hit.clone();
                list = list.child(
                    div()
                        .id(("hit", index))
                        .px_4()
                        .py_2()
                        .flex()
                        .items_center()
                        .gap_3()
                        .cursor_pointer()
                        .hover(|s| s.bg(BeaconColors::table_row_hover()))
                        .on_click(cx.listener(move |this, _event, _window, cx| {
                            cx.stop_propagation();
                            this.choose(&chosen, cx);
                        }))
                        .child(div().text_color(BeaconColors::accent()).child(hit.icon))
                        .child(
                            div()
                                .flex()
                                .flex_col()
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(BeaconColors::text_primary())
                                        .child(hit.title.clone()),
                                )
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(BeaconColors::text_secondary())
                                        .child(hit.subtitle.clone()),
                                ),
                        ),
                );
                index += 1;
            }
        }

        list
    }
}

impl Focusable for GlobalSearch {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for GlobalSearch {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !self.state.is_open() {
            return div().into_any_element();
        }

        let body = if self.state.query().trim().is_empty() {
            self.render_recents(cx).into_any_element()
        } else {
            self.render_results(cx).into_any_element()
        };

        // Backdrop closes without touching query or recents; the panel sits
        // above it and swallows its own clicks.
        div()
            .id("search-backdrop")
            .absolute()
            .inset_0()
            .bg(BeaconColors::backdrop())
            .flex()
            .justify_center()
            .on_click(cx.listener(|this, _event, _window, cx| {
                this.dismiss(cx);
            }))
            .child(
                div()
                    .id("search-panel")
                    .track_focus(&self.focus_handle)
                    .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                        this.handle_key(event, cx);
                    }))
                    .on_click(|_event, _window, cx| {
                        cx.stop_propagation();
                    })
                    .mt(px(96.0))
                    .w(px(560.0))
                    .max_h(px(480.0))
                    .bg(BeaconColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.render_input(window))
                    .child(div().id("search-body").overflow_y_scroll().child(body)),
            )
            .into_any_element()
    }
}

/// Helper to create the global search entity
pub fn global_search<V: 'static>(
    on_navigate: impl Fn(NavigationTarget, &mut Context<GlobalSearch>) + 'static,
    cx: &mut Context<V>,
) -> Entity<GlobalSearch> {
    cx.new(|cx| {
        let mut search = GlobalSearch::new(cx);
        search.on_navigate(on_navigate);
        search
    })
}
