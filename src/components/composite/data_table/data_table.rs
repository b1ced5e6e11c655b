//! DataTable Component
//!
//! A scrolling table over the current page of rows. Paging is handled by
//! the page navigator next to it; the table only renders what it is given.

use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window, div,
    prelude::*, px,
};

use super::column::Column;
use crate::theme::colors::BeaconColors;

/// DataTable component
pub struct DataTable<R: Clone + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    /// Row id to highlight (e.g. after a search navigation)
    highlight_id: Option<String>,
    /// Extract the id of a row for highlight matching
    row_id: Option<Box<dyn Fn(&R) -> String + 'static>>,
    loading: bool,
    empty_message: SharedString,
}

impl<R: Clone + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            highlight_id: None,
            row_id: None,
            loading: false,
            empty_message: "No data".into(),
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Set the row-id extractor used for highlighting
    pub fn set_row_id(&mut self, f: impl Fn(&R) -> String + 'static) {
        self.row_id = Some(Box::new(f));
    }

    /// Set which row id to highlight, if any
    pub fn set_highlight(&mut self, id: Option<String>) {
        self.highlight_id = id;
    }

    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(40.0))
            .w_full()
            .flex()
            .items_center()
            .bg(BeaconColors::table_header_bg())
            .border_b_1()
            .border_color(BeaconColors::border())
            .children(self.columns.iter().map(|col| {
                div()
                    .w(px(col.width))
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(BeaconColors::text_secondary())
                    .child(col.label.clone())
            }))
    }

    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let highlighted = match (&self.highlight_id, &self.row_id) {
            (Some(id), Some(row_id)) => row_id(row) == *id,
            _ => false,
        };
        let bg = if highlighted {
            gpui::rgb(0xe0e7ff)
        } else if index % 2 == 0 {
            BeaconColors::content_bg()
        } else {
            BeaconColors::table_row_alt()
        };

        div()
            .h(px(36.0))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(BeaconColors::table_row_hover()))
            .border_b_1()
            .border_color(BeaconColors::border())
            .children(self.columns.iter().map(|col| {
                div()
                    .w(px(col.width))
                    .px_3()
                    .text_sm()
                    .text_color(BeaconColors::text_primary())
                    .overflow_hidden()
                    .child(col.render_cell(row))
            }))
    }

    fn render_placeholder(&self, message: SharedString) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .py_8()
            .text_color(BeaconColors::text_muted())
            .child(message)
    }
}

impl<R: Clone + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(BeaconColors::content_bg())
            .border_1()
            .border_color(BeaconColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header());

        if self.loading {
            table = table.child(self.render_placeholder("Loading...".into()));
        } else if self.rows.is_empty() {
            table = table.child(self.render_placeholder(self.empty_message.clone()));
        } else {
            table = table.child(
                div()
                    .id("data-table-rows")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(
                        self.rows
                            .clone()
                            .iter()
                            .enumerate()
                            .map(|(i, row)| self.render_row(row, i)),
                    ),
            );
        }

        table
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: Clone + 'static, V: 'static>(
    columns: Vec<Column<R>>,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|cx| {
        let mut table = DataTable::new(cx);
        table.set_columns(columns);
        table
    })
}
