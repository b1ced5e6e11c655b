//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use gpui::{AnyElement, SharedString};

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Column width in pixels
    pub width: f32,
    /// Cell renderer function
    render: Box<dyn Fn(&R) -> AnyElement + 'static>,
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        width: f32,
        render: impl Fn(&R) -> AnyElement + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width,
            render: Box::new(render),
        }
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.render)(row)
    }
}
