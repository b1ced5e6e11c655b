//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::BeaconColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (indigo)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Danger button (red)
    Danger,
    /// Ghost button (transparent)
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

struct ButtonStyle {
    bg: Rgba,
    text: Rgba,
    hover_bg: Rgba,
}

impl ButtonVariant {
    fn style(self) -> ButtonStyle {
        match self {
            ButtonVariant::Primary => ButtonStyle {
                bg: BeaconColors::button_primary_bg(),
                text: BeaconColors::button_primary_text(),
                hover_bg: gpui::rgb(0x4f46e5),
            },
            ButtonVariant::Secondary => ButtonStyle {
                bg: gpui::rgb(0xe2e8f0),
                text: BeaconColors::text_primary(),
                hover_bg: gpui::rgb(0xcbd5e1),
            },
            ButtonVariant::Danger => ButtonStyle {
                bg: BeaconColors::button_danger_bg(),
                text: BeaconColors::button_danger_text(),
                hover_bg: gpui::rgb(0xb91c1c),
            },
            ButtonVariant::Ghost => ButtonStyle {
                bg: gpui::rgba(0x00000000),
                text: BeaconColors::button_ghost_text(),
                hover_bg: gpui::rgb(0xf1f5f9),
            },
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            on_click: None,
        }
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = self.variant.style();

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(8.0), px(4.0), px(12.0)),
            ButtonSize::Medium => (px(14.0), px(7.0), px(14.0)),
        };

        let mut element = div()
            .id(self.id)
            .px(padding_x)
            .py(padding_y)
            .bg(style.bg)
            .text_color(style.text)
            .text_size(font_size)
            .rounded_md()
            .child(self.label);

        if self.disabled {
            element = element.opacity(0.5);
        } else {
            element = element
                .cursor_pointer()
                .hover(move |s| s.bg(style.hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
