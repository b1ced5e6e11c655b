//! TextInput Component
//!
//! A minimal single-line text input: click to focus, printable keys append,
//! backspace deletes, Enter fires the submit handler. Sufficient for filter
//! boxes and small forms without pulling in a full text-editing stack.

use gpui::{
    Context, ElementId, Entity, FocusHandle, Focusable, InteractiveElement, IntoElement,
    KeyDownEvent, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
    div, prelude::*, px,
};

use crate::theme::colors::BeaconColors;

/// What a key press means to a text input
pub enum InputKey {
    Char(char),
    Backspace,
    Enter,
    Escape,
    Other,
}

/// Classify a key-down event into an input action
pub fn classify_key(event: &KeyDownEvent) -> InputKey {
    match event.keystroke.key.as_str() {
        "backspace" => InputKey::Backspace,
        "enter" => InputKey::Enter,
        "escape" => InputKey::Escape,
        "space" => InputKey::Char(' '),
        _ => {
            if event.keystroke.modifiers.control || event.keystroke.modifiers.platform {
                return InputKey::Other;
            }
            match event
                .keystroke
                .key_char
                .as_ref()
                .and_then(|s| s.chars().next())
            {
                Some(ch) if !ch.is_control() => InputKey::Char(ch),
                _ => InputKey::Other,
            }
        }
    }
}

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    disabled: bool,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
    on_submit: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            disabled: false,
            focus_handle: cx.focus_handle(),
            on_change: None,
            on_submit: None,
        }
    }

    /// Set the value without firing the change handler
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Set the change handler
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Set the submit (Enter) handler
    pub fn on_submit(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_submit = Some(Box::new(handler));
    }

    fn emit_change(&mut self, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_change.take() {
            handler(&self.value, cx);
            self.on_change = Some(handler);
        }
        cx.notify();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        if self.disabled {
            return;
        }
        match classify_key(event) {
            InputKey::Char(ch) => {
                self.value.push(ch);
                self.emit_change(cx);
            }
            InputKey::Backspace => {
                if self.value.pop().is_some() {
                    self.emit_change(cx);
                }
            }
            InputKey::Enter => {
                if let Some(handler) = self.on_submit.take() {
                    handler(&self.value.clone(), cx);
                    self.on_submit = Some(handler);
                }
                cx.notify();
            }
            InputKey::Escape | InputKey::Other => {}
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            BeaconColors::border_focus()
        } else {
            BeaconColors::input_border()
        };

        let (display_text, text_color) = if self.value.is_empty() {
            (self.placeholder.clone(), BeaconColors::input_placeholder())
        } else {
            (
                SharedString::from(self.value.clone()),
                BeaconColors::text_primary(),
            )
        };

        let focus_handle = self.focus_handle.clone();

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            .on_click(move |_event, window, _cx| {
                window.focus(&focus_handle);
            })
            .px_3()
            .py_2()
            .bg(BeaconColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .child(display_text)
    }
}

/// Create a text input entity with a value and placeholder
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    value: impl Into<String>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let value = value.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_value(value);
        input.set_placeholder(placeholder);
        input
    })
}
