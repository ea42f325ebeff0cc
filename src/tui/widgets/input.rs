//! Text input widget
//!
//! A labeled single-line input. Editing appends at the end of the value;
//! the form's fields are short enough that cursor movement isn't worth the
//! keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder shown while empty
    pub placeholder: String,
    /// Label rendered before the value
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Append a character
    pub fn insert(&mut self, c: char) {
        self.content.push(c);
    }

    /// Delete the last character
    pub fn backspace(&mut self) {
        self.content.pop();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if !self.label.is_empty() {
            spans.push(Span::styled(
                self.label.clone(),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(": "));
        }

        if self.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            let value_style = if self.focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(self.content.clone(), value_style));
        }

        if self.focused {
            spans.push(Span::styled(
                "_",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
