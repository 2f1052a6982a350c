//! Bordered text input field widget.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::styles::theme;
use crate::utils::TextInput;

/// Renders a [`TextInput`] with a titled border and cursor positioning.
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: &'a str,
    focused: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput, title: &'a str) -> Self {
        Self {
            input,
            title,
            focused: false,
            masked: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Render into the frame. Takes the frame (not just a buffer) so the
    /// terminal cursor can be placed when focused.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let border_style = if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };

        let shown = if self.masked {
            "*".repeat(self.input.text().chars().count())
        } else {
            self.input.text().to_string()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title)
            .border_style(border_style);
        let inner = block.inner(area);

        let paragraph = Paragraph::new(shown).block(block).style(t.text_style());
        frame.render_widget(paragraph, area);

        if self.focused {
            let cursor = self.input.cursor().min(inner.width.saturating_sub(1) as usize);
            frame.set_cursor_position((inner.x + cursor as u16, inner.y));
        }
    }
}
