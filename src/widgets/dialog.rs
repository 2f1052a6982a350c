//! Modal prompt dialog.
//!
//! Renders the single pending modal: a centered box with the prompt title,
//! the caption text, an optional input line (masked for passwords) and a
//! footer naming the available actions.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

use crate::styles::theme;

/// A centered prompt dialog.
pub struct Dialog<'a> {
    title: &'a str,
    caption: &'a str,
    /// Input line content; `None` for message prompts.
    input: Option<&'a str>,
    masked: bool,
    allow_cancel: bool,
    /// Whether the confirm action is currently usable.
    can_confirm: bool,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, caption: &'a str) -> Self {
        Self {
            title,
            caption,
            input: None,
            masked: false,
            allow_cancel: false,
            can_confirm: true,
        }
    }

    /// Show an input line with the given content.
    pub fn input(mut self, input: &'a str) -> Self {
        self.input = Some(input);
        self
    }

    /// Mask the input line (password entry).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn allow_cancel(mut self, allow: bool) -> Self {
        self.allow_cancel = allow;
        self
    }

    pub fn can_confirm(mut self, can: bool) -> Self {
        self.can_confirm = can;
        self
    }

    fn footer(&self) -> String {
        let confirm = if self.input.is_some() {
            "Enter: Confirm"
        } else {
            "Enter: Ok"
        };
        let mut parts = Vec::new();
        if self.can_confirm {
            parts.push(confirm.to_string());
        }
        if self.allow_cancel {
            parts.push("Esc: Cancel".to_string());
        }
        parts.join("   ")
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();

        let width = (area.width.saturating_sub(4)).clamp(30, 60);
        let input_rows = if self.input.is_some() { 2 } else { 0 };
        let caption_rows = self.caption.lines().count().max(1) as u16 + 1;
        let height = (caption_rows + input_rows + 4).min(area.height.saturating_sub(2));

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        Widget::render(Clear, dialog_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(format!(" {} ", self.footer())).centered())
            .padding(Padding::horizontal(2));

        let inner = block.inner(dialog_area);
        Widget::render(block, dialog_area, buf);

        let layout = Layout::vertical([
            Constraint::Min(caption_rows),
            Constraint::Length(input_rows),
        ])
        .split(inner);

        let caption = Paragraph::new(self.caption)
            .wrap(Wrap { trim: true })
            .style(t.text_style());
        Widget::render(caption, layout[0], buf);

        if let Some(input) = self.input {
            let shown = if self.masked {
                "*".repeat(input.chars().count())
            } else {
                input.to_string()
            };
            let field = Paragraph::new(format!("> {shown}_"))
                .style(t.text_style().add_modifier(Modifier::BOLD));
            Widget::render(field, layout[1], buf);
        }
    }
}
