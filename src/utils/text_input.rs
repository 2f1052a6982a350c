//! Text input state: a string plus a cursor position.

/// A text input field with encapsulated state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = self.byte_index();
        self.text.remove(byte_idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut input = TextInput::with_text("http");
        input.insert_char('s');
        assert_eq!(input.text(), "https");

        input.move_left();
        input.move_left();
        input.insert_char('X');
        assert_eq!(input.text(), "httXps");

        input.backspace();
        assert_eq!(input.text(), "https");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut input = TextInput::new();
        input.move_left();
        input.backspace();
        input.move_right();
        assert_eq!(input.cursor(), 0);

        input.set_text("ab");
        input.move_end();
        input.move_right();
        assert_eq!(input.cursor(), 2);
    }
}
