//! Input handling for TUI
//!
//! Key classification and the editable text buffer behind each form field.

use crossterm::event::{KeyCode, KeyModifiers};

/// Key event representation
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key code
    pub code: KeyCode,
    /// Modifier keys held
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Plain key without modifiers
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Ctrl+C. Plain `q` is text here, so it does not quit.
    pub fn is_quit(&self) -> bool {
        self.code == KeyCode::Char('c') && self.modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn is_escape(&self) -> bool {
        self.code == KeyCode::Esc
    }

    pub fn is_enter(&self) -> bool {
        self.code == KeyCode::Enter
    }

    /// Tab or Down
    pub fn is_next_field(&self) -> bool {
        matches!(self.code, KeyCode::Tab | KeyCode::Down)
    }

    /// Shift+Tab or Up
    pub fn is_prev_field(&self) -> bool {
        matches!(self.code, KeyCode::BackTab | KeyCode::Up)
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(key: crossterm::event::KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// Text input buffer for handling text entry
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The text content
    content: String,
    /// Cursor position (byte offset)
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position in characters, for placing the terminal cursor
    pub fn cursor_column(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.content.len();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_char_boundary(self.cursor);
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor = self.next_char_boundary(self.cursor);
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns false if the key is not an edit.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    fn prev_char_boundary(&self, pos: usize) -> usize {
        let mut idx = pos.saturating_sub(1);
        while idx > 0 && !self.content.is_char_boundary(idx) {
            idx -= 1;
        }
        idx
    }

    fn next_char_boundary(&self, pos: usize) -> usize {
        let mut idx = pos + 1;
        while idx < self.content.len() && !self.content.is_char_boundary(idx) {
            idx += 1;
        }
        idx.min(self.content.len())
    }
}
