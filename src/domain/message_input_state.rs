//! The draft: locally held, unsent text the user is composing.

/// Upper bound on draft length, in characters.
const MAX_DRAFT_CHARS: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageInputState {
    chars: Vec<char>,
    /// Cursor position as a character index into `chars`.
    cursor: usize,
}

impl MessageInputState {
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True when the draft holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|ch| ch.is_whitespace())
    }

    /// Returns false when the draft is already at its length limit.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.chars.len() >= MAX_DRAFT_CHARS {
            return false;
        }
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
        true
    }

    pub fn delete_char_before(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete_char_at(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str) -> MessageInputState {
        let mut state = MessageInputState::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    #[test]
    fn new_draft_is_empty() {
        let state = MessageInputState::default();

        assert!(state.is_empty());
        assert!(state.is_blank());
        assert_eq!(state.text(), "");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn insert_at_cursor() {
        let mut state = draft("Ho");
        state.move_cursor_left();
        state.insert_char('i');

        assert_eq!(state.text(), "Hio");
        assert_eq!(state.cursor_position(), 2);
    }

    #[test]
    fn backspace_and_delete() {
        let mut state = draft("abc");
        state.delete_char_before();
        assert_eq!(state.text(), "ab");

        state.move_cursor_home();
        state.delete_char_at();
        assert_eq!(state.text(), "b");
        assert_eq!(state.cursor_position(), 0);

        state.delete_char_before();
        assert_eq!(state.text(), "b");
    }

    #[test]
    fn delete_at_end_does_nothing() {
        let mut state = draft("a");

        state.delete_char_at();

        assert_eq!(state.text(), "a");
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let mut state = draft("ab");

        state.move_cursor_right();
        assert_eq!(state.cursor_position(), 2);

        state.move_cursor_home();
        state.move_cursor_left();
        assert_eq!(state.cursor_position(), 0);

        state.move_cursor_end();
        assert_eq!(state.cursor_position(), 2);
    }

    #[test]
    fn whitespace_only_draft_is_blank() {
        let state = draft("  \t ");

        assert!(!state.is_empty());
        assert!(state.is_blank());
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut state = draft("Привет");
        state.delete_char_before();
        assert_eq!(state.text(), "Приве");

        state.move_cursor_home();
        state.delete_char_at();
        assert_eq!(state.text(), "риве");
    }

    #[test]
    fn clear_resets_text_and_cursor() {
        let mut state = draft("hello");

        state.clear();

        assert!(state.is_empty());
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn insert_respects_length_limit() {
        let mut state = MessageInputState::default();
        for _ in 0..MAX_DRAFT_CHARS {
            assert!(state.insert_char('x'));
        }

        assert!(!state.insert_char('y'));
        assert_eq!(state.text().chars().count(), MAX_DRAFT_CHARS);
    }
}
