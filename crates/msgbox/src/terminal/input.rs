use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    pub buffer: Vec<char>,
    pub cursor: usize,
    preferred_column: Option<usize>,
}

impl TextBuffer {
    pub fn current(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn masked(&self, mask: char) -> String {
        self.buffer
            .iter()
            .map(|ch| if *ch == '\n' { '\n' } else { mask })
            .collect()
    }

    pub fn set_from(&mut self, value: &str) {
        self.buffer = value.chars().collect();
        self.cursor = self.buffer.len();
        self.preferred_column = None;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
        self.preferred_column = None;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        self.preferred_column = None;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.buffer.len() {
            return;
        }
        self.buffer.remove(self.cursor);
        self.preferred_column = None;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.preferred_column = None;
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
        self.preferred_column = None;
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor.min(self.buffer.len()));
        self.preferred_column = None;
    }

    pub fn move_end(&mut self) {
        let start = self.cursor.min(self.buffer.len());
        self.cursor = self.find_next_newline(start).unwrap_or(self.buffer.len());
        self.preferred_column = None;
    }

    pub fn move_up(&mut self) -> bool {
        let cursor = self.cursor.min(self.buffer.len());
        let current_start = self.line_start(cursor);
        if current_start == 0 {
            self.preferred_column = None;
            return false;
        }

        let column = self
            .preferred_column
            .unwrap_or(cursor.saturating_sub(current_start));
        let prev_end = current_start - 1;
        let prev_start = self.line_start(prev_end);
        let prev_len = prev_end.saturating_sub(prev_start);
        self.cursor = prev_start + column.min(prev_len);
        self.preferred_column = Some(column);
        true
    }

    pub fn move_down(&mut self) -> bool {
        let len = self.buffer.len();
        let cursor = self.cursor.min(len);
        let current_start = self.line_start(cursor);
        let Some(current_end) = self.find_next_newline(current_start) else {
            self.preferred_column = None;
            return false;
        };

        let column = self
            .preferred_column
            .unwrap_or(cursor.saturating_sub(current_start));
        let next_start = current_end + 1;
        let next_end = self.find_next_newline(next_start).unwrap_or(len);
        let next_len = next_end.saturating_sub(next_start);
        self.cursor = next_start + column.min(next_len);
        self.preferred_column = Some(column);
        true
    }

    pub fn delete_word_back(&mut self) {
        while self.cursor > 0 && self.buffer[self.cursor - 1].is_whitespace() {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
        while self.cursor > 0 && !self.buffer[self.cursor - 1].is_whitespace() {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
        self.preferred_column = None;
    }

    /// (row, column) of the caret, columns counted in chars.
    pub fn caret(&self) -> (usize, usize) {
        let cursor = self.cursor.min(self.buffer.len());
        let start = self.line_start(cursor);
        let row = self.buffer[..start].iter().filter(|ch| **ch == '\n').count();
        (row, cursor - start)
    }

    /// Applies an editing key. Returns false when the key is not an edit.
    pub fn apply_key(&mut self, code: KeyCode, modifiers: KeyModifiers, multiline: bool) -> bool {
        match code {
            KeyCode::Char('w') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_back();
            }
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(ch);
            }
            KeyCode::Enter if multiline => self.insert_char('\n'),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Up if multiline => {
                self.move_up();
            }
            KeyCode::Down if multiline => {
                self.move_down();
            }
            _ => return false,
        }
        true
    }

    fn line_start(&self, pos: usize) -> usize {
        self.buffer[..pos]
            .iter()
            .rposition(|ch| *ch == '\n')
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }

    fn find_next_newline(&self, start: usize) -> Option<usize> {
        self.buffer[start..]
            .iter()
            .position(|ch| *ch == '\n')
            .map(|offset| start + offset)
    }
}
