//! Reusable UTF-8 safe text buffer with cursor management.
//!
//! Lines are separated by `'\n'`; all cursor positions are byte indices that
//! always sit on a UTF-8 boundary.

use std::ops::Range;

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor: 0,
        }
    }

    // ----- Getters -----
    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    // ----- Setters -----
    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len().min(self.cursor);
        while !self.input.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        let mut cursor = cursor.min(self.input.len());
        while !self.input.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.cursor = cursor;
    }

    // ----- Line geometry -----

    /// Byte ranges of every line, excluding the separators.
    pub fn line_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;
        for (index, c) in self.input.char_indices() {
            if c == '\n' {
                ranges.push(start..index);
                start = index + 1;
            }
        }
        ranges.push(start..self.input.len());
        ranges
    }

    pub fn line_count(&self) -> usize {
        self.input.matches('\n').count() + 1
    }

    /// Line index of the cursor and the part of that line before it.
    pub fn cursor_line(&self) -> (usize, &str) {
        let before = &self.input[..self.cursor];
        let line = before.matches('\n').count();
        let start = before.rfind('\n').map_or(0, |index| index + 1);
        (line, &self.input[start..self.cursor])
    }

    // ----- Editing primitives (UTF-8 safe) -----

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev_len = self.input[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        self.cursor = self.cursor.saturating_sub(prev_len);
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    /// Move cursor to the start of its line.
    pub fn move_home(&mut self) {
        self.cursor = self.input[..self.cursor].rfind('\n').map_or(0, |index| index + 1);
    }

    /// Move cursor to the end of its line.
    pub fn move_end(&mut self) {
        self.cursor = self.input[self.cursor..]
            .find('\n')
            .map_or(self.input.len(), |offset| self.cursor + offset);
    }

    pub fn move_up(&mut self) {
        let (line, prefix) = self.cursor_line();
        if line > 0 {
            let column = prefix.chars().count();
            self.move_to_column(line - 1, column);
        }
    }

    pub fn move_down(&mut self) {
        let (line, prefix) = self.cursor_line();
        if line + 1 < self.line_count() {
            let column = prefix.chars().count();
            self.move_to_column(line + 1, column);
        }
    }

    fn move_to_column(&mut self, line: usize, column: usize) {
        let Some(range) = self.line_ranges().into_iter().nth(line) else {
            return;
        };
        let text = &self.input[range.clone()];
        let offset = text.char_indices().nth(column).map_or(text.len(), |(index, _)| index);
        self.cursor = range.start + offset;
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.input[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        let start = self.cursor - prev;
        self.input.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Delete the char immediately after the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.input.drain(self.cursor..self.cursor + next.len_utf8());
        }
    }
}
