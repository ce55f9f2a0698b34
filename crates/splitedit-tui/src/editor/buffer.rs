//! Multi-line text buffer with a character-indexed cursor.

/// Lines of text plus a `(row, col)` cursor, where `col` counts characters.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
    /// Maximum characters, counting line breaks (0 = unlimited).
    char_limit: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new(char_limit: usize) -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            char_limit,
        }
    }

    /// The full text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position as (row, column in characters).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Check if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Characters in the buffer, counting each line break as one.
    pub fn char_count(&self) -> usize {
        let chars: usize = self.lines.iter().map(|l| l.chars().count()).sum();
        chars + self.lines.len() - 1
    }

    fn has_room(&self) -> bool {
        self.char_limit == 0 || self.char_count() < self.char_limit
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    /// Insert a character at the cursor. Returns false if the limit is reached.
    pub fn insert(&mut self, ch: char) -> bool {
        if ch == '\n' {
            return self.newline();
        }
        if !self.has_room() {
            return false;
        }
        let idx = byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert(idx, ch);
        self.col += 1;
        true
    }

    /// Split the line at the cursor.
    pub fn newline(&mut self) -> bool {
        if !self.has_room() {
            return false;
        }
        let idx = byte_index(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.row += 1;
        self.col = 0;
        self.lines.insert(self.row, rest);
        true
    }

    /// Delete the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let idx = byte_index(&self.lines[self.row], self.col);
            self.lines[self.row].remove(idx);
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&line);
        }
    }

    /// Delete the character at the cursor, joining with the next line at end of line.
    pub fn delete(&mut self) {
        if self.col < self.line_len(self.row) {
            let idx = byte_index(&self.lines[self.row], self.col);
            self.lines[self.row].remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    /// Move cursor left, wrapping to the end of the previous line.
    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    /// Move cursor right, wrapping to the start of the next line.
    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    /// Move cursor up one line, clamping the column.
    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    /// Move cursor down one line, clamping the column.
    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    /// Move cursor to start of line.
    pub fn move_home(&mut self) {
        self.col = 0;
    }

    /// Move cursor to end of line.
    pub fn move_end(&mut self) {
        self.col = self.line_len(self.row);
    }
}

/// Byte offset of the `col`-th character, or the line length past the end.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}
