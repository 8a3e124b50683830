//! Cursor state and clamped movement.
//!
//! The cursor is always inside `[0, width) x [0, height)`. Positioning
//! clamps silently by contract; it is the one place the engine prefers
//! clamping over an error, because terminal front-ends routinely send
//! out-of-range moves.

use crate::index::{Column, Row};

use super::TerminalBuffer;

/// Current write position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    col: Column,
    row: Row,
}

impl Cursor {
    /// Current column.
    pub fn col(&self) -> Column {
        self.col
    }

    /// Current row.
    pub fn row(&self) -> Row {
        self.row
    }

    pub(crate) fn set(&mut self, col: Column, row: Row) {
        self.col = col;
        self.row = row;
    }
}

impl TerminalBuffer {
    /// Current cursor column.
    pub fn cursor_col(&self) -> Column {
        self.cursor.col()
    }

    /// Current cursor row.
    pub fn cursor_row(&self) -> Row {
        self.cursor.row()
    }

    /// Position the cursor, clamping into bounds. Never fails.
    pub fn set_cursor(&mut self, col: Column, row: Row) {
        self.cursor.set(
            Column(col.0.min(self.width - 1)),
            Row(row.0.min(self.height - 1)),
        );
    }

    /// Move the cursor up by `n` rows, clamped at the top.
    pub fn move_cursor_up(&mut self, n: usize) {
        let row = self.cursor.row().0.saturating_sub(n);
        self.cursor.set(self.cursor.col(), Row(row));
    }

    /// Move the cursor down by `n` rows, clamped at the bottom.
    pub fn move_cursor_down(&mut self, n: usize) {
        let row = self.cursor.row().0.saturating_add(n).min(self.height - 1);
        self.cursor.set(self.cursor.col(), Row(row));
    }

    /// Move the cursor left by `n` columns, clamped at column 0.
    pub fn move_cursor_left(&mut self, n: usize) {
        let col = self.cursor.col().0.saturating_sub(n);
        self.cursor.set(Column(col), self.cursor.row());
    }

    /// Move the cursor right by `n` columns, clamped at the last column.
    pub fn move_cursor_right(&mut self, n: usize) {
        let col = self.cursor.col().0.saturating_add(n).min(self.width - 1);
        self.cursor.set(Column(col), self.cursor.row());
    }

    /// Re-clamp after a dimension or position change.
    pub(crate) fn clamp_cursor(&mut self) {
        let col = self.cursor.col().0.min(self.width - 1);
        let row = self.cursor.row().0.min(self.height - 1);
        self.cursor.set(Column(col), Row(row));
    }

    /// Place the cursor from raw indices, clamping. Internal shorthand for
    /// editing operations that track positions as plain `usize`.
    pub(crate) fn place_cursor(&mut self, col: usize, row: usize) {
        self.set_cursor(Column(col), Row(row));
    }
}
