//! Buffer editing operations.
//!
//! `write` overwrites in place and never wraps narrow text; `insert` shifts
//! content rightward and wraps overflow forward, scrolling the screen when
//! the bottom row overflows. Both classify code points as narrow (one cell)
//! or wide (glyph plus continuation cell) and never leave a half glyph
//! behind.

use log::debug;

use crate::cell::{char_display_width, Cell, CellContent};
use crate::error::Error;
use crate::index::Row;
use crate::style::StyleAttributes;

use super::TerminalBuffer;

impl TerminalBuffer {
    /// Write text at the cursor, overwriting existing cells.
    ///
    /// Narrow code points that would pass the right edge are dropped: plain
    /// writes never wrap. A wide code point that cannot fit the remaining
    /// columns starts at column 0 of the row below instead of splitting;
    /// with no row below it is dropped. The skipped trailing cells keep
    /// whatever they held. Writes never scroll. The cursor ends one past
    /// the last written cell, clamped to the last column.
    pub fn write(&mut self, text: &str) {
        let style = self.current_style;
        let mut row = self.cursor.row().0;
        let mut col = self.cursor.col().0;

        for ch in text.chars() {
            if char_display_width(ch) == 2 {
                if self.width < 2 {
                    continue;
                }
                if col + 2 <= self.width {
                    self.place_wide(row, col, ch, style);
                    col += 2;
                } else if row + 1 < self.height {
                    row += 1;
                    self.place_wide(row, 0, ch, style);
                    col = 2;
                }
                // No row below: the glyph is dropped.
            } else if col < self.width {
                self.place_narrow(row, col, ch, style);
                col += 1;
            }
            // Narrow overflow: dropped silently.
        }

        self.place_cursor(col.min(self.width - 1), row);
    }

    /// Insert text at the cursor, shifting existing cells rightward.
    ///
    /// Overflow pushed past the right edge carries to column 0 of the next
    /// row, shifting that row in turn; when the bottom row overflows, the
    /// screen scrolls up one line (top row into scrollback) before the
    /// carried cells land. Shifted cells keep their style; only the newly
    /// inserted cells take the current style. Inserting at the right half
    /// of a wide pair blanks both halves first: wedging new content between
    /// a glyph and its continuation would leave both orphaned. The cursor
    /// ends after the last inserted cell, accounting for any scrolls.
    pub fn insert(&mut self, text: &str) {
        let style = self.current_style;
        let mut row = self.cursor.row().0;
        let mut col = self.cursor.col().0;

        for ch in text.chars() {
            let wide = char_display_width(ch) == 2;
            let needed = if wide { 2 } else { 1 };
            if needed > self.width {
                continue;
            }

            // The glyph must start where all its cells fit on one row.
            if col + needed > self.width {
                if row + 1 < self.height {
                    row += 1;
                } else {
                    self.scroll_up_one();
                }
                col = 0;
            }

            self.split_pair_for_insert(row, col);

            let mut cells = vec![Cell::new(CellContent::Glyph(ch), style)];
            if wide {
                cells.push(Cell::new(CellContent::Continuation, style));
            }

            let scrolls = self.insert_cells_at(row, col, cells);
            row = row.saturating_sub(scrolls);
            col += needed;
        }

        self.place_cursor(col.min(self.width - 1), row);
    }

    /// Fill an entire screen row with one narrow glyph (or blanks) in the
    /// current style.
    pub fn fill_line(&mut self, row: Row, glyph: Option<char>) -> Result<(), Error> {
        if row.0 >= self.height {
            return Err(Error::IndexOutOfRange {
                what: "row",
                index: row.0,
                limit: self.height,
            });
        }
        let content = match glyph {
            Some(ch) if char_display_width(ch) == 2 => {
                return Err(Error::InvalidArgument("fill glyph must be single-width"));
            }
            Some(ch) => CellContent::Glyph(ch),
            None => CellContent::Empty,
        };

        let style = self.current_style;
        self.row_mut(row.0).fill(content, style);
        Ok(())
    }

    /// Scroll the screen up one line: row 0 is deep-copied into scrollback
    /// (FIFO eviction at capacity), remaining rows shift up, and a blank
    /// row appears at the bottom.
    pub fn insert_empty_line_at_bottom(&mut self) {
        self.scroll_up_one();
    }

    /// Blank every screen row and home the cursor. Scrollback is kept.
    pub fn clear_screen(&mut self) {
        for line in &mut self.screen {
            line.clear();
        }
        self.place_cursor(0, 0);
    }

    /// Blank the screen and drop all scrollback history.
    pub fn clear_all(&mut self) {
        debug!("clear_all: dropping {} scrollback lines", self.scrollback.len());
        self.clear_screen();
        self.scrollback.clear();
    }

    /// Write a narrow glyph, degrading any wide pair it overwrites.
    fn place_narrow(&mut self, row: usize, col: usize, ch: char, style: StyleAttributes) {
        self.degrade_pair_at(row, col);
        self.row_mut(row)
            .cell_mut(col)
            .set(CellContent::Glyph(ch), style);
    }

    /// Write a wide glyph and its continuation, degrading overwritten pairs
    /// in both columns. Caller guarantees `col + 1 < width`.
    fn place_wide(&mut self, row: usize, col: usize, ch: char, style: StyleAttributes) {
        self.degrade_pair_at(row, col);
        self.degrade_pair_at(row, col + 1);
        let line = self.row_mut(row);
        line.cell_mut(col).set(CellContent::Glyph(ch), style);
        line.cell_mut(col + 1).set(CellContent::Continuation, style);
    }

    /// Overwriting one half of a wide pair leaves the other half orphaned;
    /// degrade the orphan to empty so no half glyph survives.
    fn degrade_pair_at(&mut self, row: usize, col: usize) {
        let content = self.row(row).cell(col).content();

        if content == CellContent::Continuation && col > 0 {
            let left = self.row(row).cell(col - 1);
            if left.is_wide_glyph() {
                let style = left.style();
                self.row_mut(row).cell_mut(col - 1).set(CellContent::Empty, style);
            }
        }

        if self.row(row).cell(col).is_wide_glyph() && col + 1 < self.width {
            let right = self.row(row).cell(col + 1);
            if right.content() == CellContent::Continuation {
                let style = right.style();
                self.row_mut(row).cell_mut(col + 1).set(CellContent::Empty, style);
            }
        }
    }

    /// An insert landing on a continuation cell would shift it away from
    /// its glyph; blank both halves before the shift so neither survives
    /// orphaned.
    fn split_pair_for_insert(&mut self, row: usize, col: usize) {
        if self.row(row).cell(col).content() != CellContent::Continuation {
            return;
        }
        let style = self.row(row).cell(col).style();
        self.row_mut(row).cell_mut(col).set(CellContent::Empty, style);

        if col > 0 && self.row(row).cell(col - 1).is_wide_glyph() {
            let style = self.row(row).cell(col - 1).style();
            self.row_mut(row).cell_mut(col - 1).set(CellContent::Empty, style);
        }
    }

    /// Insert prepared cells at `(row, col)` and propagate overflow down
    /// the screen. Returns how many one-line scrolls occurred.
    ///
    /// Carry holding only empty slots is discarded: pushing blanks off a
    /// row must not fabricate wraps or scrolls.
    fn insert_cells_at(&mut self, row: usize, col: usize, cells: Vec<Cell>) -> usize {
        let mut scrolls = 0;
        let mut r = row;
        let mut carry = self.row_mut(r).insert_cells(col, cells);

        while carry.iter().any(|c| !c.is_blank()) {
            if r + 1 < self.height {
                r += 1;
            } else {
                self.scroll_up_one();
                scrolls += 1;
            }
            carry = self.row_mut(r).insert_cells(0, carry);
        }
        scrolls
    }

    /// The scroll primitive: evict row 0 to history, rotate, blank the
    /// bottom row.
    fn scroll_up_one(&mut self) {
        let evicted = self.screen[0].clone();
        self.scrollback.push(evicted);
        self.screen.rotate_left(1);
        let last = self.height - 1;
        self.screen[last].clear();
    }
}
