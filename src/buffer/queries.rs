//! Pure query surface over history and screen.
//!
//! Global row addressing: `0..scrollback_len` is history oldest-first,
//! `scrollback_len..total_lines` is the screen top to bottom. All queries
//! return copies or owned strings; nothing aliases live storage.
//!
//! History rows keep the width they had when evicted, so column bounds for
//! history queries are checked against the addressed line's own width.

use crate::cell::CellContent;
use crate::error::Error;
use crate::index::Column;
use crate::line::Line;
use crate::style::StyleAttributes;

use super::TerminalBuffer;

impl TerminalBuffer {
    /// Content of the cell at `(global_row, col)`.
    pub fn content_at(&self, global_row: usize, col: Column) -> Result<CellContent, Error> {
        let line = self.global_line(global_row)?;
        Self::check_col(line, col)?;
        Ok(line.cell(col.0).content())
    }

    /// Style of the cell at `(global_row, col)`. A continuation cell
    /// reports the style it shares with its glyph.
    pub fn attributes_at(&self, global_row: usize, col: Column) -> Result<StyleAttributes, Error> {
        let line = self.global_line(global_row)?;
        Self::check_col(line, col)?;
        Ok(line.cell(col.0).style())
    }

    /// The addressed line as fixed-width plain text.
    pub fn line_as_string(&self, global_row: usize) -> Result<String, Error> {
        Ok(self.global_line(global_row)?.to_plain_string())
    }

    /// All visible rows, top to bottom, joined with newlines.
    pub fn screen_as_string(&self) -> String {
        self.screen
            .iter()
            .map(Line::to_plain_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// History (oldest-first) then visible rows, joined with newlines.
    pub fn all_as_string(&self) -> String {
        self.scrollback
            .iter()
            .chain(self.screen.iter())
            .map(Line::to_plain_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Resolve a global row to its backing line.
    fn global_line(&self, global_row: usize) -> Result<&Line, Error> {
        let total = self.total_lines();
        let history = self.scrollback.len();
        if global_row < history {
            return self.scrollback.get(global_row).ok_or(Error::IndexOutOfRange {
                what: "row",
                index: global_row,
                limit: total,
            });
        }
        let row = global_row - history;
        if row >= self.height {
            return Err(Error::IndexOutOfRange {
                what: "row",
                index: global_row,
                limit: total,
            });
        }
        Ok(self.row(row))
    }

    fn check_col(line: &Line, col: Column) -> Result<(), Error> {
        if col.0 >= line.width() {
            return Err(Error::IndexOutOfRange {
                what: "column",
                index: col.0,
                limit: line.width(),
            });
        }
        Ok(())
    }
}
