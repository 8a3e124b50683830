//! One buffer line: a fixed-width run of cells.
//!
//! A `Line` never changes width after creation; width changes go through
//! [`Line::resized_to`], which produces a new line. `Clone` is a deep copy
//! (cells are plain values), which is what makes scrollback rows immune to
//! later screen mutation.

use crate::cell::{Cell, CellContent};
use crate::style::StyleAttributes;

/// A fixed-width ordered run of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    /// Create a blank line of the given width.
    pub fn new(width: usize) -> Self {
        debug_assert!(width > 0, "line width must be > 0");
        Self { cells: vec![Cell::default(); width] }
    }

    /// Fixed width of this line.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// The cell at `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= width()`. Callers bounds-check against `width()`;
    /// the public query surface reports `IndexOutOfRange` instead.
    pub fn cell(&self, col: usize) -> &Cell {
        &self.cells[col]
    }

    /// Mutable access to the cell at `col`.
    pub(crate) fn cell_mut(&mut self, col: usize) -> &mut Cell {
        &mut self.cells[col]
    }

    /// Reset every cell to empty content with default style.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set(CellContent::Empty, StyleAttributes::default());
        }
    }

    /// Overwrite every cell with the same content and style.
    pub(crate) fn fill(&mut self, content: CellContent, style: StyleAttributes) {
        for cell in &mut self.cells {
            cell.set(content, style);
        }
    }

    /// Render this line as fixed-width plain text.
    ///
    /// Empty slots become spaces. A continuation slot contributes a space
    /// placeholder: it has no content of its own but still consumes one
    /// column of the fixed-width output.
    pub fn to_plain_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.content() {
                CellContent::Glyph(ch) => ch,
                CellContent::Empty | CellContent::Continuation => ' ',
            })
            .collect()
    }

    /// Produce a new line of `new_width` with this line's content.
    ///
    /// Columns `< min(old, new)` are copied; growth pads with blank cells,
    /// shrink drops the tail. A wide glyph whose continuation slot was
    /// truncated away degrades to empty: a half glyph is not renderable.
    pub fn resized_to(&self, new_width: usize) -> Self {
        debug_assert!(new_width > 0, "line width must be > 0");
        let mut out = Self::new(new_width);
        let keep = self.cells.len().min(new_width);
        out.cells[..keep].copy_from_slice(&self.cells[..keep]);

        if new_width < self.cells.len() {
            let last = &mut out.cells[new_width - 1];
            if last.is_wide_glyph() {
                last.set(CellContent::Empty, last.style());
            }
        }
        out
    }

    /// Insert `cells` at `col`, shifting existing cells right.
    ///
    /// Returns the cells pushed past the right edge, left-to-right, for the
    /// caller to carry into the next row. A wide glyph is never split at
    /// the boundary: if the shift would strand a glyph in the last column
    /// with its continuation pushed out, the glyph joins the overflow and
    /// the stranded slot becomes empty.
    pub(crate) fn insert_cells(&mut self, col: usize, cells: Vec<Cell>) -> Vec<Cell> {
        let width = self.cells.len();
        debug_assert!(col <= width, "insert col {col} beyond width {width}");

        let tail = self.cells.split_off(col);
        self.cells.extend(cells);
        self.cells.extend(tail);
        let mut overflow = self.cells.split_off(width);

        if let Some(last) = self.cells.last().copied() {
            let split_pair = last.is_wide_glyph()
                && overflow.first().is_some_and(|c| c.content() == CellContent::Continuation);
            if split_pair {
                let idx = self.cells.len() - 1;
                self.cells[idx].set(CellContent::Empty, last.style());
                overflow.insert(0, last);
            }
        }
        overflow
    }
}
