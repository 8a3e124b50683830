//! The terminal buffer engine.
//!
//! `TerminalBuffer` composes the visible screen (a column-aligned stack of
//! [`Line`]s), the scrollback ring, the cursor, and the current write style.
//! Editing, resize, and query operations are added in submodules.

pub mod cursor;
pub mod editing;
pub mod queries;
pub mod resize;
pub mod scrollback;

pub use cursor::Cursor;
pub use scrollback::Scrollback;

use crate::error::Error;
use crate::line::Line;
use crate::style::StyleAttributes;

/// The screen grid, scrollback history, cursor, and current style.
///
/// Row 0 of the screen is topmost; new content and scrolling arrive at the
/// bottom. All storage is exclusively owned: queries hand out copies or
/// owned strings, never views into live rows, so a row pushed to history
/// can never be altered by later screen edits.
#[derive(Debug, Clone)]
pub struct TerminalBuffer {
    /// Visible rows, index 0 = top of screen.
    screen: Vec<Line>,
    /// Number of columns.
    width: usize,
    /// Number of visible rows.
    height: usize,
    /// Rows evicted off the top, oldest-first.
    scrollback: Scrollback,
    /// Current write position.
    cursor: Cursor,
    /// Style applied to subsequently written cells.
    current_style: StyleAttributes,
}

impl TerminalBuffer {
    /// Create a buffer of `width x height` cells with up to
    /// `scrollback_max` history lines (0 disables scrollback).
    pub fn new(width: usize, height: usize, scrollback_max: usize) -> Result<Self, Error> {
        if width == 0 {
            return Err(Error::InvalidDimension { what: "width" });
        }
        if height == 0 {
            return Err(Error::InvalidDimension { what: "height" });
        }

        Ok(Self {
            screen: (0..height).map(|_| Line::new(width)).collect(),
            width,
            height,
            scrollback: Scrollback::new(scrollback_max),
            cursor: Cursor::default(),
            current_style: StyleAttributes::default(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of visible rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Scrollback capacity.
    pub fn scrollback_max(&self) -> usize {
        self.scrollback.max_lines()
    }

    /// Number of history lines currently stored.
    pub fn scrollback_len(&self) -> usize {
        self.scrollback.len()
    }

    /// History lines plus visible rows.
    pub fn total_lines(&self) -> usize {
        self.scrollback.len() + self.height
    }

    /// The style applied to subsequently written cells.
    pub fn current_attributes(&self) -> StyleAttributes {
        self.current_style
    }

    /// Replace the current style. Affects future writes only.
    pub fn set_current_attributes(&mut self, style: StyleAttributes) {
        self.current_style = style;
    }

    /// Reset the current style to defaults.
    pub fn reset_attributes(&mut self) {
        self.current_style = StyleAttributes::default();
    }

    /// The screen row at `row`. Internal; callers hold `row < height`.
    pub(crate) fn row(&self, row: usize) -> &Line {
        &self.screen[row]
    }

    /// Mutable screen row at `row`. Internal; callers hold `row < height`.
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut Line {
        &mut self.screen[row]
    }
}
