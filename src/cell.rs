//! Buffer cell types.
//!
//! A `Cell` is one grid slot: what occupies the column plus the style it was
//! written with. Wide glyphs occupy two slots, the glyph itself followed by
//! a `Continuation` marker; the marker is never independently addressable
//! content, it only keeps the columns aligned.

use unicode_width::UnicodeWidthChar;

use crate::style::StyleAttributes;

/// What occupies one grid slot.
///
/// A tagged variant instead of sentinel code point values, so that illegal
/// states (a "character" that is really a marker) are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellContent {
    /// Unwritten slot; renders as a blank.
    #[default]
    Empty,
    /// Right half of a wide glyph in the column to the left.
    Continuation,
    /// A code point written into this slot.
    Glyph(char),
}

/// One slot in the grid: content plus the style it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    content: CellContent,
    style: StyleAttributes,
}

impl Cell {
    /// Create a cell from content and style.
    pub fn new(content: CellContent, style: StyleAttributes) -> Self {
        Self { content, style }
    }

    /// Current content.
    pub fn content(&self) -> CellContent {
        self.content
    }

    /// Style this cell was written with.
    pub fn style(&self) -> StyleAttributes {
        self.style
    }

    /// Overwrite content and style together.
    ///
    /// Both fields always change in one call so a style can never apply to
    /// a stale marker.
    pub fn set(&mut self, content: CellContent, style: StyleAttributes) {
        self.content = content;
        self.style = style;
    }

    /// Whether this slot holds no content (style is ignored).
    pub fn is_blank(&self) -> bool {
        self.content == CellContent::Empty
    }

    /// Whether this slot holds a glyph classified as double-width.
    pub fn is_wide_glyph(&self) -> bool {
        matches!(self.content, CellContent::Glyph(ch) if char_display_width(ch) == 2)
    }
}

/// Display width of a code point: 1 column or 2.
///
/// Zero-width and unknown code points are treated as narrow; clustering is
/// out of scope, every written code point consumes at least one column.
pub fn char_display_width(ch: char) -> usize {
    match UnicodeWidthChar::width(ch) {
        Some(2) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::{char_display_width, Cell, CellContent};
    use crate::style::{ColorSlot, StyleAttributes, StyleFlags};

    #[test]
    fn default_cell_is_empty_with_default_style() {
        let cell = Cell::default();
        assert_eq!(cell.content(), CellContent::Empty);
        assert_eq!(cell.style(), StyleAttributes::default());
        assert!(cell.is_blank());
    }

    #[test]
    fn set_replaces_content_and_style_together() {
        let mut cell = Cell::default();
        let style = StyleAttributes::new(
            ColorSlot::Indexed(1),
            ColorSlot::Default,
            StyleFlags::BOLD,
        )
        .unwrap();

        cell.set(CellContent::Glyph('A'), style);
        assert_eq!(cell.content(), CellContent::Glyph('A'));
        assert_eq!(cell.style(), style);
        assert!(!cell.is_blank());
    }

    #[test]
    fn continuation_is_not_blank() {
        let cell = Cell::new(CellContent::Continuation, StyleAttributes::default());
        assert!(!cell.is_blank());
    }

    #[test]
    fn ascii_is_narrow() {
        assert_eq!(char_display_width('A'), 1);
        assert_eq!(char_display_width(' '), 1);
    }

    #[test]
    fn cjk_and_emoji_are_wide() {
        assert_eq!(char_display_width('好'), 2);
        assert_eq!(char_display_width('\u{1F600}'), 2);
        // U+3000 IDEOGRAPHIC SPACE.
        assert_eq!(char_display_width('\u{3000}'), 2);
    }

    #[test]
    fn zero_width_treated_as_narrow() {
        // U+0301 COMBINING ACUTE ACCENT.
        assert_eq!(char_display_width('\u{0301}'), 1);
    }

    #[test]
    fn wide_glyph_detection() {
        let wide = Cell::new(CellContent::Glyph('好'), StyleAttributes::default());
        let narrow = Cell::new(CellContent::Glyph('x'), StyleAttributes::default());
        let cont = Cell::new(CellContent::Continuation, StyleAttributes::default());
        assert!(wide.is_wide_glyph());
        assert!(!narrow.is_wide_glyph());
        assert!(!cont.is_wide_glyph());
    }
}
