//! Text style value types.
//!
//! `StyleAttributes` is an immutable value applied to cells as they are
//! written. Colors come from a 16-entry indexed palette plus a "default"
//! sentinel that defers to the renderer's theme. Validation happens at
//! construction; a `StyleAttributes` that exists is always valid.

use bitflags::bitflags;

use crate::error::Error;

bitflags! {
    /// Per-cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        const BOLD      = 1 << 0;
        const ITALIC    = 1 << 1;
        const UNDERLINE = 1 << 2;
    }
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// A foreground or background color selector.
///
/// `Default` defers to the renderer's theme and bypasses range checking;
/// `Indexed` addresses the classic 16-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSlot {
    /// The renderer-defined default color.
    #[default]
    Default,
    /// Palette index in `0..=15`.
    Indexed(u8),
}

impl ColorSlot {
    /// Create an indexed slot, rejecting values outside the palette.
    pub fn indexed(index: u8) -> Result<Self, Error> {
        if index > 15 {
            return Err(Error::InvalidColor(index));
        }
        Ok(Self::Indexed(index))
    }
}

/// Immutable style record carried by every cell.
///
/// Fields are private so every live value went through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleAttributes {
    fg: ColorSlot,
    bg: ColorSlot,
    flags: StyleFlags,
}

impl StyleAttributes {
    /// Create a style, validating any indexed colors.
    pub fn new(fg: ColorSlot, bg: ColorSlot, flags: StyleFlags) -> Result<Self, Error> {
        for slot in [fg, bg] {
            if let ColorSlot::Indexed(index) = slot {
                if index > 15 {
                    return Err(Error::InvalidColor(index));
                }
            }
        }
        Ok(Self { fg, bg, flags })
    }

    /// Foreground color selector.
    pub fn fg(&self) -> ColorSlot {
        self.fg
    }

    /// Background color selector.
    pub fn bg(&self) -> ColorSlot {
        self.bg
    }

    /// The raw flag set.
    pub fn flags(&self) -> StyleFlags {
        self.flags
    }

    pub fn bold(&self) -> bool {
        self.flags.contains(StyleFlags::BOLD)
    }

    pub fn italic(&self) -> bool {
        self.flags.contains(StyleFlags::ITALIC)
    }

    pub fn underline(&self) -> bool {
        self.flags.contains(StyleFlags::UNDERLINE)
    }
}
