//! Terminal screen buffer data structures and logic.
//!
//! This crate models the visible and scrolled-off contents of a fixed-size
//! character terminal: a grid of styled cells, a cursor, and a bounded
//! scrollback of lines evicted off the top. It owns no I/O, no escape
//! sequence parsing, and no rendering; a front-end feeds it decoded text and
//! style changes and reads cells or line strings back for display.

#![deny(unsafe_code)]

pub mod buffer;
pub mod cell;
pub mod error;
pub mod index;
pub mod line;
pub mod style;

pub use buffer::{Cursor, Scrollback, TerminalBuffer};
pub use cell::{Cell, CellContent};
pub use error::Error;
pub use index::{Column, Row};
pub use line::Line;
pub use style::{ColorSlot, StyleAttributes, StyleFlags};
