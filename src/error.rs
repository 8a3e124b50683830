//! Error taxonomy for buffer construction, mutation, and queries.
//!
//! Every error is raised synchronously at the call that violates the
//! contract, before any state is mutated. Cursor positioning is the one
//! deliberate exception: it clamps instead of failing.

use thiserror::Error;

/// Errors reported by [`crate::TerminalBuffer`] and its value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A width or height of zero was passed to construction or resize.
    #[error("invalid dimension: {what} must be > 0")]
    InvalidDimension {
        /// Which dimension was rejected ("width" or "height").
        what: &'static str,
    },

    /// An indexed color outside the 16-color palette.
    #[error("invalid color index {0}, expected 0..=15")]
    InvalidColor(u8),

    /// An argument that is well-typed but unusable for the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A query addressed a row or column outside the valid range.
    #[error("index out of range: {what} {index} >= {limit}")]
    IndexOutOfRange {
        /// Which coordinate was rejected ("row" or "column").
        what: &'static str,
        index: usize,
        limit: usize,
    },
}
