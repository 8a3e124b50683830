//! Scrollback ring buffer.
//!
//! Rows evicted off the top of the screen land here. Storage grows
//! incrementally up to the capacity, then each push overwrites the oldest
//! entry in O(1). Logical index 0 is the oldest stored row, matching the
//! global-row addressing used by the query surface.

use crate::line::Line;

/// Bounded FIFO history of evicted rows, oldest-first.
#[derive(Debug, Clone)]
pub struct Scrollback {
    /// Storage, grows up to `max_lines`.
    inner: Vec<Line>,
    /// Maximum number of rows to retain (0 = disabled).
    max_lines: usize,
    /// Number of valid rows (always `<= inner.len()`).
    len: usize,
    /// Physical index of the oldest row once the buffer has wrapped.
    start: usize,
}

impl Scrollback {
    /// Create a scrollback with the given capacity. Capacity 0 is a valid
    /// no-op sink: every push is discarded.
    pub fn new(max_lines: usize) -> Self {
        Self {
            inner: Vec::new(),
            max_lines,
            len: 0,
            start: 0,
        }
    }

    /// Store a row, evicting the oldest when at capacity.
    pub(super) fn push(&mut self, line: Line) {
        if self.max_lines == 0 {
            return;
        }

        if self.inner.len() < self.max_lines {
            // Growing phase: just append.
            self.inner.push(line);
            self.len = self.inner.len();
        } else {
            // Full: overwrite the oldest slot and advance start.
            self.inner[self.start] = line;
            self.start = (self.start + 1) % self.max_lines;
        }
    }

    /// Number of rows currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no rows are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity limit.
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// The row at logical `index` (0 = oldest, `len - 1` = newest).
    pub fn get(&self, index: usize) -> Option<&Line> {
        if index >= self.len {
            return None;
        }
        Some(&self.inner[self.physical_index(index)])
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Line> + '_ {
        (0..self.len).map(move |i| &self.inner[self.physical_index(i)])
    }

    /// Drop all stored rows and reset the ring bookkeeping.
    pub(super) fn clear(&mut self) {
        self.inner.clear();
        self.len = 0;
        self.start = 0;
    }

    /// Translate a logical index (0 = oldest) to a physical Vec index.
    fn physical_index(&self, logical: usize) -> usize {
        debug_assert!(logical < self.len, "logical {logical} >= len {}", self.len);
        (self.start + logical) % self.inner.len()
    }
}
