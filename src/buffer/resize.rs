//! Content-preserving resize.
//!
//! Shrinking the height feeds evicted top rows into scrollback before they
//! leave the screen; width changes reproject each surviving row through
//! [`crate::line::Line::resized_to`]. History rows are never reprojected:
//! they stay frozen at the width they were evicted with.

use log::debug;

use crate::error::Error;
use crate::line::Line;

use super::TerminalBuffer;

impl TerminalBuffer {
    /// Change the screen dimensions, relocating content.
    ///
    /// Validation happens before any mutation; on error the buffer is
    /// untouched. The cursor is clamped into the new bounds afterwards.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), Error> {
        if new_width == 0 {
            return Err(Error::InvalidDimension { what: "width" });
        }
        if new_height == 0 {
            return Err(Error::InvalidDimension { what: "height" });
        }

        debug!(
            "resize {}x{} -> {}x{}",
            self.width, self.height, new_width, new_height
        );

        // Height shrink: the topmost rows scroll into history at the width
        // they currently have, oldest first.
        if new_height < self.height {
            let evict = self.height - new_height;
            for line in self.screen.drain(..evict) {
                self.scrollback.push(line);
            }
        }

        // Reproject surviving rows to the new width.
        if new_width != self.width {
            for line in &mut self.screen {
                *line = line.resized_to(new_width);
            }
        }

        // Height growth: blank rows appended at the bottom.
        while self.screen.len() < new_height {
            self.screen.push(Line::new(new_width));
        }

        self.width = new_width;
        self.height = new_height;
        self.clamp_cursor();
        Ok(())
    }
}
