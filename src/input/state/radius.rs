//! Text entry for the circle radius.

use crate::draw::raster::MAX_RADIUS;

/// Radius text box state.
///
/// The buffer only ever holds ASCII digits. Any other printable key typed
/// while editing is dropped from the buffer but marks the pending entry as
/// rejected, so the next commit fails and the user has to retype.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadiusInput {
    buffer: String,
    editing: bool,
    rejected: bool,
}

impl RadiusInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents (digits only).
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Whether keyboard input is currently routed to the buffer.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether a non-digit was typed since the last commit.
    pub fn is_rejected(&self) -> bool {
        self.rejected
    }

    /// Flips the editing flag; returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.editing = !self.editing;
        self.editing
    }

    /// Stops routing keys to the buffer. The buffer itself is kept.
    pub fn deactivate(&mut self) {
        self.editing = false;
    }

    /// Handles a printable character. Ignored unless editing.
    pub fn type_char(&mut self, c: char) -> bool {
        if !self.editing {
            return false;
        }
        if c.is_ascii_digit() {
            self.buffer.push(c);
        } else {
            log::debug!("Ignoring non-digit '{c}' in radius input");
            self.rejected = true;
        }
        true
    }

    /// Removes the last digit. Ignored unless editing.
    pub fn backspace(&mut self) -> bool {
        if !self.editing {
            return false;
        }
        self.buffer.pop();
        true
    }

    /// Attempts to commit the buffer as a radius.
    ///
    /// Returns the parsed radius when the entry is a digit string no larger
    /// than [`MAX_RADIUS`]. The buffer and the rejected flag are reset
    /// whether or not the commit succeeded. Returns `None` without touching
    /// anything when not editing.
    pub fn commit(&mut self) -> Option<i32> {
        if !self.editing {
            return None;
        }

        let text = std::mem::take(&mut self.buffer);
        let rejected = std::mem::replace(&mut self.rejected, false);

        if rejected || text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            log::debug!("Radius commit rejected (buffer '{text}', rejected={rejected})");
            return None;
        }

        match text.parse::<i32>() {
            Ok(radius) if radius <= MAX_RADIUS => Some(radius),
            Ok(_) => {
                log::warn!("Radius '{text}' exceeds {MAX_RADIUS}; keeping previous radius");
                None
            }
            Err(err) => {
                log::warn!("Radius '{text}' is out of range ({err}); keeping previous radius");
                None
            }
        }
    }
}
