use crate::input::events::Key;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Keys only matter while the radius box is being edited:
    /// - Digits are appended to the buffer
    /// - Backspace removes the last digit
    /// - Return commits the buffer as the circle radius
    /// - Other printable characters invalidate the pending entry
    ///
    /// Everything else, and every key while not editing, is ignored.
    pub fn on_key_press(&mut self, key: Key) {
        if !self.radius_input.is_editing() {
            return;
        }

        match key {
            Key::Char(c) => {
                self.radius_input.type_char(c);
            }
            Key::Backspace => {
                self.radius_input.backspace();
            }
            Key::Return => {
                if let Some(radius) = self.radius_input.commit() {
                    log::info!("Circle radius set to {radius}");
                    self.gesture.radius = radius;
                }
            }
            Key::Unknown => {}
        }
    }
}
