//! Generic input event types.

/// Generic key representation.
///
/// Event sources map their native key codes to these values so the state
/// machine never sees backend-specific key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character key (digits, letters, symbols)
    Char(char),
    /// Return/Enter key (commits the radius entry)
    Return,
    /// Backspace key (deletes the last radius digit)
    Backspace,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary button, drives every gesture)
    Left,
    /// Right mouse button (ignored)
    Right,
    /// Middle mouse button (ignored)
    Middle,
}

/// One event delivered to the state machine, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close request
    Close,
    /// Mouse button press at a pixel position
    MousePress {
        /// Which button was pressed
        button: MouseButton,
        /// Pixel X coordinate
        x: i32,
        /// Pixel Y coordinate
        y: i32,
    },
    /// Key press
    KeyPress(Key),
}
