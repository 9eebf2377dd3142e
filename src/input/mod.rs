//! Input handling and tool state machine.
//!
//! This module translates pixel-space mouse clicks and key presses into
//! algorithm runs. It maintains the selected algorithm, the pending gesture,
//! the radius text box, and the history every completed gesture appends to.

pub mod events;
pub mod layout;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{InputEvent, Key, MouseButton};
pub use layout::{Layout, Region, SidebarHit};
pub use state::{DrawingState, InputState, PendingGesture, RadiusInput};
pub use tool::{Algorithm, SidebarItem};
