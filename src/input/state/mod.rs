mod actions;
mod core;
mod mouse;
mod radius;
#[cfg(test)]
mod tests;

pub use self::core::{DrawingState, InputState, PendingGesture};
pub use radius::RadiusInput;
