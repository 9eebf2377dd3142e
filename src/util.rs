//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Color name lookup for the configuration file
//! - Axis-aligned rectangles used for sidebar hit testing

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "white", "black", "blue", "orange"
/// - "gray" / "grey" (the dark grid-line gray)
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "blue" => Some(BLUE),
        "orange" => Some(ORANGE),
        "gray" | "grey" => Some(DARK_GRAY),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Returns true if the pixel lies inside (inclusive min, exclusive max).
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Returns the rectangle as Cairo-friendly floats `(x, y, w, h)`.
    pub fn to_f64(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.width),
            f64::from(self.height),
        )
    }
}
