//! Rasterization algorithms, drawing history and Cairo rendering.
//!
//! This module defines the core drawing types:
//! - [`Point`]: a grid cell coordinate
//! - [`raster`]: the four rasterization algorithms
//! - [`PointHistory`]: every cell drawn since the last clear
//! - [`RenderAdapter`]: the frame rendering seam, with a Cairo implementation

pub mod color;
pub mod history;
pub mod point;
pub mod raster;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use history::PointHistory;
pub use point::Point;
pub use render::{CairoRenderer, Palette, RenderAdapter, SidebarChrome, render_frame};
