//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing grid geometry.
///
/// Defines the pixel to grid conversion: a click at pixel (x, y) inside the
/// drawing region maps to cell (x / cell_size, y / cell_size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Pixels per grid cell (valid range: 1 - 50)
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Drawing region width in cells (valid range: 10 - 1000)
    #[serde(default = "default_grid_cells")]
    pub width_cells: u32,

    /// Drawing region height in cells (valid range: 10 - 1000)
    #[serde(default = "default_grid_cells")]
    pub height_cells: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            width_cells: default_grid_cells(),
            height_cells: default_grid_cells(),
        }
    }
}

/// Sidebar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SidebarConfig {
    /// Sidebar width in pixels (valid range: 200 - 600)
    /// The radius box and labels need at least 200 px
    #[serde(default = "default_sidebar_width")]
    pub width: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: default_sidebar_width(),
        }
    }
}

/// Frame colors. Each entry is a named color or an `[r, g, b]` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColorsConfig {
    /// Drawing region background
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Thin cell grid lines
    #[serde(default = "default_grid_lines")]
    pub grid_lines: ColorSpec,

    /// Center axis lines
    #[serde(default = "default_white")]
    pub axis_lines: ColorSpec,

    /// Rasterized cells
    #[serde(default = "default_points")]
    pub points: ColorSpec,

    /// Sidebar panel fill
    #[serde(default = "default_sidebar")]
    pub sidebar: ColorSpec,

    /// Sidebar text, selected tool and active radius box outline
    #[serde(default = "default_white")]
    pub text: ColorSpec,

    /// Unselected tools and idle radius box outline
    #[serde(default = "default_background")]
    pub muted: ColorSpec,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            grid_lines: default_grid_lines(),
            axis_lines: default_white(),
            points: default_points(),
            sidebar: default_sidebar(),
            text: default_white(),
            muted: default_background(),
        }
    }
}

/// Frame pacing.
///
/// Only used when replaying in real time; pacing never changes what gets
/// drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Target frames per second (valid range: 1 - 240)
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_cell_size() -> u32 {
    5
}

fn default_grid_cells() -> u32 {
    120
}

fn default_sidebar_width() -> u32 {
    200
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_grid_lines() -> ColorSpec {
    ColorSpec::Rgb([30, 30, 30])
}

fn default_white() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_points() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_sidebar() -> ColorSpec {
    ColorSpec::Rgb([0, 100, 255])
}

fn default_frame_rate() -> u32 {
    60
}
