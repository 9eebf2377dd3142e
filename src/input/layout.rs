//! Screen layout: drawing region, sidebar and hit testing.
//!
//! The window is the drawing grid on the left followed by a fixed-width
//! sidebar on the right. Both share the window height, which is the grid
//! height in pixels.

use crate::config::Config;
use crate::draw::Point;
use crate::input::tool::SidebarItem;
use crate::util::Rect;

// ============================================================================
// Sidebar Layout Constants (not configurable)
// ============================================================================

/// Horizontal inset of sidebar content from the sidebar's left edge
pub const SIDEBAR_MARGIN: i32 = 10;
/// Top of the radius input box
pub const RADIUS_BOX_TOP: i32 = 50;
/// Radius input box width
pub const RADIUS_BOX_WIDTH: i32 = 180;
/// Radius input box height
pub const RADIUS_BOX_HEIGHT: i32 = 30;
/// Baseline area of the algorithm label
pub const ALGORITHM_LABEL_TOP: i32 = 10;
/// Baseline area of the execution time label
pub const TIMING_LABEL_TOP: i32 = 90;
/// Top of the first tool row
pub const TOOL_ROWS_TOP: i32 = 120;
/// Height of each tool row
pub const TOOL_ROW_HEIGHT: i32 = 30;

/// Where a pixel position landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Inside the drawing grid, converted to a cell
    Drawing(Point),
    /// Inside the sidebar
    Sidebar(SidebarHit),
    /// Outside the window
    Outside,
}

/// Which part of the sidebar was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarHit {
    /// The radius input box
    RadiusInput,
    /// One of the tool rows
    Tool(SidebarItem),
    /// Anywhere else in the sidebar
    Empty,
}

/// Fixed window geometry derived from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Pixels per grid cell
    pub cell_size: i32,
    /// Drawing grid width in cells
    pub grid_width: i32,
    /// Drawing grid height in cells
    pub grid_height: i32,
    /// Sidebar width in pixels
    pub sidebar_width: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Layout {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cell_size: config.grid.cell_size as i32,
            grid_width: config.grid.width_cells as i32,
            grid_height: config.grid.height_cells as i32,
            sidebar_width: config.sidebar.width as i32,
        }
    }

    /// Width of the drawing region in pixels.
    pub fn drawing_width(&self) -> i32 {
        self.grid_width * self.cell_size
    }

    /// Window (and drawing region) height in pixels.
    pub fn window_height(&self) -> i32 {
        self.grid_height * self.cell_size
    }

    /// Full window width in pixels.
    pub fn window_width(&self) -> i32 {
        self.drawing_width() + self.sidebar_width
    }

    /// Left edge of the sidebar in pixels.
    pub fn sidebar_left(&self) -> i32 {
        self.drawing_width()
    }

    pub fn sidebar_rect(&self) -> Rect {
        Rect {
            x: self.sidebar_left(),
            y: 0,
            width: self.sidebar_width,
            height: self.window_height(),
        }
    }

    pub fn radius_box_rect(&self) -> Rect {
        Rect {
            x: self.sidebar_left() + SIDEBAR_MARGIN,
            y: RADIUS_BOX_TOP,
            width: RADIUS_BOX_WIDTH,
            height: RADIUS_BOX_HEIGHT,
        }
    }

    /// Rectangle of the tool row at `index` (0 = top).
    pub fn tool_row_rect(&self, index: usize) -> Rect {
        Rect {
            x: self.sidebar_left(),
            y: TOOL_ROWS_TOP + index as i32 * TOOL_ROW_HEIGHT,
            width: self.sidebar_width,
            height: TOOL_ROW_HEIGHT,
        }
    }

    /// Whether a grid cell lies within the drawable grid.
    pub fn contains_cell(&self, cell: Point) -> bool {
        (0..self.grid_width).contains(&cell.x) && (0..self.grid_height).contains(&cell.y)
    }

    /// Converts a pixel position inside the drawing region to a grid cell.
    pub fn pixel_to_cell(&self, x: i32, y: i32) -> Point {
        Point::new(x.div_euclid(self.cell_size), y.div_euclid(self.cell_size))
    }

    /// Classifies a pixel position.
    pub fn hit_test(&self, x: i32, y: i32) -> Region {
        if y < 0 || y >= self.window_height() || x < 0 {
            return Region::Outside;
        }

        if x < self.drawing_width() {
            return Region::Drawing(self.pixel_to_cell(x, y));
        }

        if !self.sidebar_rect().contains(x, y) {
            return Region::Outside;
        }

        if self.radius_box_rect().contains(x, y) {
            return Region::Sidebar(SidebarHit::RadiusInput);
        }

        let hit = SidebarItem::ALL
            .iter()
            .enumerate()
            .find(|(index, _)| self.tool_row_rect(*index).contains(x, y))
            .map_or(SidebarHit::Empty, |(_, item)| SidebarHit::Tool(*item));
        Region::Sidebar(hit)
    }
}
