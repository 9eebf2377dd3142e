//! Frame rendering: the render adapter seam and its Cairo implementation.

use super::color::{self, Color};
use super::point::Point;
use crate::config::ColorsConfig;
use crate::input::{Algorithm, InputState, Layout};

/// Colors used to paint a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Drawing region background
    pub background: Color,
    /// Thin cell grid
    pub grid_lines: Color,
    /// Center axes
    pub axis_lines: Color,
    /// Rasterized cells
    pub points: Color,
    /// Sidebar panel fill
    pub sidebar: Color,
    /// Sidebar text and active outlines
    pub text: Color,
    /// Unselected tool rows and the idle radius box outline
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: color::BLACK,
            grid_lines: color::DARK_GRAY,
            axis_lines: color::WHITE,
            points: color::RED,
            sidebar: color::BLUE,
            text: color::WHITE,
            muted: color::BLACK,
        }
    }
}

impl Palette {
    pub fn from_config(colors: &ColorsConfig) -> Self {
        Self {
            background: colors.background.to_color(),
            grid_lines: colors.grid_lines.to_color(),
            axis_lines: colors.axis_lines.to_color(),
            points: colors.points.to_color(),
            sidebar: colors.sidebar.to_color(),
            text: colors.text.to_color(),
            muted: colors.muted.to_color(),
        }
    }
}

/// Semantic sidebar content handed to the render adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarChrome<'a> {
    /// Currently selected algorithm
    pub algorithm: Algorithm,
    /// Radius buffer contents
    pub radius_text: &'a str,
    /// Whether keys go to the radius buffer
    pub editing: bool,
    /// Whether the pending radius entry was invalidated by a non-digit
    pub rejected: bool,
    /// Duration of the last algorithm run in seconds
    pub last_execution_secs: f64,
}

impl<'a> SidebarChrome<'a> {
    pub fn from_state(state: &'a InputState) -> Self {
        Self {
            algorithm: state.algorithm,
            radius_text: state.radius_input.text(),
            editing: state.radius_input.is_editing(),
            rejected: state.radius_input.is_rejected(),
            last_execution_secs: state.history.last_execution_secs(),
        }
    }
}

/// Drawing surface the frame loop renders through.
///
/// Implementations own every visual decision; callers only supply semantic
/// data (cells, the selected algorithm, buffer contents, timing).
pub trait RenderAdapter {
    /// Resets the surface to the background before a full redraw.
    fn begin_frame(&mut self);
    /// Fills one grid cell.
    fn draw_pixel_cell(&mut self, cell: Point, color: Color);
    /// Draws the thin cell grid over the drawing region.
    fn draw_grid_lines(&mut self);
    /// Draws the horizontal and vertical center axes.
    fn draw_axis_lines(&mut self);
    /// Draws the sidebar panel, labels, radius box and tool rows.
    fn draw_sidebar_chrome(&mut self, chrome: &SidebarChrome<'_>);
}

/// Redraws a complete frame: background, grid, axes, sidebar, then every
/// history cell in insertion order.
///
/// Cells outside the drawing grid (circles can spill past the edges) are
/// skipped so they never paint over the sidebar.
pub fn render_frame<R: RenderAdapter + ?Sized>(
    renderer: &mut R,
    state: &InputState,
    point_color: Color,
) {
    renderer.begin_frame();
    renderer.draw_grid_lines();
    renderer.draw_axis_lines();
    renderer.draw_sidebar_chrome(&SidebarChrome::from_state(state));

    for cell in state.history.points() {
        if state.layout.contains_cell(*cell) {
            renderer.draw_pixel_cell(*cell, point_color);
        }
    }
}

/// Render adapter drawing onto a Cairo context.
pub struct CairoRenderer<'a> {
    ctx: &'a cairo::Context,
    layout: Layout,
    palette: Palette,
}

impl<'a> CairoRenderer<'a> {
    pub fn new(ctx: &'a cairo::Context, layout: Layout, palette: Palette) -> Self {
        Self {
            ctx,
            layout,
            palette,
        }
    }
}

impl RenderAdapter for CairoRenderer<'_> {
    fn begin_frame(&mut self) {
        self.palette.background.apply(self.ctx);
        let _ = self.ctx.paint();
    }

    fn draw_pixel_cell(&mut self, cell: Point, color: Color) {
        let size = f64::from(self.layout.cell_size);
        color.apply(self.ctx);
        self.ctx.rectangle(
            f64::from(cell.x) * size,
            f64::from(cell.y) * size,
            size,
            size,
        );
        let _ = self.ctx.fill();
    }

    fn draw_grid_lines(&mut self) {
        let ctx = self.ctx;
        let width = self.layout.drawing_width();
        let height = self.layout.window_height();
        let step = self.layout.cell_size.max(1) as usize;

        self.palette.grid_lines.apply(ctx);
        ctx.set_line_width(1.0);
        // Offset by half a pixel so 1px lines land on pixel centers
        for x in (0..width).step_by(step) {
            ctx.move_to(f64::from(x) + 0.5, 0.0);
            ctx.line_to(f64::from(x) + 0.5, f64::from(height));
        }
        for y in (0..height).step_by(step) {
            ctx.move_to(0.0, f64::from(y) + 0.5);
            ctx.line_to(f64::from(width), f64::from(y) + 0.5);
        }
        let _ = ctx.stroke();
    }

    fn draw_axis_lines(&mut self) {
        let ctx = self.ctx;
        let width = f64::from(self.layout.drawing_width());
        let height = f64::from(self.layout.window_height());

        self.palette.axis_lines.apply(ctx);
        ctx.set_line_width(2.0);
        ctx.move_to(0.0, (height / 2.0).floor());
        ctx.line_to(width, (height / 2.0).floor());
        ctx.move_to((width / 2.0).floor(), 0.0);
        ctx.line_to((width / 2.0).floor(), height);
        let _ = ctx.stroke();
    }

    fn draw_sidebar_chrome(&mut self, chrome: &SidebarChrome<'_>) {
        crate::ui::render_sidebar(self.ctx, &self.layout, &self.palette, chrome);
    }
}
