use crate::draw::Point;
use crate::input::{
    events::MouseButton,
    layout::{Region, SidebarHit},
};

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate in pixels
    /// * `y` - Mouse Y coordinate in pixels
    ///
    /// # Behavior
    /// - Only the left button does anything
    /// - Drawing region: advances the gesture for the active algorithm
    /// - Sidebar: toggles radius editing or applies a tool row
    /// - Anywhere else: ignored, a pending line gesture is kept
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            log::debug!("Ignoring {button:?} button press at ({x}, {y})");
            return;
        }

        match self.layout.hit_test(x, y) {
            Region::Drawing(cell) => self.on_canvas_click(cell),
            Region::Sidebar(hit) => self.on_sidebar_click(hit),
            Region::Outside => {
                log::debug!("Ignoring click outside the window at ({x}, {y})");
            }
        }
    }

    fn on_sidebar_click(&mut self, hit: SidebarHit) {
        match hit {
            SidebarHit::RadiusInput => {
                let editing = self.radius_input.toggle();
                log::debug!("Radius input editing: {editing}");
            }
            SidebarHit::Tool(item) => {
                self.radius_input.deactivate();
                self.apply_sidebar_item(item);
            }
            SidebarHit::Empty => self.radius_input.deactivate(),
        }
    }

    fn on_canvas_click(&mut self, cell: Point) {
        if !self.algorithm.is_line() {
            // Completes on a single click. The center shares `start` with a
            // pending line, which then continues from here.
            self.gesture.start = cell;
            self.run_algorithm();
            return;
        }

        match self.state {
            DrawingState::Idle => {
                self.gesture.start = cell;
                self.state = DrawingState::AwaitingSecondPoint;
                log::debug!("Line start placed at {cell}");
            }
            DrawingState::AwaitingSecondPoint => {
                self.gesture.end = cell;
                self.run_algorithm();
                self.state = DrawingState::Idle;
            }
        }
    }
}
