//! Drawing state machine and input state management.

use super::radius::RadiusInput;
use crate::draw::{Point, PointHistory, raster};
use crate::input::{
    events::InputEvent,
    layout::Layout,
    tool::{Algorithm, SidebarItem},
};
use std::time::Instant;

/// Progress of the two-click line gesture.
///
/// Circles never leave `Idle`: a single click completes them. Radius text
/// entry is tracked separately by [`RadiusInput`] because it only decides
/// where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingState {
    /// Waiting for the first click of a gesture
    #[default]
    Idle,
    /// A line start point was placed; the next drawing click completes it
    AwaitingSecondPoint,
}

/// Parameters collected for the next algorithm run.
///
/// Fields are filled in as clicks and radius commits arrive and persist
/// between gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingGesture {
    /// Line start, or circle center
    pub start: Point,
    /// Line end
    pub end: Point,
    /// Committed circle radius (0 until the first valid commit)
    pub radius: i32,
}

/// Main input state containing all drawing session state.
///
/// Owns the active algorithm, the gesture in progress, the radius text box
/// and the accumulated history. Every input event goes through
/// [`handle_event`](InputState::handle_event), which may run an algorithm
/// inline and append its output to the history.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Currently selected algorithm
    pub algorithm: Algorithm,
    /// Line gesture progress
    pub state: DrawingState,
    /// Parameters for the next run
    pub gesture: PendingGesture,
    /// Radius text box
    pub radius_input: RadiusInput,
    /// Every rasterized cell since the last clear
    pub history: PointHistory,
    /// Window geometry used for hit testing
    pub layout: Layout,
    /// Whether the event source asked to close the window
    pub should_exit: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl InputState {
    /// Creates an idle state with the default algorithm and an empty history.
    pub fn new(layout: Layout) -> Self {
        Self {
            algorithm: Algorithm::default(),
            state: DrawingState::Idle,
            gesture: PendingGesture::default(),
            radius_input: RadiusInput::new(),
            history: PointHistory::new(),
            layout,
            should_exit: false,
        }
    }

    /// Routes one input event to the matching handler.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Close => {
                log::info!("Close requested");
                self.should_exit = true;
            }
            InputEvent::MousePress { button, x, y } => self.on_mouse_press(button, x, y),
            InputEvent::KeyPress(key) => self.on_key_press(key),
        }
    }

    /// Selects an algorithm.
    ///
    /// A line gesture in progress is kept, so its start point survives a
    /// switch to another line algorithm (or a detour through Circle).
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        if self.algorithm != algorithm {
            log::info!("Switched from {} to {}", self.algorithm, algorithm);
        }
        self.algorithm = algorithm;
    }

    /// Applies a sidebar tool row.
    pub fn apply_sidebar_item(&mut self, item: SidebarItem) {
        match item {
            SidebarItem::Algorithm(algorithm) => self.select_algorithm(algorithm),
            SidebarItem::Clear => self.clear(),
        }
    }

    /// Empties the history and moves both gesture points back to the origin.
    ///
    /// The line gesture state and the last execution timing are left as
    /// they are.
    pub fn clear(&mut self) {
        log::info!("Clearing {} drawn cells", self.history.len());
        self.history.clear();
        self.gesture.start = Point::ORIGIN;
        self.gesture.end = Point::ORIGIN;
    }

    /// Runs the selected algorithm on the pending gesture and appends its
    /// output to the history.
    ///
    /// Only the algorithm call itself is timed.
    pub(super) fn run_algorithm(&mut self) {
        let algorithm = self.algorithm;
        let PendingGesture { start, end, radius } = self.gesture;

        let started = Instant::now();
        let points = match algorithm {
            Algorithm::StepByStep => raster::step_by_step(start, end),
            Algorithm::Dda => raster::dda(start, end),
            Algorithm::Bresenham => raster::bresenham_line(start, end),
            Algorithm::Circle => raster::bresenham_circle(start, radius),
        };
        let elapsed = started.elapsed();

        if algorithm.is_line() {
            log::debug!(
                "{algorithm} {start} -> {end}: {} cells in {:.6}s",
                points.len(),
                elapsed.as_secs_f64()
            );
        } else {
            log::debug!(
                "{algorithm} at {start} r={radius}: {} cells in {:.6}s",
                points.len(),
                elapsed.as_secs_f64()
            );
        }

        self.history.append(points, elapsed);
    }
}
