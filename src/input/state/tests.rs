use super::*;
use crate::draw::Point;
use crate::input::{Algorithm, InputEvent, Key, Layout, MouseButton};

fn create_test_input_state() -> InputState {
    InputState::new(Layout {
        cell_size: 5,
        grid_width: 120,
        grid_height: 120,
        sidebar_width: 200,
    })
}

/// Left-clicks the middle of a grid cell.
fn click_cell(state: &mut InputState, x: i32, y: i32) {
    state.handle_event(InputEvent::MousePress {
        button: MouseButton::Left,
        x: x * 5 + 2,
        y: y * 5 + 2,
    });
}

fn click_radius_box(state: &mut InputState) {
    state.on_mouse_press(MouseButton::Left, 615, 60);
}

/// Left-clicks sidebar tool row `index` (0 = Step by Step, 4 = Clear).
fn click_tool_row(state: &mut InputState, index: i32) {
    state.on_mouse_press(MouseButton::Left, 650, 120 + index * 30 + 15);
}

fn type_keys(state: &mut InputState, text: &str) {
    for c in text.chars() {
        state.handle_event(InputEvent::KeyPress(Key::Char(c)));
    }
}

fn press(state: &mut InputState, key: Key) {
    state.handle_event(InputEvent::KeyPress(key));
}

#[test]
fn test_initial_state() {
    let state = create_test_input_state();
    assert_eq!(state.algorithm, Algorithm::Bresenham);
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.gesture, PendingGesture::default());
    assert!(!state.radius_input.is_editing());
    assert!(state.history.is_empty());
    assert!(!state.should_exit);
}

#[test]
fn test_bresenham_two_click_gesture() {
    let mut state = create_test_input_state();

    click_cell(&mut state, 0, 0);
    assert_eq!(state.state, DrawingState::AwaitingSecondPoint);
    assert!(state.history.is_empty());

    click_cell(&mut state, 5, 2);
    assert_eq!(state.state, DrawingState::Idle);
    let expected: Vec<Point> = [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]
        .into_iter()
        .map(Point::from)
        .collect();
    assert_eq!(state.history.points(), expected.as_slice());
    assert!(state.history.last_execution().is_some());
}

#[test]
fn test_each_line_algorithm_is_dispatched() {
    for (row, algorithm) in Algorithm::LINES.into_iter().enumerate() {
        let mut state = create_test_input_state();
        click_tool_row(&mut state, row as i32);
        assert_eq!(state.algorithm, algorithm);

        click_cell(&mut state, 0, 0);
        click_cell(&mut state, 2, 1);

        let expected = match algorithm {
            Algorithm::StepByStep => crate::draw::raster::step_by_step(
                Point::new(0, 0),
                Point::new(2, 1),
            ),
            Algorithm::Dda => crate::draw::raster::dda(Point::new(0, 0), Point::new(2, 1)),
            _ => crate::draw::raster::bresenham_line(Point::new(0, 0), Point::new(2, 1)),
        };
        assert_eq!(state.history.points(), expected.as_slice(), "{algorithm}");
    }
}

#[test]
fn test_successive_gestures_accumulate() {
    let mut state = create_test_input_state();
    click_cell(&mut state, 0, 0);
    click_cell(&mut state, 3, 0);
    click_cell(&mut state, 10, 10);
    click_cell(&mut state, 10, 12);

    assert_eq!(state.history.len(), 4 + 3);
    assert_eq!(state.history.points()[4], Point::new(10, 10));
}

#[test]
fn test_circle_single_click_uses_committed_radius() {
    let mut state = create_test_input_state();
    click_tool_row(&mut state, 3);
    assert_eq!(state.algorithm, Algorithm::Circle);

    click_radius_box(&mut state);
    type_keys(&mut state, "5");
    press(&mut state, Key::Return);
    assert_eq!(state.gesture.radius, 5);

    click_cell(&mut state, 20, 20);
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.gesture.start, Point::new(20, 20));
    assert_eq!(
        state.history.points(),
        crate::draw::raster::bresenham_circle(Point::new(20, 20), 5).as_slice()
    );
}

#[test]
fn test_circle_with_default_radius_still_runs() {
    let mut state = create_test_input_state();
    click_tool_row(&mut state, 3);
    click_cell(&mut state, 7, 7);

    assert_eq!(state.history.len(), 8);
    assert!(state.history.points().iter().all(|p| *p == Point::new(7, 7)));
}

#[test]
fn test_radius_commit_and_rejection() {
    let mut state = create_test_input_state();
    click_radius_box(&mut state);
    assert!(state.radius_input.is_editing());

    type_keys(&mut state, "7");
    press(&mut state, Key::Return);
    assert_eq!(state.gesture.radius, 7);
    assert_eq!(state.radius_input.text(), "");

    type_keys(&mut state, "a7");
    press(&mut state, Key::Return);
    assert_eq!(state.gesture.radius, 7, "rejected entry keeps previous radius");
    assert_eq!(state.radius_input.text(), "");
}

#[test]
fn test_empty_commit_keeps_radius() {
    let mut state = create_test_input_state();
    click_radius_box(&mut state);
    type_keys(&mut state, "12");
    press(&mut state, Key::Return);
    press(&mut state, Key::Return);
    assert_eq!(state.gesture.radius, 12);
}

#[test]
fn test_backspace_edits_buffer() {
    let mut state = create_test_input_state();
    click_radius_box(&mut state);
    press(&mut state, Key::Backspace);
    type_keys(&mut state, "345");
    press(&mut state, Key::Backspace);
    assert_eq!(state.radius_input.text(), "34");
    press(&mut state, Key::Return);
    assert_eq!(state.gesture.radius, 34);
}

#[test]
fn test_keys_ignored_when_not_editing() {
    let mut state = create_test_input_state();
    type_keys(&mut state, "42");
    press(&mut state, Key::Return);
    assert_eq!(state.radius_input.text(), "");
    assert_eq!(state.gesture.radius, 0);
}

#[test]
fn test_radius_box_click_toggles_editing() {
    let mut state = create_test_input_state();
    click_radius_box(&mut state);
    assert!(state.radius_input.is_editing());
    click_radius_box(&mut state);
    assert!(!state.radius_input.is_editing());
}

#[test]
fn test_other_sidebar_clicks_stop_editing() {
    let mut state = create_test_input_state();
    click_radius_box(&mut state);
    type_keys(&mut state, "9");

    // Empty sidebar area above the radius box
    state.on_mouse_press(MouseButton::Left, 700, 20);
    assert!(!state.radius_input.is_editing());

    // Typing now goes nowhere
    type_keys(&mut state, "1");
    assert_eq!(state.radius_input.text(), "9");

    click_radius_box(&mut state);
    click_tool_row(&mut state, 1);
    assert!(!state.radius_input.is_editing());
    assert_eq!(state.algorithm, Algorithm::Dda);
}

#[test]
fn test_canvas_clicks_do_not_change_editing() {
    let mut state = create_test_input_state();
    click_radius_box(&mut state);
    click_cell(&mut state, 1, 1);
    assert!(state.radius_input.is_editing());
    assert_eq!(state.state, DrawingState::AwaitingSecondPoint);
}

#[test]
fn test_sidebar_clicks_never_reach_gesture() {
    let mut state = create_test_input_state();
    click_cell(&mut state, 4, 4);

    click_radius_box(&mut state);
    state.on_mouse_press(MouseButton::Left, 700, 400);
    assert_eq!(state.state, DrawingState::AwaitingSecondPoint);
    assert_eq!(state.gesture.start, Point::new(4, 4));
    assert!(state.history.is_empty());
}

#[test]
fn test_clicks_outside_window_keep_pending_gesture() {
    let mut state = create_test_input_state();
    click_cell(&mut state, 4, 4);
    state.on_mouse_press(MouseButton::Left, -10, 50);
    state.on_mouse_press(MouseButton::Left, 50, 9000);
    assert_eq!(state.state, DrawingState::AwaitingSecondPoint);

    click_cell(&mut state, 6, 4);
    assert_eq!(state.history.len(), 3);
}

#[test]
fn test_non_primary_buttons_are_ignored() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Right, 10, 10);
    state.on_mouse_press(MouseButton::Middle, 10, 10);
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.gesture.start, Point::ORIGIN);
}

#[test]
fn test_switching_algorithm_keeps_pending_start() {
    let mut state = create_test_input_state();
    click_cell(&mut state, 2, 2);

    click_tool_row(&mut state, 1);
    assert_eq!(state.algorithm, Algorithm::Dda);
    assert_eq!(state.state, DrawingState::AwaitingSecondPoint);

    click_cell(&mut state, 4, 2);
    assert_eq!(
        state.history.points(),
        crate::draw::raster::dda(Point::new(2, 2), Point::new(4, 2)).as_slice()
    );
}

#[test]
fn test_clear_empties_history_and_resets_points() {
    let mut state = create_test_input_state();
    click_cell(&mut state, 3, 3);
    click_cell(&mut state, 9, 5);
    assert!(!state.history.is_empty());
    let timing = state.history.last_execution();

    click_tool_row(&mut state, 4);
    assert!(state.history.is_empty());
    assert_eq!(state.gesture.start, Point::ORIGIN);
    assert_eq!(state.gesture.end, Point::ORIGIN);
    assert_eq!(state.history.last_execution(), timing);
    // Clear is an action, not a selection
    assert_eq!(state.algorithm, Algorithm::Bresenham);

    click_cell(&mut state, 0, 0);
    click_cell(&mut state, 2, 0);
    assert_eq!(state.history.len(), 3);
}

#[test]
fn test_clear_mid_gesture_completes_from_origin() {
    let mut state = create_test_input_state();
    click_cell(&mut state, 8, 8);
    click_tool_row(&mut state, 4);
    assert_eq!(state.state, DrawingState::AwaitingSecondPoint);

    click_cell(&mut state, 3, 0);
    assert_eq!(state.history.points().first(), Some(&Point::ORIGIN));
    assert_eq!(state.history.points().last(), Some(&Point::new(3, 0)));
}

#[test]
fn test_close_event_requests_exit() {
    let mut state = create_test_input_state();
    state.handle_event(InputEvent::Close);
    assert!(state.should_exit);
}

#[test]
fn test_huge_radius_is_rejected_before_circle_click() {
    let mut state = create_test_input_state();
    click_tool_row(&mut state, 3);
    click_radius_box(&mut state);
    type_keys(&mut state, "4");
    press(&mut state, Key::Return);
    type_keys(&mut state, "2147483600");
    press(&mut state, Key::Return);
    assert_eq!(state.gesture.radius, 4);

    click_cell(&mut state, 100, 60);
    assert_eq!(
        state.history.points(),
        crate::draw::raster::bresenham_circle(Point::new(100, 60), 4).as_slice()
    );
}

#[test]
fn test_circle_click_moves_pending_line_start() {
    let mut state = create_test_input_state();
    click_cell(&mut state, 2, 2);
    assert_eq!(state.state, DrawingState::AwaitingSecondPoint);

    // Circle shares the start point with the pending line
    click_tool_row(&mut state, 3);
    click_cell(&mut state, 20, 20);
    assert_eq!(state.state, DrawingState::AwaitingSecondPoint);
    assert_eq!(state.gesture.start, Point::new(20, 20));
    assert_eq!(state.history.len(), 8);

    click_tool_row(&mut state, 2);
    click_cell(&mut state, 23, 20);
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(
        &state.history.points()[8..],
        &[
            Point::new(20, 20),
            Point::new(21, 20),
            Point::new(22, 20),
            Point::new(23, 20)
        ]
    );
}
