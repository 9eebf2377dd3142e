//! Accumulated drawing history.

use super::point::Point;
use std::time::Duration;

/// Every cell rasterized since the last clear, in generation order.
///
/// The history only grows: each completed algorithm run appends its full
/// output in one step, and the only way to remove cells is [`clear`],
/// which empties the whole collection. It also remembers how long the most
/// recent run took; that timing is overwritten on every append and is not
/// touched by clearing.
///
/// [`clear`]: PointHistory::clear
#[derive(Debug, Clone, Default)]
pub struct PointHistory {
    points: Vec<Point>,
    last_execution: Option<Duration>,
}

impl PointHistory {
    /// Creates an empty history with no recorded timing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one algorithm run's output and records how long it took.
    pub fn append(&mut self, points: Vec<Point>, elapsed: Duration) {
        self.points.extend(points);
        self.last_execution = Some(elapsed);
    }

    /// Removes every cell. The last execution timing is kept.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Duration of the most recent run, if any run happened yet.
    pub fn last_execution(&self) -> Option<Duration> {
        self.last_execution
    }

    /// Duration of the most recent run in seconds (0.0 before the first run).
    pub fn last_execution_secs(&self) -> f64 {
        self.last_execution.map_or(0.0, |d| d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order_across_runs() {
        let mut history = PointHistory::new();
        history.append(vec![Point::new(0, 0), Point::new(1, 1)], Duration::ZERO);
        history.append(vec![Point::new(5, 5)], Duration::ZERO);

        assert_eq!(
            history.points(),
            &[Point::new(0, 0), Point::new(1, 1), Point::new(5, 5)]
        );
    }

    #[test]
    fn timing_is_overwritten_not_accumulated() {
        let mut history = PointHistory::new();
        assert_eq!(history.last_execution(), None);
        assert_eq!(history.last_execution_secs(), 0.0);

        history.append(vec![Point::ORIGIN], Duration::from_millis(40));
        history.append(vec![Point::ORIGIN], Duration::from_millis(3));

        assert_eq!(history.last_execution(), Some(Duration::from_millis(3)));
    }

    #[test]
    fn clear_empties_points_but_keeps_timing() {
        let mut history = PointHistory::new();
        history.append(vec![Point::ORIGIN; 12], Duration::from_micros(7));

        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.last_execution(), Some(Duration::from_micros(7)));
    }
}
