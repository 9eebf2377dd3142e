//! Side-by-side algorithm comparison reports.

use crate::draw::{Point, raster};
use crate::input::Algorithm;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::time::Instant;

/// Largest absolute coordinate accepted for a comparison.
///
/// Step by step emits `|dx| * max(|dx|, |dy|) + 1` samples, so the bound
/// keeps a report within a few million cells.
pub const MAX_COORDINATE: i32 = 1_000;

/// One algorithm's output for a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Algorithm label
    pub algorithm: &'static str,
    /// Emitted cells, duplicates included
    pub count: usize,
    /// Number of distinct cells
    pub distinct: usize,
    /// Run time in seconds
    pub seconds: f64,
    /// Emitted cells in generation order
    pub points: Vec<Point>,
}

impl Comparison {
    fn measure(algorithm: Algorithm, run: impl FnOnce() -> Vec<Point>) -> Self {
        let started = Instant::now();
        let points = run();
        let seconds = started.elapsed().as_secs_f64();
        let distinct = points.iter().collect::<BTreeSet<_>>().len();

        Self {
            algorithm: algorithm.label(),
            count: points.len(),
            distinct,
            seconds,
            points,
        }
    }
}

/// Runs every line algorithm on the same segment.
pub fn compare_lines(start: Point, end: Point) -> Vec<Comparison> {
    Algorithm::LINES
        .into_iter()
        .map(|algorithm| {
            Comparison::measure(algorithm, || match algorithm {
                Algorithm::StepByStep => raster::step_by_step(start, end),
                Algorithm::Dda => raster::dda(start, end),
                _ => raster::bresenham_line(start, end),
            })
        })
        .collect()
}

/// Runs the circle algorithm.
pub fn compare_circle(center: Point, radius: i32) -> Vec<Comparison> {
    vec![Comparison::measure(Algorithm::Circle, || {
        raster::bresenham_circle(center, radius)
    })]
}

/// Formats comparisons as a plain-text report.
pub fn format_table(comparisons: &[Comparison]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:>7} {:>9} {:>12}",
        "algorithm", "points", "distinct", "seconds"
    );
    for c in comparisons {
        let _ = writeln!(
            out,
            "{:<14} {:>7} {:>9} {:>12.6}",
            c.algorithm, c.count, c.distinct, c.seconds
        );
    }
    for c in comparisons {
        let cells: Vec<String> = c.points.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "\n{}: {}", c.algorithm, cells.join(" "));
    }
    out
}
