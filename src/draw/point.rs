//! Grid cell coordinates.

use serde::Serialize;
use std::fmt;

/// A single grid cell addressed by integer (x, y) coordinates.
///
/// Grid coordinates are independent of the on-screen cell size; the
/// rasterization algorithms work exclusively in this space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Point {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Point {
    /// The grid origin (0, 0).
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
