//! Grid rasterization algorithms.
//!
//! Every function here is pure: identical inputs always produce the same
//! ordered sequence of cells, and the sequence length is bounded by the
//! size of the primitive. Consecutive duplicates are part of the output and
//! are never filtered, since the point of the library is to show exactly
//! what each algorithm emits.
//!
//! The floating-point algorithms ([`step_by_step`] and [`dda`]) round both
//! coordinates with round-half-to-even. A sample landing exactly on `.5`
//! goes to the even neighbour, so `0.5 -> 0` and `1.5 -> 2`.

use super::point::Point;

/// Rounds a sample coordinate to the nearest cell, ties to even.
#[inline]
fn round_cell(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Naive incremental line stepping using the slope-intercept form.
///
/// Vertical segments are special-cased and return every cell between the
/// two rows in ascending order. All other segments are sampled along x in
/// increments of `1 / max(|dx|, |dy|)`, evaluating `y = k * x + b` at each
/// sample, so steep lines produce many samples per column.
pub fn step_by_step(start: Point, end: Point) -> Vec<Point> {
    if start.x == end.x {
        let (low, high) = (start.y.min(end.y), start.y.max(end.y));
        return (low..=high).map(|y| Point::new(start.x, y)).collect();
    }

    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    let k = dy as f64 / dx as f64;
    let b = f64::from(start.y) - k * f64::from(start.x);

    let divisions = dx.abs().max(dy.abs());
    let samples = dx.abs() * divisions;
    let direction = dx.signum() as f64;

    // Sample positions are derived from the index rather than accumulated so
    // the final sample lands exactly on end.x.
    (0..=samples)
        .map(|i| {
            let x = f64::from(start.x) + direction * (i as f64 / divisions as f64);
            let y = k * x + b;
            Point::new(round_cell(x), round_cell(y))
        })
        .collect()
}

/// Digital differential analyzer.
///
/// Takes `max(|dx|, |dy|)` equal steps, accumulating the per-axis increment
/// in floating point and emitting the rounded position before every step.
/// Coincident endpoints yield the start cell alone.
pub fn dda(start: Point, end: Point) -> Vec<Point> {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![start];
    }

    let x_increment = dx as f64 / steps as f64;
    let y_increment = dy as f64 / steps as f64;
    let mut x = f64::from(start.x);
    let mut y = f64::from(start.y);

    let mut points = Vec::with_capacity(steps as usize + 1);
    for _ in 0..=steps {
        points.push(Point::new(round_cell(x), round_cell(y)));
        x += x_increment;
        y += y_increment;
    }
    points
}

/// Integer-only Bresenham line, valid in every octant.
///
/// Emits exactly `max(|dx|, |dy|) + 1` cells, starting at `start` and
/// ending at `end`. Swapping the endpoints yields the reversed sequence.
pub fn bresenham_line(start: Point, end: Point) -> Vec<Point> {
    // The error term breaks ties toward the walk direction, so always walk
    // from the smaller endpoint.
    if end < start {
        let mut points: Vec<Point> = walk_bresenham(end, start).collect();
        points.reverse();
        return points;
    }
    walk_bresenham(start, end).collect()
}

/// Lazily walks the error-term line from `start` to `end`.
///
/// Arithmetic is done in `i64` so spans wider than `i32::MAX` cannot
/// overflow; every emitted coordinate lies between the two endpoints.
fn walk_bresenham(start: Point, end: Point) -> impl Iterator<Item = Point> {
    let (x1, y1) = (i64::from(end.x), i64::from(end.y));
    let mut x = i64::from(start.x);
    let mut y = i64::from(start.y);
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let mut done = false;

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let point = Point::new(x as i32, y as i32);
        if x == x1 && y == y1 {
            done = true;
            return Some(point);
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
        Some(point)
    })
}

/// Largest radius [`bresenham_circle`] rasterizes; larger values are
/// clamped to it.
pub const MAX_RADIUS: i32 = 10_000;

/// Midpoint (Bresenham) circle.
///
/// Walks one octant from `(r, 0)` while `x >= y` and mirrors every step into
/// all eight octants. Cells on octant boundaries are emitted once per
/// reflection, so the output contains repeats. The radius is clamped to
/// `0..=MAX_RADIUS`; zero yields eight copies of the center. Coordinates
/// that would leave the `i32` range saturate at its bounds.
pub fn bresenham_circle(center: Point, radius: i32) -> Vec<Point> {
    let r = i64::from(radius.clamp(0, MAX_RADIUS));
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let cell = |ox: i64, oy: i64| {
        let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        Point::new(clamp(cx + ox), clamp(cy + oy))
    };

    let mut x = r;
    let mut y = 0;
    let mut d = 1 - r;

    let mut points = Vec::new();
    while x >= y {
        for (ox, oy) in [
            (x, y),
            (y, x),
            (-x, y),
            (-y, x),
            (x, -y),
            (-x, -y),
            (y, -x),
            (-y, -x),
        ] {
            points.push(cell(ox, oy));
        }

        y += 1;
        if d < 0 {
            d += 2 * y + 1;
        } else {
            x -= 1;
            d += 2 * y - 2 * x + 1;
        }
    }
    points
}
