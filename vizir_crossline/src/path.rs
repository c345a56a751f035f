// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-line path geometry.
//!
//! Everything here works in the marker's local coordinate space:
//! - `y` runs along the owning axis (the scale-converted value coordinate), and
//! - `x` runs perpendicular to it, from the axis line (`x = 0`) across the plot.
//!
//! The owning axis maps local space to the scene with a group transform; see
//! [`CrossLineNodes::transform`](crate::CrossLineNodes::transform).

use kurbo::{BezPath, Point};
use smallvec::SmallVec;

/// Ordered point list handed to renderers.
pub type PointList = SmallVec<[Point; 4]>;

/// The resolved marker rectangle in local coordinates.
///
/// For a single-value line `y_end` is `NaN`; consumers treat a non-finite `y_end` as coincident
/// with `y_start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossLineRect {
    /// Perpendicular start (the axis line).
    pub x_start: f64,
    /// Perpendicular end (`side_flag * grid_length`).
    pub x_end: f64,
    /// Value coordinate of the first (or only) boundary.
    pub y_start: f64,
    /// Value coordinate of the second boundary, `NaN` for a single value.
    pub y_end: f64,
}

impl CrossLineRect {
    /// Creates a rectangle from its four extents.
    pub fn new(x_start: f64, x_end: f64, y_start: f64, y_end: f64) -> Self {
        Self {
            x_start,
            x_end,
            y_start,
            y_end,
        }
    }

    /// Returns `y_end` if it is a usable coordinate.
    pub fn label_y_end(&self) -> Option<f64> {
        self.y_end.is_finite().then_some(self.y_end)
    }

    /// Midpoint of the two value boundaries, or `y_start` when there is no second boundary.
    pub fn y_mid(&self) -> f64 {
        match self.label_y_end() {
            Some(y_end) => (self.y_start + y_end) * 0.5,
            None => self.y_start,
        }
    }

    /// The four polygon corners: `(xs,ys) (xe,ys) (xe,ye) (xs,ye)`.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_start, self.y_start),
            Point::new(self.x_end, self.y_start),
            Point::new(self.x_end, self.y_end),
            Point::new(self.x_start, self.y_end),
        ]
    }

    /// The corners as an ordered point list.
    ///
    /// Read pairwise this is the two boundary strokes `p0 -> p1` and `p2 -> p3`; read as a ring
    /// it is the range polygon.
    pub fn points(&self) -> PointList {
        SmallVec::from_buf(self.corners())
    }

    /// The boundary strokes as a path: two disjoint open segments, never closed.
    ///
    /// Segments with a non-finite endpoint are skipped.
    pub fn line_path(&self) -> BezPath {
        line_pair_path(&self.corners())
    }

    /// The closed, fillable range polygon.
    ///
    /// Returns an empty path if any corner is non-finite.
    pub fn range_path(&self) -> BezPath {
        polygon_path(&self.corners())
    }
}

/// Builds a path of disjoint two-point segments from `points` taken pairwise.
pub fn line_pair_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    for segment in points.chunks_exact(2) {
        let (a, b) = (segment[0], segment[1]);
        if !is_finite(a) || !is_finite(b) {
            continue;
        }
        path.move_to(a);
        path.line_to(b);
    }
    path
}

/// Builds a closed polygon path through `points`.
pub fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if points.len() < 3 || !points.iter().copied().all(is_finite) {
        return path;
    }
    path.move_to(points[0]);
    for p in &points[1..] {
        path.line_to(*p);
    }
    path.close_path();
    path
}

fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
