// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-ready output of a cross line.
//!
//! A [`CrossLine`](crate::CrossLine) publishes one [`CrossLineNodes`] value per `update`. All
//! geometry is in the marker's local space; [`CrossLineNodes::transform`] maps it into the scene.

extern crate alloc;

use alloc::string::String;

use kurbo::{Affine, BezPath, Point, Stroke};
use peniko::{Brush, Color};
use smallvec::SmallVec;

use crate::axis::AxisDirection;
use crate::label_position::{LabelPosition, TextAlign, TextBaseline};
use crate::measure::LabelFont;
use crate::path::{CrossLineRect, PointList, line_pair_path, polygon_path};

/// Dash pattern, alternating dash and gap lengths.
pub type LineDash = SmallVec<[f64; 4]>;

/// The boundary strokes of a cross line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    /// Stroke endpoints, read pairwise: `p0 -> p1`, `p2 -> p3`.
    pub points: PointList,
    /// Stroke paint. `None` leaves the line unstroked.
    pub stroke: Option<Brush>,
    /// Stroke width in scene units.
    pub stroke_width: f64,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f64,
    /// Dash pattern; empty for a solid line.
    pub line_dash: LineDash,
    /// Rendering order hint.
    pub z_index: i32,
}

impl LineNode {
    /// The strokes as two disjoint open segments.
    pub fn path(&self) -> BezPath {
        line_pair_path(&self.points)
    }

    /// Stroke style with width and dashes applied.
    pub fn stroke_style(&self) -> Stroke {
        Stroke::new(self.stroke_width).with_dashes(0.0, self.line_dash.iter().copied())
    }
}

/// The shaded region of a range cross line.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeNode {
    /// Polygon corners in ring order.
    pub points: PointList,
    /// Fill paint. `None` leaves the region unfilled.
    pub fill: Option<Brush>,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
    /// Dash pattern shared with the boundary strokes.
    pub line_dash: LineDash,
    /// Rendering order hint; below the [`LineNode`].
    pub z_index: i32,
}

impl RangeNode {
    /// The closed polygon.
    pub fn path(&self) -> BezPath {
        polygon_path(&self.points)
    }
}

/// Where and how a label is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelTransform {
    /// Anchor x in local coordinates.
    pub x: f64,
    /// Anchor y in local coordinates.
    pub y: f64,
    /// Rotation around the anchor, in radians.
    pub rotation: f64,
    /// Horizontal alignment relative to the anchor.
    pub align: TextAlign,
    /// Vertical baseline relative to the anchor.
    pub baseline: TextBaseline,
}

impl LabelTransform {
    /// The anchor point.
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Maps label space (origin at the anchor, unrotated) into local coordinates.
    pub fn affine(&self) -> Affine {
        Affine::translate(self.anchor().to_vec2()) * Affine::rotate(self.rotation)
    }
}

/// A label ready for drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelNode {
    /// Text content (unshaped).
    pub text: String,
    /// The resolved position (`top` when none or an unknown one was configured).
    pub position: LabelPosition,
    /// Placement.
    pub transform: LabelTransform,
    /// Font settings, passed through from the configuration.
    pub font: LabelFont,
    /// Text color, passed through from the configuration.
    pub color: Option<Color>,
    /// Label padding, passed through from the configuration.
    pub padding: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

/// Everything a renderer needs to draw one cross line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrossLineNodes {
    /// Whether the marker is shown.
    pub visible: bool,
    /// Axis direction the geometry was resolved for.
    pub direction: AxisDirection,
    /// Maps local coordinates into the scene.
    pub transform: Affine,
    /// The resolved marker rectangle.
    pub rect: Option<CrossLineRect>,
    /// The boundary strokes.
    pub line: Option<LineNode>,
    /// The shaded region, for range cross lines.
    pub range: Option<RangeNode>,
    /// The label, when label text is configured.
    pub label: Option<LabelNode>,
}

impl CrossLineNodes {
    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        !self.visible || (self.line.is_none() && self.range.is_none() && self.label.is_none())
    }
}
