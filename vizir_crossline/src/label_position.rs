// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label placement policy.
//!
//! Each of the 13 [`LabelPosition`]s maps to one [`PlacementRule`]: three pure functions that
//! compute the label anchor, text alignment and text baseline. The rules live in a single table
//! indexed by the position, so every `(position, direction, rotated)` cell can be looked up and
//! tested on its own.
//!
//! The `inside*` edge variants reuse the anchor of their outer counterpart but take their
//! alignment from the opposite edge, which keeps the glyph box on the interior side of the
//! marker. Corner variants combine the opposite horizontal edge's alignment with their own
//! vertical edge's baseline.

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use kurbo::Point;

use crate::axis::AxisDirection;
use crate::path::CrossLineRect;

/// Where a cross-line label sits relative to its marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelPosition {
    /// Above the marker (or beyond its far end, on a horizontal axis).
    #[default]
    Top,
    /// Below the marker (or at the axis, on a horizontal axis).
    Bottom,
    /// Left of the marker.
    Left,
    /// Right of the marker.
    Right,
    /// Centered on the marker.
    Inside,
    /// Inside the marker, against its left edge.
    InsideLeft,
    /// Inside the marker, against its right edge.
    InsideRight,
    /// Inside the marker, against its top edge.
    InsideTop,
    /// Inside the marker, against its bottom edge.
    InsideBottom,
    /// Inside the marker, in its top-left corner.
    InsideTopLeft,
    /// Inside the marker, in its bottom-left corner.
    InsideBottomLeft,
    /// Inside the marker, in its top-right corner.
    InsideTopRight,
    /// Inside the marker, in its bottom-right corner.
    InsideBottomRight,
}

impl LabelPosition {
    /// Every position, in table order.
    pub const ALL: [Self; 13] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::Inside,
        Self::InsideLeft,
        Self::InsideRight,
        Self::InsideTop,
        Self::InsideBottom,
        Self::InsideTopLeft,
        Self::InsideBottomLeft,
        Self::InsideTopRight,
        Self::InsideBottomRight,
    ];

    /// The configuration name of this position (`"insideTopLeft"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Inside => "inside",
            Self::InsideLeft => "insideLeft",
            Self::InsideRight => "insideRight",
            Self::InsideTop => "insideTop",
            Self::InsideBottom => "insideBottom",
            Self::InsideTopLeft => "insideTopLeft",
            Self::InsideBottomLeft => "insideBottomLeft",
            Self::InsideTopRight => "insideTopRight",
            Self::InsideBottomRight => "insideBottomRight",
        }
    }

    /// Parses a position from untyped configuration, falling back to [`LabelPosition::Top`].
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_err: ParseLabelPositionError| {
            #[cfg(feature = "tracing")]
            tracing::debug!(input = s, "unknown cross-line label position, using `top`");
            Self::Top
        })
    }

    /// Returns the placement rule for this position.
    pub fn rule(self) -> &'static PlacementRule {
        &RULES[self as usize]
    }
}

impl fmt::Display for LabelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown label position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelPositionError {
    input: String,
}

impl ParseLabelPositionError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseLabelPositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cross-line label position `{}`", self.input)
    }
}

impl core::error::Error for ParseLabelPositionError {}

impl FromStr for LabelPosition {
    type Err = ParseLabelPositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseLabelPositionError { input: s.into() })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LabelPosition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LabelPosition {
    /// Unknown names deserialize as [`LabelPosition::Top`] rather than failing.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PositionVisitor;

        impl serde::de::Visitor<'_> for PositionVisitor {
            type Value = LabelPosition;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a cross-line label position name")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<LabelPosition, E> {
                Ok(LabelPosition::parse_or_default(v))
            }
        }

        deserializer.deserialize_str(PositionVisitor)
    }
}

/// Horizontal text alignment relative to the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TextAlign {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Center,
    /// Text ends at the anchor.
    End,
}

/// Vertical text baseline relative to the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TextBaseline {
    /// The top of the glyph box is at the anchor.
    Top,
    /// The glyph box is vertically centered on the anchor.
    Middle,
    /// The bottom of the glyph box is at the anchor.
    Bottom,
}

/// Anchor, alignment and baseline functions for one label position.
#[derive(Clone, Copy, Debug)]
pub struct PlacementRule {
    /// Computes the label anchor from the marker rectangle.
    pub anchor: fn(&CrossLineRect, AxisDirection) -> Point,
    /// Text alignment; the argument is whether an explicit rotation is applied.
    pub align: fn(bool) -> TextAlign,
    /// Text baseline; the argument is whether an explicit rotation is applied.
    pub baseline: fn(bool) -> TextBaseline,
}

/// Resolves the placement rule for an optional position, defaulting to [`LabelPosition::Top`].
pub fn resolve(position: Option<LabelPosition>) -> &'static PlacementRule {
    position.unwrap_or_default().rule()
}

static RULES: [PlacementRule; 13] = [
    // Top
    PlacementRule {
        anchor: anchor_top,
        align: align_top,
        baseline: baseline_top,
    },
    // Bottom
    PlacementRule {
        anchor: anchor_bottom,
        align: align_bottom,
        baseline: baseline_bottom,
    },
    // Left
    PlacementRule {
        anchor: anchor_left,
        align: align_left,
        baseline: baseline_left,
    },
    // Right
    PlacementRule {
        anchor: anchor_right,
        align: align_right,
        baseline: baseline_right,
    },
    // Inside
    PlacementRule {
        anchor: anchor_inside,
        align: align_inside,
        baseline: baseline_inside,
    },
    // InsideLeft
    PlacementRule {
        anchor: anchor_left,
        align: align_right,
        baseline: baseline_left,
    },
    // InsideRight
    PlacementRule {
        anchor: anchor_right,
        align: align_left,
        baseline: baseline_right,
    },
    // InsideTop
    PlacementRule {
        anchor: anchor_top,
        align: align_bottom,
        baseline: baseline_top,
    },
    // InsideBottom
    PlacementRule {
        anchor: anchor_bottom,
        align: align_top,
        baseline: baseline_bottom,
    },
    // InsideTopLeft
    PlacementRule {
        anchor: anchor_inside_top_left,
        align: align_right,
        baseline: baseline_top,
    },
    // InsideBottomLeft
    PlacementRule {
        anchor: anchor_inside_bottom_left,
        align: align_right,
        baseline: baseline_bottom,
    },
    // InsideTopRight
    PlacementRule {
        anchor: anchor_inside_top_right,
        align: align_left,
        baseline: baseline_top,
    },
    // InsideBottomRight
    PlacementRule {
        anchor: anchor_inside_bottom_right,
        align: align_left,
        baseline: baseline_bottom,
    },
];

fn far_end(r: &CrossLineRect) -> f64 {
    r.label_y_end().unwrap_or(r.y_start)
}

fn anchor_top(r: &CrossLineRect, direction: AxisDirection) -> Point {
    match direction {
        AxisDirection::Y => Point::new(r.x_end / 2.0, far_end(r)),
        AxisDirection::X => Point::new(r.x_end, r.y_mid()),
    }
}

fn anchor_bottom(r: &CrossLineRect, direction: AxisDirection) -> Point {
    match direction {
        AxisDirection::Y => Point::new(r.x_end / 2.0, r.y_start),
        AxisDirection::X => Point::new(r.x_start, r.y_mid()),
    }
}

fn anchor_left(r: &CrossLineRect, direction: AxisDirection) -> Point {
    match direction {
        AxisDirection::Y => Point::new(r.x_start, r.y_mid()),
        AxisDirection::X => Point::new(r.x_end / 2.0, r.y_start),
    }
}

fn anchor_right(r: &CrossLineRect, direction: AxisDirection) -> Point {
    match direction {
        AxisDirection::Y => Point::new(r.x_end, r.y_mid()),
        AxisDirection::X => Point::new(r.x_end / 2.0, far_end(r)),
    }
}

fn anchor_inside(r: &CrossLineRect, _direction: AxisDirection) -> Point {
    Point::new(r.x_end / 2.0, r.y_mid())
}

fn anchor_inside_top_left(r: &CrossLineRect, direction: AxisDirection) -> Point {
    match direction {
        AxisDirection::Y => Point::new(r.x_start / 2.0, far_end(r)),
        AxisDirection::X => Point::new(r.x_end, r.y_start),
    }
}

fn anchor_inside_bottom_left(r: &CrossLineRect, _direction: AxisDirection) -> Point {
    Point::new(r.x_start, r.y_start)
}

fn anchor_inside_top_right(r: &CrossLineRect, _direction: AxisDirection) -> Point {
    Point::new(r.x_end, far_end(r))
}

fn anchor_inside_bottom_right(r: &CrossLineRect, direction: AxisDirection) -> Point {
    match direction {
        AxisDirection::Y => Point::new(r.x_end, r.y_start),
        AxisDirection::X => Point::new(r.x_start, far_end(r)),
    }
}

fn align_top(rotated: bool) -> TextAlign {
    if rotated {
        TextAlign::Start
    } else {
        TextAlign::Center
    }
}

fn align_bottom(rotated: bool) -> TextAlign {
    if rotated {
        TextAlign::End
    } else {
        TextAlign::Center
    }
}

fn align_left(rotated: bool) -> TextAlign {
    if rotated {
        TextAlign::Center
    } else {
        TextAlign::End
    }
}

fn align_right(rotated: bool) -> TextAlign {
    if rotated {
        TextAlign::Center
    } else {
        TextAlign::Start
    }
}

fn align_inside(_rotated: bool) -> TextAlign {
    TextAlign::Center
}

fn baseline_top(rotated: bool) -> TextBaseline {
    if rotated {
        TextBaseline::Middle
    } else {
        TextBaseline::Bottom
    }
}

fn baseline_bottom(rotated: bool) -> TextBaseline {
    if rotated {
        TextBaseline::Middle
    } else {
        TextBaseline::Top
    }
}

fn baseline_left(rotated: bool) -> TextBaseline {
    if rotated {
        TextBaseline::Top
    } else {
        TextBaseline::Middle
    }
}

fn baseline_right(rotated: bool) -> TextBaseline {
    if rotated {
        TextBaseline::Top
    } else {
        TextBaseline::Middle
    }
}

fn baseline_inside(_rotated: bool) -> TextBaseline {
    TextBaseline::Middle
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const DIRECTIONS: [AxisDirection; 2] = [AxisDirection::X, AxisDirection::Y];

    fn range_rect() -> CrossLineRect {
        CrossLineRect::new(0.0, 40.0, 20.0, 80.0)
    }

    fn line_rect() -> CrossLineRect {
        CrossLineRect::new(0.0, 40.0, 20.0, f64::NAN)
    }

    #[test]
    fn names_round_trip_through_parsing() {
        for p in LabelPosition::ALL {
            assert_eq!(p.as_str().parse::<LabelPosition>(), Ok(p));
            assert_eq!(std::format!("{p}"), p.as_str());
        }
    }

    #[test]
    fn table_order_matches_discriminants() {
        for (i, p) in LabelPosition::ALL.into_iter().enumerate() {
            assert_eq!(p as usize, i, "{p} is out of table order");
        }
    }

    #[test]
    fn unknown_names_fail_strictly_and_fall_back_leniently() {
        let err = "bogus".parse::<LabelPosition>().unwrap_err();
        assert_eq!(err.input(), "bogus");
        assert_eq!(
            std::format!("{err}"),
            "unknown cross-line label position `bogus`"
        );

        let fallback = LabelPosition::parse_or_default("bogus");
        assert_eq!(fallback, LabelPosition::Top);
        // Names are case-sensitive, like the configuration schema.
        assert_eq!(LabelPosition::parse_or_default("InsideLeft"), LabelPosition::Top);
    }

    #[test]
    fn absent_and_unknown_positions_resolve_like_top() {
        let top = LabelPosition::Top.rule();
        for rule in [resolve(None), resolve(Some(LabelPosition::parse_or_default("?")))] {
            for direction in DIRECTIONS {
                let r = range_rect();
                assert_eq!((rule.anchor)(&r, direction), (top.anchor)(&r, direction));
            }
            for rotated in [false, true] {
                assert_eq!((rule.align)(rotated), (top.align)(rotated));
                assert_eq!((rule.baseline)(rotated), (top.baseline)(rotated));
            }
        }
    }

    #[test]
    fn outer_anchors_follow_direction() {
        let r = range_rect();
        let anchor = |p: LabelPosition, d| (p.rule().anchor)(&r, d);

        assert_eq!(anchor(LabelPosition::Top, AxisDirection::Y), Point::new(20.0, 80.0));
        assert_eq!(anchor(LabelPosition::Top, AxisDirection::X), Point::new(40.0, 50.0));
        assert_eq!(anchor(LabelPosition::Bottom, AxisDirection::Y), Point::new(20.0, 20.0));
        assert_eq!(anchor(LabelPosition::Bottom, AxisDirection::X), Point::new(0.0, 50.0));
        assert_eq!(anchor(LabelPosition::Left, AxisDirection::Y), Point::new(0.0, 50.0));
        assert_eq!(anchor(LabelPosition::Left, AxisDirection::X), Point::new(20.0, 20.0));
        assert_eq!(anchor(LabelPosition::Right, AxisDirection::Y), Point::new(40.0, 50.0));
        assert_eq!(anchor(LabelPosition::Right, AxisDirection::X), Point::new(20.0, 80.0));
    }

    #[test]
    fn corner_anchors_follow_direction() {
        let r = range_rect();
        let anchor = |p: LabelPosition, d| (p.rule().anchor)(&r, d);

        assert_eq!(
            anchor(LabelPosition::InsideTopLeft, AxisDirection::Y),
            Point::new(0.0, 80.0)
        );
        assert_eq!(
            anchor(LabelPosition::InsideTopLeft, AxisDirection::X),
            Point::new(40.0, 20.0)
        );
        assert_eq!(
            anchor(LabelPosition::InsideBottomRight, AxisDirection::Y),
            Point::new(40.0, 20.0)
        );
        assert_eq!(
            anchor(LabelPosition::InsideBottomRight, AxisDirection::X),
            Point::new(0.0, 80.0)
        );
        for d in DIRECTIONS {
            assert_eq!(anchor(LabelPosition::Inside, d), Point::new(20.0, 50.0));
            assert_eq!(anchor(LabelPosition::InsideBottomLeft, d), Point::new(0.0, 20.0));
            assert_eq!(anchor(LabelPosition::InsideTopRight, d), Point::new(40.0, 80.0));
        }
    }

    #[test]
    fn inside_edges_reuse_outer_anchors() {
        let r = range_rect();
        let pairs = [
            (LabelPosition::InsideTop, LabelPosition::Top),
            (LabelPosition::InsideBottom, LabelPosition::Bottom),
            (LabelPosition::InsideLeft, LabelPosition::Left),
            (LabelPosition::InsideRight, LabelPosition::Right),
        ];
        for (inner, outer) in pairs {
            for d in DIRECTIONS {
                assert_eq!((inner.rule().anchor)(&r, d), (outer.rule().anchor)(&r, d));
            }
        }
    }

    #[test]
    fn single_value_anchors_collapse_onto_the_line() {
        let r = line_rect();
        for p in LabelPosition::ALL {
            for d in DIRECTIONS {
                let a = (p.rule().anchor)(&r, d);
                assert!(a.y == 20.0, "{p} on {d:?} left the line: {a:?}");
            }
        }
    }

    #[test]
    fn align_and_baseline_table() {
        use TextAlign::{Center, End, Start};
        use TextBaseline::{Bottom, Middle, Top};

        let expected = [
            (LabelPosition::Top, (Center, Start), (Bottom, Middle)),
            (LabelPosition::Bottom, (Center, End), (Top, Middle)),
            (LabelPosition::Left, (End, Center), (Middle, Top)),
            (LabelPosition::Right, (Start, Center), (Middle, Top)),
            (LabelPosition::Inside, (Center, Center), (Middle, Middle)),
        ];
        for (p, (align, align_rot), (base, base_rot)) in expected {
            let rule = p.rule();
            assert_eq!((rule.align)(false), align, "{p} align");
            assert_eq!((rule.align)(true), align_rot, "{p} rotated align");
            assert_eq!((rule.baseline)(false), base, "{p} baseline");
            assert_eq!((rule.baseline)(true), base_rot, "{p} rotated baseline");
        }
    }

    #[test]
    fn inside_left_uses_right_align_with_left_baseline() {
        let inside_left = LabelPosition::InsideLeft.rule();
        let left = LabelPosition::Left.rule();
        let right = LabelPosition::Right.rule();
        for rotated in [false, true] {
            assert_eq!((inside_left.align)(rotated), (right.align)(rotated));
            assert_eq!((inside_left.baseline)(rotated), (left.baseline)(rotated));
        }
        assert_eq!((inside_left.align)(false), TextAlign::Start);
        assert_eq!((inside_left.baseline)(false), TextBaseline::Middle);
    }

    #[test]
    fn corners_combine_opposite_align_with_own_baseline() {
        let top = LabelPosition::Top.rule();
        let bottom = LabelPosition::Bottom.rule();
        let left = LabelPosition::Left.rule();
        let right = LabelPosition::Right.rule();
        let cases = [
            (LabelPosition::InsideTopLeft, right, top),
            (LabelPosition::InsideBottomLeft, right, bottom),
            (LabelPosition::InsideTopRight, left, top),
            (LabelPosition::InsideBottomRight, left, bottom),
        ];
        for (corner, align_from, baseline_from) in cases {
            for rotated in [false, true] {
                assert_eq!((corner.rule().align)(rotated), (align_from.align)(rotated));
                assert_eq!(
                    (corner.rule().baseline)(rotated),
                    (baseline_from.baseline)(rotated)
                );
            }
        }
    }
}
