// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-line annotations for charts.
//!
//! A cross line is a reference marker anchored to an axis: a single value drawn as a line
//! across the plot, or a range drawn as two lines with a shaded region between them, optionally
//! labelled. This crate turns a [`CrossLineConfig`] plus the axis state (a [`Scale`] and an
//! [`AxisContext`]) into render-ready [`CrossLineNodes`]:
//! - **Geometry** is produced in the marker's local space, where `y` runs along the axis and
//!   `x` runs across the plot; the axis group transform maps it into the scene.
//! - **Label placement** is table-driven: each [`LabelPosition`] resolves to a
//!   [`PlacementRule`] of pure anchor, alignment and baseline functions.
//! - **Chart padding** for labels outside the plot is reported through [`ChartPadding`], using
//!   a pluggable [`TextMeasurer`].
//!
//! Text shaping and drawing are out of scope; label nodes carry unshaped strings.
//!
//! ```
//! use std::sync::Arc;
//! use vizir_crossline::{
//!     AxisContext, CrossLine, CrossLineConfig, CrossLineLabel, LabelPosition, ScaleLinear,
//! };
//!
//! let mut target = CrossLine::new(
//!     CrossLineConfig::line(75.0)
//!         .with_label(CrossLineLabel::new("Target").with_position(LabelPosition::Right)),
//! );
//! target.set_scale(Arc::new(ScaleLinear::new((0.0, 100.0), (300.0, 0.0))));
//! target.set_axis_context(AxisContext::left_axis(40.0, 400.0));
//! target.update(true);
//!
//! let nodes = target.nodes();
//! assert!(nodes.visible);
//! assert!(nodes.line.is_some() && nodes.range.is_none());
//! assert_eq!(nodes.label.as_ref().map(|l| l.text.as_str()), Some("Target"));
//! ```
//!
//! ## Features
//!
//! - `std`: use the standard library for float math.
//! - `libm` (default): use `libm` for float math in `no_std` builds.
//! - `serde`: serialize and deserialize the configuration enums. Unknown label positions
//!   deserialize as [`LabelPosition::Top`].
//! - `tracing`: emit `tracing` events when markers are recomputed, skipped, or fall back.

#![no_std]

extern crate alloc;

mod axis;
mod cross_line;
#[cfg(not(feature = "std"))]
mod float;
mod label;
mod label_position;
mod measure;
mod nodes;
mod padding;
mod path;
mod scale;
mod z_order;

pub use axis::{AxisContext, AxisDirection, FlipRotations, SideFlag, normalize_angle_360};
pub use cross_line::{CrossLine, CrossLineConfig, CrossLineKind};
pub use label::{CrossLineLabel, LabelRotation};
pub use label_position::{
    LabelPosition, ParseLabelPositionError, PlacementRule, TextAlign, TextBaseline, resolve,
};
pub use measure::{
    FontFamily, FontStyle, FontWeight, HeuristicTextMeasurer, LabelFont, TextMeasurer,
    TextMetrics,
};
pub use nodes::{CrossLineNodes, LabelNode, LabelTransform, LineDash, LineNode, RangeNode};
pub use padding::ChartPadding;
pub use path::{CrossLineRect, PointList, line_pair_path, polygon_path};
pub use scale::{Scale, ScaleBand, ScaleLinear, ScaleLog, ScalePoint, ScaleTime};
pub use z_order::*;
