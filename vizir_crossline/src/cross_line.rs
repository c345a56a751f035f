// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-line configuration and the geometry engine.
//!
//! A cross line is a reference marker drawn across the plot from one axis: either a single
//! value (`Line`) or a shaded band between two values (`Range`). The owning axis binds a scale,
//! pushes an [`AxisContext`] on every layout pass, then calls [`CrossLine::update`]. Each
//! update rebuilds the published [`CrossLineNodes`] from scratch.

extern crate alloc;

use alloc::sync::Arc;
use core::fmt;

use kurbo::Rect;
use peniko::Brush;

use crate::axis::{AxisContext, AxisDirection};
use crate::label::{CrossLineLabel, LabelRotation};
use crate::label_position::{LabelPosition, TextAlign, TextBaseline};
use crate::measure::TextMeasurer;
use crate::nodes::{CrossLineNodes, LabelNode, LabelTransform, LineDash, LineNode, RangeNode};
use crate::padding::ChartPadding;
use crate::path::CrossLineRect;
use crate::scale::Scale;
use crate::z_order;

/// Whether a cross line marks a single value or a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CrossLineKind {
    /// A single value, drawn as a line.
    Line,
    /// A pair of values, drawn as two lines with a shaded region between them.
    Range,
}

/// User-facing configuration of a cross line.
///
/// `value` is read only for [`CrossLineKind::Line`] and `range` only for
/// [`CrossLineKind::Range`].
#[derive(Clone, Debug, PartialEq)]
pub struct CrossLineConfig<D> {
    /// Marker kind. A cross line without a kind is inert.
    pub kind: Option<CrossLineKind>,
    /// Domain value of a line.
    pub value: Option<D>,
    /// Domain bounds of a range, in either order.
    pub range: Option<(D, D)>,
    /// Fill of the range region.
    pub fill: Option<Brush>,
    /// Fill opacity; defaults to `1`.
    pub fill_opacity: Option<f64>,
    /// Stroke of the boundary lines.
    pub stroke: Option<Brush>,
    /// Stroke width; defaults to `1`.
    pub stroke_width: Option<f64>,
    /// Stroke opacity; defaults to `1`.
    pub stroke_opacity: Option<f64>,
    /// Dash pattern for both the lines and the region outline.
    pub line_dash: LineDash,
    /// Label settings.
    pub label: CrossLineLabel,
}

impl<D> Default for CrossLineConfig<D> {
    fn default() -> Self {
        Self {
            kind: None,
            value: None,
            range: None,
            fill: None,
            fill_opacity: None,
            stroke: None,
            stroke_width: None,
            stroke_opacity: None,
            line_dash: LineDash::new(),
            label: CrossLineLabel::default(),
        }
    }
}

impl<D> CrossLineConfig<D> {
    /// A line at `value`.
    pub fn line(value: D) -> Self {
        Self {
            kind: Some(CrossLineKind::Line),
            value: Some(value),
            ..Self::default()
        }
    }

    /// A range between `start` and `end` (in either order).
    pub fn range(start: D, end: D) -> Self {
        Self {
            kind: Some(CrossLineKind::Range),
            range: Some((start, end)),
            ..Self::default()
        }
    }

    /// Sets the stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = Some(stroke_width);
        self
    }

    /// Sets the stroke opacity.
    pub fn with_stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = Some(opacity);
        self
    }

    /// Sets the range fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the range fill opacity.
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    /// Sets the dash pattern.
    pub fn with_line_dash(mut self, dash: impl IntoIterator<Item = f64>) -> Self {
        self.line_dash = dash.into_iter().collect();
        self
    }

    /// Sets the label.
    pub fn with_label(mut self, label: CrossLineLabel) -> Self {
        self.label = label;
        self
    }
}

/// A cross line bound to an axis: configuration in, render-ready nodes out.
///
/// Until a scale is bound, [`CrossLine::update`] leaves the published nodes untouched.
pub struct CrossLine<D> {
    config: CrossLineConfig<D>,
    axis: AxisContext,
    scale: Option<Arc<dyn Scale<D>>>,
    nodes: CrossLineNodes,
}

impl<D: fmt::Debug> fmt::Debug for CrossLine<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossLine")
            .field("config", &self.config)
            .field("axis", &self.axis)
            .field("scale", &self.scale.is_some())
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<D: PartialOrd> CrossLine<D> {
    /// Creates an unbound cross line.
    pub fn new(config: CrossLineConfig<D>) -> Self {
        Self {
            config,
            axis: AxisContext::default(),
            scale: None,
            nodes: CrossLineNodes::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CrossLineConfig<D> {
        &self.config
    }

    /// Returns the configuration for editing. Changes apply on the next `update`.
    pub fn config_mut(&mut self) -> &mut CrossLineConfig<D> {
        &mut self.config
    }

    /// Binds the axis scale.
    pub fn set_scale(&mut self, scale: Arc<dyn Scale<D>>) {
        self.scale = Some(scale);
    }

    /// Unbinds the scale; later updates keep the last published nodes.
    pub fn clear_scale(&mut self) {
        self.scale = None;
    }

    /// Returns the axis inputs.
    pub fn axis_context(&self) -> &AxisContext {
        &self.axis
    }

    /// Replaces the axis inputs. Call before `update` on every layout change.
    pub fn set_axis_context(&mut self, axis: AxisContext) {
        self.axis = axis;
    }

    /// Returns the nodes published by the last `update`.
    pub fn nodes(&self) -> &CrossLineNodes {
        &self.nodes
    }

    /// Recomputes and publishes the marker, or hides it.
    ///
    /// - Without a kind the marker is hidden and nothing is recomputed.
    /// - `visible == false` hides the marker and skips recomputation.
    /// - Without a scale the last published geometry is kept.
    /// - A kind whose value (or range) is missing clears the geometry and hides the marker.
    pub fn update(&mut self, visible: bool) {
        let Some(kind) = self.config.kind else {
            #[cfg(feature = "tracing")]
            tracing::debug!("cross line has no kind, hiding");
            self.nodes.visible = false;
            return;
        };

        self.nodes.visible = visible;
        if !visible {
            return;
        }

        let Some(scale) = self.scale.as_deref() else {
            #[cfg(feature = "tracing")]
            tracing::debug!(?kind, "cross line has no scale yet, skipping");
            return;
        };

        let Some(rect) = resolve_rect(kind, &self.config, &self.axis, scale) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(?kind, "cross line has no domain value, hiding");
            self.nodes = CrossLineNodes::default();
            return;
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            ?kind,
            direction = ?self.axis.direction,
            x_end = rect.x_end,
            y_start = rect.y_start,
            y_end = rect.y_end,
            "cross line resolved"
        );

        self.nodes = CrossLineNodes {
            visible: true,
            direction: self.axis.direction,
            transform: self.axis.transform(),
            rect: Some(rect),
            line: Some(self.line_node(&rect)),
            range: (kind == CrossLineKind::Range).then(|| self.range_node(&rect)),
            label: self.label_node(&rect),
        };
    }

    fn line_node(&self, rect: &CrossLineRect) -> LineNode {
        LineNode {
            points: rect.points(),
            stroke: self.config.stroke.clone(),
            stroke_width: self.config.stroke_width.unwrap_or(1.0),
            opacity: self.config.stroke_opacity.unwrap_or(1.0),
            line_dash: self.config.line_dash.clone(),
            z_index: z_order::CROSS_LINE_STROKE,
        }
    }

    fn range_node(&self, rect: &CrossLineRect) -> RangeNode {
        RangeNode {
            points: rect.points(),
            fill: self.config.fill.clone(),
            opacity: self.config.fill_opacity.unwrap_or(1.0),
            line_dash: self.config.line_dash.clone(),
            z_index: z_order::CROSS_LINE_RANGE,
        }
    }

    fn label_node(&self, rect: &CrossLineRect) -> Option<LabelNode> {
        let label = &self.config.label;
        let text = label.text.as_ref()?;

        let rotation = LabelRotation::compute(label.rotation, label.parallel, self.axis.flip);
        let rotated = rotation.is_explicit();
        let position = label.position.unwrap_or_default();
        let rule = position.rule();
        let anchor = (rule.anchor)(rect, self.axis.direction);

        Some(LabelNode {
            text: text.clone(),
            position,
            transform: LabelTransform {
                x: anchor.x,
                y: anchor.y,
                rotation: rotation.total(),
                align: (rule.align)(rotated),
                baseline: (rule.baseline)(rotated),
            },
            font: label.font.clone(),
            color: label.color,
            padding: label.padding,
            z_index: z_order::CROSS_LINE_LABEL,
        })
    }

    /// Scene-space bounding box of the published label.
    ///
    /// Returns `None` if the marker is hidden or has no label.
    pub fn label_bounds(&self, measurer: &dyn TextMeasurer) -> Option<Rect> {
        if !self.nodes.visible {
            return None;
        }
        let label = self.nodes.label.as_ref()?;
        let metrics = measurer.measure(&label.text, &label.font);
        let (w, h) = (metrics.advance_width, metrics.height());

        let (x0, x1) = match label.transform.align {
            TextAlign::Start => (0.0, w),
            TextAlign::Center => (-0.5 * w, 0.5 * w),
            TextAlign::End => (-w, 0.0),
        };
        let (y0, y1) = match label.transform.baseline {
            TextBaseline::Top => (0.0, h),
            TextBaseline::Middle => (-0.5 * h, 0.5 * h),
            TextBaseline::Bottom => (-h, 0.0),
        };

        let to_scene = self.nodes.transform * label.transform.affine();
        Some(to_scene.transform_rect_bbox(Rect::new(x0, y0, x1, y1)))
    }

    /// Room the chart must reserve so an outer label is not clipped.
    ///
    /// Only labels placed beyond the plot edge need room: `top`/`bottom` on a horizontal axis
    /// and `left`/`right` on a vertical one. Inside positions never do.
    ///
    /// Like [`CrossLine::label_bounds`], this reads the nodes published by the last `update`;
    /// configuration or axis changes since then are not reflected.
    pub fn label_chart_padding(&self, measurer: &dyn TextMeasurer) -> ChartPadding {
        let Some(bounds) = self.label_bounds(measurer) else {
            return ChartPadding::ZERO;
        };
        let Some(label) = self.nodes.label.as_ref() else {
            return ChartPadding::ZERO;
        };
        let padding = label.padding.max(0.0);

        let mut out = ChartPadding::ZERO;
        match (self.nodes.direction, label.position) {
            (AxisDirection::X, LabelPosition::Top) => out.top = padding + bounds.height(),
            (AxisDirection::X, LabelPosition::Bottom) => out.bottom = padding + bounds.height(),
            (AxisDirection::Y, LabelPosition::Left) => out.left = padding + bounds.width(),
            (AxisDirection::Y, LabelPosition::Right) => out.right = padding + bounds.width(),
            _ => {}
        }
        out
    }
}

/// Resolves the marker rectangle in local coordinates.
///
/// Range bounds are put in domain order first so an inverted range yields the same polygon.
/// Both value coordinates are shifted by half a band so banded scales center on the category.
fn resolve_rect<D: PartialOrd>(
    kind: CrossLineKind,
    config: &CrossLineConfig<D>,
    axis: &AxisContext,
    scale: &dyn Scale<D>,
) -> Option<CrossLineRect> {
    let (start, end) = match kind {
        CrossLineKind::Line => (config.value.as_ref()?, None),
        CrossLineKind::Range => {
            let (a, b) = config.range.as_ref()?;
            if b < a { (b, Some(a)) } else { (a, Some(b)) }
        }
    };

    let half_band = scale.bandwidth().unwrap_or(0.0) / 2.0;
    let y_start = scale.convert(start) + half_band;
    let y_end = end.map_or(f64::NAN, |v| scale.convert(v) + half_band);
    let x_end = axis.side_flag.sign() * axis.grid_length;

    Some(CrossLineRect::new(0.0, x_end, y_start, y_end))
}
