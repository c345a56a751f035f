// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-line label configuration and rotation.

extern crate alloc;

use alloc::string::String;
use core::f64::consts::{FRAC_PI_2, PI};

use peniko::Color;

use crate::axis::{FlipRotations, in_flip_range, normalize_angle_360};
use crate::label_position::LabelPosition;
use crate::measure::LabelFont;

/// Label settings of a cross line.
///
/// Only `text`, `position`, `rotation` and `parallel` affect placement. The remaining fields are
/// presentational and are copied into the output unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossLineLabel {
    /// Label text. No label is produced when this is `None`.
    pub text: Option<String>,
    /// Label position. `None` places the label at [`LabelPosition::Top`].
    pub position: Option<LabelPosition>,
    /// Explicit rotation in degrees. A non-zero rotation disables automatic flipping.
    pub rotation: Option<f64>,
    /// Whether the label runs parallel to the owning axis rather than perpendicular to it.
    pub parallel: bool,
    /// Gap between the label and the marker, in scene units.
    pub padding: f64,
    /// Font settings.
    pub font: LabelFont,
    /// Text color. `None` leaves the color to the renderer.
    pub color: Option<Color>,
}

impl Default for CrossLineLabel {
    fn default() -> Self {
        Self {
            text: None,
            position: None,
            rotation: None,
            parallel: false,
            padding: 5.0,
            font: LabelFont::default(),
            color: None,
        }
    }
}

impl CrossLineLabel {
    /// Creates a label with the given text and default settings.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Sets the label position.
    pub fn with_position(mut self, position: LabelPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the label position from an untyped name; unknown names mean `top`.
    pub fn with_position_name(mut self, name: &str) -> Self {
        self.position = Some(LabelPosition::parse_or_default(name));
        self
    }

    /// Sets an explicit rotation in degrees.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Sets whether the label runs parallel to the axis.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the label padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the font.
    pub fn with_font(mut self, font: LabelFont) -> Self {
        self.font = font;
        self
    }

    /// Sets the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// The two components of a label's rendered rotation, in radians.
///
/// `label` is the explicit configured rotation. `auto` keeps the text legible when the axis
/// group itself is rotated: with no explicit rotation, a label whose flip angle falls in the
/// upper half-turn `[0, π]` is turned around (`flip_flag == -1`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelRotation {
    /// Automatic rotation from the flip heuristic.
    pub auto: f64,
    /// Explicit rotation, normalized into `[0, 2π)`.
    pub label: f64,
    /// `-1.0` when the label is flipped, `+1.0` otherwise.
    pub flip_flag: f64,
}

impl LabelRotation {
    /// Computes the rotation for a label.
    ///
    /// Non-finite explicit rotations are ignored.
    pub fn compute(rotation_degrees: Option<f64>, parallel: bool, flip: FlipRotations) -> Self {
        let label = rotation_degrees
            .filter(|r| r.is_finite())
            .map_or(0.0, |r| normalize_degrees(r).to_radians());
        let flip_angle = if parallel { flip.parallel } else { flip.regular };
        let flip_flag = if label == 0.0 && in_flip_range(normalize_angle_360(flip_angle)) {
            -1.0
        } else {
            1.0
        };
        let auto = if parallel {
            flip_flag * FRAC_PI_2
        } else if flip_flag < 0.0 {
            PI
        } else {
            0.0
        };
        Self {
            auto,
            label,
            flip_flag,
        }
    }

    /// The rendered rotation, `auto + label`.
    pub fn total(self) -> f64 {
        self.auto + self.label
    }

    /// Whether an explicit, non-zero rotation is applied.
    pub fn is_explicit(self) -> bool {
        self.label != 0.0
    }
}

/// Normalizes degrees into `[0, 360)` before conversion, so whole turns come out as exactly `0`.
fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees % 360.0;
    let d = if d < 0.0 { d + 360.0 } else { d };
    if d >= 360.0 { 0.0 } else { d }
}
