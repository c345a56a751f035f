// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inputs a cross line receives from its owning axis.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Affine, Vec2};

/// Which axis a cross line is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisDirection {
    /// A horizontal axis; the marker is a vertical line or band.
    X,
    /// A vertical axis; the marker is a horizontal line or band.
    #[default]
    Y,
}

/// Which side of the axis line the marker extends toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SideFlag {
    /// Extend toward positive local `x`.
    #[default]
    Positive,
    /// Extend toward negative local `x`.
    Negative,
}

impl SideFlag {
    /// Returns `+1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// Angles used to decide which of two legible rotations a label takes.
///
/// Both are radians in `[0, 2π)`, owned and recomputed by the axis layout. The default is
/// the derivation for an unrotated axis, so labels start out upright.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipRotations {
    /// Flip angle for labels drawn parallel to the axis.
    pub parallel: f64,
    /// Flip angle for labels drawn perpendicular to the axis.
    pub regular: f64,
}

impl FlipRotations {
    /// Derives flip angles from an axis group rotation.
    ///
    /// This is the usual derivation for axes whose labels run along local `y`; layouts with
    /// other conventions can set the fields directly.
    pub fn for_axis_rotation(rotation: f64) -> Self {
        Self {
            parallel: normalize_angle_360(rotation),
            regular: normalize_angle_360(rotation - FRAC_PI_2),
        }
    }
}

impl Default for FlipRotations {
    fn default() -> Self {
        Self::for_axis_rotation(0.0)
    }
}

/// Everything the owning axis pushes into a cross line before `update`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisContext {
    /// Axis the marker is anchored to.
    pub direction: AxisDirection,
    /// Side of the axis the marker extends toward.
    pub side_flag: SideFlag,
    /// Extent of the marker perpendicular to the axis (usually the plot width or height).
    pub grid_length: f64,
    /// Flip angles for automatic label rotation.
    pub flip: FlipRotations,
    /// Translation of the axis group in scene coordinates.
    pub translation: Vec2,
    /// Rotation of the axis group in radians.
    pub rotation: f64,
}

impl Default for AxisContext {
    fn default() -> Self {
        Self {
            direction: AxisDirection::Y,
            side_flag: SideFlag::Positive,
            grid_length: 0.0,
            flip: FlipRotations::default(),
            translation: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl AxisContext {
    /// Creates a context for a marker on `direction` spanning `grid_length`.
    pub fn new(direction: AxisDirection, grid_length: f64) -> Self {
        Self {
            direction,
            grid_length,
            ..Self::default()
        }
    }

    /// Sets the side flag.
    pub fn with_side_flag(mut self, side_flag: SideFlag) -> Self {
        self.side_flag = side_flag;
        self
    }

    /// Sets the flip angles.
    pub fn with_flip(mut self, flip: FlipRotations) -> Self {
        self.flip = flip;
        self
    }

    /// Sets the axis group transform, and derives flip angles from its rotation.
    pub fn with_group_transform(mut self, translation: Vec2, rotation: f64) -> Self {
        self.translation = translation;
        self.rotation = rotation;
        self.flip = FlipRotations::for_axis_rotation(rotation);
        self
    }

    /// Group transform mapping the marker's local space into the scene.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translation) * Affine::rotate(self.rotation)
    }

    /// A context for a vertical axis at `x`, with markers spanning `width` to the right.
    ///
    /// Local `y` is scene `y`, so the axis scale's range should be in scene coordinates.
    pub fn left_axis(x: f64, width: f64) -> Self {
        Self::new(AxisDirection::Y, width).with_group_transform(Vec2::new(x, 0.0), 0.0)
    }

    /// A context for a horizontal axis at `y`, with markers spanning `height` upward.
    ///
    /// The group is rotated by `-π/2` so local `y` is scene `x` and local `x` grows upward.
    pub fn bottom_axis(y: f64, height: f64) -> Self {
        Self::new(AxisDirection::X, height).with_group_transform(Vec2::new(0.0, y), -FRAC_PI_2)
    }
}

/// Normalizes an angle in radians into `[0, 2π)`.
pub fn normalize_angle_360(radians: f64) -> f64 {
    let r = radians % TAU;
    let r = if r < 0.0 { r + TAU } else { r };
    // `-tiny % TAU + TAU` rounds to exactly `TAU`.
    if r >= TAU { 0.0 } else { r }
}

/// Returns `true` if a normalized angle lies in the upper half-turn `[0, π]`.
pub(crate) fn in_flip_range(radians: f64) -> bool {
    (0.0..=PI).contains(&radians)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;

    use super::*;

    #[test]
    fn normalize_wraps_into_one_turn() {
        assert_eq!(normalize_angle_360(0.0), 0.0);
        assert!((normalize_angle_360(-FRAC_PI_2) - 1.5 * PI).abs() < 1e-12);
        assert!((normalize_angle_360(TAU + 1.0) - 1.0).abs() < 1e-12);
        assert_eq!(normalize_angle_360(TAU), 0.0);
        assert_eq!(normalize_angle_360(-1e-20), 0.0);
    }

    #[test]
    fn flip_rotations_follow_axis_rotation() {
        let vertical = FlipRotations::for_axis_rotation(0.0);
        assert_eq!(vertical.parallel, 0.0);
        assert!((vertical.regular - 1.5 * PI).abs() < 1e-12);

        let horizontal = FlipRotations::for_axis_rotation(-FRAC_PI_2);
        assert!((horizontal.parallel - 1.5 * PI).abs() < 1e-12);
        assert!((horizontal.regular - PI).abs() < 1e-12);
    }

    #[test]
    fn default_flip_matches_an_unrotated_axis() {
        assert_eq!(FlipRotations::default(), FlipRotations::for_axis_rotation(0.0));
        assert_eq!(AxisContext::default().flip, AxisContext::left_axis(0.0, 1.0).flip);
        assert!(!in_flip_range(FlipRotations::default().regular));
    }

    #[test]
    fn bottom_axis_transform_maps_local_axes_to_scene() {
        let ctx = AxisContext::bottom_axis(200.0, 150.0);
        let t = ctx.transform();
        // Along the axis.
        let p = t * Point::new(0.0, 30.0);
        assert!((p.x - 30.0).abs() < 1e-9 && (p.y - 200.0).abs() < 1e-9);
        // Across the plot.
        let p = t * Point::new(150.0, 30.0);
        assert!((p.x - 30.0).abs() < 1e-9 && (p.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn left_axis_transform_is_a_translation() {
        let ctx = AxisContext::left_axis(40.0, 100.0);
        let p = ctx.transform() * Point::new(100.0, 25.0);
        assert_eq!(p, Point::new(140.0, 25.0));
        assert_eq!(ctx.side_flag.sign(), 1.0);
    }
}
