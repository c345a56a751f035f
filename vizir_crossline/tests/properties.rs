// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for cross-line geometry and label placement.
//!
//! 1. `update` is idempotent.
//! 2. Range bounds are order-independent.
//! 3. Banded scales center markers on the category.
//! 4. Unknown label positions place exactly like `top`.
//! 5. An explicit rotation overrides the flip heuristic.
//! 6. Lines span `side_flag * grid_length` and never produce a fill region.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::sync::Arc;

use proptest::prelude::*;
use vizir_crossline::{
    AxisContext, AxisDirection, CrossLine, CrossLineConfig, CrossLineLabel, FlipRotations,
    LabelPosition, Scale, ScaleBand, ScaleLinear, SideFlag, TextAlign, TextBaseline,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn direction_strategy() -> impl Strategy<Value = AxisDirection> {
    prop_oneof![Just(AxisDirection::X), Just(AxisDirection::Y)]
}

fn side_strategy() -> impl Strategy<Value = SideFlag> {
    prop_oneof![Just(SideFlag::Positive), Just(SideFlag::Negative)]
}

fn position_strategy() -> impl Strategy<Value = LabelPosition> {
    proptest::sample::select(LabelPosition::ALL.to_vec())
}

fn flip_strategy() -> impl Strategy<Value = FlipRotations> {
    (0.0..TAU, 0.0..TAU).prop_map(|(parallel, regular)| FlipRotations { parallel, regular })
}

fn axis_strategy() -> impl Strategy<Value = AxisContext> {
    (
        direction_strategy(),
        side_strategy(),
        0.0..1000.0_f64,
        flip_strategy(),
    )
        .prop_map(|(direction, side, grid_length, flip)| {
            AxisContext::new(direction, grid_length)
                .with_side_flag(side)
                .with_flip(flip)
        })
}

fn label_strategy() -> impl Strategy<Value = CrossLineLabel> {
    (
        position_strategy(),
        prop::option::of(-720.0..720.0_f64),
        any::<bool>(),
    )
        .prop_map(|(position, rotation, parallel)| {
            let mut label = CrossLineLabel::new("label")
                .with_position(position)
                .with_parallel(parallel);
            label.rotation = rotation;
            label
        })
}

fn linear_line(config: CrossLineConfig<f64>, axis: AxisContext) -> CrossLine<f64> {
    let mut cl = CrossLine::new(config);
    cl.set_scale(Arc::new(ScaleLinear::new((0.0, 100.0), (0.0, 400.0))));
    cl.set_axis_context(axis);
    cl
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn update_is_idempotent(
        a in -50.0..150.0_f64,
        b in -50.0..150.0_f64,
        is_range in any::<bool>(),
        axis in axis_strategy(),
        label in label_strategy(),
    ) {
        let config = if is_range {
            CrossLineConfig::range(a, b)
        } else {
            CrossLineConfig::line(a)
        };
        let mut cl = linear_line(config.with_label(label), axis);
        cl.update(true);
        // Line markers carry a NaN upper bound, so compare the printed form.
        let first = format!("{:?}", cl.nodes());
        cl.update(true);
        prop_assert_eq!(first, format!("{:?}", cl.nodes()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Range ordering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn range_bounds_are_order_independent(
        a in -50.0..150.0_f64,
        b in -50.0..150.0_f64,
        axis in axis_strategy(),
        label in label_strategy(),
    ) {
        let mut forward = linear_line(CrossLineConfig::range(a, b).with_label(label.clone()), axis);
        let mut reverse = linear_line(CrossLineConfig::range(b, a).with_label(label), axis);
        forward.update(true);
        reverse.update(true);
        prop_assert_eq!(forward.nodes(), reverse.nodes());

        let rect = forward.nodes().rect.expect("resolved rect");
        prop_assert!(rect.y_start <= rect.y_end);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Band centering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn band_markers_center_on_the_category(
        count in 1_usize..20,
        pick in any::<prop::sample::Index>(),
        inner in 0.0..0.5_f64,
        outer in 0.0..0.5_f64,
        extent in 10.0..1000.0_f64,
        axis in axis_strategy(),
    ) {
        let index = pick.index(count);
        let scale = ScaleBand::new((0.0, extent), count).with_padding(inner, outer);
        let mut cl = CrossLine::new(CrossLineConfig::line(index));
        cl.set_scale(Arc::new(scale));
        cl.set_axis_context(axis);
        cl.update(true);

        let rect = cl.nodes().rect.expect("resolved rect");
        let band_start = scale.convert(&index);
        let band_width = scale.band_width();
        prop_assert!((rect.y_start - (band_start + band_width / 2.0)).abs() < 1e-9);
        prop_assert!(rect.y_start >= band_start && rect.y_start <= band_start + band_width);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Position fallback
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unknown_positions_place_like_top(
        name in "[a-zA-Z]{0,16}",
        a in -50.0..150.0_f64,
        b in -50.0..150.0_f64,
        axis in axis_strategy(),
    ) {
        prop_assume!(name.parse::<LabelPosition>().is_err());

        let mut unknown = linear_line(
            CrossLineConfig::range(a, b)
                .with_label(CrossLineLabel::new("t").with_position_name(&name)),
            axis,
        );
        let mut top = linear_line(
            CrossLineConfig::range(a, b)
                .with_label(CrossLineLabel::new("t").with_position(LabelPosition::Top)),
            axis,
        );
        let mut absent = linear_line(
            CrossLineConfig::range(a, b).with_label(CrossLineLabel::new("t")),
            axis,
        );
        unknown.update(true);
        top.update(true);
        absent.update(true);
        prop_assert_eq!(&unknown.nodes().label, &top.nodes().label);
        prop_assert_eq!(&absent.nodes().label, &top.nodes().label);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Rotation override
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn explicit_rotation_overrides_flip(
        degrees in 1.0..359.0_f64,
        parallel in any::<bool>(),
        position in position_strategy(),
        axis in axis_strategy(),
    ) {
        let label = CrossLineLabel::new("t")
            .with_position(position)
            .with_parallel(parallel)
            .with_rotation(degrees);
        let mut cl = linear_line(CrossLineConfig::range(10.0, 20.0).with_label(label), axis);
        cl.update(true);

        let t = cl.nodes().label.as_ref().expect("label node").transform;
        let auto = if parallel { FRAC_PI_2 } else { 0.0 };
        prop_assert!((t.rotation - (auto + degrees.to_radians())).abs() < 1e-9);

        let rule = position.rule();
        prop_assert_eq!(t.align, (rule.align)(true));
        prop_assert_eq!(t.baseline, (rule.baseline)(true));
    }

    #[test]
    fn unrotated_labels_only_turn_by_flip(
        parallel in any::<bool>(),
        axis in axis_strategy(),
    ) {
        let label = CrossLineLabel::new("t").with_parallel(parallel);
        let mut cl = linear_line(CrossLineConfig::line(50.0).with_label(label), axis);
        cl.update(true);

        let rotation = cl.nodes().label.as_ref().expect("label node").transform.rotation;
        let allowed: &[f64] = if parallel { &[FRAC_PI_2, -FRAC_PI_2] } else { &[0.0, PI] };
        prop_assert!(allowed.contains(&rotation), "unexpected rotation {}", rotation);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Line extent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lines_span_the_signed_grid_length(
        value in -50.0..150.0_f64,
        axis in axis_strategy(),
    ) {
        let mut cl = linear_line(CrossLineConfig::line(value), axis);
        cl.update(true);

        let nodes = cl.nodes();
        prop_assert!(nodes.range.is_none());
        let line = nodes.line.as_ref().expect("line node");
        let expected = axis.side_flag.sign() * axis.grid_length;
        prop_assert_eq!(line.points[0].x, 0.0);
        prop_assert_eq!(line.points[1].x, expected);
        prop_assert_eq!(line.points[0].y, line.points[1].y);
    }
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn inside_left_on_a_horizontal_axis_mixes_right_align_with_left_baseline() {
    let label = CrossLineLabel::new("t").with_position(LabelPosition::InsideLeft);
    let mut cl = linear_line(
        CrossLineConfig::range(20.0, 80.0).with_label(label),
        AxisContext::new(AxisDirection::X, 40.0).with_flip(FlipRotations {
            parallel: 0.0,
            regular: 4.0,
        }),
    );
    cl.update(true);

    let t = cl.nodes().label.as_ref().expect("label node").transform;
    let right = LabelPosition::Right.rule();
    let left = LabelPosition::Left.rule();
    assert_eq!(t.align, (right.align)(false));
    assert_eq!(t.baseline, (left.baseline)(false));
    assert_eq!(t.align, TextAlign::Start);
    assert_eq!(t.baseline, TextBaseline::Middle);
    // Anchor of `left` on a horizontal axis: half-way across, at the lower boundary.
    assert_eq!((t.x, t.y), (20.0, 80.0));
}
