// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-line demos for `vizir_crossline`.
//!
//! Writes two SVG files into the working directory:
//! - `vizir_crossline_demo.svg`: one chart with line and range markers on both axes.
//! - `vizir_crossline_positions.svg`: one small panel per label position.

mod svg;

use std::sync::Arc;

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;
use vizir_crossline::{
    AxisContext, ChartPadding, CrossLine, CrossLineConfig, CrossLineLabel, HeuristicTextMeasurer,
    LabelFont, LabelPosition, Scale, ScaleBand, ScaleLinear, TextMeasurer,
};

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

fn main() -> std::io::Result<()> {
    let measurer = HeuristicTextMeasurer;

    std::fs::write("vizir_crossline_demo.svg", overview_demo(&measurer))?;
    println!("wrote vizir_crossline_demo.svg");

    std::fs::write("vizir_crossline_positions.svg", positions_demo())?;
    println!("wrote vizir_crossline_positions.svg");
    Ok(())
}

/// Updates every cross line, draws it, and returns the padding its labels need.
fn place_all<D: PartialOrd>(
    lines: &mut [CrossLine<D>],
    scene: &mut svg::SvgScene,
    measurer: &dyn TextMeasurer,
) -> ChartPadding {
    let mut padding = ChartPadding::ZERO;
    for line in lines {
        line.update(true);
        scene.push_cross_line(line.nodes());
        padding = padding.merge(line.label_chart_padding(measurer));
    }
    padding
}

fn overview_demo(measurer: &dyn TextMeasurer) -> String {
    let plot = Rect::new(60.0, 50.0, 520.0, 310.0);
    let mut scene = svg::SvgScene::default();
    scene.push_frame(plot, &Brush::Solid(css::WHITE), &Brush::Solid(css::SLATE_GRAY));

    // Vertical axis: a linear 0..100 scale, inverted so larger values sit higher.
    let y_scale: Arc<dyn Scale<f64>> = Arc::new(ScaleLinear::new((0.0, 100.0), (plot.y1, plot.y0)));
    let left = AxisContext::left_axis(plot.x0, plot.width());

    let mut y_lines = vec![
        CrossLine::new(
            CrossLineConfig::line(75.0)
                .with_stroke(css::CRIMSON, 1.5)
                .with_line_dash([6.0, 4.0])
                .with_label(
                    CrossLineLabel::new("Target")
                        .with_position(LabelPosition::Right)
                        .with_color(css::CRIMSON),
                ),
        ),
        // Bounds given high-to-low on purpose; the marker sorts them.
        CrossLine::new(
            CrossLineConfig::range(40.0, 20.0)
                .with_fill(css::STEEL_BLUE)
                .with_fill_opacity(0.2)
                .with_stroke(css::STEEL_BLUE, 1.0)
                .with_label(
                    CrossLineLabel::new("Normal range")
                        .with_position(LabelPosition::InsideTopLeft)
                        .with_font(LabelFont::new(12.0)),
                ),
        ),
        CrossLine::new(
            CrossLineConfig::line(5.0)
                .with_stroke(css::DARK_SLATE_GRAY, 1.0)
                .with_label(CrossLineLabel::new("Floor").with_position(LabelPosition::Left)),
        ),
    ];
    for line in &mut y_lines {
        line.set_scale(Arc::clone(&y_scale));
        line.set_axis_context(left);
    }

    // Horizontal axis: one band per month.
    let x_scale = ScaleBand::new((plot.x0, plot.x1), MONTHS.len()).with_padding(0.1, 0.05);
    let bottom = AxisContext::bottom_axis(plot.y1, plot.height());
    let x_scale_shared: Arc<dyn Scale<usize>> = Arc::new(x_scale);

    let mut x_lines = vec![
        CrossLine::new(
            CrossLineConfig::line(1_usize)
                .with_stroke(css::SEA_GREEN, 2.0)
                .with_label(
                    CrossLineLabel::new("Launch")
                        .with_position(LabelPosition::Top)
                        .with_parallel(true)
                        .with_color(css::SEA_GREEN),
                ),
        ),
        CrossLine::new(
            CrossLineConfig::range(4_usize, 3)
                .with_fill(css::DARK_ORANGE)
                .with_fill_opacity(0.15)
                .with_stroke(css::DARK_ORANGE, 1.0)
                .with_line_dash([2.0, 2.0])
                .with_label(
                    CrossLineLabel::new("Freeze")
                        .with_position(LabelPosition::InsideBottomRight)
                        .with_parallel(true),
                ),
        ),
    ];
    for line in &mut x_lines {
        line.set_scale(Arc::clone(&x_scale_shared));
        line.set_axis_context(bottom);
    }

    let padding = place_all(&mut y_lines, &mut scene, measurer)
        .merge(place_all(&mut x_lines, &mut scene, measurer));

    for (i, month) in MONTHS.iter().enumerate() {
        let center = x_scale.convert(&i) + x_scale.band_width() / 2.0;
        scene.push_text(center - 10.0, plot.y1 + 18.0, 12.0, month);
    }
    for value in [0.0, 25.0, 50.0, 75.0, 100.0] {
        let y = y_scale.convert(&value);
        scene.push_text(plot.x0 - 28.0, y + 4.0, 11.0, &format!("{value}"));
    }
    scene.push_text(plot.x0, plot.y0 - 30.0 - padding.top, 16.0, "Cross lines");

    scene.set_view_box(Rect::new(
        plot.x0 - 40.0 - padding.left,
        plot.y0 - 50.0 - padding.top,
        plot.x1 + 20.0 + padding.right,
        plot.y1 + 40.0 + padding.bottom,
    ));
    scene.to_svg_string()
}

fn positions_demo() -> String {
    const COLUMNS: usize = 4;
    const PANEL_W: f64 = 160.0;
    const PANEL_H: f64 = 100.0;
    const GUTTER: f64 = 70.0;

    let mut scene = svg::SvgScene::default();
    let rows = LabelPosition::ALL.len().div_ceil(COLUMNS);

    for (i, position) in LabelPosition::ALL.into_iter().enumerate() {
        let (col, row) = ((i % COLUMNS) as f64, (i / COLUMNS) as f64);
        let x0 = GUTTER + col * (PANEL_W + GUTTER);
        let y0 = GUTTER + row * (PANEL_H + GUTTER);
        let plot = Rect::new(x0, y0, x0 + PANEL_W, y0 + PANEL_H);

        scene.push_frame(plot, &Brush::Solid(css::WHITE), &Brush::Solid(css::LIGHT_GRAY));
        scene.push_text(plot.x0, plot.y0 - 24.0, 12.0, position.as_str());

        // A horizontal band from the vertical axis.
        let mut band = CrossLine::new(
            CrossLineConfig::range(35.0, 65.0)
                .with_fill(css::STEEL_BLUE)
                .with_fill_opacity(0.2)
                .with_stroke(css::STEEL_BLUE, 1.0)
                .with_label(
                    CrossLineLabel::new("Y")
                        .with_position(position)
                        .with_font(LabelFont::new(11.0)),
                ),
        );
        band.set_scale(Arc::new(ScaleLinear::new((0.0, 100.0), (plot.y1, plot.y0))));
        band.set_axis_context(AxisContext::left_axis(plot.x0, plot.width()));

        // A vertical line from the horizontal axis.
        let mut rule = CrossLine::new(
            CrossLineConfig::line(70.0)
                .with_stroke(css::CRIMSON, 1.0)
                .with_label(
                    CrossLineLabel::new("X")
                        .with_position(position)
                        .with_parallel(true)
                        .with_color(css::CRIMSON)
                        .with_font(LabelFont::new(11.0)),
                ),
        );
        rule.set_scale(Arc::new(ScaleLinear::new((0.0, 100.0), (plot.x0, plot.x1))));
        rule.set_axis_context(AxisContext::bottom_axis(plot.y1, plot.height()));

        for cross_line in [&mut band, &mut rule] {
            cross_line.update(true);
            scene.push_cross_line(cross_line.nodes());
        }
    }

    let width = GUTTER + COLUMNS as f64 * (PANEL_W + GUTTER);
    let height = GUTTER + rows as f64 * (PANEL_H + GUTTER);
    scene.set_view_box(Rect::new(0.0, 0.0, width, height));
    scene.to_svg_string()
}
