// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `vizir_crossline_demo`.

use kurbo::{Affine, Rect};
use peniko::{Brush, Color};
use vizir_crossline::{CrossLineNodes, LabelNode, LineDash, TextAlign, TextBaseline};

/// Paint order band for plot backgrounds and frames.
const PLOT_BACKGROUND: i32 = -100;
/// Paint order band for plain chart text (titles, captions).
const CHART_TEXT: i32 = 80;

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    // (z_index, insertion order, element)
    elements: Vec<(i32, usize, String)>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    fn push(&mut self, z_index: i32, element: String) {
        let order = self.elements.len();
        self.elements.push((z_index, order, element));
    }

    /// Adds a filled, outlined plot frame.
    pub(crate) fn push_frame(&mut self, rect: Rect, fill: &Brush, stroke: &Brush) {
        let mut out = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
        write_paint_attr(&mut out, "fill", fill);
        write_paint_attr(&mut out, "stroke", stroke);
        out.push_str("/>");
        self.push(PLOT_BACKGROUND, out);
    }

    /// Adds unrotated chart text at `(x, y)`.
    pub(crate) fn push_text(&mut self, x: f64, y: f64, font_size: f64, text: &str) {
        self.push(
            CHART_TEXT,
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" font-family="sans-serif">{}</text>"#,
                escape_xml(text)
            ),
        );
    }

    /// Adds every visible node of a cross line, each wrapped in its group transform.
    pub(crate) fn push_cross_line(&mut self, nodes: &CrossLineNodes) {
        if !nodes.visible {
            return;
        }
        let group = matrix_attr(nodes.transform);

        if let Some(range) = &nodes.range {
            let mut out = format!(r#"<g{group}><path d="{}""#, range.path().to_svg());
            match &range.fill {
                Some(fill) => write_paint_attr(&mut out, "fill", fill),
                None => out.push_str(r#" fill="none""#),
            }
            if range.opacity < 1.0 {
                out.push_str(&format!(r#" opacity="{}""#, range.opacity));
            }
            out.push_str("/></g>");
            self.push(range.z_index, out);
        }

        if let Some(line) = &nodes.line {
            if let Some(stroke) = &line.stroke {
                let mut out = format!(
                    r#"<g{group}><path d="{}" fill="none""#,
                    line.path().to_svg()
                );
                write_paint_attr(&mut out, "stroke", stroke);
                out.push_str(&format!(r#" stroke-width="{}""#, line.stroke_width));
                write_dash_attr(&mut out, &line.line_dash);
                if line.opacity < 1.0 {
                    out.push_str(&format!(r#" stroke-opacity="{}""#, line.opacity));
                }
                out.push_str("/></g>");
                self.push(line.z_index, out);
            }
        }

        if let Some(label) = &nodes.label {
            let placed = nodes.transform * label.transform.affine();
            self.push(label.z_index, label_element(label, placed));
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        let mut order: Vec<&(i32, usize, String)> = self.elements.iter().collect();
        order.sort_by_key(|(z, i, _)| (*z, *i));
        for (_z, _i, element) in order {
            out.push_str(element);
            out.push('\n');
        }

        out.push_str("</svg>\n");
        out
    }
}

fn label_element(label: &LabelNode, placed: Affine) -> String {
    let anchor = match label.transform.align {
        TextAlign::Start => "start",
        TextAlign::Center => "middle",
        TextAlign::End => "end",
    };
    let baseline = match label.transform.baseline {
        TextBaseline::Top => "hanging",
        TextBaseline::Middle => "middle",
        TextBaseline::Bottom => "text-after-edge",
    };
    let mut out = format!(
        r#"<text{} x="0" y="0" font-size="{}" font-family="{}" font-weight="{}" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
        matrix_attr(placed),
        label.font.size,
        label.font.family.as_css_family(),
        label.font.weight.0,
    );
    write_color_attr(&mut out, "fill", label.color.unwrap_or(Color::BLACK));
    out.push('>');
    out.push_str(&escape_xml(&label.text));
    out.push_str("</text>");
    out
}

fn matrix_attr(affine: Affine) -> String {
    if affine == Affine::IDENTITY {
        return String::new();
    }
    let [a, b, c, d, e, f] = affine.as_coeffs();
    format!(r#" transform="matrix({a} {b} {c} {d} {e} {f})""#)
}

fn svg_color(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_color_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_color(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    match brush {
        Brush::Solid(color) => write_color_attr(out, name, *color),
        _ => out.push_str(&format!(r#" {name}="none""#)),
    }
}

fn write_dash_attr(out: &mut String, dash: &LineDash) {
    if dash.is_empty() {
        return;
    }
    let values: Vec<String> = dash.iter().map(f64::to_string).collect();
    out.push_str(&format!(r#" stroke-dasharray="{}""#, values.join(" ")));
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
