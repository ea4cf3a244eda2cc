// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for a radar layout.

use std::fmt::Write as _;

use kurbo::Point;
use peniko::Brush;
use vizir_polar::{
    AXIS_LABELS, RadarLayout, SERIES_POINTS, StrokeStyle, format_value, polar_to_cartesian,
};

/// Distance between the outer radius and the angle axis labels.
const LABEL_OFFSET: f64 = 12.0;
const FONT_SIZE: f64 = 12.0;
const DOT_RADIUS: f64 = 3.0;

/// One drawable element, ordered by `(z, seq)`.
struct Item {
    z: i32,
    seq: usize,
    svg: String,
}

pub(crate) fn render(layout: &RadarLayout) -> String {
    let ctx = &layout.context;
    let mut items = Vec::new();
    let mut push = |z: i32, svg: String| {
        let seq = items.len();
        items.push(Item { z, seq, svg });
    };

    if let Some(grid) = &layout.grid {
        for ring in &grid.rings {
            let d = ring.svg_path();
            if d.is_empty() {
                continue;
            }
            let mut s = format!(r#"<path d="{d}" fill="none""#);
            write_stroke_attrs(&mut s, &grid.style.stroke);
            s.push_str("/>");
            push(grid.z_index, s);
        }
        for spoke in &grid.spokes {
            let mut s = format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                spoke.start.x, spoke.start.y, spoke.end.x, spoke.end.y
            );
            write_stroke_attrs(&mut s, &grid.style.stroke);
            s.push_str("/>");
            push(grid.z_index, s);
        }
    }

    for poly in &layout.polygons {
        if poly.is_empty() {
            continue;
        }
        let mut s = format!(r#"<path d="{}""#, poly.svg_path());
        write_paint_attr(&mut s, "fill", &poly.fill);
        if poly.fill_opacity < 1.0 {
            let _ = write!(s, r#" fill-opacity="{}""#, poly.fill_opacity);
        }
        match &poly.stroke {
            Some(stroke) => write_stroke_attrs(&mut s, stroke),
            None => s.push_str(r#" stroke="none""#),
        }
        s.push_str("/>");
        push(poly.z_index, s);

        for p in &poly.points {
            if poly.dot {
                let mut s = format!(
                    r#"<circle cx="{}" cy="{}" r="{DOT_RADIUS}""#,
                    p.point.x, p.point.y
                );
                let paint = poly.stroke.as_ref().map_or(&poly.fill, |s| &s.brush);
                write_paint_attr(&mut s, "fill", paint);
                s.push_str("/>");
                push(SERIES_POINTS, s);
            }
            if poly.label {
                if let Some(v) = p.value {
                    push(AXIS_LABELS, text(p.point, p.angle, &format_value(v)));
                }
            }
        }
    }

    for tick in &ctx.axis_ticks {
        let pos = polar_to_cartesian(ctx.center, ctx.outer_radius() + LABEL_OFFSET, tick.angle);
        push(AXIS_LABELS, text(pos, tick.angle, &tick.label));
    }
    for tick in &ctx.radius_ticks {
        push(AXIS_LABELS, text(tick.point, 0.0, &format_value(tick.value)));
    }

    items.sort_by_key(|item| (item.z, item.seq));

    let vp = ctx.viewport;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = ctx.width,
        h = ctx.height,
    );
    let _ = writeln!(
        out,
        r#"<defs><clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
        ctx.clip_id, vp.x, vp.y, vp.width, vp.height
    );
    let _ = writeln!(out, r#"<g clip-path="url(#{})">"#, ctx.clip_id);
    for item in items {
        out.push_str(&item.svg);
        out.push('\n');
    }
    out.push_str("</g>\n</svg>\n");
    out
}

/// A label whose anchor faces away from the center along `angle`.
fn text(pos: Point, angle: f64, label: &str) -> String {
    let (sin, cos) = angle.to_radians().sin_cos();
    let anchor = if cos > 0.1 {
        "start"
    } else if cos < -0.1 {
        "end"
    } else {
        "middle"
    };
    let baseline = if sin > 0.1 {
        "alphabetic"
    } else if sin < -0.1 {
        "hanging"
    } else {
        "middle"
    };
    format!(
        r#"<text x="{}" y="{}" font-size="{FONT_SIZE}" text-anchor="{anchor}" dominant-baseline="{baseline}">{}</text>"#,
        pos.x,
        pos.y,
        escape_xml(label)
    )
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = (rgba.a != 255).then(|| f64::from(rgba.a) / 255.0);
            (fill, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn write_stroke_attrs(out: &mut String, stroke: &StrokeStyle) {
    write_paint_attr(out, "stroke", &stroke.brush);
    let _ = write!(out, r#" stroke-width="{}""#, stroke.stroke_width);
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
