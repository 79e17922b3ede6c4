// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump for retained scenes.

use kurbo::Rect;
use peniko::Brush;
use strata_core::{MarkPayload, Scene, TextAnchor, TextBaseline};

/// Serializes a scene to an SVG string over the given view box.
///
/// Marks are painted in `(z_index, id)` order. The view box is padded
/// slightly so guide labels on the surface edge are not clipped.
pub(crate) fn scene_to_svg(scene: &Scene, view_box: Rect) -> String {
    let pad = 6.0;
    let view_box = Rect::new(
        view_box.x0 - pad,
        view_box.y0 - pad,
        view_box.x1 + pad,
        view_box.y1 + pad,
    );

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

    for mark in scene.iter_sorted() {
        match &mark.payload {
            MarkPayload::Rect(r) => {
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    r.rect.x0,
                    r.rect.y0,
                    r.rect.width(),
                    r.rect.height(),
                ));
                write_paint_attr(&mut out, "fill", &r.fill);
                out.push_str("/>\n");
            }
            MarkPayload::Path(p) => {
                let d = p.path.to_svg();
                out.push_str(&format!(r#"<path d="{d}""#));
                write_paint_attr(&mut out, "fill", &p.fill);
                if p.stroke_width > 0.0 {
                    write_paint_attr(&mut out, "stroke", &p.stroke);
                    out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                    if !p.dash.is_empty() {
                        let dashes: Vec<String> =
                            p.dash.iter().map(|d| format!("{d}")).collect();
                        out.push_str(&format!(
                            r#" stroke-dasharray="{}""#,
                            dashes.join(",")
                        ));
                    }
                }
                out.push_str("/>\n");
            }
            MarkPayload::Text(t) => {
                let baseline = match t.baseline {
                    TextBaseline::Middle => "middle",
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Hanging => "hanging",
                    TextBaseline::Ideographic => "ideographic",
                };
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                    t.pos.x, t.pos.y, t.font_size, baseline
                ));
                if t.angle != 0.0 {
                    out.push_str(&format!(
                        r#" transform="rotate({} {} {})""#,
                        t.angle, t.pos.x, t.pos.y
                    ));
                }
                out.push_str(match t.anchor {
                    TextAnchor::Start => r#" text-anchor="start""#,
                    TextAnchor::Middle => r#" text-anchor="middle""#,
                    TextAnchor::End => r#" text-anchor="end""#,
                });
                write_paint_attr(&mut out, "fill", &t.fill);
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
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
