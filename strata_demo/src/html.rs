// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML report assembly for the demo.

use strata_core::Palette;

/// One rendered card: tab label, card title, and its SVG markup.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    /// Owning tab label.
    pub(crate) tab: String,
    /// Card title.
    pub(crate) title: String,
    /// Inline SVG markup.
    pub(crate) svg: String,
}

impl HtmlSection {
    /// Creates a section.
    pub(crate) fn new(tab: impl Into<String>, title: impl Into<String>, svg: String) -> Self {
        Self {
            tab: tab.into(),
            title: title.into(),
            svg,
        }
    }
}

fn css_color(color: peniko::Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// Renders the full report page.
///
/// `header` lines are the settled headline counter strings shown above
/// the cards.
pub(crate) fn render_report(
    title: &str,
    header: &[(String, String)],
    sections: &[HtmlSection],
    palette: &Palette,
) -> String {
    let bg = css_color(palette.background);
    let card = css_color(palette.card);
    let border = css_color(palette.border);
    let text = css_color(palette.text);
    let muted = css_color(palette.muted);
    let accent = css_color(palette.very_high);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(&format!(
        "<style>\n\
         body {{ background: {bg}; color: {text}; font-family: monospace; padding: 24px; }}\n\
         h1 {{ font-size: 20px; }}\n\
         h2 {{ color: {accent}; font-size: 13px; letter-spacing: 0.1em; text-transform: uppercase; margin-top: 28px; }}\n\
         .stats {{ display: flex; gap: 32px; margin: 18px 0; }}\n\
         .stat b {{ color: {accent}; font-size: 24px; display: block; }}\n\
         .stat span {{ color: {muted}; font-size: 10px; letter-spacing: 0.12em; text-transform: uppercase; }}\n\
         .card {{ background: {card}; border: 1px solid {border}; border-radius: 10px; padding: 16px 20px; margin: 12px 0; display: inline-block; vertical-align: top; }}\n\
         .card h3 {{ color: {muted}; font-size: 10px; letter-spacing: 0.18em; text-transform: uppercase; margin: 0 0 12px; }}\n\
         </style>\n</head>\n<body>\n"
    ));
    out.push_str(&format!("<h1>{title}</h1>\n"));

    if !header.is_empty() {
        out.push_str("<div class=\"stats\">\n");
        for (value, label) in header {
            out.push_str(&format!(
                "<div class=\"stat\"><b>{value}</b><span>{label}</span></div>\n"
            ));
        }
        out.push_str("</div>\n");
    }

    let mut current_tab: Option<&str> = None;
    for section in sections {
        if current_tab != Some(section.tab.as_str()) {
            out.push_str(&format!("<h2>{}</h2>\n", section.tab));
            current_tab = Some(section.tab.as_str());
        }
        out.push_str(&format!(
            "<div class=\"card\"><h3>{}</h3>\n{}</div>\n",
            section.title, section.svg
        ));
    }

    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_group_under_their_tab() {
        let sections = vec![
            HtmlSection::new("Overview", "A", "<svg/>".to_string()),
            HtmlSection::new("Overview", "B", "<svg/>".to_string()),
            HtmlSection::new("Accuracy", "C", "<svg/>".to_string()),
        ];
        let html = render_report("demo", &[], &sections, &Palette::dark());
        assert_eq!(html.matches("<h2>Overview</h2>").count(), 1);
        assert_eq!(html.matches("<h2>Accuracy</h2>").count(), 1);
        assert_eq!(html.matches("<div class=\"card\">").count(), 3);
    }

    #[test]
    fn header_stats_are_rendered() {
        let html = render_report(
            "demo",
            &[("20296".to_string(), "Proteins Predicted".to_string())],
            &[],
            &Palette::dark(),
        );
        assert!(html.contains("<b>20296</b>"));
    }
}
