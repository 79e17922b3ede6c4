// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis is a guide: a domain line, tick marks, tick labels, and
//! optional gridlines spanning the plot. Tick values are explicit; the
//! charts in this engine use small fixed tick sets per chart rather than
//! a generic nice-number search.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::color::palette::css;
use peniko::Brush;
use strata_core::{z_order, Dash, Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::error::ChartError;
use crate::format::format_tick;
use crate::measure::TextMeasurer;
use crate::scale::ScaleLinear;

/// A paint + width + dash triple for stroked paths.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Dash pattern; empty for solid.
    pub dash: Dash,
}

impl StrokeStyle {
    /// A solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: Dash::new(),
        }
    }

    /// A dashed stroke with the given on/off lengths.
    pub fn dashed(brush: impl Into<Brush>, stroke_width: f64, len: f64, gap: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: Dash::from_slice(&[len, gap]),
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Fill + font size for generated labels.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Label fill paint.
    pub fill: Brush,
    /// Font size in scene coordinates.
    pub font_size: f64,
}

impl LabelStyle {
    /// Creates a label style.
    pub fn new(fill: impl Into<Brush>, font_size: f64) -> Self {
        Self {
            fill: fill.into(),
            font_size,
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::new(css::BLACK, 10.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the domain line and tick marks.
    pub rule: StrokeStyle,
    /// Style for tick labels.
    pub label: LabelStyle,
    /// Style for the axis title.
    pub title: LabelStyle,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label: LabelStyle::new(rule.brush.clone(), 10.0),
            title: LabelStyle::new(rule.brush.clone(), 11.0),
            rule,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines spanning the plot.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::solid(css::BLACK.with_alpha(40.0 / 255.0), 0.5),
        }
    }
}

/// Axis placement relative to the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// Horizontal axis above the plot.
    Top,
    /// Horizontal axis below the plot.
    Bottom,
    /// Vertical axis left of the plot.
    Left,
    /// Vertical axis right of the plot.
    Right,
}

/// An axis specification: domain, explicit ticks, and styling.
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; generated marks use deterministic offsets from it.
    pub id_base: u64,
    /// Axis placement.
    pub orient: AxisOrient,
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Tick values in data units, ascending.
    pub ticks: Vec<f64>,
    /// Tick line length in scene coordinates.
    pub tick_size: f64,
    /// Whether to draw tick marks.
    pub show_ticks: bool,
    /// Whether to draw tick labels.
    pub show_labels: bool,
    /// Whether to draw the domain line.
    pub show_domain: bool,
    /// Padding between the tick end and its label.
    pub tick_padding: f64,
    /// Styling.
    pub style: AxisStyle,
    /// Optional gridlines spanning the plot at each tick.
    pub grid: Option<GridStyle>,
    /// Optional axis title.
    pub title: Option<String>,
    /// Distance from tick labels to the title.
    pub title_offset: f64,
    /// Optional tick label formatter `(value, step) -> label`.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("orient", &self.orient)
            .field("domain", &self.domain)
            .field("ticks", &self.ticks)
            .field("tick_size", &self.tick_size)
            .field("show_ticks", &self.show_ticks)
            .field("show_labels", &self.show_labels)
            .field("show_domain", &self.show_domain)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("grid", &self.grid)
            .field("title", &self.title)
            .field("title_offset", &self.title_offset)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates an axis with ticks at the domain endpoints only.
    pub fn new(id_base: u64, domain: (f64, f64), orient: AxisOrient) -> Self {
        Self {
            id_base,
            orient,
            domain,
            ticks: alloc::vec![domain.0, domain.1],
            tick_size: 5.0,
            show_ticks: true,
            show_labels: true,
            show_domain: true,
            tick_padding: 4.0,
            style: AxisStyle::default(),
            grid: None,
            title: None,
            title_offset: 10.0,
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a bottom axis.
    pub fn bottom(id_base: u64, domain: (f64, f64)) -> Self {
        Self::new(id_base, domain, AxisOrient::Bottom)
    }

    /// Convenience constructor for a left axis.
    pub fn left(id_base: u64, domain: (f64, f64)) -> Self {
        Self::new(id_base, domain, AxisOrient::Left)
    }

    /// Sets explicit tick values (data units).
    pub fn with_ticks(mut self, ticks: impl Into<Vec<f64>>) -> Self {
        self.ticks = ticks.into();
        self
    }

    /// Subdivides the domain into `count` evenly spaced ticks, endpoints
    /// included.
    pub fn with_tick_count(mut self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        self.ticks = match count {
            0 => Vec::new(),
            1 => alloc::vec![d0],
            _ => {
                let step = (d1 - d0) / (count - 1) as f64;
                (0..count).map(|i| d0 + step * i as f64).collect()
            }
        };
        self
    }

    /// Enables or disables tick marks.
    pub fn with_tick_marks(mut self, show: bool) -> Self {
        self.show_ticks = show;
        self
    }

    /// Enables or disables tick labels.
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Enables or disables the domain line.
    pub fn with_domain_line(mut self, show: bool) -> Self {
        self.show_domain = show;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enables gridlines with the given style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Sets the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Instantiates the scale mapping this axis's domain onto `plot`.
    ///
    /// Vertical axes get an inverted range so values grow upward.
    pub fn scale(&self, plot: Rect) -> Result<ScaleLinear, ChartError> {
        let range = match self.orient {
            AxisOrient::Top | AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left | AxisOrient::Right => (plot.y1, plot.y0),
        };
        ScaleLinear::try_new(self.domain, range)
    }

    /// Measures the thickness this axis needs along its normal direction.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let tick_extent = if self.show_ticks {
            self.tick_size.abs()
        } else {
            0.0
        };
        let step = tick_step(&self.ticks);
        let mut max_label = 0.0_f64;
        if self.show_labels {
            for &v in &self.ticks {
                let label = self.format_tick(v, step);
                let (w, h) = measurer.measure(&label, self.style.label.font_size);
                max_label = max_label.max(match self.orient {
                    AxisOrient::Top | AxisOrient::Bottom => h,
                    AxisOrient::Left | AxisOrient::Right => w,
                });
            }
        }
        let mut out = tick_extent + self.tick_padding.max(0.0) + max_label;
        if self.title.is_some() {
            out += self.title_offset.max(0.0) + self.style.title.font_size;
        }
        out
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => format_tick(v, step),
        }
    }

    /// Generates the axis marks for the given plot rectangle.
    ///
    /// Fails only when the domain is degenerate; an empty tick set renders
    /// the domain line (and title) alone.
    pub fn marks(&self, plot: Rect) -> Result<Vec<Mark>, ChartError> {
        let scale = self.scale(plot)?;
        let step = tick_step(&self.ticks);
        let mut out = Vec::new();

        match self.orient {
            AxisOrient::Top | AxisOrient::Bottom => {
                self.horizontal_marks(plot, &scale, step, &mut out);
            }
            AxisOrient::Left | AxisOrient::Right => {
                self.vertical_marks(plot, &scale, step, &mut out);
            }
        }
        Ok(out)
    }

    fn horizontal_marks(&self, plot: Rect, scale: &ScaleLinear, step: f64, out: &mut Vec<Mark>) {
        let below = self.orient == AxisOrient::Bottom;
        let edge_y = if below { plot.y1 } else { plot.y0 };
        let dir = if below { 1.0 } else { -1.0 };
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.show_ticks { tick_size } else { 0.0 };

        if let Some(grid) = &self.grid {
            for (i, &v) in self.ticks.iter().enumerate() {
                let x = scale.map_clamped(v);
                out.push(stroked(
                    MarkId::from_raw(self.id_base.wrapping_sub(5_000).wrapping_add(i as u64)),
                    z_order::GRID_LINES,
                    line(x, plot.y0, x, plot.y1),
                    &grid.stroke,
                ));
            }
        }

        if self.show_domain {
            out.push(stroked(
                MarkId::from_raw(self.id_base),
                z_order::AXIS_RULES,
                line(plot.x0, edge_y, plot.x1, edge_y),
                &self.style.rule,
            ));
        }

        let ticks_len = self.ticks.len();
        for (i, &v) in self.ticks.iter().enumerate() {
            let x = scale.map_clamped(v);

            if self.show_ticks {
                out.push(stroked(
                    MarkId::from_raw(self.id_base + 1 + i as u64),
                    z_order::AXIS_RULES,
                    line(x, edge_y, x, edge_y + dir * tick_size),
                    &self.style.rule,
                ));
            }

            if self.show_labels {
                let (anchor, x) = if i == 0 && ticks_len > 1 {
                    (TextAnchor::Start, x.clamp(plot.x0, plot.x1))
                } else if i + 1 == ticks_len && ticks_len > 1 {
                    (TextAnchor::End, x.clamp(plot.x0, plot.x1))
                } else {
                    (TextAnchor::Middle, x)
                };
                let y = edge_y + dir * (tick_extent + self.tick_padding.max(0.0));
                let baseline = if below {
                    TextBaseline::Hanging
                } else {
                    TextBaseline::Ideographic
                };
                out.push(Mark::text(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    z_order::AXIS_LABELS,
                    TextMark::new(Point::new(x, y), self.format_tick(v, step))
                        .with_font_size(self.style.label.font_size)
                        .with_fill(self.style.label.fill.clone())
                        .with_anchor(anchor)
                        .with_baseline(baseline),
                ));
            }
        }

        if let Some(title) = &self.title {
            let x = (plot.x0 + plot.x1) * 0.5;
            let thickness = self.measure(&crate::measure::HeuristicTextMeasurer);
            let y = edge_y + dir * thickness;
            let baseline = if below {
                TextBaseline::Ideographic
            } else {
                TextBaseline::Hanging
            };
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 9000),
                z_order::AXIS_TITLES,
                TextMark::new(Point::new(x, y), title.clone())
                    .with_font_size(self.style.title.font_size)
                    .with_fill(self.style.title.fill.clone())
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(baseline),
            ));
        }
    }

    fn vertical_marks(&self, plot: Rect, scale: &ScaleLinear, step: f64, out: &mut Vec<Mark>) {
        let left = self.orient == AxisOrient::Left;
        let edge_x = if left { plot.x0 } else { plot.x1 };
        let dir = if left { -1.0 } else { 1.0 };
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.show_ticks { tick_size } else { 0.0 };

        if let Some(grid) = &self.grid {
            for (i, &v) in self.ticks.iter().enumerate() {
                let y = scale.map_clamped(v);
                out.push(stroked(
                    MarkId::from_raw(self.id_base.wrapping_sub(5_000).wrapping_add(i as u64)),
                    z_order::GRID_LINES,
                    line(plot.x0, y, plot.x1, y),
                    &grid.stroke,
                ));
            }
        }

        if self.show_domain {
            out.push(stroked(
                MarkId::from_raw(self.id_base),
                z_order::AXIS_RULES,
                line(edge_x, plot.y0, edge_x, plot.y1),
                &self.style.rule,
            ));
        }

        for (i, &v) in self.ticks.iter().enumerate() {
            let y = scale.map_clamped(v);

            if self.show_ticks {
                out.push(stroked(
                    MarkId::from_raw(self.id_base + 1 + i as u64),
                    z_order::AXIS_RULES,
                    line(edge_x, y, edge_x + dir * tick_size, y),
                    &self.style.rule,
                ));
            }

            if self.show_labels {
                let x = edge_x + dir * (tick_extent + self.tick_padding.max(0.0));
                let anchor = if left {
                    TextAnchor::End
                } else {
                    TextAnchor::Start
                };
                out.push(Mark::text(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    z_order::AXIS_LABELS,
                    TextMark::new(Point::new(x, y), self.format_tick(v, step))
                        .with_font_size(self.style.label.font_size)
                        .with_fill(self.style.label.fill.clone())
                        .with_anchor(anchor)
                        .with_baseline(TextBaseline::Middle),
                ));
            }
        }

        if let Some(title) = &self.title {
            // Rotated title at the outer edge of the measured axis strip.
            let thickness = self.measure(&crate::measure::HeuristicTextMeasurer);
            let x = edge_x + dir * (thickness - 0.5 * self.style.title.font_size);
            let y = (plot.y0 + plot.y1) * 0.5;
            let angle = if left { -90.0 } else { 90.0 };
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 9000),
                z_order::AXIS_TITLES,
                TextMark::new(Point::new(x, y), title.clone())
                    .with_font_size(self.style.title.font_size)
                    .with_fill(self.style.title.fill.clone())
                    .with_anchor(TextAnchor::Middle)
                    .with_angle(angle),
            ));
        }
    }
}

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((x0, y0));
    p.line_to((x1, y1));
    p
}

fn stroked(id: MarkId, z_index: i32, path: BezPath, style: &StrokeStyle) -> Mark {
    Mark::stroked_path(
        id,
        z_index,
        path,
        style.brush.clone(),
        style.stroke_width,
        style.dash.clone(),
    )
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use strata_core::MarkPayload;

    use super::*;

    fn plot() -> Rect {
        Rect::new(30.0, 14.0, 328.0, 100.0)
    }

    #[test]
    fn left_axis_scale_is_inverted() {
        let axis = AxisSpec::left(1, (0.0, 100.0));
        let s = axis.scale(plot()).unwrap();
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(100.0), 14.0);
    }

    #[test]
    fn degenerate_axis_domain_fails() {
        let axis = AxisSpec::bottom(1, (3.0, 3.0));
        assert!(axis.marks(plot()).is_err());
    }

    #[test]
    fn grid_lines_span_the_plot() {
        let axis = AxisSpec::left(1, (75.0, 100.0))
            .with_ticks([75.0, 80.0, 85.0, 90.0, 95.0, 100.0])
            .with_grid(GridStyle::default());
        let marks = axis.marks(plot()).unwrap();
        let grid: Vec<_> = marks
            .iter()
            .filter(|m| m.z_index == z_order::GRID_LINES)
            .collect();
        assert_eq!(grid.len(), 6);
        for g in grid {
            let MarkPayload::Path(p) = &g.payload else {
                panic!("grid mark should be a path");
            };
            use kurbo::Shape;
            let b = p.path.bounding_box();
            assert_eq!((b.x0, b.x1), (plot().x0, plot().x1));
        }
    }

    #[test]
    fn labels_use_custom_formatter() {
        let axis = AxisSpec::bottom(1, (0.0, 10.0))
            .with_tick_count(3)
            .with_tick_formatter(|v, _| alloc::format!("{v}%"));
        let marks = axis.marks(plot()).unwrap();
        let labels: Vec<&str> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, std::vec!["0%", "5%", "10%"]);
    }

    #[test]
    fn disabling_everything_emits_nothing() {
        let axis = AxisSpec::bottom(1, (0.0, 10.0))
            .with_tick_marks(false)
            .with_labels(false)
            .with_domain_line(false);
        assert!(axis.marks(plot()).unwrap().is_empty());
    }

    #[test]
    fn measure_grows_with_title() {
        let m = crate::measure::HeuristicTextMeasurer;
        let bare = AxisSpec::left(1, (0.0, 10.0)).measure(&m);
        let titled = AxisSpec::left(1, (0.0, 10.0)).with_title("lDDT").measure(&m);
        assert!(titled > bare);
    }
}
