// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use strata_core::{z_order, Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::axis::LabelStyle;
use crate::format::format_tick;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::series::DataSeries;

/// Per-bar fill assignment.
#[derive(Clone)]
pub enum ColorRule {
    /// Every bar uses the same fill.
    Uniform(Brush),
    /// Bars at or past `from_index` use a highlight fill.
    Threshold {
        /// First highlighted index.
        from_index: usize,
        /// Fill for bars before the threshold.
        below: Brush,
        /// Fill for bars at or past the threshold.
        at_or_above: Brush,
    },
    /// Arbitrary per-index fill: `(index, series_len) -> brush`.
    PerIndex(Arc<dyn Fn(usize, usize) -> Brush>),
}

impl core::fmt::Debug for ColorRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Uniform(b) => f.debug_tuple("Uniform").field(b).finish(),
            Self::Threshold {
                from_index,
                below,
                at_or_above,
            } => f
                .debug_struct("Threshold")
                .field("from_index", from_index)
                .field("below", below)
                .field("at_or_above", at_or_above)
                .finish(),
            Self::PerIndex(_) => f.debug_tuple("PerIndex").finish(),
        }
    }
}

impl ColorRule {
    fn brush_for(&self, index: usize, len: usize) -> Brush {
        match self {
            Self::Uniform(b) => b.clone(),
            Self::Threshold {
                from_index,
                below,
                at_or_above,
            } => {
                if index >= *from_index {
                    at_or_above.clone()
                } else {
                    below.clone()
                }
            }
            Self::PerIndex(f) => (f)(index, len),
        }
    }
}

/// A vertical categorical bar mark, optionally with a comparison overlay.
///
/// One rectangle per record; bars grow upward from the baseline. When the
/// series carries a secondary value, a second rectangle is drawn behind
/// the primary in the *same* band slot; the primary's x position never
/// shifts.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Stable-id base for generated marks.
    pub id_base: u64,
    /// Band scale for bar slots along x.
    pub band: ScaleBand,
    /// Linear scale for bar extents along y (range usually inverted).
    pub y_scale: ScaleLinear,
    /// Baseline in data units (typically the domain minimum).
    pub baseline: f64,
    /// Fill assignment for primary bars.
    pub color: ColorRule,
    /// Fill for the secondary overlay bars, if the series has them.
    pub secondary_fill: Option<Brush>,
    /// Optional per-bar value labels drawn above each bar.
    pub value_labels: Option<LabelStyle>,
    /// Optional category labels drawn below the baseline.
    pub category_labels: Option<LabelStyle>,
    /// Rendering order for primary bars.
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar mark spec with a uniform default fill and the
    /// baseline at the y-domain minimum.
    pub fn new(id_base: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            id_base,
            band,
            y_scale,
            baseline: y_scale.domain_min(),
            color: ColorRule::Uniform(Brush::default()),
            secondary_fill: None,
            value_labels: None,
            category_labels: None,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the baseline in data units.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill rule.
    pub fn with_color(mut self, color: ColorRule) -> Self {
        self.color = color;
        self
    }

    /// Sets the overlay fill used for secondary values.
    pub fn with_secondary_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.secondary_fill = Some(fill.into());
        self
    }

    /// Draws each record's value above its bar.
    pub fn with_value_labels(mut self, style: LabelStyle) -> Self {
        self.value_labels = Some(style);
        self
    }

    /// Draws each record's category label below the baseline.
    pub fn with_category_labels(mut self, style: LabelStyle) -> Self {
        self.category_labels = Some(style);
        self
    }

    /// Sets the z-index used for primary bars.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one rectangle per record (plus overlays and labels).
    ///
    /// Values outside the y domain clip to the domain boundary. An empty
    /// series yields no marks; the surrounding axes still render.
    pub fn marks(&self, series: &DataSeries) -> Vec<Mark> {
        let y0 = self.y_scale.map_clamped(self.baseline);
        let bw = self.band.band_width();
        let mut out = Vec::new();

        for (i, record) in series.records().iter().enumerate() {
            let x = self.band.x(i);

            if let (Some(fill), Some(secondary)) = (&self.secondary_fill, record.secondary) {
                let y = self.y_scale.map_clamped(secondary);
                out.push(Mark::rect(
                    MarkId::from_raw(self.id_base + 500 + i as u64),
                    z_order::SERIES_UNDERLAY,
                    span_rect(x, bw, y, y0),
                    fill.clone(),
                ));
            }

            let y = self.y_scale.map_clamped(record.value);
            out.push(Mark::rect(
                MarkId::for_index(self.id_base, i),
                self.z_index,
                span_rect(x, bw, y, y0),
                self.color.brush_for(i, series.len()),
            ));

            if let Some(style) = &self.value_labels {
                out.push(Mark::text(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    z_order::ANNOTATIONS,
                    TextMark::new(
                        Point::new(x + 0.5 * bw, y.min(y0) - 3.0),
                        format_tick(record.value, 0.0),
                    )
                    .with_font_size(style.font_size)
                    .with_fill(style.fill.clone())
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Alphabetic),
                ));
            }

            if let Some(style) = &self.category_labels {
                out.push(Mark::text(
                    MarkId::from_raw(self.id_base + 2000 + i as u64),
                    z_order::AXIS_LABELS,
                    TextMark::new(Point::new(x + 0.5 * bw, y0 + 4.0), record.label.clone())
                        .with_font_size(style.font_size)
                        .with_fill(style.fill.clone())
                        .with_anchor(TextAnchor::Middle)
                        .with_baseline(TextBaseline::Hanging),
                ));
            }
        }

        out
    }
}

fn span_rect(x: f64, width: f64, y_a: f64, y_b: f64) -> Rect {
    Rect::new(x, y_a.min(y_b), x + width, y_a.max(y_b))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use strata_core::MarkPayload;

    use crate::series::Record;

    use super::*;

    fn series() -> DataSeries {
        DataSeries::new(vec![
            Record::new("pLDDT 90-100", 35.7),
            Record::new("pLDDT 70-90", 22.3),
            Record::new("pLDDT 50-70", 18.2),
            Record::new("pLDDT 0-50", 23.8),
        ])
        .unwrap()
    }

    fn spec() -> BarMarkSpec {
        let band = ScaleBand::new((0.0, 200.0), 4).with_gap(4.0);
        let y = ScaleLinear::try_new((0.0, 40.0), (100.0, 0.0)).unwrap();
        BarMarkSpec::new(100, band, y)
    }

    fn rects(marks: &[Mark]) -> Vec<Rect> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Rect(r) => Some(r.rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn one_rect_per_record_in_disjoint_slots() {
        let marks = spec().marks(&series());
        let rects = rects(&marks);
        assert_eq!(rects.len(), 4);
        for w in rects.windows(2) {
            assert!(w[0].x1 < w[1].x0, "bars must not overlap");
        }
    }

    #[test]
    fn tallest_bar_is_the_largest_value() {
        let marks = spec().marks(&series());
        let rects = rects(&marks);
        let heights: Vec<f64> = rects.iter().map(|r| r.height()).collect();
        let max = heights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(heights[0], max);
        assert!(heights[1] > heights[2]);
    }

    #[test]
    fn out_of_domain_value_clips_to_domain_edge() {
        let over = DataSeries::new(vec![Record::new("a", 55.0), Record::new("b", 40.0)]).unwrap();
        let band = ScaleBand::new((0.0, 100.0), 2);
        let y = ScaleLinear::try_new((0.0, 40.0), (100.0, 0.0)).unwrap();
        let marks = BarMarkSpec::new(1, band, y).marks(&over);
        let rects = rects(&marks);
        assert_eq!(rects[0].y0, rects[1].y0);
        assert_eq!(rects[0].height(), rects[1].height());
    }

    #[test]
    fn threshold_rule_highlights_the_tail() {
        let highlight = Brush::Solid(peniko::Color::WHITE);
        let base = Brush::Solid(peniko::Color::BLACK);
        let marks = spec()
            .with_color(ColorRule::Threshold {
                from_index: 2,
                below: base.clone(),
                at_or_above: highlight.clone(),
            })
            .marks(&series());
        let fills: Vec<&Brush> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Rect(r) => Some(&r.fill),
                _ => None,
            })
            .collect();
        assert_eq!(fills[0], &base);
        assert_eq!(fills[1], &base);
        assert_eq!(fills[2], &highlight);
        assert_eq!(fills[3], &highlight);
    }

    #[test]
    fn per_index_rule_sees_index_and_length() {
        let white = Brush::Solid(peniko::Color::WHITE);
        let black = Brush::Solid(peniko::Color::BLACK);
        let marks = spec()
            .with_color(ColorRule::PerIndex(alloc::sync::Arc::new({
                let white = white.clone();
                let black = black.clone();
                move |i, len| {
                    if (i as f64) < 0.5 * len as f64 {
                        white.clone()
                    } else {
                        black.clone()
                    }
                }
            })))
            .marks(&series());
        let fills: Vec<&Brush> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Rect(r) => Some(&r.fill),
                _ => None,
            })
            .collect();
        assert_eq!(fills, std::vec![&white, &white, &black, &black]);
    }

    #[test]
    fn secondary_overlay_shares_the_slot_without_shifting_primary() {
        let dual = DataSeries::new(vec![
            Record::new("30-40%", 91.0).with_secondary(80.0),
            Record::new("40-50%", 93.0).with_secondary(83.0),
        ])
        .unwrap();
        let band = ScaleBand::new((0.0, 100.0), 2);
        let y = ScaleLinear::try_new((75.0, 100.0), (100.0, 0.0)).unwrap();

        let solo = BarMarkSpec::new(1, band, y).marks(
            &DataSeries::new(vec![Record::new("30-40%", 91.0), Record::new("40-50%", 93.0)])
                .unwrap(),
        );
        let overlaid = BarMarkSpec::new(1, band, y)
            .with_secondary_fill(peniko::Color::WHITE)
            .marks(&dual);

        // Two extra rects, drawn behind, and the primaries are unchanged.
        assert_eq!(rects(&overlaid).len(), rects(&solo).len() + 2);
        let primary_solo: Vec<Rect> = solo
            .iter()
            .filter(|m| m.z_index == z_order::SERIES_FILL)
            .filter_map(|m| m.payload.bounds())
            .collect();
        let primary_overlaid: Vec<Rect> = overlaid
            .iter()
            .filter(|m| m.z_index == z_order::SERIES_FILL)
            .filter_map(|m| m.payload.bounds())
            .collect();
        assert_eq!(primary_solo, primary_overlaid);
        let underlay: Vec<&Mark> = overlaid
            .iter()
            .filter(|m| m.z_index == z_order::SERIES_UNDERLAY)
            .collect();
        assert_eq!(underlay.len(), 2);
        for (u, p) in underlay.iter().zip(&primary_overlaid) {
            let b = u.payload.bounds().unwrap();
            assert_eq!((b.x0, b.x1), (p.x0, p.x1), "overlay must share the slot");
        }
    }

    #[test]
    fn empty_series_yields_no_marks() {
        let empty = DataSeries::new(Vec::new()).unwrap();
        assert!(spec().marks(&empty).is_empty());
    }

    #[test]
    fn labels_are_emitted_when_configured() {
        let marks = spec()
            .with_value_labels(LabelStyle::default())
            .with_category_labels(LabelStyle::default())
            .marks(&series());
        let texts: Vec<&str> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"35.7"));
        assert!(texts.contains(&"pLDDT 0-50"));
        assert_eq!(texts.len(), 8);
    }
}
