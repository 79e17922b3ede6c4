// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal meter and fraction-bar mark generation.
//!
//! Meters are the card-row staple: a muted track with a fill proportional
//! to `value / max`, optionally with a comparison fill drawn behind at the
//! same origin. Fraction bars split one track into ordered colored
//! segments (a categorical distribution summing to the track width).

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use strata_core::{z_order, Mark, MarkId};

/// A horizontal meter: track + proportional fill (+ optional overlay).
#[derive(Clone, Debug)]
pub struct MeterMarkSpec {
    /// Stable-id base; track, overlay, and fill use offsets 0, 1, 2.
    pub id_base: u64,
    /// Full-scale value (the fill spans the track at `value == max`).
    pub max: f64,
    /// Track fill paint.
    pub track: Brush,
    /// Primary fill paint.
    pub fill: Brush,
    /// Optional comparison fill drawn behind the primary.
    pub secondary: Option<Brush>,
    /// Rendering order for the primary fill.
    pub z_index: i32,
}

impl MeterMarkSpec {
    /// Creates a meter with `max = 100` (percentage semantics).
    pub fn new(id_base: u64, track: impl Into<Brush>, fill: impl Into<Brush>) -> Self {
        Self {
            id_base,
            max: 100.0,
            track: track.into(),
            fill: fill.into(),
            secondary: None,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the full-scale value.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Sets the comparison overlay fill.
    pub fn with_secondary(mut self, fill: impl Into<Brush>) -> Self {
        self.secondary = Some(fill.into());
        self
    }

    /// Generates the meter into `frame`.
    ///
    /// Values clip to `[0, max]`; a secondary value only renders when an
    /// overlay fill is configured. The primary fill never moves because of
    /// the overlay; both start at the track origin.
    pub fn marks(&self, value: f64, secondary: Option<f64>, frame: Rect) -> Vec<Mark> {
        let width = frame.width();
        let frac = |v: f64| (v / self.max).clamp(0.0, 1.0) * width;

        let mut out = alloc::vec![Mark::rect(
            MarkId::from_raw(self.id_base),
            z_order::PLOT_BACKGROUND,
            frame,
            self.track.clone(),
        )];

        if let (Some(fill), Some(v)) = (&self.secondary, secondary) {
            out.push(Mark::rect(
                MarkId::from_raw(self.id_base + 1),
                z_order::SERIES_UNDERLAY,
                Rect::new(frame.x0, frame.y0, frame.x0 + frac(v), frame.y1),
                fill.clone(),
            ));
        }

        out.push(Mark::rect(
            MarkId::from_raw(self.id_base + 2),
            self.z_index,
            Rect::new(frame.x0, frame.y0, frame.x0 + frac(value), frame.y1),
            self.fill.clone(),
        ));

        out
    }
}

/// A horizontal bar split into ordered proportional segments.
#[derive(Clone, Debug)]
pub struct FractionBarSpec {
    /// Stable-id base; segment `i` uses `id_base + i`.
    pub id_base: u64,
    /// Pixel gap between adjacent segments.
    pub gap: f64,
    /// Rendering order.
    pub z_index: i32,
}

impl FractionBarSpec {
    /// Creates a fraction bar with a 1px segment gap.
    pub fn new(id_base: u64) -> Self {
        Self {
            id_base,
            gap: 1.0,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the segment gap.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Generates one rect per `(weight, fill)` segment, widths
    /// proportional to weight. Non-positive weights are skipped; if all
    /// weights are non-positive nothing is emitted.
    pub fn marks(&self, segments: &[(f64, Brush)], frame: Rect) -> Vec<Mark> {
        let total: f64 = segments.iter().map(|(w, _)| w.max(0.0)).sum();
        if total <= 0.0 {
            return Vec::new();
        }
        let gaps = self.gap * (segments.iter().filter(|(w, _)| *w > 0.0).count() as f64 - 1.0);
        let usable = (frame.width() - gaps.max(0.0)).max(0.0);

        let mut out = Vec::new();
        let mut x = frame.x0;
        for (i, (weight, fill)) in segments.iter().enumerate() {
            if *weight <= 0.0 {
                continue;
            }
            let w = weight / total * usable;
            out.push(Mark::rect(
                MarkId::for_index(self.id_base, i),
                self.z_index,
                Rect::new(x, frame.y0, x + w, frame.y1),
                fill.clone(),
            ));
            x += w + self.gap;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::Color;
    use strata_core::MarkPayload;

    use super::*;

    fn frame() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 8.0)
    }

    fn rect_of(mark: &Mark) -> Rect {
        let MarkPayload::Rect(r) = &mark.payload else {
            panic!("expected a rect mark");
        };
        r.rect
    }

    #[test]
    fn fill_is_proportional_to_value() {
        let spec = MeterMarkSpec::new(1, Color::BLACK, Color::WHITE);
        let marks = spec.marks(58.0, None, frame());
        assert_eq!(marks.len(), 2);
        assert_eq!(rect_of(&marks[0]), frame());
        assert_eq!(rect_of(&marks[1]).width(), 116.0);
    }

    #[test]
    fn overfull_meter_clips_to_the_track() {
        let spec = MeterMarkSpec::new(1, Color::BLACK, Color::WHITE);
        let marks = spec.marks(140.0, None, frame());
        assert_eq!(rect_of(&marks[1]).width(), frame().width());
    }

    #[test]
    fn overlay_shares_the_origin_and_sits_behind() {
        let spec = MeterMarkSpec::new(1, Color::BLACK, Color::WHITE)
            .with_secondary(Color::from_rgb8(0x80, 0x80, 0x80));
        let marks = spec.marks(93.0, Some(83.0), frame());
        assert_eq!(marks.len(), 3);
        let overlay = rect_of(&marks[1]);
        let primary = rect_of(&marks[2]);
        assert_eq!(overlay.x0, primary.x0);
        assert!(marks[1].z_index < marks[2].z_index);
    }

    #[test]
    fn fraction_segments_fill_the_frame() {
        let spec = FractionBarSpec::new(1).with_gap(1.0);
        let segs = [
            (42.0, Brush::Solid(Color::WHITE)),
            (26.0, Brush::Solid(Color::BLACK)),
            (14.0, Brush::Solid(Color::WHITE)),
            (18.0, Brush::Solid(Color::BLACK)),
        ];
        let marks = spec.marks(&segs, frame());
        assert_eq!(marks.len(), 4);
        let total: f64 = marks.iter().map(|m| rect_of(m).width()).sum();
        assert!((total + 3.0 - frame().width()).abs() < 1e-9);
        // Widths are ordered like the weights.
        assert!(rect_of(&marks[0]).width() > rect_of(&marks[1]).width());
    }

    #[test]
    fn zero_weights_emit_nothing() {
        let spec = FractionBarSpec::new(1);
        assert!(spec.marks(&[(0.0, Brush::Solid(Color::WHITE))], frame()).is_empty());
    }
}
