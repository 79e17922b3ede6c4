// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::BezPath;
use peniko::Brush;
use strata_core::{z_order, Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::scale::ScaleLinear;
use crate::series::XySeries;

/// A filled area under an ordered point sequence.
///
/// The fill polygon is the polyline plus the baseline projections of the
/// first and last x positions, closed. An optional outline stroke follows
/// the polyline only (not the baseline edge).
#[derive(Clone, Debug)]
pub struct AreaMarkSpec {
    /// Stable-id base; the fill uses `id_base`, the outline `id_base + 1`.
    pub id_base: u64,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// Baseline in data units (typically the y-domain minimum).
    pub baseline: f64,
    /// Fill paint for the area polygon.
    pub fill: Brush,
    /// Optional outline stroke along the data polyline.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order for the fill.
    pub z_index: i32,
}

impl AreaMarkSpec {
    /// Creates an area mark with the baseline at the y-domain minimum and
    /// a default fill.
    pub fn new(id_base: u64, x_scale: ScaleLinear, y_scale: ScaleLinear) -> Self {
        Self {
            id_base,
            x_scale,
            y_scale,
            baseline: y_scale.domain_min(),
            fill: Brush::default(),
            stroke: None,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the baseline in data units.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Adds an outline stroke along the polyline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index used for the fill.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the area polygon (and outline). Out-of-domain points clip
    /// to the domain boundary; an empty series yields no marks.
    pub fn marks(&self, series: &XySeries) -> Vec<Mark> {
        let mut out = Vec::new();
        if series.is_empty() {
            return out;
        }

        let y0 = self.y_scale.map_clamped(self.baseline);
        let mut area = BezPath::new();
        let mut last_x = 0.0;
        for (i, p) in series.points().iter().enumerate() {
            let pt = (self.x_scale.map_clamped(p.x), self.y_scale.map_clamped(p.y));
            last_x = pt.0;
            if i == 0 {
                area.move_to((pt.0, y0));
            }
            area.line_to(pt);
        }
        area.line_to((last_x, y0));
        area.close_path();
        out.push(Mark::filled_path(
            MarkId::from_raw(self.id_base),
            self.z_index,
            area,
            self.fill.clone(),
        ));

        if let Some(stroke) = &self.stroke {
            let mut outline = BezPath::new();
            for (i, p) in series.points().iter().enumerate() {
                let pt = (self.x_scale.map_clamped(p.x), self.y_scale.map_clamped(p.y));
                if i == 0 {
                    outline.move_to(pt);
                } else {
                    outline.line_to(pt);
                }
            }
            out.push(Mark::stroked_path(
                MarkId::from_raw(self.id_base + 1),
                self.z_index.saturating_add(z_order::SERIES_STROKE),
                outline,
                stroke.brush.clone(),
                stroke.stroke_width,
                stroke.dash.clone(),
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use strata_core::MarkPayload;

    use super::*;

    fn spec() -> AreaMarkSpec {
        let sx = ScaleLinear::try_new((20.0, 100.0), (28.0, 288.0)).unwrap();
        let sy = ScaleLinear::try_new((50.0, 100.0), (82.0, 12.0)).unwrap();
        AreaMarkSpec::new(10, sx, sy)
    }

    fn rotamer_series() -> XySeries {
        XySeries::from_pairs(&[(20.0, 55.0), (50.0, 62.0), (90.0, 84.0), (100.0, 97.0)]).unwrap()
    }

    #[test]
    fn polygon_closes_to_the_baseline() {
        let marks = spec().marks(&rotamer_series());
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected a path mark");
        };
        let els = p.path.elements();
        // move_to(first_x, y0), 4 data points, line_to(last_x, y0), close.
        assert_eq!(els.len(), 7);
        let kurbo::PathEl::MoveTo(start) = els[0] else {
            panic!("expected MoveTo");
        };
        let kurbo::PathEl::LineTo(end) = els[5] else {
            panic!("expected LineTo");
        };
        assert_eq!(start.y, end.y);
        assert!(matches!(els[6], kurbo::PathEl::ClosePath));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let spec = spec().with_stroke(StrokeStyle::default());
        let series = rotamer_series();
        let a = spec.marks(&series);
        let b = spec.marks(&series);
        assert_eq!(a, b);
    }

    #[test]
    fn outline_is_emitted_above_the_fill() {
        let marks = spec().with_stroke(StrokeStyle::default()).marks(&rotamer_series());
        assert_eq!(marks.len(), 2);
        assert!(marks[1].z_index > marks[0].z_index);
    }

    #[test]
    fn empty_series_yields_no_marks() {
        let series = XySeries::new(Vec::new()).unwrap();
        assert!(spec().marks(&series).is_empty());
    }
}
