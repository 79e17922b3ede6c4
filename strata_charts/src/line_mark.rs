// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Brush;
use strata_core::{z_order, Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::scale::ScaleLinear;
use crate::series::XySeries;

/// A polyline mark through an ordered point sequence.
///
/// Two trends overlaid on the same plot share the same scale instances and
/// differ by stroke style (the comparison curve is usually dashed), so no
/// legend component is needed to tell them apart.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable id for the polyline mark.
    pub id: MarkId,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// Stroke style for the polyline.
    pub stroke: StrokeStyle,
    /// Optional circular markers at each vertex: `(radius, fill)`.
    pub markers: Option<(f64, Brush)>,
    /// Rendering order for the polyline.
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a line mark with a default solid stroke and no markers.
    pub fn new(id: MarkId, x_scale: ScaleLinear, y_scale: ScaleLinear) -> Self {
        Self {
            id,
            x_scale,
            y_scale,
            stroke: StrokeStyle::default(),
            markers: None,
            z_index: z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Draws a filled circle of `radius` at each vertex.
    pub fn with_markers(mut self, radius: f64, fill: impl Into<Brush>) -> Self {
        self.markers = Some((radius, fill.into()));
        self
    }

    /// Sets the z-index used for the polyline.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the polyline (and markers). Out-of-domain points clip to
    /// the domain boundary; an empty series yields no marks.
    pub fn marks(&self, series: &XySeries) -> Vec<Mark> {
        let mut out = Vec::new();
        if series.is_empty() {
            return out;
        }

        let mut path = BezPath::new();
        for (i, p) in series.points().iter().enumerate() {
            let pt = (self.x_scale.map_clamped(p.x), self.y_scale.map_clamped(p.y));
            if i == 0 {
                path.move_to(pt);
            } else {
                path.line_to(pt);
            }
        }
        out.push(Mark::stroked_path(
            self.id,
            self.z_index,
            path,
            self.stroke.brush.clone(),
            self.stroke.stroke_width,
            self.stroke.dash.clone(),
        ));

        if let Some((radius, fill)) = &self.markers {
            for (i, p) in series.points().iter().enumerate() {
                let center = Point::new(
                    self.x_scale.map_clamped(p.x),
                    self.y_scale.map_clamped(p.y),
                );
                out.push(Mark::filled_path(
                    MarkId::from_raw(self.id.0 + 100 + i as u64),
                    z_order::SERIES_POINTS,
                    Circle::new(center, *radius).to_path(0.1),
                    fill.clone(),
                ));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use strata_core::MarkPayload;

    use super::*;

    fn scales() -> (ScaleLinear, ScaleLinear) {
        (
            ScaleLinear::try_new((0.0, 5.0), (36.0, 328.0)).unwrap(),
            ScaleLinear::try_new((75.0, 100.0), (106.0, 16.0)).unwrap(),
        )
    }

    #[test]
    fn polyline_visits_points_in_order() {
        let (sx, sy) = scales();
        let series = XySeries::from_pairs(&[(0.0, 91.0), (1.0, 93.0), (2.0, 91.0)]).unwrap();
        let marks = LineMarkSpec::new(MarkId(1), sx, sy).marks(&series);
        assert_eq!(marks.len(), 1);
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected a path mark");
        };
        let els: Vec<_> = p.path.elements().to_vec();
        assert_eq!(els.len(), 3);
        assert!(matches!(els[0], kurbo::PathEl::MoveTo(_)));
        assert!(matches!(els[1], kurbo::PathEl::LineTo(_)));
    }

    #[test]
    fn markers_add_one_circle_per_vertex() {
        let (sx, sy) = scales();
        let series = XySeries::from_pairs(&[(0.0, 91.0), (1.0, 93.0)]).unwrap();
        let marks = LineMarkSpec::new(MarkId(1), sx, sy)
            .with_markers(3.0, peniko::Color::WHITE)
            .marks(&series);
        let points = marks
            .iter()
            .filter(|m| m.z_index == z_order::SERIES_POINTS)
            .count();
        assert_eq!(points, 2);
    }

    #[test]
    fn dashed_stroke_carries_its_pattern() {
        let (sx, sy) = scales();
        let series = XySeries::from_pairs(&[(0.0, 80.0), (5.0, 90.0)]).unwrap();
        let marks = LineMarkSpec::new(MarkId(1), sx, sy)
            .with_stroke(StrokeStyle::dashed(peniko::Color::WHITE, 1.5, 5.0, 3.0))
            .marks(&series);
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected a path mark");
        };
        assert_eq!(p.dash.as_slice(), &[5.0, 3.0]);
    }

    #[test]
    fn empty_series_yields_no_marks() {
        let (sx, sy) = scales();
        let series = XySeries::new(Vec::new()).unwrap();
        assert!(LineMarkSpec::new(MarkId(1), sx, sy).marks(&series).is_empty());
    }
}
