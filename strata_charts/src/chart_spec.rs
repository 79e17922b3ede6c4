// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition helpers.
//!
//! A chart is assembled from a drawing surface + insets (the plot
//! rectangle), optional guides (title, axes), and a set of series marks
//! supplied by a builder closure. Composition stays synchronous and
//! allocation-light; it is intended to run once per data change or frame.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use strata_core::{z_order, Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::axis::{AxisSpec, LabelStyle};
use crate::error::ChartError;
use crate::layout::{plot_rect, Insets, Size};

/// A chart title drawn at the top of the surface.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Stable id for the title mark.
    pub id: MarkId,
    /// Title text.
    pub text: String,
    /// Title style.
    pub style: LabelStyle,
}

impl TitleSpec {
    /// Creates a title spec.
    pub fn new(id: MarkId, text: impl Into<String>, style: LabelStyle) -> Self {
        Self {
            id,
            text: text.into(),
            style,
        }
    }

    fn mark(&self, surface: Size) -> Mark {
        Mark::text(
            self.id,
            z_order::TITLES,
            TextMark::new(Point::new(surface.width * 0.5, 2.0), self.text.clone())
                .with_font_size(self.style.font_size)
                .with_fill(self.style.fill.clone())
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Hanging),
        )
    }
}

/// A composed chart: surface, insets, and optional guides.
#[derive(Clone, Debug, Default)]
pub struct ChartSpec {
    /// Drawing surface size.
    pub surface: Size,
    /// Padding insets defining the plot rectangle.
    pub insets: Insets,
    /// Optional title.
    pub title: Option<TitleSpec>,
    /// Optional left axis.
    pub axis_left: Option<AxisSpec>,
    /// Optional bottom axis.
    pub axis_bottom: Option<AxisSpec>,
}

impl ChartSpec {
    /// Creates a chart over a surface with the given insets.
    pub fn new(surface: Size, insets: Insets) -> Self {
        Self {
            surface,
            insets,
            title: None,
            axis_left: None,
            axis_bottom: None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: TitleSpec) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the left axis.
    pub fn with_axis_left(mut self, axis: AxisSpec) -> Self {
        self.axis_left = Some(axis);
        self
    }

    /// Sets the bottom axis.
    pub fn with_axis_bottom(mut self, axis: AxisSpec) -> Self {
        self.axis_bottom = Some(axis);
        self
    }

    /// Computes the plot rectangle for this chart.
    pub fn plot(&self) -> Result<Rect, ChartError> {
        plot_rect(self.surface, self.insets)
    }

    /// Generates guide marks (title + axes) for a computed plot rectangle.
    pub fn guide_marks(&self, plot: Rect) -> Result<Vec<Mark>, ChartError> {
        let mut out = Vec::new();
        if let Some(title) = &self.title {
            out.push(title.mark(self.surface));
        }
        if let Some(axis) = &self.axis_left {
            out.extend(axis.marks(plot)?);
        }
        if let Some(axis) = &self.axis_bottom {
            out.extend(axis.marks(plot)?);
        }
        Ok(out)
    }

    /// Produces the full mark list: series marks plus guide marks.
    ///
    /// The series builder receives the resolved plot rectangle. Any layout
    /// or scale misconfiguration fails before the builder runs, so a
    /// failing chart emits nothing rather than partial geometry.
    pub fn marks(
        &self,
        build_series: impl FnOnce(Rect) -> Vec<Mark>,
    ) -> Result<(Rect, Vec<Mark>), ChartError> {
        let plot = self.plot()?;
        let mut marks = self.guide_marks(plot)?;
        marks.extend(build_series(plot));
        Ok((plot, marks))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use strata_core::MarkPayload;

    use crate::axis::AxisSpec;

    use super::*;

    #[test]
    fn layout_failure_stops_before_series_build() {
        let chart = ChartSpec::new(Size::new(40.0, 30.0), Insets::uniform(20.0));
        let mut built = false;
        let res = chart.marks(|_| {
            built = true;
            Vec::new()
        });
        assert!(res.is_err());
        assert!(!built, "series builder must not run on layout failure");
    }

    #[test]
    fn guides_and_series_are_combined() {
        let chart = ChartSpec::new(Size::new(340.0, 130.0), Insets::new(30.0, 12.0, 14.0, 30.0))
            .with_axis_left(AxisSpec::left(1000, (0.0, 100.0)).with_tick_count(3));
        let (plot, marks) = chart
            .marks(|plot| {
                alloc::vec![Mark::rect(
                    MarkId(1),
                    0,
                    Rect::new(plot.x0, plot.y0, plot.x0 + 10.0, plot.y1),
                    peniko::Color::WHITE,
                )]
            })
            .unwrap();
        assert_eq!(plot, Rect::new(30.0, 14.0, 328.0, 100.0));
        let series = marks
            .iter()
            .filter(|m| matches!(m.payload, MarkPayload::Rect(_)))
            .count();
        assert_eq!(series, 1);
        assert!(marks.len() > 1, "axis guides should be present");
    }

    #[test]
    fn title_is_centered_on_the_surface() {
        let chart = ChartSpec::new(Size::new(200.0, 100.0), Insets::uniform(10.0)).with_title(
            TitleSpec::new(MarkId(9), "calibration", LabelStyle::default()),
        );
        let (_, marks) = chart.marks(|_| Vec::new()).unwrap();
        let MarkPayload::Text(t) = &marks[0].payload else {
            panic!("expected the title text mark");
        };
        assert_eq!(t.text, "calibration");
        assert_eq!(t.pos.x, 100.0);
    }

    #[test]
    fn axis_error_propagates() {
        let chart = ChartSpec::new(Size::new(100.0, 100.0), Insets::uniform(10.0))
            .with_axis_bottom(AxisSpec::bottom(1, (2.0, 2.0)));
        assert_eq!(
            chart.marks(|_| Vec::new()).unwrap_err(),
            ChartError::DegenerateDomain { min: 2.0, max: 2.0 }
        );
    }
}
