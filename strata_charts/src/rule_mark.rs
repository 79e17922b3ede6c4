// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A rule is a straight reference line at a fixed *domain* value (a
//! quality threshold, a calibration target). The position is stored in
//! data units and resolved against the current scale and plot rectangle
//! every time marks are generated, so it recomputes correctly whenever
//! the domain or layout changes.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use strata_core::{z_order, Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::axis::{LabelStyle, StrokeStyle};
use crate::scale::ScaleLinear;

/// Rule direction across the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleOrient {
    /// A horizontal line at a y-domain value, spanning the plot width.
    Horizontal,
    /// A vertical line at an x-domain value, spanning the plot height.
    Vertical,
}

/// A reference line in domain units, with an optional annotation.
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable id for the line mark (the label uses `id.0 + 1`).
    pub id: MarkId,
    /// Rule direction.
    pub orient: RuleOrient,
    /// Position in data units, scaled at generation time.
    pub at: f64,
    /// Stroke style (thresholds are usually dashed).
    pub stroke: StrokeStyle,
    /// Optional annotation text beside the rule.
    pub label: Option<(String, LabelStyle)>,
    /// Rendering order.
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a horizontal rule at a y-domain value.
    pub fn horizontal(id: MarkId, at: f64) -> Self {
        Self::new(id, RuleOrient::Horizontal, at)
    }

    /// Creates a vertical rule at an x-domain value.
    pub fn vertical(id: MarkId, at: f64) -> Self {
        Self::new(id, RuleOrient::Vertical, at)
    }

    fn new(id: MarkId, orient: RuleOrient, at: f64) -> Self {
        Self {
            id,
            orient,
            at,
            stroke: StrokeStyle::default(),
            label: None,
            z_index: z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Adds an annotation label next to the rule.
    pub fn with_label(mut self, text: impl Into<String>, style: LabelStyle) -> Self {
        self.label = Some((text.into(), style));
        self
    }

    /// Sets the z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the rule against the given scale and plot rectangle.
    ///
    /// The scale is the one the data series uses, so the rule stays
    /// aligned with the data under domain or layout changes. Out-of-domain
    /// positions clip to the domain boundary like data values do.
    pub fn marks(&self, scale: &ScaleLinear, plot: Rect) -> Vec<Mark> {
        let pos = scale.map_clamped(self.at);
        let mut path = BezPath::new();
        let label_pos;
        match self.orient {
            RuleOrient::Horizontal => {
                path.move_to((plot.x0, pos));
                path.line_to((plot.x1, pos));
                label_pos = Point::new(plot.x0 + 3.0, pos - 4.0);
            }
            RuleOrient::Vertical => {
                path.move_to((pos, plot.y0));
                path.line_to((pos, plot.y1));
                label_pos = Point::new(pos + 3.0, plot.y0 + 10.0);
            }
        }

        let mut out = alloc::vec![Mark::stroked_path(
            self.id,
            self.z_index,
            path,
            self.stroke.brush.clone(),
            self.stroke.stroke_width,
            self.stroke.dash.clone(),
        )];

        if let Some((text, style)) = &self.label {
            out.push(Mark::text(
                MarkId::from_raw(self.id.0 + 1),
                z_order::ANNOTATIONS,
                TextMark::new(label_pos, text.clone())
                    .with_font_size(style.font_size)
                    .with_fill(style.fill.clone())
                    .with_anchor(TextAnchor::Start)
                    .with_baseline(TextBaseline::Middle),
            ));
        }

        out
    }
}
