// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `strata_core`.
//!
//! This crate is a small, reusable layer above `strata_core`:
//! - **Scales** map bounded data domains into pixel ranges.
//! - **Layout** turns a surface + padding insets into the plot rectangle.
//! - **Mark generators** (bars, lines, areas, rules, meters, axes) turn
//!   ordered labeled records into inert [`strata_core::Mark`]s.
//!
//! Everything here is synchronous and pure: generators are safe to invoke
//! once per frame or once per data change, and the same inputs always
//! produce the same geometry. Configuration errors
//! ([`ChartError`]) surface at construction time and are fatal to that one
//! chart instance only; out-of-domain *data* is clipped, not rejected.
//!
//! Text shaping and painting are out of scope; text marks store unshaped
//! strings and a [`TextMeasurer`] estimates guide extents.

#![no_std]

extern crate alloc;

mod area_mark;
mod axis;
mod bar_mark;
mod chart_spec;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod line_mark;
mod measure;
mod meter_mark;
mod rule_mark;
mod scale;
mod series;

pub use area_mark::AreaMarkSpec;
pub use axis::{AxisOrient, AxisSpec, AxisStyle, GridStyle, LabelStyle, StrokeStyle};
pub use bar_mark::{BarMarkSpec, ColorRule};
pub use chart_spec::{ChartSpec, TitleSpec};
pub use error::ChartError;
pub use format::format_tick;
pub use layout::{plot_rect, Insets, Size};
pub use line_mark::LineMarkSpec;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use meter_mark::{FractionBarSpec, MeterMarkSpec};
pub use rule_mark::{RuleMarkSpec, RuleOrient};
pub use scale::{ScaleBand, ScaleLinear};
pub use series::{DataSeries, Record, XyPoint, XySeries};
