// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for generated marks.
//!
//! Generators assign these consistently so callers don't hand-tune paint
//! order per panel. Painters should sort by `(z_index, MarkId)` for a
//! deterministic tie-break.

/// Plot background and frame fills.
pub const PLOT_BACKGROUND: i32 = -100;
/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Secondary/comparison series fills drawn behind the primary.
pub const SERIES_UNDERLAY: i32 = -10;
/// Filled series marks (bars, areas, meter fills).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines, rules).
pub const SERIES_STROKE: i32 = 10;
/// Point markers drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis titles.
pub const AXIS_TITLES: i32 = 50;

/// Reference-line annotations and value labels.
pub const ANNOTATIONS: i32 = 60;
/// Chart-level titles.
pub const TITLES: i32 = 80;
