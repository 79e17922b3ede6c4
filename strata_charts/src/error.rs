// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration errors.
//!
//! All variants are programmer-facing and detected at construction time.
//! They are fatal to the single chart instance being configured, never to
//! sibling charts or the host view. There is no retry policy; a
//! misconfigured chart should fail loudly rather than render a misleading
//! plot. Out-of-domain *data* values are not errors: they are clipped to
//! the domain boundary by the renderers.

use thiserror::Error;

/// Errors raised while configuring a chart.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ChartError {
    /// A scale was given equal domain bounds.
    ///
    /// Callers with single-valued datasets must supply a synthetic domain
    /// (e.g. `[v - 1, v + 1]`).
    #[error("degenerate scale domain [{min}, {max}]")]
    DegenerateDomain {
        /// Lower domain bound as authored.
        min: f64,
        /// Upper domain bound as authored.
        max: f64,
    },

    /// Padding insets leave a non-positive inner plot rectangle.
    #[error("invalid layout: inner plot is {width}x{height}")]
    InvalidLayout {
        /// Inner width after insets.
        width: f64,
        /// Inner height after insets.
        height: f64,
    },

    /// A series record carries a NaN or infinite numeric field.
    #[error("non-finite value in series record {index}")]
    NonFiniteValue {
        /// Index of the offending record.
        index: usize,
    },

    /// A series record's field shape differs from the first record's.
    #[error("series record {index} does not match the series field shape")]
    MixedShape {
        /// Index of the offending record.
        index: usize,
    },
}
