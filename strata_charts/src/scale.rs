// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale utilities.
//!
//! A scale is a pure mapping from a data-space domain onto a pixel-space
//! range. Both kinds here are `Copy` value types with no interior state,
//! safe to share across chart instances and threads.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::ChartError;

/// An affine mapping from a continuous domain to a continuous range.
///
/// Ranges may be inverted (pixel y grows downward while values grow
/// upward); the map is monotonic either way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a scale mapping `domain` values to `range` values.
    ///
    /// Fails with [`ChartError::DegenerateDomain`] when the domain bounds
    /// are equal or non-finite; callers with single-valued data must
    /// supply a synthetic domain such as `(v - 1.0, v + 1.0)`.
    pub fn try_new(domain: (f64, f64), range: (f64, f64)) -> Result<Self, ChartError> {
        if domain.0 == domain.1 || !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::DegenerateDomain {
                min: domain.0,
                max: domain.1,
            });
        }
        Ok(Self { domain, range })
    }

    /// Maps a value from domain space into range space.
    ///
    /// `f(x) = r0 + (x - d0) / (d1 - d0) * (r1 - r0)`; endpoints map
    /// exactly.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = (x - d0) / (d1 - d0);
        r0 + t * (r1 - r0)
    }

    /// Maps a value, clipping it to the nearest domain boundary first.
    ///
    /// This is the deliberate soft-recovery path for out-of-domain data:
    /// an outlier renders at the domain edge instead of off-canvas.
    pub fn map_clamped(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        self.map(x.clamp(lo, hi))
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns the configured range (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns `count` evenly spaced tick values including both domain
    /// endpoints.
    ///
    /// `count == 0` yields no ticks and `count == 1` yields the lower
    /// bound only. There is deliberately no nice-number search here: the
    /// charts in this engine use small fixed tick sets, and callers that
    /// want specific ticks pass them explicitly to the axis.
    pub fn ticks_between(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        match count {
            0 => Vec::new(),
            1 => alloc::vec![d0],
            _ => {
                let step = (d1 - d0) / (count - 1) as f64;
                (0..count).map(|i| d0 + step * i as f64).collect()
            }
        }
    }
}

/// A discrete band scale for categorical charts.
///
/// The range is divided into `count` equal slots; each bar occupies its
/// slot minus a fixed pixel gap, centered in the slot. Primary and
/// secondary series of a dual-series chart share the same slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    gap: f64,
}

impl ScaleBand {
    /// Creates a band scale covering `count` slots over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            gap: 4.0,
        }
    }

    /// Sets the pixel gap between adjacent bands.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the slot step (band width plus gap).
    pub fn step(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let (r0, r1) = self.range;
        (r1 - r0).abs() / self.count as f64
    }

    /// Returns the drawable band width (slot minus gap, never negative).
    pub fn band_width(&self) -> f64 {
        (self.step() - self.gap).max(0.0)
    }

    /// Returns the left edge of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let start = if r1 >= r0 { r0 } else { r1 };
        start + self.step() * index as f64 + 0.5 * self.gap
    }

    /// Returns the horizontal center of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + 0.5 * self.band_width()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn endpoints_map_exactly() {
        let s = ScaleLinear::try_new((20.0, 100.0), (28.0, 288.0)).unwrap();
        assert_eq!(s.map(20.0), 28.0);
        assert_eq!(s.map(100.0), 288.0);
    }

    #[test]
    fn inverted_range_is_monotonic_decreasing() {
        // A vertical axis: values grow upward, pixels grow downward.
        let s = ScaleLinear::try_new((0.0, 100.0), (130.0, 14.0)).unwrap();
        assert_eq!(s.map(0.0), 130.0);
        assert_eq!(s.map(100.0), 14.0);
        assert!(s.map(30.0) > s.map(60.0));
    }

    #[test]
    fn degenerate_domain_is_rejected() {
        let err = ScaleLinear::try_new((5.0, 5.0), (0.0, 1.0)).unwrap_err();
        assert_eq!(err, ChartError::DegenerateDomain { min: 5.0, max: 5.0 });
        assert!(ScaleLinear::try_new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn clamped_map_clips_to_domain_edge() {
        let s = ScaleLinear::try_new((0.0, 100.0), (0.0, 340.0)).unwrap();
        assert_eq!(s.map_clamped(120.0), s.map(100.0));
        assert_eq!(s.map_clamped(-5.0), s.map(0.0));
        assert_eq!(s.map_clamped(50.0), s.map(50.0));
    }

    #[test]
    fn ticks_include_both_endpoints() {
        let s = ScaleLinear::try_new((75.0, 100.0), (0.0, 1.0)).unwrap();
        let ticks = s.ticks_between(6);
        assert_eq!(ticks, std::vec![75.0, 80.0, 85.0, 90.0, 95.0, 100.0]);
    }

    #[test]
    fn ticks_degenerate_counts() {
        let s = ScaleLinear::try_new((0.0, 1.0), (0.0, 1.0)).unwrap();
        assert!(s.ticks_between(0).is_empty());
        assert_eq!(s.ticks_between(1), std::vec![0.0]);
    }

    #[test]
    fn bands_occupy_disjoint_slots() {
        let band = ScaleBand::new((30.0, 328.0), 9).with_gap(4.0);
        for i in 0..8 {
            let right = band.x(i) + band.band_width();
            assert!(right < band.x(i + 1), "slot {i} overlaps slot {}", i + 1);
        }
    }

    #[test]
    fn band_width_matches_slot_minus_gap() {
        let band = ScaleBand::new((0.0, 90.0), 9).with_gap(4.0);
        assert!((band.band_width() - 6.0).abs() < 1e-12);
        assert!((band.x(0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_band_scale_is_inert() {
        let band = ScaleBand::new((0.0, 100.0), 0);
        assert_eq!(band.step(), 0.0);
        assert_eq!(band.band_width(), 0.0);
    }
}
