// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot-rectangle layout.
//!
//! A chart draws inside the inner rectangle left after applying four
//! padding insets to a drawing surface. Layout fails fast when the insets
//! consume the surface; renderers never see a negative-size plot.

use kurbo::Rect;

use crate::error::ChartError;

/// A width/height pair in scene coordinate units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Four padding insets around the plot rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    /// Left inset (axis labels usually live here).
    pub left: f64,
    /// Right inset.
    pub right: f64,
    /// Top inset.
    pub top: f64,
    /// Bottom inset (category labels usually live here).
    pub bottom: f64,
}

impl Insets {
    /// Creates insets from the four sides.
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Creates equal insets on all sides.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Computes the inner plot rectangle for a surface and insets.
///
/// Fails with [`ChartError::InvalidLayout`] when the inner width or height
/// is not strictly positive.
pub fn plot_rect(surface: Size, insets: Insets) -> Result<Rect, ChartError> {
    let width = surface.width - insets.left - insets.right;
    let height = surface.height - insets.top - insets.bottom;
    if width <= 0.0 || height <= 0.0 {
        return Err(ChartError::InvalidLayout { width, height });
    }
    Ok(Rect::new(
        insets.left,
        insets.top,
        insets.left + width,
        insets.top + height,
    ))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn returns_the_exact_inner_rectangle() {
        let rect = plot_rect(Size::new(340.0, 130.0), Insets::new(30.0, 12.0, 14.0, 30.0)).unwrap();
        assert_eq!(rect, Rect::new(30.0, 14.0, 328.0, 100.0));
    }

    #[test]
    fn oversized_insets_fail() {
        let err = plot_rect(Size::new(100.0, 50.0), Insets::new(60.0, 50.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidLayout { width, .. } if width == -10.0));
    }

    #[test]
    fn zero_height_fails() {
        let err = plot_rect(Size::new(100.0, 40.0), Insets::new(0.0, 0.0, 20.0, 20.0)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidLayout { height, .. } if height == 0.0));
    }
}
