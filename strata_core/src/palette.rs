// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable chart color configuration.
//!
//! The palette is a plain value handed to renderers by the caller. There is
//! no process-wide style registry; two dashboards in one process can use
//! two palettes.

use peniko::Color;

/// Named colors used by chart generators and the surrounding chrome.
///
/// The four confidence colors (`very_high` .. `low`) double as a coarse
/// ramp for per-index bar coloring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Strongest emphasis series color.
    pub very_high: Color,
    /// Secondary series color.
    pub high: Color,
    /// Cautionary series color.
    pub medium: Color,
    /// De-emphasized / failure series color.
    pub low: Color,
    /// Page background.
    pub background: Color,
    /// Card background.
    pub card: Color,
    /// Nested card background.
    pub card_alt: Color,
    /// Hairlines, gridlines, and meter tracks.
    pub border: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (axis labels, captions).
    pub muted: Color,
    /// First accent color.
    pub accent: Color,
    /// Second accent color.
    pub accent_alt: Color,
    /// Positive-signal color.
    pub green: Color,
}

impl Palette {
    /// The dark dashboard palette.
    pub const fn dark() -> Self {
        Self {
            very_high: Color::from_rgb8(0x00, 0xf5, 0xd4),
            high: Color::from_rgb8(0x3a, 0x86, 0xff),
            medium: Color::from_rgb8(0xff, 0xb7, 0x03),
            low: Color::from_rgb8(0xff, 0x6b, 0x6b),
            background: Color::from_rgb8(0x07, 0x0d, 0x1a),
            card: Color::from_rgb8(0x0e, 0x18, 0x29),
            card_alt: Color::from_rgb8(0x0b, 0x15, 0x23),
            border: Color::from_rgb8(0x1a, 0x2d, 0x4a),
            text: Color::from_rgb8(0xe0, 0xea, 0xff),
            muted: Color::from_rgb8(0x5a, 0x7a, 0x9a),
            accent: Color::from_rgb8(0xc7, 0x7d, 0xff),
            accent_alt: Color::from_rgb8(0xf7, 0x25, 0x85),
            green: Color::from_rgb8(0x06, 0xd6, 0xa0),
        }
    }

    /// Returns the confidence ramp color for a fraction in `[0, 1]`.
    ///
    /// Low fractions map to `very_high` (the ramp follows the convention
    /// that early categories are the strong ones).
    pub fn ramp(&self, fraction: f64) -> Color {
        if fraction < 0.3 {
            self.very_high
        } else if fraction < 0.6 {
            self.medium
        } else {
            self.low
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn ramp_covers_the_unit_interval() {
        let p = Palette::dark();
        assert_eq!(p.ramp(0.0), p.very_high);
        assert_eq!(p.ramp(0.45), p.medium);
        assert_eq!(p.ramp(0.99), p.low);
    }
}
