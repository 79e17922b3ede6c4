// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick and value label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using the tick step to pick a decimal count.
///
/// A step of `5.0` formats `80.0` as `"80"`; a step of `0.05` formats
/// `0.55` as `"0.55"`. With an unknown step (`0.0`), integers print bare
/// and everything else keeps one decimal.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 {
        decimals_for_step(step)
    } else if is_integer(value) {
        0
    } else {
        1
    };
    format!("{value:.decimals$}")
}

fn decimals_for_step(step: f64) -> usize {
    if step >= 1.0 {
        0
    } else if step >= 0.1 {
        1
    } else if step >= 0.01 {
        2
    } else {
        3
    }
}

fn is_integer(value: f64) -> bool {
    (value - value.round()).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integer_steps_drop_decimals() {
        assert_eq!(format_tick(80.0, 5.0), "80");
        assert_eq!(format_tick(100.0, 25.0), "100");
    }

    #[test]
    fn fractional_steps_keep_matching_decimals() {
        assert_eq!(format_tick(0.5, 0.25), "0.50");
        assert_eq!(format_tick(0.9, 0.1), "0.9");
    }

    #[test]
    fn unknown_step_uses_value_shape() {
        assert_eq!(format_tick(35.7, 0.0), "35.7");
        assert_eq!(format_tick(28.0, 0.0), "28");
    }
}
