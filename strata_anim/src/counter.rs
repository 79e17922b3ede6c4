// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The count-up state machine.

use thiserror::Error;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::ease::ease_out_cubic;

/// Errors raised when configuring an animation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnimError {
    /// The target is negative or non-finite. There is nothing sensible to
    /// animate toward, so this fails fast instead of easing toward
    /// garbage.
    #[error("invalid animation target {value}")]
    InvalidTarget {
        /// The rejected target.
        value: f64,
    },
}

/// Lifecycle of a [`CountUp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No target set; the displayed value is the initial value.
    Idle,
    /// Easing toward the target on each tick.
    Running,
    /// Locked at the exact target; no further ticks are scheduled.
    Settled,
}

/// A displayed value with its formatting already decided.
///
/// Targets above 1000 are treated as counts and display as integers
/// (floored while in flight); targets at or below 1000 are treated as
/// measured quantities and display with one decimal place. The
/// magnitude-dependent rule is deliberate and load-bearing: changing it
/// changes observable output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayValue {
    /// An integer count (no decimal point).
    Count(i64),
    /// A measured quantity, rounded to one decimal.
    Quantity(f64),
}

impl core::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Quantity(q) => write!(f, "{q:.1}"),
        }
    }
}

/// One tick's output: the value to display and whether another display
/// refresh should be scheduled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// The value to display this frame.
    pub value: DisplayValue,
    /// `true` while the animation still needs refresh ticks.
    pub needs_frame: bool,
}

/// Drives a displayed number toward a target with cubic ease-out.
///
/// The controller owns its state exclusively; there is no shared mutable
/// state and no locking. It never blocks: each [`CountUp::tick`] computes
/// one frame and yields back to the host scheduler.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    duration: f64,
    target: f64,
    start_value: f64,
    start_time: f64,
    raw: f64,
    phase: Phase,
    subscribed: bool,
}

impl CountUp {
    /// The stock counter duration in seconds.
    pub const DEFAULT_DURATION: f64 = 1.1;

    /// Creates an idle counter displaying `0`.
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(f64::MIN_POSITIVE),
            target: 0.0,
            start_value: 0.0,
            start_time: 0.0,
            raw: 0.0,
            phase: Phase::Idle,
            subscribed: false,
        }
    }

    /// Sets the initial displayed value (only meaningful while idle).
    pub fn with_initial(mut self, value: f64) -> Self {
        self.raw = value;
        self
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the raw (unformatted) displayed value.
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Starts animating toward `target` from the currently displayed
    /// value.
    ///
    /// Re-entrant: calling this mid-flight cancels the previous animation
    /// and restarts the ease curve from the value currently on screen, so
    /// the display never snaps back to zero or jumps to the superseded
    /// target.
    pub fn set_target(&mut self, target: f64, now: f64) -> Result<(), AnimError> {
        if !target.is_finite() || target < 0.0 {
            return Err(AnimError::InvalidTarget { value: target });
        }
        self.target = target;
        self.start_value = self.raw;
        self.start_time = now;
        self.phase = Phase::Running;
        self.subscribed = true;
        Ok(())
    }

    /// Computes the frame for time `now`.
    ///
    /// Outside `Running` (or after [`CountUp::cancel`]) this returns the
    /// current value and requests no further frames.
    pub fn tick(&mut self, now: f64) -> Frame {
        if self.phase != Phase::Running || !self.subscribed {
            return Frame {
                value: self.displayed(),
                needs_frame: false,
            };
        }

        let progress = ((now - self.start_time) / self.duration).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.raw = self.target;
            self.phase = Phase::Settled;
            self.subscribed = false;
        } else {
            let eased = ease_out_cubic(progress);
            self.raw = self.start_value + (self.target - self.start_value) * eased;
        }

        Frame {
            value: self.displayed(),
            needs_frame: self.subscribed,
        }
    }

    /// Releases any pending refresh subscription.
    ///
    /// Callable from any state and idempotent. A cancelled counter keeps
    /// its last displayed value but never requests another frame; callers
    /// must invoke this when the owning view is discarded or superseded.
    pub fn cancel(&mut self) {
        self.subscribed = false;
    }

    /// Returns the current value with formatting decided by the target's
    /// magnitude.
    pub fn displayed(&self) -> DisplayValue {
        let by = if self.phase == Phase::Idle {
            self.raw
        } else {
            self.target
        };
        if by > 1000.0 {
            // Floor while in flight; settlement assigns the exact target.
            let floored = self.raw.floor();
            #[allow(
                clippy::cast_possible_truncation,
                reason = "targets are validated finite and non-negative"
            )]
            {
                DisplayValue::Count(floored as i64)
            }
        } else {
            DisplayValue::Quantity((self.raw * 10.0).round() / 10.0)
        }
    }
}

impl Default for CountUp {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}
