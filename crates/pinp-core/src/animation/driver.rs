#![forbid(unsafe_code)]

//! Scrubbable property driver.
//!
//! A [`PropertyDriver`] interpolates one scalar property (typically an alpha)
//! from a start value to an end value. Besides playing over time it can be
//! paused and scrubbed by hand, which is how a drag gesture drives the
//! pullout handle's fade.
//!
//! # Lifecycle
//!
//! ```text
//! Inactive ──start──▶ Running ◀──start── Paused
//!    │                  │  ╲               ▲
//!    └──────pause───────┼───╲───pause──────┘
//!                       │    ╲
//!                      stop  tick past end ──▶ Finished
//!                       ▼
//!                    Stopped ──finish_at──▶ Finished
//! ```
//!
//! # Invariants
//!
//! 1. `fraction_complete()` is always within [0.0, 1.0]; out-of-range scrub
//!    values are clamped, non-finite ones are ignored.
//! 2. `progress()` is `1 - fraction` while reversed.
//! 3. `finish_at()` is only accepted from `Stopped`; a driver must be stopped
//!    before it can be finished.
//! 4. Once `Stopped` or `Finished`, the value no longer changes until `reset()`.

use std::time::Duration;

use super::{Animation, Curve};

/// Playback state of a [`PropertyDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyDriverState {
    /// Created, never started or paused.
    #[default]
    Inactive,
    Running,
    /// Active but not advancing; can be scrubbed.
    Paused,
    /// Halted in place; waiting for `finish_at`.
    Stopped,
    Finished,
}

/// Where a stopped driver should land when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishPosition {
    Start,
    End,
    /// Keep the value the driver was stopped at.
    Current,
}

/// Scrubbable interpolation of a scalar property.
#[derive(Debug, Clone)]
pub struct PropertyDriver {
    from: f64,
    to: f64,
    duration: Duration,
    curve: Curve,
    fraction: f64,
    reversed: bool,
    state: PropertyDriverState,
    settled: Option<f64>,
}

impl PropertyDriver {
    /// Create an inactive driver interpolating `from` → `to` over `duration`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration, curve: Curve) -> Self {
        Self {
            from,
            to,
            duration,
            curve,
            fraction: 0.0,
            reversed: false,
            state: PropertyDriverState::Inactive,
            settled: None,
        }
    }

    /// Begin (or resume) playback.
    pub fn start(&mut self) {
        if matches!(
            self.state,
            PropertyDriverState::Inactive | PropertyDriverState::Paused
        ) {
            self.state = PropertyDriverState::Running;
        }
    }

    /// Pause playback. An inactive driver becomes active and paused.
    pub fn pause(&mut self) {
        if matches!(
            self.state,
            PropertyDriverState::Inactive | PropertyDriverState::Running
        ) {
            self.state = PropertyDriverState::Paused;
        }
    }

    /// Scrub to `fraction`, clamped to [0, 1].
    ///
    /// Ignored once stopped or finished, and for non-finite input.
    pub fn set_fraction_complete(&mut self, fraction: f64) {
        if !fraction.is_finite() {
            return;
        }
        if matches!(
            self.state,
            PropertyDriverState::Stopped | PropertyDriverState::Finished
        ) {
            return;
        }
        self.fraction = fraction.clamp(0.0, 1.0);
    }

    /// Run the interpolation backwards (end → start).
    pub fn set_reversed(&mut self, reversed: bool) {
        if matches!(
            self.state,
            PropertyDriverState::Stopped | PropertyDriverState::Finished
        ) {
            return;
        }
        self.reversed = reversed;
    }

    /// Halt in place. The current value is frozen.
    pub fn stop(&mut self) {
        match self.state {
            PropertyDriverState::Inactive
            | PropertyDriverState::Running
            | PropertyDriverState::Paused => {
                self.settled = Some(self.interpolated());
                self.state = PropertyDriverState::Stopped;
            }
            PropertyDriverState::Stopped | PropertyDriverState::Finished => {}
        }
    }

    /// Finish a stopped driver at `position`.
    ///
    /// Returns `false` (and does nothing) unless the driver is `Stopped`.
    pub fn finish_at(&mut self, position: FinishPosition) -> bool {
        if self.state != PropertyDriverState::Stopped {
            return false;
        }
        let value = match position {
            FinishPosition::Start => self.from,
            FinishPosition::End => self.to,
            FinishPosition::Current => self.value(),
        };
        self.settled = Some(value);
        self.fraction = match position {
            FinishPosition::Start => 0.0,
            FinishPosition::End => 1.0,
            FinishPosition::Current => self.fraction,
        };
        self.state = PropertyDriverState::Finished;
        true
    }

    /// Stop and immediately finish at `position`.
    pub fn stop_and_finish(&mut self, position: FinishPosition) {
        self.stop();
        self.finish_at(position);
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> PropertyDriverState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn fraction_complete(&self) -> f64 {
        self.fraction
    }

    #[inline]
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Direction-adjusted linear progress.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.reversed {
            1.0 - self.fraction
        } else {
            self.fraction
        }
    }

    #[inline]
    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.from
    }

    #[inline]
    #[must_use]
    pub fn end_value(&self) -> f64 {
        self.to
    }

    fn interpolated(&self) -> f64 {
        self.from + (self.to - self.from) * self.curve.apply(self.progress())
    }
}

impl Animation for PropertyDriver {
    fn tick(&mut self, dt: Duration) {
        if self.state != PropertyDriverState::Running {
            return;
        }
        let step = if self.duration.is_zero() {
            1.0
        } else {
            dt.as_secs_f64() / self.duration.as_secs_f64()
        };
        self.fraction = (self.fraction + step).min(1.0);
        if self.fraction >= 1.0 {
            self.settled = Some(if self.reversed { self.from } else { self.to });
            self.state = PropertyDriverState::Finished;
        }
    }

    fn is_complete(&self) -> bool {
        self.state == PropertyDriverState::Finished
    }

    fn value(&self) -> f64 {
        self.settled.unwrap_or_else(|| self.interpolated())
    }

    fn reset(&mut self) {
        self.fraction = 0.0;
        self.reversed = false;
        self.settled = None;
        self.state = PropertyDriverState::Inactive;
    }
}
