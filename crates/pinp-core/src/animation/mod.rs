#![forbid(unsafe_code)]

//! Animation primitives.
//!
//! Everything here is tick-driven: the host advances animations with the
//! frame delta and reads back `value()`. Nothing sleeps, spawns, or owns a
//! clock.
//!
//! - [`Animation`]: the common tick/value contract.
//! - Easing functions ([`linear`], [`ease_in`], [`ease_out`], [`ease_in_out`])
//!   and the serializable [`Curve`] that names them.
//! - [`Fade`]: duration-based 0→1 progress.
//! - [`spring::Spring`]: damped harmonic oscillator built from [`SpringParams`].
//! - [`driver::PropertyDriver`]: scrubbable interpolation between two values.

pub mod driver;
pub mod spring;

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use driver::{FinishPosition, PropertyDriver, PropertyDriverState};
pub use spring::{Spring, SpringParams};

/// A tick-driven animation.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has settled.
    fn is_complete(&self) -> bool;

    /// Current output value.
    fn value(&self) -> f64;

    /// Return to the initial state.
    fn reset(&mut self);
}

/// Easing function signature: maps linear progress in [0, 1] to eased progress.
pub type EasingFn = fn(f64) -> f64;

#[must_use]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

#[must_use]
pub fn ease_in(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

#[must_use]
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Named timing curve, for configuration and effect payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Curve {
    /// The easing function for this curve.
    #[must_use]
    pub const fn easing(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::EaseIn => ease_in,
            Self::EaseOut => ease_out,
            Self::EaseInOut => ease_in_out,
        }
    }

    /// Apply the curve to linear progress `t`.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        (self.easing())(t)
    }
}

/// Duration-based 0→1 progress with easing.
///
/// Zero duration completes on the first tick.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Fade {
    /// Linear fade lasting `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
            easing: linear,
        }
    }

    /// Set the easing function (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Linear (un-eased) progress in [0, 1].
    #[must_use]
    pub fn raw_progress(&self) -> f64 {
        if self.duration.is_zero() {
            return if self.elapsed.is_zero() { 0.0 } else { 1.0 };
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        // Zero-duration fades still need one tick to register completion.
        let dt = if dt.is_zero() && self.duration.is_zero() {
            Duration::from_nanos(1)
        } else {
            dt
        };
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.raw_progress() >= 1.0
    }

    fn value(&self) -> f64 {
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
