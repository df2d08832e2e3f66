#![forbid(unsafe_code)]

//! Snap springs.
//!
//! Overlay snaps are described the way platform animation APIs describe
//! them: a settle duration, a damping ratio and an initial velocity expressed
//! in "animation distances per second". [`SpringParams`] carries those and
//! builds a [`Spring`] from them:
//!
//! - `ω = 2π / duration`, `stiffness = ω²`
//! - `damping = 2 · ratio · ω`
//! - launch velocity = `initial_velocity × (target − initial)`
//!
//! The spring integrates `a = −stiffness·(x − target) − damping·v` with
//! semi-implicit Euler in sub-steps of at most 4ms.
//!
//! # Invariants
//!
//! 1. `value()` is the position clamped to [0.0, 1.0]; `position()` is raw.
//! 2. Once settled, the position is exactly the target and stays there until
//!    `reset()`.
//! 3. `reset()` replays the same launch: initial position and launch velocity.
//!
//! # Failure Modes
//!
//! - A non-positive or non-finite duration yields a spring already settled on
//!   its target, so unvalidated parameters never integrate runaway stiffness.
//! - A non-finite initial velocity launches from rest.

use std::f64::consts::TAU;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Animation, Curve};

/// Longest integration sub-step, in seconds.
const MAX_STEP_SECS: f64 = 0.004;

/// Settle tolerances, relative to the travel distance (at least 1).
const SETTLE_POSITION: f64 = 0.001;
const SETTLE_VELOCITY: f64 = 0.01;

/// Platform-style spring description.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpringParams {
    /// Approximate settle duration in seconds.
    pub duration: f64,
    /// Damping ratio: 1.0 is critical, below 1.0 bounces.
    pub damping_ratio: f64,
    /// Initial velocity, in total animation distances per second.
    pub initial_velocity: f64,
    /// Timing curve hint forwarded to hosts that blend the spring with a curve.
    pub curve: Curve,
}

impl SpringParams {
    /// The snap used when an overlay is released or restored.
    pub const SNAP: Self = Self {
        duration: 0.4,
        damping_ratio: 0.6,
        initial_velocity: 0.6,
        curve: Curve::EaseInOut,
    };

    fn omega(&self) -> f64 {
        TAU / self.duration
    }

    /// Spring stiffness for these parameters.
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.omega() * self.omega()
    }

    /// Spring damping coefficient for these parameters.
    #[must_use]
    pub fn damping(&self) -> f64 {
        2.0 * self.damping_ratio.max(0.0) * self.omega()
    }

    /// Build a spring travelling from `initial` to `target`.
    #[must_use]
    pub fn spring(&self, initial: f64, target: f64) -> Spring {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Spring::settled_at(target);
        }
        let launch = self.initial_velocity * (target - initial);
        let launch = if launch.is_finite() { launch } else { 0.0 };
        Spring {
            initial,
            target,
            position: initial,
            velocity: launch,
            launch,
            stiffness: self.stiffness(),
            damping: self.damping(),
            settled: initial == target && launch == 0.0,
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::SNAP
    }
}

/// Damped harmonic oscillator built by [`SpringParams::spring`].
#[derive(Debug, Clone)]
pub struct Spring {
    initial: f64,
    target: f64,
    position: f64,
    velocity: f64,
    launch: f64,
    stiffness: f64,
    damping: f64,
    settled: bool,
}

impl Spring {
    fn settled_at(target: f64) -> Self {
        Self {
            initial: target,
            target,
            position: target,
            velocity: 0.0,
            launch: 0.0,
            stiffness: 0.0,
            damping: 0.0,
            settled: true,
        }
    }

    /// Raw, unclamped position; overshoots past the target while bouncing.
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    fn integrate(&mut self, secs: f64) {
        let mut remaining = secs;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let pull = -self.stiffness * (self.position - self.target);
            self.velocity += (pull - self.damping * self.velocity) * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }

    fn try_settle(&mut self) {
        let scale = (self.target - self.initial).abs().max(1.0);
        if (self.position - self.target).abs() < SETTLE_POSITION * scale
            && self.velocity.abs() < SETTLE_VELOCITY * scale
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        if self.settled || dt.is_zero() {
            return;
        }
        self.integrate(dt.as_secs_f64());
        self.try_settle();
    }

    fn is_complete(&self) -> bool {
        self.settled
    }

    fn value(&self) -> f64 {
        self.position.clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = self.launch;
        self.settled = self.initial == self.target && self.launch == 0.0;
    }
}
