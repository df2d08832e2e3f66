#![forbid(unsafe_code)]

//! Motion descriptions and a small player for hosts without an animator.
//!
//! The controller never animates anything itself. It emits a target center
//! plus a [`Motion`]; hosts with a native animation system translate the
//! motion into their own primitives. Hosts without one (terminal and canvas
//! renderers, tests) can drive a [`CenterAnimation`] per frame instead.

use std::time::Duration;

use pinp_core::animation::{Animation, Curve, Fade, Spring, SpringParams};
use pinp_core::geometry::{Point, Vec2};

use crate::config::seconds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the overlay should travel to a new center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Motion {
    /// Short, curve-timed follow used while dragging.
    Follow { duration: f64, curve: Curve },
    /// Spring used for release snaps and restores.
    Spring(SpringParams),
}

enum Progress {
    Timed(Fade),
    Spring(Spring),
}

/// Interpolates the overlay center from one point to another with a [`Motion`].
pub struct CenterAnimation {
    from: Point,
    delta: Vec2,
    progress: Progress,
}

impl std::fmt::Debug for CenterAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CenterAnimation")
            .field("from", &self.from)
            .field("delta", &self.delta)
            .field("complete", &self.is_complete())
            .finish()
    }
}

impl CenterAnimation {
    /// Start animating from `from` toward `to`.
    #[must_use]
    pub fn new(from: Point, to: Point, motion: Motion) -> Self {
        let progress = match motion {
            Motion::Follow { duration, curve } => {
                Progress::Timed(Fade::new(seconds(duration)).easing(curve.easing()))
            }
            Motion::Spring(params) => Progress::Spring(params.spring(0.0, 1.0)),
        };
        Self {
            from,
            delta: to - from,
            progress,
        }
    }

    /// Unclamped progress; springs may overshoot past 1.0.
    #[must_use]
    pub fn raw_progress(&self) -> f64 {
        match &self.progress {
            Progress::Timed(fade) => fade.value(),
            Progress::Spring(spring) => spring.position(),
        }
    }

    /// Current center.
    #[must_use]
    pub fn center(&self) -> Point {
        let t = self.raw_progress();
        self.from + Vec2::new(self.delta.x * t, self.delta.y * t)
    }

    /// Final center.
    #[must_use]
    pub fn target(&self) -> Point {
        self.from + self.delta
    }
}

impl Animation for CenterAnimation {
    fn tick(&mut self, dt: Duration) {
        match &mut self.progress {
            Progress::Timed(fade) => fade.tick(dt),
            Progress::Spring(spring) => spring.tick(dt),
        }
    }

    fn is_complete(&self) -> bool {
        match &self.progress {
            Progress::Timed(fade) => fade.is_complete(),
            Progress::Spring(spring) => spring.is_complete(),
        }
    }

    fn value(&self) -> f64 {
        self.raw_progress().clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        match &mut self.progress {
            Progress::Timed(fade) => fade.reset(),
            Progress::Spring(spring) => spring.reset(),
        }
    }
}
