#![forbid(unsafe_code)]

//! Overlay configuration.
//!
//! Every tunable of the drag controller lives in [`PinpConfig`]. Defaults
//! reproduce the stock overlay feel: a 40-unit parked sliver, a 0.1s linear
//! drag follow, a 0.5s ease-in-out pullout fade and an underdamped snap
//! spring.
//!
//! [`PinpConfig::validate`] is the only fallible surface in the crate. The
//! controller itself never fails; an unvalidated config with nonsensical
//! values degrades to zero-length animations rather than panicking.

use std::fmt;
use std::time::Duration;

use pinp_core::animation::{Curve, SpringParams};
use pinp_core::edge::DEFAULT_MARGIN;
use pinp_core::gesture::PanConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables for a [`PinpController`](crate::pinp::PinpController).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinpConfig {
    /// Visible sliver kept on screen when parked; also offsets the reveal
    /// fraction and sizes the pullout hit target.
    pub margin: f64,
    /// Seconds for the cosmetic drag-follow motion.
    pub follow_duration: f64,
    pub follow_curve: Curve,
    /// Seconds for the pullout fade.
    pub fade_duration: f64,
    pub fade_curve: Curve,
    /// Spring used for release snaps and restores.
    pub snap: SpringParams,
    /// Pointer thresholds for the built-in pan recognizer.
    pub pan: PanConfig,
}

impl Default for PinpConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            follow_duration: 0.1,
            follow_curve: Curve::Linear,
            fade_duration: 0.5,
            fade_curve: Curve::EaseInOut,
            snap: SpringParams::SNAP,
            pan: PanConfig::default(),
        }
    }
}

impl PinpConfig {
    /// Set the parked margin (builder pattern).
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the drag-follow motion (builder pattern).
    #[must_use]
    pub fn with_follow(mut self, seconds: f64, curve: Curve) -> Self {
        self.follow_duration = seconds;
        self.follow_curve = curve;
        self
    }

    /// Set the pullout fade (builder pattern).
    #[must_use]
    pub fn with_fade(mut self, seconds: f64, curve: Curve) -> Self {
        self.fade_duration = seconds;
        self.fade_curve = curve;
        self
    }

    /// Set the snap spring (builder pattern).
    #[must_use]
    pub fn with_snap(mut self, snap: SpringParams) -> Self {
        self.snap = snap;
        self
    }

    /// Set the pan recognizer thresholds (builder pattern).
    #[must_use]
    pub fn with_pan(mut self, pan: PanConfig) -> Self {
        self.pan = pan;
        self
    }

    /// Fade duration as a [`Duration`]; invalid values become zero.
    #[must_use]
    pub fn fade(&self) -> Duration {
        seconds(self.fade_duration)
    }

    /// Check every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), PinpConfigError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(PinpConfigError::InvalidMargin {
                margin: self.margin,
            });
        }
        for (field, value) in [
            ("follow_duration", self.follow_duration),
            ("fade_duration", self.fade_duration),
            ("snap.duration", self.snap.duration),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PinpConfigError::InvalidDuration {
                    field,
                    seconds: value,
                });
            }
        }
        let ratio = self.snap.damping_ratio;
        if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
            return Err(PinpConfigError::InvalidDampingRatio { ratio });
        }
        if !self.snap.initial_velocity.is_finite() {
            return Err(PinpConfigError::InvalidInitialVelocity {
                velocity: self.snap.initial_velocity,
            });
        }
        let threshold = self.pan.drag_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(PinpConfigError::InvalidDragThreshold { threshold });
        }
        Ok(())
    }
}

pub(crate) fn seconds(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or(Duration::ZERO)
}

/// Errors reported by [`PinpConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinpConfigError {
    InvalidMargin { margin: f64 },
    InvalidDuration { field: &'static str, seconds: f64 },
    InvalidDampingRatio { ratio: f64 },
    InvalidInitialVelocity { velocity: f64 },
    InvalidDragThreshold { threshold: f64 },
}

impl fmt::Display for PinpConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMargin { margin } => {
                write!(f, "margin must be finite and non-negative, got {margin}")
            }
            Self::InvalidDuration { field, seconds } => {
                write!(f, "{field} must be a positive number of seconds, got {seconds}")
            }
            Self::InvalidDampingRatio { ratio } => {
                write!(f, "snap damping ratio must be in (0, 1], got {ratio}")
            }
            Self::InvalidInitialVelocity { velocity } => {
                write!(f, "snap initial velocity must be finite, got {velocity}")
            }
            Self::InvalidDragThreshold { threshold } => write!(
                f,
                "drag threshold must be finite and non-negative, got {threshold}"
            ),
        }
    }
}

impl std::error::Error for PinpConfigError {}
