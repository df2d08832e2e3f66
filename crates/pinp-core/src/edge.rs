#![forbid(unsafe_code)]

//! Edge classification: how an overlay sits relative to its container.
//!
//! Everything in this module is a pure function of two rectangle snapshots.
//! The overlay frame and the container frame are supplied by the host on
//! every call; a missing container (overlay not attached to any surface)
//! always yields the neutral answer.
//!
//! # Precedence
//!
//! An overlay can satisfy several loose conditions at once (hanging off the
//! right edge *and* the bottom edge, say). [`classify`] resolves this with a
//! fixed first-match order:
//!
//! 1. corners,
//! 2. closing edges (horizontal center outside the container),
//! 3. plain edge overlap (right, left, top, bottom),
//! 4. [`EdgeState::None`].
//!
//! # Axis naming
//!
//! Corner names follow screen orientation (`Bottom*` is the max-y side), while
//! the plain `Top` edge is the max-y overflow and `Bottom` the min-y overflow.
//! Both namings are kept as-is because snap targets are keyed on them.
//!
//! # Invariants
//!
//! 1. [`classify`] returns exactly one state and never both a corner and an
//!    edge for the same input.
//! 2. [`pullout_position`] only reports `Left`, `Right` or `None`.
//! 3. [`scaled_fraction`] never returns a non-finite number.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// Default visible sliver (in surface units) kept on screen when the overlay
/// is parked off an edge. Also the width of the pullout hit target.
pub const DEFAULT_MARGIN: f64 = 40.0;

/// Discrete relationship between the overlay and its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeState {
    /// Fully inside the container.
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
    BottomRightCorner,
    /// Horizontal center left of the container: the overlay is being parked.
    LeftClosing,
    /// Horizontal center right of the container: the overlay is being parked.
    RightClosing,
}

impl EdgeState {
    /// All states, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::None,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::TopLeftCorner,
        Self::TopRightCorner,
        Self::BottomLeftCorner,
        Self::BottomRightCorner,
        Self::LeftClosing,
        Self::RightClosing,
    ];

    #[inline]
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeftCorner
                | Self::TopRightCorner
                | Self::BottomLeftCorner
                | Self::BottomRightCorner
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_closing(self) -> bool {
        matches!(self, Self::LeftClosing | Self::RightClosing)
    }

    /// Plain edge overlap (not a corner, not closing).
    #[inline]
    #[must_use]
    pub const fn is_edge(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Top | Self::Bottom)
    }

    /// Horizontal side this state leans toward, if any.
    #[must_use]
    pub const fn side(self) -> PulloutSide {
        match self {
            Self::Left | Self::LeftClosing | Self::TopLeftCorner | Self::BottomLeftCorner => {
                PulloutSide::Left
            }
            Self::Right | Self::RightClosing | Self::TopRightCorner | Self::BottomRightCorner => {
                PulloutSide::Right
            }
            Self::None | Self::Top | Self::Bottom => PulloutSide::None,
        }
    }
}

/// Which container edge the pullout handle is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PulloutSide {
    #[default]
    None,
    Left,
    Right,
}

/// Result of the off-container pullout check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulloutPosition {
    /// Whether the overlay is parked off an edge and the handle should show.
    pub show: bool,
    /// `Left`, `Right` or `None`.
    pub edge: EdgeState,
}

impl PulloutPosition {
    /// Not parked.
    pub const HIDDEN: Self = Self {
        show: false,
        edge: EdgeState::None,
    };

    #[inline]
    #[must_use]
    pub const fn side(self) -> PulloutSide {
        self.edge.side()
    }
}

/// Check whether the overlay is parked (mostly hidden) past a vertical edge.
///
/// Parked on the left means the overlay's horizontal center is left of the
/// container's left edge while its vertical extent lies strictly inside the
/// container's vertical extent. The right edge is symmetric.
#[must_use]
pub fn pullout_position(overlay: &Rect, container: Option<&Rect>) -> PulloutPosition {
    let Some(container) = container else {
        return PulloutPosition::HIDDEN;
    };

    let vertically_inside =
        overlay.max_y() < container.max_y() && overlay.min_y() > container.min_y();
    if !vertically_inside {
        return PulloutPosition::HIDDEN;
    }

    if overlay.mid_x() < container.min_x() {
        PulloutPosition {
            show: true,
            edge: EdgeState::Left,
        }
    } else if overlay.mid_x() > container.max_x() {
        PulloutPosition {
            show: true,
            edge: EdgeState::Right,
        }
    } else {
        PulloutPosition::HIDDEN
    }
}

/// Classify the overlay against the container (first match wins).
#[must_use]
pub fn classify(overlay: &Rect, container: Option<&Rect>) -> EdgeState {
    let Some(c) = container else {
        return EdgeState::None;
    };

    let past_right = overlay.max_x() > c.max_x();
    let past_left = overlay.min_x() < c.min_x();
    let past_max_y = overlay.max_y() > c.max_y();
    let past_min_y = overlay.min_y() < c.min_y();
    let below_mid = overlay.mid_y() > c.mid_y();
    let above_mid = overlay.mid_y() < c.mid_y();

    if past_right && past_max_y && below_mid {
        EdgeState::BottomRightCorner
    } else if past_right && past_min_y && above_mid {
        EdgeState::TopRightCorner
    } else if past_left && past_max_y && below_mid {
        EdgeState::BottomLeftCorner
    } else if past_left && past_min_y && above_mid {
        EdgeState::TopLeftCorner
    } else if overlay.mid_x() > c.max_x() {
        EdgeState::RightClosing
    } else if overlay.mid_x() < c.min_x() {
        EdgeState::LeftClosing
    } else if past_right {
        EdgeState::Right
    } else if past_left {
        EdgeState::Left
    } else if past_max_y {
        EdgeState::Top
    } else if past_min_y {
        EdgeState::Bottom
    } else {
        EdgeState::None
    }
}

/// Linear rescale: `(value - min) / (max - min)`.
///
/// No clamping is applied. Callers must ensure `max != min`; when they do not
/// (or the inputs are non-finite) the neutral fraction `0.0` is returned.
#[must_use]
pub fn scaled_fraction(value: f64, max: f64, min: f64) -> f64 {
    let span = max - min;
    if span == 0.0 {
        return 0.0;
    }
    let fraction = (value - min) / span;
    if fraction.is_finite() { fraction } else { 0.0 }
}

/// Reveal fraction for the pullout handle while the overlay is parked.
///
/// Returns `None` when the overlay is not parked. For the right edge the
/// fraction is shifted down by one; the caller drives its animation reversed
/// so both sides read in the same visual direction.
#[must_use]
pub fn reveal_fraction(
    overlay: &Rect,
    container: Option<&Rect>,
    margin: f64,
) -> Option<(f64, PulloutSide)> {
    let c = container?;
    let position = pullout_position(overlay, Some(c));
    if !position.show {
        return None;
    }
    let half_width = overlay.width / 2.0;
    match position.side() {
        PulloutSide::Left => Some((
            scaled_fraction(overlay.mid_x(), c.min_x(), margin - c.min_x() - half_width),
            PulloutSide::Left,
        )),
        PulloutSide::Right => Some((
            scaled_fraction(overlay.mid_x(), c.max_x(), margin + c.max_x() - half_width) - 1.0,
            PulloutSide::Right,
        )),
        PulloutSide::None => None,
    }
}

/// Corrective center for a released overlay in `state`.
///
/// `anchor` is the committed rest center (before snapping). Plain edges and
/// corners align the overlay flush with the container; closing states keep a
/// `margin`-wide sliver on screen; `None` leaves the anchor untouched.
#[must_use]
pub fn snap_target(
    state: EdgeState,
    overlay: Size,
    container: &Rect,
    anchor: Point,
    margin: f64,
) -> Point {
    let half_w = overlay.width / 2.0;
    let half_h = overlay.height / 2.0;
    let left = container.min_x() + half_w;
    let right = container.max_x() - half_w;
    let min_y = container.min_y() + half_h;
    let max_y = container.max_y() - half_h;

    match state {
        EdgeState::Top => anchor.with_y(max_y),
        EdgeState::Bottom => anchor.with_y(min_y),
        EdgeState::Left => anchor.with_x(left),
        EdgeState::Right => anchor.with_x(right),
        EdgeState::TopLeftCorner => Point::new(left, min_y),
        EdgeState::TopRightCorner => Point::new(right, min_y),
        EdgeState::BottomLeftCorner => Point::new(left, max_y),
        EdgeState::BottomRightCorner => Point::new(right, max_y),
        EdgeState::LeftClosing => anchor.with_x(container.min_x() - half_w + margin),
        EdgeState::RightClosing => anchor.with_x(container.max_x() + half_w - margin),
        EdgeState::None => anchor,
    }
}

/// Center the overlay should return to when the pullout handle is tapped.
///
/// `None` when the overlay is not parked.
#[must_use]
pub fn restore_target(overlay: &Rect, container: Option<&Rect>, anchor: Point) -> Option<Point> {
    let c = container?;
    let half_w = overlay.width / 2.0;
    match pullout_position(overlay, Some(c)).side() {
        PulloutSide::Left => Some(Point::new(c.min_x() + half_w, anchor.y)),
        PulloutSide::Right => Some(Point::new(c.max_x() - half_w, anchor.y)),
        PulloutSide::None => None,
    }
}
