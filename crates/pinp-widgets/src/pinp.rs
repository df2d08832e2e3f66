#![forbid(unsafe_code)]

//! Drag-and-snap controller for a picture-in-picture overlay.
//!
//! The controller consumes pan gestures and the current [`Layout`] and answers
//! with a list of [`Effect`]s for the host to execute. It never touches a view
//! directly and never animates on its own; see [`crate::host::PinpHost`].
//!
//! # Lifecycle
//!
//! ```text
//! Idle { anchor } --began--> Dragging(session)
//! Dragging --changed--> Dragging     (follow the pointer, scrub the pullout)
//! Dragging --ended-->   Idle         (snap to an edge, corner or parked sliver)
//! Dragging --cancelled--> Idle       (no move)
//! ```
//!
//! # Invariants
//!
//! 1. At most one pullout fade driver exists; a new `began` stops the old one
//!    before replacing it.
//! 2. After `ended` the pullout alpha is exactly `0.0` (not parked) or `1.0`
//!    (parked), and its side matches the parked edge.
//! 3. After `ended` the idle anchor is the snap target, so a following
//!    `began` starts from where the overlay settles.
//! 4. `changed`, `ended` and `cancelled` while idle produce no effects.
//! 5. `cancelled` restores the pullout from before the first `began` of the
//!    gesture, even if `began` repeated mid-drag.
//!
//! # Failure Modes
//!
//! - A missing container disables classification: the overlay follows the
//!   pointer and stays where it is released; the pullout stays hidden.
//! - Before the first gesture no anchor is committed; `restore` then measures
//!   from the overlay's current center.
//! - `cancelled` replaces the anchor with the raw gesture translation rather
//!   than restoring the pre-drag center. Hosts that need the old center should
//!   read [`PinpController::anchor`] before forwarding the cancel.

use pinp_core::animation::{Animation, FinishPosition, PropertyDriver, PropertyDriverState};
use pinp_core::edge::{
    PulloutSide, classify, pullout_position, restore_target, reveal_fraction, snap_target,
};
use pinp_core::geometry::{Point, Rect, Vec2};
use pinp_core::gesture::{PanEvent, PanPhase, PanRecognizer, PointerEvent};

use crate::config::{PinpConfig, PinpConfigError};
use crate::motion::Motion;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry the controller reads on every event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Current overlay frame.
    pub overlay: Rect,
    /// Bounds the overlay snaps against; `None` before the host has laid out.
    pub container: Option<Rect>,
}

impl Layout {
    #[must_use]
    pub const fn new(overlay: Rect, container: Option<Rect>) -> Self {
        Self { overlay, container }
    }
}

/// Visual state of the pullout handle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PulloutAffordance {
    /// Opacity in [0, 1].
    pub alpha: f64,
    pub side: PulloutSide,
}

impl PulloutAffordance {
    pub const HIDDEN: Self = Self {
        alpha: 0.0,
        side: PulloutSide::None,
    };

    #[must_use]
    pub const fn shown(side: PulloutSide) -> Self {
        Self { alpha: 1.0, side }
    }
}

/// Instruction for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Effect {
    /// Animate the overlay center.
    MoveCenter { center: Point, motion: Motion },
    /// Update the pullout handle.
    SetPullout(PulloutAffordance),
    /// Minimize the overlay.
    Minimize(bool),
}

/// Per-gesture bookkeeping.
#[derive(Debug, Clone)]
pub struct DragSession {
    anchor: Point,
    translation: Vec2,
    reveal_fraction: f64,
    driver: PropertyDriver,
    pullout_at_begin: PulloutAffordance,
}

impl DragSession {
    /// Overlay center when the gesture began.
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Latest cumulative translation.
    #[inline]
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Center the overlay is following toward.
    #[inline]
    #[must_use]
    pub fn tentative_center(&self) -> Point {
        self.anchor + self.translation
    }

    /// Clamped driver fraction of the last parked `changed`, `0.0` otherwise.
    #[inline]
    #[must_use]
    pub fn reveal_fraction(&self) -> f64 {
        self.reveal_fraction
    }

    /// Pullout fade driver for this gesture.
    #[inline]
    #[must_use]
    pub fn driver(&self) -> &PropertyDriver {
        &self.driver
    }

    /// End the session without finishing its fade, handing back the halted driver.
    fn retire(mut self) -> PropertyDriver {
        self.driver.stop();
        self.driver
    }
}

/// Whether a gesture is in flight.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// `anchor` is `None` until a gesture or builder commits one.
    Idle { anchor: Option<Point> },
    Dragging(DragSession),
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Idle { anchor: None }
    }
}

impl SessionState {
    /// Committed rest center, or the gesture's anchor while dragging.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Idle { anchor } => *anchor,
            Self::Dragging(session) => Some(session.anchor),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// Everything [`transition`] reads and writes.
#[derive(Debug, Clone, Default)]
pub struct PinpState {
    pub session: SessionState,
    pub pullout: PulloutAffordance,
}

/// Advance `state` by one pan event.
#[must_use]
pub fn transition(
    state: PinpState,
    event: &PanEvent,
    layout: &Layout,
    config: &PinpConfig,
) -> (PinpState, Vec<Effect>) {
    let PinpState { session, pullout } = state;
    match (session, event.phase) {
        (session, PanPhase::Began) => began(session, pullout, layout, config),
        (SessionState::Dragging(drag), PanPhase::Changed) => {
            changed(drag, pullout, event.translation, layout, config)
        }
        (SessionState::Dragging(drag), PanPhase::Ended) => {
            ended(drag, event.translation, layout, config)
        }
        (SessionState::Dragging(drag), PanPhase::Cancelled) => {
            cancelled(drag, pullout, event.translation)
        }
        (idle @ SessionState::Idle { .. }, _) => (
            PinpState {
                session: idle,
                pullout,
            },
            Vec::new(),
        ),
    }
}

fn began(
    session: SessionState,
    pullout: PulloutAffordance,
    layout: &Layout,
    config: &PinpConfig,
) -> (PinpState, Vec<Effect>) {
    let mut pullout_at_begin = pullout;
    if let SessionState::Dragging(prior) = session {
        pullout_at_begin = prior.pullout_at_begin;
        let retired = prior.retire();
        debug_assert_eq!(retired.state(), PropertyDriverState::Stopped);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "pinp.driver_replaced", alpha = retired.value());
    }

    let anchor = layout.overlay.center();
    let mut driver = PropertyDriver::new(pullout.alpha, 0.0, config.fade(), config.fade_curve);
    driver.start();
    driver.pause();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "pinp.began",
        anchor_x = anchor.x,
        anchor_y = anchor.y,
        alpha = pullout.alpha
    );

    let session = DragSession {
        anchor,
        translation: Vec2::ZERO,
        reveal_fraction: 0.0,
        driver,
        pullout_at_begin,
    };
    (
        PinpState {
            session: SessionState::Dragging(session),
            pullout,
        },
        Vec::new(),
    )
}

fn changed(
    mut drag: DragSession,
    mut pullout: PulloutAffordance,
    translation: Vec2,
    layout: &Layout,
    config: &PinpConfig,
) -> (PinpState, Vec<Effect>) {
    drag.translation = translation;
    let center = drag.tentative_center();
    let tentative = layout.overlay.with_center(center);
    let mut effects = Vec::with_capacity(2);

    match reveal_fraction(&tentative, layout.container.as_ref(), config.margin) {
        Some((fraction, side)) => {
            drag.driver.set_reversed(side == PulloutSide::Right);
            drag.driver.set_fraction_complete(fraction);
            drag.reveal_fraction = drag.driver.fraction_complete();
            pullout = PulloutAffordance {
                alpha: drag.driver.value(),
                side,
            };
            effects.push(Effect::SetPullout(pullout));
        }
        None => drag.reveal_fraction = 0.0,
    }

    effects.push(Effect::MoveCenter {
        center,
        motion: Motion::Follow {
            duration: config.follow_duration,
            curve: config.follow_curve,
        },
    });

    (
        PinpState {
            session: SessionState::Dragging(drag),
            pullout,
        },
        effects,
    )
}

fn ended(
    mut drag: DragSession,
    translation: Vec2,
    layout: &Layout,
    config: &PinpConfig,
) -> (PinpState, Vec<Effect>) {
    let committed = drag.anchor + translation;
    let released = layout.overlay.with_center(committed);
    let container = layout.container.as_ref();

    let position = pullout_position(&released, container);
    let pullout = if position.show {
        drag.driver.stop_and_finish(FinishPosition::Start);
        PulloutAffordance::shown(position.side())
    } else {
        drag.driver.stop_and_finish(FinishPosition::End);
        PulloutAffordance::HIDDEN
    };

    let edge = classify(&released, container);
    let target = container.map_or(committed, |c| {
        snap_target(edge, released.size(), c, committed, config.margin)
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "pinp.ended",
        edge = ?edge,
        target_x = target.x,
        target_y = target.y,
        parked = position.show
    );

    (
        PinpState {
            session: SessionState::Idle {
                anchor: Some(target),
            },
            pullout,
        },
        vec![
            Effect::SetPullout(pullout),
            Effect::MoveCenter {
                center: target,
                motion: Motion::Spring(config.snap),
            },
        ],
    )
}

fn cancelled(
    mut drag: DragSession,
    pullout: PulloutAffordance,
    translation: Vec2,
) -> (PinpState, Vec<Effect>) {
    drag.driver.stop_and_finish(FinishPosition::Start);
    let restored = drag.pullout_at_begin;
    let anchor = translation.to_point();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "pinp.cancelled",
        anchor_x = anchor.x,
        anchor_y = anchor.y
    );

    let effects = if restored == pullout {
        Vec::new()
    } else {
        vec![Effect::SetPullout(restored)]
    };
    (
        PinpState {
            session: SessionState::Idle {
                anchor: Some(anchor),
            },
            pullout: restored,
        },
        effects,
    )
}

/// Stateful wrapper around [`transition`].
///
/// Owns the session, the pullout affordance, the configuration and a pan
/// recognizer for hosts that deliver raw pointer events.
#[derive(Debug, Clone)]
pub struct PinpController {
    state: PinpState,
    config: PinpConfig,
    recognizer: PanRecognizer,
}

impl Default for PinpController {
    fn default() -> Self {
        Self::new(PinpConfig::default())
    }
}

impl PinpController {
    /// Create a controller without validating `config`.
    #[must_use]
    pub fn new(config: PinpConfig) -> Self {
        Self {
            state: PinpState::default(),
            recognizer: PanRecognizer::new(config.pan),
            config,
        }
    }

    /// Create a controller, rejecting an invalid `config`.
    pub fn try_new(config: PinpConfig) -> Result<Self, PinpConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Start idle at `anchor` (builder pattern).
    #[must_use]
    pub fn with_anchor(mut self, anchor: Point) -> Self {
        if let SessionState::Idle { anchor: current } = &mut self.state.session {
            *current = Some(anchor);
        }
        self
    }

    /// Feed one pan event.
    pub fn handle(&mut self, event: &PanEvent, layout: &Layout) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = transition(state, event, layout, &self.config);
        self.state = next;
        effects
    }

    /// Feed one raw pointer event through the built-in recognizer.
    pub fn handle_pointer(&mut self, event: &PointerEvent, layout: &Layout) -> Vec<Effect> {
        let pans = self.recognizer.process(event);
        pans.iter()
            .flat_map(|pan| self.handle(pan, layout))
            .collect()
    }

    /// The host lost pointer focus; cancels a gesture in flight.
    pub fn focus_lost(&mut self, layout: &Layout) -> Vec<Effect> {
        match self.recognizer.focus_lost() {
            Some(pan) => self.handle(&pan, layout),
            None => Vec::new(),
        }
    }

    /// The pullout handle was tapped: bring a parked overlay back on screen.
    ///
    /// Returns no effects unless the overlay is parked.
    pub fn restore(&mut self, layout: &Layout) -> Vec<Effect> {
        let anchor = self.anchor().unwrap_or_else(|| layout.overlay.center());
        let Some(target) = restore_target(&layout.overlay, layout.container.as_ref(), anchor)
        else {
            return Vec::new();
        };

        if let SessionState::Dragging(drag) = &mut self.state.session {
            drag.driver.stop_and_finish(FinishPosition::End);
            self.recognizer.reset();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "pinp.restore",
            target_x = target.x,
            target_y = target.y
        );

        self.state = PinpState {
            session: SessionState::Idle {
                anchor: Some(target),
            },
            pullout: PulloutAffordance::HIDDEN,
        };
        vec![
            Effect::SetPullout(PulloutAffordance::HIDDEN),
            Effect::MoveCenter {
                center: target,
                motion: Motion::Spring(self.config.snap),
            },
        ]
    }

    /// The close control was tapped.
    #[must_use]
    pub fn close(&self) -> Vec<Effect> {
        vec![Effect::Minimize(true)]
    }

    /// Committed rest center, or the gesture's anchor while dragging.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.state.session.anchor()
    }

    #[inline]
    #[must_use]
    pub fn pullout(&self) -> PulloutAffordance {
        self.state.pullout
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.session.is_dragging()
    }

    #[inline]
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.state.session
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &PinpState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &PinpConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect from the next `began`.
    pub fn set_config(&mut self, config: PinpConfig) {
        self.recognizer.set_config(config.pan);
        self.config = config;
    }
}
