#![forbid(unsafe_code)]

//! Pan recognition: turns raw pointer events into pan phases.
//!
//! [`PanRecognizer`] is a stateful processor that converts a raw
//! [`PointerEvent`] stream into [`PanEvent`]s carrying the cumulative
//! translation since the gesture began. Hosts whose platform already
//! recognizes pans can skip this and build [`PanEvent`]s directly.
//!
//! # State Machine
//!
//! ```text
//! Idle ──down──▶ Pressed ──move ≥ threshold──▶ Panning ──up──▶ Idle (Ended)
//!                  │                              │
//!                  └──up / cancel──▶ Idle         └──cancel / focus lost──▶ Idle (Cancelled)
//! ```
//!
//! # Invariants
//!
//! 1. Only one pointer is tracked. Events from any other pointer id are
//!    ignored until the tracked pointer is released.
//! 2. Every `Began` is followed by exactly one `Ended` or `Cancelled`.
//! 3. `Began` always carries a zero translation; the first `Changed`
//!    follows it in the same batch.
//! 4. After `reset()`, the recognizer is idle and emits nothing for the
//!    abandoned gesture.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Vec2};

/// Phase of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A pan event: phase plus translation since the gesture began.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanEvent {
    pub phase: PanPhase,
    pub translation: Vec2,
}

impl PanEvent {
    #[must_use]
    pub const fn began() -> Self {
        Self {
            phase: PanPhase::Began,
            translation: Vec2::ZERO,
        }
    }

    #[must_use]
    pub const fn changed(dx: f64, dy: f64) -> Self {
        Self {
            phase: PanPhase::Changed,
            translation: Vec2::new(dx, dy),
        }
    }

    #[must_use]
    pub const fn ended(dx: f64, dy: f64) -> Self {
        Self {
            phase: PanPhase::Ended,
            translation: Vec2::new(dx, dy),
        }
    }

    #[must_use]
    pub const fn cancelled(dx: f64, dy: f64) -> Self {
        Self {
            phase: PanPhase::Cancelled,
            translation: Vec2::new(dx, dy),
        }
    }
}

/// Kind of raw pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The platform aborted the touch (e.g. system gesture took over).
    Cancel,
}

/// A raw pointer sample in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pointer_id: u64,
    pub position: Point,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(kind: PointerEventKind, pointer_id: u64, x: f64, y: f64) -> Self {
        Self {
            kind,
            pointer_id,
            position: Point::new(x, y),
        }
    }
}

/// Thresholds for pan recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanConfig {
    /// Minimum manhattan distance before a pan begins (default: 3.0).
    pub drag_threshold: f64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tracker {
    pointer_id: u64,
    start: Point,
    last: Point,
    started: bool,
}

impl Tracker {
    fn translation(&self) -> Vec2 {
        self.last - self.start
    }
}

/// Single-pointer pan recognizer.
#[derive(Debug, Clone, Default)]
pub struct PanRecognizer {
    config: PanConfig,
    tracker: Option<Tracker>,
}

impl PanRecognizer {
    #[must_use]
    pub fn new(config: PanConfig) -> Self {
        Self {
            config,
            tracker: None,
        }
    }

    /// Process a raw pointer event, returning the pan events it produced.
    ///
    /// Most events produce zero or one pan event; the move that crosses the
    /// threshold produces `Began` followed by `Changed`.
    pub fn process(&mut self, event: &PointerEvent) -> Vec<PanEvent> {
        let mut out = Vec::with_capacity(2);

        if let Some(tracker) = &self.tracker
            && tracker.pointer_id != event.pointer_id
        {
            return out;
        }

        match event.kind {
            PointerEventKind::Down => {
                self.cancel(&mut out);
                self.on_down(event);
            }
            PointerEventKind::Move => self.on_move(event.position, &mut out),
            PointerEventKind::Up => {
                if let Some(mut tracker) = self.tracker.take()
                    && tracker.started
                {
                    tracker.last = event.position;
                    out.push(PanEvent {
                        phase: PanPhase::Ended,
                        translation: tracker.translation(),
                    });
                }
            }
            PointerEventKind::Cancel => self.cancel(&mut out),
        }

        out
    }

    /// The host lost input focus: cancel any pan in progress.
    pub fn focus_lost(&mut self) -> Option<PanEvent> {
        let mut out = Vec::with_capacity(1);
        self.cancel(&mut out);
        out.pop()
    }

    /// Whether a pan is currently in progress.
    #[inline]
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.tracker.as_ref().is_some_and(|t| t.started)
    }

    /// Drop all tracking state without emitting anything.
    pub fn reset(&mut self) {
        self.tracker = None;
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &PanConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PanConfig) {
        self.config = config;
    }
}

impl PanRecognizer {
    fn on_down(&mut self, event: &PointerEvent) {
        // A repeated down from the tracked pointer restarts tracking; a pan in
        // progress has already been cancelled.
        self.tracker = Some(Tracker {
            pointer_id: event.pointer_id,
            start: event.position,
            last: event.position,
            started: false,
        });
    }

    fn on_move(&mut self, pos: Point, out: &mut Vec<PanEvent>) {
        let Some(tracker) = self.tracker.as_mut() else {
            // Hover without a press.
            return;
        };

        tracker.last = pos;

        if !tracker.started && tracker.translation().manhattan() >= self.config.drag_threshold {
            tracker.started = true;
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "pan.began",
                pointer_id = tracker.pointer_id,
                threshold = self.config.drag_threshold
            );
            out.push(PanEvent::began());
        }

        if tracker.started {
            out.push(PanEvent {
                phase: PanPhase::Changed,
                translation: tracker.translation(),
            });
        }
    }

    fn cancel(&mut self, out: &mut Vec<PanEvent>) {
        if let Some(tracker) = self.tracker.take()
            && tracker.started
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "pan.cancelled", pointer_id = tracker.pointer_id);
            out.push(PanEvent {
                phase: PanPhase::Cancelled,
                translation: tracker.translation(),
            });
        }
    }
}
