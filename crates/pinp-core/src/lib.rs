#![forbid(unsafe_code)]

//! Core: geometry, edge classification, pan recognition, and animation.
//!
//! # Role in PinP
//! `pinp-core` holds everything about a picture-in-picture overlay that can be
//! expressed as pure functions or small self-contained state machines. The
//! stateful drag controller lives in `pinp-widgets` and is built on these.
//!
//! # Primary responsibilities
//! - **geometry**: `Point`, `Vec2`, `Size`, `Rect` in continuous coordinates.
//! - **edge**: classify an overlay against its container, compute pullout
//!   reveal fractions and release-snap targets.
//! - **gesture**: single-pointer pan recognition from raw pointer events.
//! - **animation**: easing, fades, springs, and the scrubbable property driver.

pub mod animation;
pub mod edge;
pub mod geometry;
pub mod gesture;

pub use edge::{EdgeState, PulloutPosition, PulloutSide, classify, pullout_position};
pub use geometry::{Point, Rect, Size, Vec2};
pub use gesture::{PanEvent, PanPhase};
