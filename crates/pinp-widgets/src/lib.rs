#![forbid(unsafe_code)]

//! Drag-and-snap controller for picture-in-picture overlays.
//!
//! # Role in PinP
//! `pinp-widgets` turns pan gestures into host instructions. A host feeds
//! [`PanEvent`](pinp_core::PanEvent)s (or raw pointer events) plus the current
//! [`Layout`] into a [`PinpController`] and executes the returned [`Effect`]s,
//! typically through [`PinpHost::apply`].
//!
//! # Modules
//! - **config**: [`PinpConfig`] tunables and validation.
//! - **motion**: [`Motion`] descriptions and a per-frame [`CenterAnimation`].
//! - **pinp**: the session state machine and controller.
//! - **host**: the [`PinpHost`] seam.

pub mod config;
pub mod host;
pub mod motion;
pub mod pinp;

pub use config::{PinpConfig, PinpConfigError};
pub use host::PinpHost;
pub use motion::{CenterAnimation, Motion};
pub use pinp::{
    DragSession, Effect, Layout, PinpController, PinpState, PulloutAffordance, SessionState,
    transition,
};
