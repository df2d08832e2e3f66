#![forbid(unsafe_code)]

//! Host seam.
//!
//! A host owns the actual view hierarchy. The controller hands it
//! [`Effect`]s; the host turns each into a native operation. Implementors
//! only need the three primitives, [`PinpHost::apply`] dispatches in order.

use pinp_core::geometry::Point;

use crate::motion::Motion;
use crate::pinp::{Effect, PulloutAffordance};

/// Receiver of controller effects.
pub trait PinpHost {
    /// Animate the overlay center to `center`.
    fn move_center(&mut self, center: Point, motion: Motion);

    /// Update the pullout handle's opacity and side.
    fn set_pullout(&mut self, affordance: PulloutAffordance);

    /// Request that the overlay be minimized.
    fn minimize(&mut self, minimize: bool);

    /// Execute `effects` in emission order.
    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::MoveCenter { center, motion } => self.move_center(center, motion),
                Effect::SetPullout(affordance) => self.set_pullout(affordance),
                Effect::Minimize(minimize) => self.minimize(minimize),
            }
        }
    }
}
