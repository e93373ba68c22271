//! A no-op goal — always eligible, requires nothing, does nothing.

use crate::Goal;

/// A [`Goal`] that claims no flags and has empty lifecycle methods.
///
/// Useful as a placeholder in tests or for keeping a registration slot
/// occupied while a real behavior is developed.
pub struct NoopGoal;

impl<C> Goal<C> for NoopGoal {
    fn can_use(&mut self, _ctx: &mut C) -> bool {
        true
    }
}
