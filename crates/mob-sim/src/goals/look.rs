//! Idle gaze wandering.

use std::f32::consts::TAU;

use mob_core::{FlagSet, ResourceFlag, Vec2};
use mob_goal::Goal;

use crate::Mob;

/// Turn the mob's heading to a random direction and hold it there for a
/// short random duration.
///
/// Claims only the `Look` flag, so it composes freely with movement goals —
/// unless the movement goal also claims `Look` (grazing does).
pub struct LookAroundGoal {
    chance: u32,
    direction: Vec2,
    remaining: u32,
}

impl LookAroundGoal {
    pub fn new(chance: u32) -> Self {
        Self {
            chance,
            direction: Vec2::new(1.0, 0.0),
            remaining: 0,
        }
    }
}

impl Goal<Mob> for LookAroundGoal {
    fn flags(&self) -> FlagSet {
        FlagSet::single(ResourceFlag::Look)
    }

    fn can_use(&mut self, mob: &mut Mob) -> bool {
        mob.rng.gen_range(0..self.chance.max(1)) == 0
    }

    fn can_continue(&mut self, _mob: &mut Mob) -> bool {
        self.remaining > 0
    }

    fn start(&mut self, mob: &mut Mob) {
        let angle = mob.rng.gen_range(0.0..TAU);
        self.direction = Vec2::new(angle.cos(), angle.sin());
        self.remaining = mob.rng.gen_range(20..40);
    }

    fn tick(&mut self, mob: &mut Mob) {
        self.remaining = self.remaining.saturating_sub(1);
        mob.heading = self.direction;
    }
}
