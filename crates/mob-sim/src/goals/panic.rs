//! Flee from a perceived threat.

use mob_core::{FlagSet, ResourceFlag, Vec2};
use mob_goal::Goal;

use crate::Mob;

/// Run directly away from the mob's current threat.
///
/// Eligible while `mob.threat` is set and closer than the safe distance;
/// stops once the threat is gone or outrun.  Re-targets every tick so a
/// moving threat is still fled from.
pub struct PanicGoal {
    speed: f32,
    safe_distance: f32,
}

impl PanicGoal {
    /// How far ahead of the mob each flee target is placed.
    const FLEE_STEP: f32 = 8.0;

    pub fn new(speed: f32, safe_distance: f32) -> Self {
        Self { speed, safe_distance }
    }

    fn retarget(&self, mob: &mut Mob) {
        let Some(threat) = mob.threat else {
            return;
        };
        let mut away = threat.toward(mob.pos);
        if away == Vec2::ZERO {
            // Standing exactly on the threat: flee along the current heading.
            away = mob.heading;
        }
        mob.move_target = Some(mob.pos + away * Self::FLEE_STEP);
        mob.move_speed = self.speed;
    }
}

impl Goal<Mob> for PanicGoal {
    fn flags(&self) -> FlagSet {
        FlagSet::single(ResourceFlag::Move)
    }

    fn can_use(&mut self, mob: &mut Mob) -> bool {
        match mob.threat {
            Some(threat) => mob.pos.distance(threat) < self.safe_distance,
            None => false,
        }
    }

    fn start(&mut self, mob: &mut Mob) {
        self.retarget(mob);
    }

    fn tick(&mut self, mob: &mut Mob) {
        self.retarget(mob);
    }

    fn stop(&mut self, mob: &mut Mob) {
        mob.move_target = None;
        mob.move_speed = 0.0;
    }
}
