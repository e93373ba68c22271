//! Idle random strolling.

use mob_core::{FlagSet, ResourceFlag, Vec2};
use mob_goal::Goal;

use crate::Mob;

/// Stroll to a random nearby point, with a 1-in-`chance` trigger per idle
/// tick so mobs spend most of their time standing around.
pub struct WanderGoal {
    radius: f32,
    chance: u32,
    speed: f32,
}

impl WanderGoal {
    /// `radius` bounds the random offset per stroll; `chance` is the 1-in-N
    /// per-tick trigger probability while idle.
    pub fn new(radius: f32, chance: u32, speed: f32) -> Self {
        Self { radius, chance, speed }
    }
}

impl Goal<Mob> for WanderGoal {
    fn flags(&self) -> FlagSet {
        FlagSet::single(ResourceFlag::Move)
    }

    fn can_use(&mut self, mob: &mut Mob) -> bool {
        !mob.is_moving() && mob.rng.gen_range(0..self.chance.max(1)) == 0
    }

    fn can_continue(&mut self, mob: &mut Mob) -> bool {
        // Keep walking until the integrator clears the target on arrival.
        mob.is_moving()
    }

    fn start(&mut self, mob: &mut Mob) {
        let offset = Vec2::new(
            mob.rng.gen_range(-self.radius..=self.radius),
            mob.rng.gen_range(-self.radius..=self.radius),
        );
        mob.move_target = Some(mob.pos + offset);
        mob.move_speed = self.speed;
    }

    fn stop(&mut self, mob: &mut Mob) {
        mob.move_target = None;
        mob.move_speed = 0.0;
    }
}
