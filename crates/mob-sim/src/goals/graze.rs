//! Stand still and eat.

use mob_core::{FlagSet, ResourceFlag};
use mob_goal::Goal;

use crate::Mob;

/// Eat in place for a fixed duration, refilling the fullness meter on
/// completion.
///
/// Claims `Move` and `Look` so the mob neither walks off nor glances away
/// mid-meal.  The eating animation is latency-sensitive, so this goal
/// requires updates every tick even on reduced-cadence passes — stalling the
/// countdown would leave the mob frozen mid-bite.
pub struct GrazeGoal {
    chance: u32,
    hungry_below: u32,
    remaining: u32,
}

impl GrazeGoal {
    /// Ticks one meal takes.
    pub const EAT_TICKS: u32 = 40;

    /// `hungry_below` is the fullness threshold under which the mob wants to
    /// eat; `chance` is the 1-in-N per-tick trigger once hungry.
    pub fn new(chance: u32, hungry_below: u32) -> Self {
        Self {
            chance,
            hungry_below,
            remaining: 0,
        }
    }
}

impl Goal<Mob> for GrazeGoal {
    fn flags(&self) -> FlagSet {
        FlagSet::of(&[ResourceFlag::Move, ResourceFlag::Look])
    }

    fn requires_update_every_tick(&self) -> bool {
        true
    }

    fn can_use(&mut self, mob: &mut Mob) -> bool {
        mob.fullness < self.hungry_below && mob.rng.gen_range(0..self.chance.max(1)) == 0
    }

    fn can_continue(&mut self, _mob: &mut Mob) -> bool {
        self.remaining > 0
    }

    fn start(&mut self, mob: &mut Mob) {
        self.remaining = Self::EAT_TICKS;
        mob.move_target = None;
        mob.move_speed = 0.0;
    }

    fn tick(&mut self, mob: &mut Mob) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            mob.fullness = Mob::MAX_FULLNESS;
        }
    }
}
