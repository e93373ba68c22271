//! Per-mob state — the context type the demo goals run against.

use mob_core::{MobId, MobRng, Vec2};

/// One autonomous agent on a flat plane.
///
/// `Mob` is the `C` in `Goal<C>` for every goal in this crate.  Goals read
/// and mutate it freely during their lifecycle calls; the scheduler itself
/// never touches it.  Movement is split intent/apply: goals set
/// [`move_target`][Self::move_target] and [`move_speed`][Self::move_speed],
/// and the sim's integrator ([`apply_movement`][Self::apply_movement]) is the
/// only code that changes [`pos`][Self::pos].
pub struct Mob {
    pub id: MobId,

    /// Current position.
    pub pos: Vec2,

    /// Unit facing direction.  Gaze goals steer this.
    pub heading: Vec2,

    /// Where the mob wants to walk, if anywhere.  Cleared on arrival.
    pub move_target: Option<Vec2>,

    /// Distance covered per tick while a move target is set.
    pub move_speed: f32,

    /// Position of a perceived threat, if any.  Set and cleared externally
    /// (the sim's `scare`/`calm` events).
    pub threat: Option<Vec2>,

    /// Satiety meter: decays one point per tick, refilled by grazing.
    pub fullness: u32,

    /// Per-mob deterministic RNG for random goal triggers.
    pub rng: MobRng,
}

impl Mob {
    pub const MAX_FULLNESS: u32 = 200;

    pub fn new(id: MobId, global_seed: u64, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            heading: Vec2::new(1.0, 0.0),
            move_target: None,
            move_speed: 0.0,
            threat: None,
            fullness: Self::MAX_FULLNESS,
            rng: MobRng::new(global_seed, id),
        }
    }

    /// Integrate one tick of motion toward the current move target.
    ///
    /// Arrival clamps to the target exactly and clears it, so goals whose
    /// `can_continue` is "target still set" terminate cleanly.
    pub fn apply_movement(&mut self) {
        let Some(target) = self.move_target else {
            return;
        };
        let dist = self.pos.distance(target);
        if dist <= self.move_speed {
            self.pos = target;
            self.move_target = None;
            return;
        }
        let dir = self.pos.toward(target);
        self.pos = self.pos + dir * self.move_speed;
        self.heading = dir;
    }

    /// One tick of fullness decay.
    #[inline]
    pub fn digest(&mut self) {
        self.fullness = self.fullness.saturating_sub(1);
    }

    /// Whether the mob currently has somewhere to go.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.move_target.is_some()
    }
}
