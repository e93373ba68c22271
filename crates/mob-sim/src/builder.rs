//! Fluent builder for constructing a [`Sim`].

use mob_core::{MobId, Tick, Vec2};
use mob_goal::GoalSelector;

use crate::sim::MobEntry;
use crate::{Mob, Sim, SimConfig, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// Goal registration happens through the closure passed to
/// [`build`][Self::build], once per mob, so heterogeneous populations can
/// register different goal sets by `MobId`.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, 8)
///     .positions(spawn_points)
///     .build(|_, selector| {
///         selector.add(1, PanicGoal::new(1.5, 24.0));
///         selector.add(6, WanderGoal::new(10.0, 120, 0.6));
///     })?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    mob_count: usize,
    positions: Option<Vec<Vec2>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, mob_count: usize) -> Self {
        Self {
            config,
            mob_count,
            positions: None,
        }
    }

    /// Supply the spawn position for each mob (must be length `mob_count`).
    ///
    /// If not called, all mobs spawn at the origin.
    pub fn positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, spawn the mobs, register their goals, and return a
    /// ready-to-run [`Sim`].
    pub fn build(
        self,
        mut register: impl FnMut(MobId, &mut GoalSelector<Mob>),
    ) -> SimResult<Sim> {
        if self.config.total_ticks == 0 {
            return Err(SimError::Config("total_ticks must be positive".into()));
        }

        let positions = match self.positions {
            Some(p) => {
                if p.len() != self.mob_count {
                    return Err(SimError::MobCountMismatch {
                        expected: self.mob_count,
                        got: p.len(),
                        what: "spawn positions",
                    });
                }
                p
            }
            None => vec![Vec2::ZERO; self.mob_count],
        };

        let entries = positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| {
                let id = MobId(i as u32);
                let mob = Mob::new(id, self.config.seed, pos);
                let mut selector = GoalSelector::new();
                register(id, &mut selector);
                MobEntry { mob, selector }
            })
            .collect();

        Ok(Sim {
            config: self.config,
            now: Tick::ZERO,
            entries,
        })
    }
}
