//! The `Sim` struct and its tick loop.

use mob_core::{MobId, Tick, Vec2};
use mob_goal::GoalSelector;
use tracing::debug;

use crate::{Mob, SimObserver};

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

/// One mob together with its own arbitrator.
///
/// Each mob needs its own selector: the flag lock table is per-agent state,
/// never shared across the population.
pub(crate) struct MobEntry {
    pub(crate) mob: Mob,
    pub(crate) selector: GoalSelector<Mob>,
}

/// The simulation runner.
///
/// Drives every mob's [`GoalSelector`] once per tick, then integrates
/// movement and fullness decay.  Create via [`SimBuilder`][crate::SimBuilder].
///
/// External events (`scare`/`calm`) mutate mob state between ticks; the
/// goals react to them through their ordinary eligibility checks on the next
/// arbitration pass.
pub struct Sim {
    /// Global configuration.
    pub config: SimConfig,

    /// Current tick, advanced after each processed tick.
    pub now: Tick,

    pub(crate) entries: Vec<MobEntry>,
}

impl std::fmt::Debug for Sim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("config", &self.config)
            .field("now", &self.now)
            .field("mobs", &self.entries.len())
            .finish()
    }
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.total_ticks`, calling observer
    /// hooks at every tick boundary.  Use [`NoopObserver`][crate::NoopObserver]
    /// if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.now < Tick(self.config.total_ticks) {
            observer.on_tick_start(self.now);
            self.step();
            observer.on_tick_end(self.now, self.running_goal_count());
            self.now.advance();
        }
        observer.on_sim_end(self.now);
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            observer.on_tick_start(self.now);
            self.step();
            observer.on_tick_end(self.now, self.running_goal_count());
            self.now.advance();
        }
    }

    /// Mark `at` as a threat for `mob`.  Returns `false` for an unknown ID.
    pub fn scare(&mut self, mob: MobId, at: Vec2) -> bool {
        let Some(entry) = self.entries.get_mut(mob.index()) else {
            return false;
        };
        debug!(mob = %mob, at = %at, "scare event");
        entry.mob.threat = Some(at);
        true
    }

    /// Clear `mob`'s threat.  Returns `false` for an unknown ID.
    pub fn calm(&mut self, mob: MobId) -> bool {
        let Some(entry) = self.entries.get_mut(mob.index()) else {
            return false;
        };
        debug!(mob = %mob, "calm event");
        entry.mob.threat = None;
        true
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn mob(&self, id: MobId) -> Option<&Mob> {
        self.entries.get(id.index()).map(|e| &e.mob)
    }

    pub fn selector(&self, id: MobId) -> Option<&GoalSelector<Mob>> {
        self.entries.get(id.index()).map(|e| &e.selector)
    }

    pub fn mobs(&self) -> impl Iterator<Item = &Mob> {
        self.entries.iter().map(|e| &e.mob)
    }

    pub fn mob_count(&self) -> usize {
        self.entries.len()
    }

    /// Total running goals across the population, as reported to observers.
    pub fn running_goal_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.selector.running_goals().count())
            .sum()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step(&mut self) {
        for entry in &mut self.entries {
            let MobEntry { mob, selector } = entry;
            selector.tick(mob);
            mob.apply_movement();
            mob.digest();
        }
    }
}
