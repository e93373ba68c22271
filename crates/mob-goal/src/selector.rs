//! `GoalSelector` — the per-mob arbitrator.

use mob_core::{FlagSet, GoalId, ResourceFlag};
use tracing::debug;

use crate::{Goal, WrappedGoal};

/// Decides, once per simulation tick, which of a mob's registered goals may
/// run.
///
/// One selector per mob.  Registered goals are kept in insertion order, which
/// is the only tie-break during the start pass — priority matters solely
/// through the pairwise [`WrappedGoal::can_be_replaced_by`] comparison
/// against a flag's current holder.
///
/// # Invariants
///
/// - At most one registered goal holds any given [`ResourceFlag`] at a time.
/// - A goal is running iff it holds every flag it declares.  Lock entries of
///   goals that stopped are purged lazily, during the next cleanup pass.
///
/// # Example
///
/// ```rust,ignore
/// let mut selector = GoalSelector::new();
/// selector.add(1, PanicGoal::new(1.8));
/// selector.add(6, WanderGoal::new(10.0, 120));
///
/// loop {
///     selector.tick(&mut mob); // once per simulation tick
/// }
/// ```
pub struct GoalSelector<C> {
    /// Registered goals in insertion order.
    goals: Vec<WrappedGoal<C>>,
    /// flag ordinal → current holder.  `None` means unheld, which any
    /// candidate may claim.
    locks: [Option<GoalId>; ResourceFlag::COUNT],
    /// Flags administratively forbidden, independent of any goal's will.
    disabled: FlagSet,
    /// Next registration handle.
    next_id: u32,
}

impl<C> GoalSelector<C> {
    pub fn new() -> Self {
        Self {
            goals: Vec::new(),
            locks: [None; ResourceFlag::COUNT],
            disabled: FlagSet::EMPTY,
            next_id: 0,
        }
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Register `goal` at `priority` (smaller = more important).
    ///
    /// Returns the handle needed for [`remove_goal`][Self::remove_goal].
    /// Registration order among equal-priority, non-conflicting goals is
    /// significant: earlier goals win the start-pass tie-break.
    pub fn add_goal(&mut self, priority: u32, goal: Box<dyn Goal<C>>) -> GoalId {
        let id = GoalId(self.next_id);
        self.next_id += 1;
        self.goals.push(WrappedGoal::new(id, priority, goal));
        id
    }

    /// Boxing convenience for [`add_goal`][Self::add_goal].
    pub fn add<G: Goal<C> + 'static>(&mut self, priority: u32, goal: G) -> GoalId {
        self.add_goal(priority, Box::new(goal))
    }

    /// Unregister the goal with handle `id`, stopping it first if running and
    /// releasing its flag locks.  Returns `false` if no such goal exists.
    pub fn remove_goal(&mut self, ctx: &mut C, id: GoalId) -> bool {
        let Some(i) = self.index_of(id) else {
            return false;
        };
        self.goals[i].stop(ctx);
        for slot in &mut self.locks {
            if *slot == Some(id) {
                *slot = None;
            }
        }
        self.goals.remove(i);
        true
    }

    /// Unregister every goal matching `pred`, with the same stop-and-release
    /// semantics as [`remove_goal`][Self::remove_goal].
    pub fn remove_goals_if(&mut self, ctx: &mut C, mut pred: impl FnMut(&WrappedGoal<C>) -> bool) {
        let matched: Vec<GoalId> = self
            .goals
            .iter()
            .filter(|g| pred(g))
            .map(|g| g.id())
            .collect();
        for id in matched {
            self.remove_goal(ctx, id);
        }
    }

    // ── Flag administration ───────────────────────────────────────────────

    /// Forbid `flag` until re-enabled.  The current holder (if any) is
    /// stopped on the next cleanup pass, and no goal requiring `flag` can
    /// start while it stays disabled.
    pub fn disable_flag(&mut self, flag: ResourceFlag) {
        if !self.disabled.contains(flag) {
            debug!(flag = %flag, "flag disabled");
        }
        self.disabled.insert(flag);
    }

    /// Lift an administrative ban on `flag`.
    pub fn enable_flag(&mut self, flag: ResourceFlag) {
        if self.disabled.contains(flag) {
            debug!(flag = %flag, "flag enabled");
        }
        self.disabled.remove(flag);
    }

    pub fn set_flag_enabled(&mut self, flag: ResourceFlag, enabled: bool) {
        if enabled {
            self.enable_flag(flag);
        } else {
            self.disable_flag(flag);
        }
    }

    /// The administratively disabled set.
    #[inline]
    pub fn disabled_flags(&self) -> FlagSet {
        self.disabled
    }

    // ── Tick driving ──────────────────────────────────────────────────────

    /// Run one full arbitration cycle: cleanup, start, then tick every
    /// running goal.  Call once per simulation tick.
    pub fn tick(&mut self, ctx: &mut C) {
        self.cleanup_pass(ctx);
        self.start_pass(ctx);
        self.tick_pass(ctx, true);
    }

    /// Run only the tick pass — no goals are stopped or started.
    ///
    /// With `force_all == false` only goals whose
    /// [`requires_update_every_tick`][Goal::requires_update_every_tick] is
    /// true are ticked.  Used when something else is driving arbitration for
    /// this mob this frame (e.g. it is a passenger) but latency-sensitive
    /// goals must still advance.
    pub fn tick_running_only(&mut self, ctx: &mut C, force_all: bool) {
        self.tick_pass(ctx, force_all);
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// All registered goals, in insertion order.
    pub fn goals(&self) -> impl Iterator<Item = &WrappedGoal<C>> {
        self.goals.iter()
    }

    /// The subset of registered goals currently running.
    pub fn running_goals(&self) -> impl Iterator<Item = &WrappedGoal<C>> {
        self.goals.iter().filter(|g| g.is_running())
    }

    /// The goal currently holding `flag`, if any.
    #[inline]
    pub fn holder_of(&self, flag: ResourceFlag) -> Option<GoalId> {
        self.locks[flag.index()]
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    // ── The three passes ──────────────────────────────────────────────────

    /// Pass ①: stop running goals whose flags were disabled or whose
    /// `can_continue` failed, then purge lock entries whose holder is no
    /// longer running.
    fn cleanup_pass(&mut self, ctx: &mut C) {
        for goal in &mut self.goals {
            if goal.is_running()
                && (goal.flags().intersects(self.disabled) || !goal.can_continue(ctx))
            {
                goal.stop(ctx);
            }
        }
        let goals = &self.goals;
        for slot in &mut self.locks {
            if let Some(id) = *slot {
                let held = goals.iter().any(|g| g.id() == id && g.is_running());
                if !held {
                    *slot = None;
                }
            }
        }
    }

    /// Pass ②: start idle goals, in registration order, whose required flags
    /// are all claimable and whose `can_use` is true.
    ///
    /// Lock-table updates are visible to later candidates within the same
    /// pass: only one goal can acquire a given flag per tick.
    fn start_pass(&mut self, ctx: &mut C) {
        for i in 0..self.goals.len() {
            if self.goals[i].is_running() {
                continue;
            }
            let flags = self.goals[i].flags();
            if flags.intersects(self.disabled) {
                continue;
            }
            if !self.all_replaceable(i, flags) {
                continue;
            }
            if !self.goals[i].can_use(ctx) {
                continue;
            }
            let id = self.goals[i].id();
            for flag in flags.iter() {
                if let Some(h) = self.locks[flag.index()].and_then(|held| self.index_of(held)) {
                    self.goals[h].stop(ctx);
                }
                self.locks[flag.index()] = Some(id);
            }
            self.goals[i].start(ctx);
        }
    }

    /// Pass ③: tick running goals.  `tick_all == false` restricts the pass
    /// to goals that require updates every tick.
    fn tick_pass(&mut self, ctx: &mut C, tick_all: bool) {
        for goal in &mut self.goals {
            if goal.is_running() && (tick_all || goal.requires_update_every_tick()) {
                goal.tick(ctx);
            }
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Whether every flag in `flags` is either unheld or held by a goal the
    /// candidate at `candidate` may preempt.
    ///
    /// A holder that was preempted earlier this pass may still occupy lock
    /// entries for its other flags (they are purged lazily); it is compared
    /// like any live holder, matching the source system's semantics.
    fn all_replaceable(&self, candidate: usize, flags: FlagSet) -> bool {
        flags.iter().all(|flag| match self.locks[flag.index()] {
            None => true,
            Some(holder) => match self.index_of(holder) {
                Some(h) => self.goals[h].can_be_replaced_by(&self.goals[candidate]),
                // Lock entries always name a registered goal; treat a
                // dangling entry like an unheld flag rather than panicking.
                None => true,
            },
        })
    }

    fn index_of(&self, id: GoalId) -> Option<usize> {
        self.goals.iter().position(|g| g.id() == id)
    }
}

impl<C> Default for GoalSelector<C> {
    fn default() -> Self {
        Self::new()
    }
}
