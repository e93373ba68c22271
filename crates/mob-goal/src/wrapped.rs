//! `WrappedGoal` — the priority decorator the selector schedules.

use mob_core::{FlagSet, GoalId};
use tracing::trace;

use crate::Goal;

/// A registered goal: the boxed [`Goal`] plus its priority rank and running
/// state.
///
/// Priority is an ordinal where a *smaller* number denotes a *more important*
/// goal.  The running flag transitions only through the selector's
/// [`start`][Self::start]/[`stop`][Self::stop] calls, both of which are
/// idempotent: double invocation never reaches the wrapped goal twice.
pub struct WrappedGoal<C> {
    id: GoalId,
    priority: u32,
    running: bool,
    goal: Box<dyn Goal<C>>,
}

impl<C> WrappedGoal<C> {
    pub(crate) fn new(id: GoalId, priority: u32, goal: Box<dyn Goal<C>>) -> Self {
        Self { id, priority, running: false, goal }
    }

    /// The registration handle assigned by the selector.
    #[inline]
    pub fn id(&self) -> GoalId {
        self.id
    }

    /// Smaller = more important.
    #[inline]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Shared access to the wrapped goal, for predicates and diagnostics.
    #[inline]
    pub fn goal(&self) -> &dyn Goal<C> {
        &*self.goal
    }

    /// The single preemption rule: a running goal yields a flag only if it
    /// allows interruption *and* the candidate is strictly more important.
    /// Equal priority never preempts, which rules out livelock between
    /// equal-priority competitors on the same tick.
    pub fn can_be_replaced_by(&self, candidate: &WrappedGoal<C>) -> bool {
        self.is_interruptible() && candidate.priority() < self.priority()
    }

    // ── Delegation to the wrapped goal ────────────────────────────────────

    #[inline]
    pub fn flags(&self) -> FlagSet {
        self.goal.flags()
    }

    #[inline]
    pub fn can_use(&mut self, ctx: &mut C) -> bool {
        self.goal.can_use(ctx)
    }

    #[inline]
    pub fn can_continue(&mut self, ctx: &mut C) -> bool {
        self.goal.can_continue(ctx)
    }

    #[inline]
    pub fn is_interruptible(&self) -> bool {
        self.goal.is_interruptible()
    }

    #[inline]
    pub fn requires_update_every_tick(&self) -> bool {
        self.goal.requires_update_every_tick()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.goal.name()
    }

    /// Start the goal if it is not already running (no-op otherwise).
    pub fn start(&mut self, ctx: &mut C) {
        if self.running {
            return;
        }
        self.running = true;
        trace!(goal = self.name(), id = %self.id, priority = self.priority, "goal started");
        self.goal.start(ctx);
    }

    /// Stop the goal if it is running (no-op otherwise).
    pub fn stop(&mut self, ctx: &mut C) {
        if !self.running {
            return;
        }
        self.running = false;
        trace!(goal = self.name(), id = %self.id, priority = self.priority, "goal stopped");
        self.goal.stop(ctx);
    }

    /// Tick the goal.  The selector only calls this while running.
    #[inline]
    pub fn tick(&mut self, ctx: &mut C) {
        self.goal.tick(ctx);
    }
}
