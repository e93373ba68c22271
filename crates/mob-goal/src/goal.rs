//! The `Goal` trait — the main extension point for behavior authors.

use mob_core::FlagSet;

/// One unit of autonomous behavior.
///
/// `C` is the context type the goal reads and mutates — typically the mob's
/// own state plus whatever world view it needs.  The scheduler never inspects
/// `C`; it only threads it through to the lifecycle methods.
///
/// # Lifecycle
///
/// A goal is constructed once at mob setup and registered with a
/// [`GoalSelector`][crate::GoalSelector].  While idle it is polled via
/// [`can_use`][Self::can_use] every tick; once started it is ticked until
/// [`can_continue`][Self::can_continue] returns false (or it is preempted),
/// then stopped.  The same instance cycles through start/stop an unbounded
/// number of times — `stop` must leave it ready to start again.
///
/// All lifecycle methods are invoked by the selector only; a goal must never
/// call its own `start`/`stop`.
///
/// # Required methods
///
/// Only [`can_use`][Self::can_use] is required.  Everything else has a
/// default: `can_continue` delegates to `can_use`, goals are interruptible,
/// need no flags, and `start`/`tick`/`stop` are no-ops.
pub trait Goal<C> {
    /// The resource flags this goal holds while running.
    ///
    /// Declared once; must not change after registration.  Two goals whose
    /// flag sets intersect never run concurrently.
    fn flags(&self) -> FlagSet {
        FlagSet::EMPTY
    }

    /// Whether this goal could begin right now.
    ///
    /// Polled every tick while the goal is idle.  May read any state through
    /// `ctx` and may cache decisions (a chosen target, a rolled duration) for
    /// `start` to pick up, but should not mutate shared world state.
    fn can_use(&mut self, ctx: &mut C) -> bool;

    /// Whether this goal may keep running.
    ///
    /// Polled every tick while running.  Defaults to re-running `can_use`;
    /// override when continuation is cheaper or stateful ("my timer has not
    /// expired yet").
    fn can_continue(&mut self, ctx: &mut C) -> bool {
        self.can_use(ctx)
    }

    /// Whether a strictly higher-priority competitor may force this goal to
    /// stop before `can_continue` would naturally fail.  Default `true`.
    fn is_interruptible(&self) -> bool {
        true
    }

    /// When `false` (the default), `tick` is skipped by reduced-cadence
    /// passes ([`GoalSelector::tick_running_only`][crate::GoalSelector::tick_running_only]
    /// with `force_all == false`).  Latency-sensitive goals return `true`.
    fn requires_update_every_tick(&self) -> bool {
        false
    }

    /// Transition idle → running.  Called exactly once per start; establish
    /// whatever state the goal needs here.
    fn start(&mut self, _ctx: &mut C) {}

    /// Advance one tick while running.
    fn tick(&mut self, _ctx: &mut C) {}

    /// Transition running → idle, including forced preemption.  Called
    /// exactly once per stop; release any external claims made in
    /// `start`/`tick`.  The selector releases the flag locks itself.
    fn stop(&mut self, _ctx: &mut C) {}

    /// Diagnostics label.  Defaults to the concrete type name.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
