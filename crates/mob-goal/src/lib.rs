//! `mob-goal` — behavior arbitration scheduler for the `mobmind` framework.
//!
//! A mob's autonomous logic is split into independently-authored [`Goal`]s.
//! Each goal declares the [`ResourceFlag`][mob_core::ResourceFlag]s it needs
//! while active (locomotion, gaze, …); the per-mob [`GoalSelector`] decides
//! once per tick which goals may run, enforcing flag mutual exclusion and
//! priority-based preemption.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`goal`]     | `Goal<C>` trait — the lifecycle contract goals implement  |
//! | [`wrapped`]  | `WrappedGoal<C>` — priority decorator with running state  |
//! | [`selector`] | `GoalSelector<C>` — the three-pass per-tick arbitrator    |
//! | [`noop`]     | `NoopGoal` — placeholder that never does anything         |
//!
//! # Three-pass tick
//!
//! ```text
//! selector.tick(ctx):
//!   ① Cleanup — stop running goals whose flags were disabled or whose
//!               can_continue() is false; purge stale lock entries.
//!   ② Start   — in registration order, start idle goals whose flags are
//!               all unheld or held by lower-priority interruptible goals
//!               and whose can_use() is true.
//!   ③ Tick    — call tick() on every running goal.
//! ```
//!
//! The whole scheduler is single-threaded and cooperative: nothing blocks,
//! nothing runs between ticks, and goals coordinate only through the flag
//! locks — never with each other directly.

pub mod goal;
pub mod noop;
pub mod selector;
pub mod wrapped;


pub use goal::Goal;
pub use noop::NoopGoal;
pub use selector::GoalSelector;
pub use wrapped::WrappedGoal;
