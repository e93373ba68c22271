//! `mob-sim` — a small demo world that exercises the `mob-goal` scheduler
//! end-to-end.
//!
//! The arbitration core never looks at agent state; this crate supplies a
//! concrete context ([`Mob`]), a handful of stock goals, and a tick-loop
//! runner, so the whole stack can be driven, observed, and tested.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`mob`]      | `Mob` — per-agent state the goals read and mutate         |
//! | [`goals`]    | `PanicGoal`, `WanderGoal`, `LookAroundGoal`, `GrazeGoal`  |
//! | [`sim`]      | `Sim`, `SimConfig` — the tick loop                        |
//! | [`builder`]  | `SimBuilder` — validated construction                     |
//! | [`observer`] | `SimObserver`, `NoopObserver`                             |
//! | [`error`]    | `SimError`, `SimResult`                                   |
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   for each mob:
//!     ① selector.tick(&mut mob)   — cleanup / start / tick passes
//!     ② mob.apply_movement()      — integrate one step toward move_target
//!     ③ mob.digest()              — fullness decay
//! ```
//!
//! Goals request movement by setting `mob.move_target`; the integrator in
//! step ② is the only code that changes positions, mirroring the
//! intent/apply split of larger tick frameworks.

pub mod builder;
pub mod error;
pub mod goals;
pub mod mob;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use goals::{GrazeGoal, LookAroundGoal, PanicGoal, WanderGoal};
pub use mob::Mob;
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimConfig};
