//! `mob-core` — foundational types for the `mobmind` behavior scheduler.
//!
//! This crate is a dependency of every other `mob-*` crate.  It intentionally
//! has no `mob-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                           |
//! |-------------|----------------------------------------------------|
//! | [`ids`]     | `MobId`, `GoalId`                                  |
//! | [`flags`]   | `ResourceFlag` enum, `FlagSet` bitset              |
//! | [`time`]    | `Tick`                                             |
//! | [`pos`]     | `Vec2` planar position/direction type              |
//! | [`rng`]     | `MobRng` (per-mob deterministic RNG)               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod flags;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use flags::{FlagSet, ResourceFlag};
pub use ids::{GoalId, MobId};
pub use pos::Vec2;
pub use rng::MobRng;
pub use time::Tick;
