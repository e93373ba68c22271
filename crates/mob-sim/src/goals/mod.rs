//! Stock goals for the demo world.
//!
//! Priorities are the caller's choice at registration; the constants used by
//! the pasture demo follow the usual grazing-animal layering — panic first,
//! then grazing, then idle wandering and gaze.

pub mod graze;
pub mod look;
pub mod panic;
pub mod wander;

pub use graze::GrazeGoal;
pub use look::LookAroundGoal;
pub use panic::PanicGoal;
pub use wander::WanderGoal;
