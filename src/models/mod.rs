//! Domain models
//!
//! Pure data structures describing one tick's frozen world: positions,
//! circular bodies, the map snapshot, and the commands the planner emits.

pub mod body;
pub mod command;
pub mod constants;
pub mod errors;
pub mod map;
pub mod position;
