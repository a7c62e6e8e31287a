//! Course plotting and correction
//!
//! Turns a ship and a target into a collision-free thrust command by
//! surveying obstacles along the candidate segment and rotating the aim
//! point until the course clears or the correction budget runs out.

mod corrector;
mod reservations;
mod survey;

pub use corrector::{navigate_to_dock, navigate_to_point, navigate_towards};
pub use reservations::ReservationLedger;
pub use survey::obstacles_between;
