//! Game rule constants shared by the planner and its consumers.

use std::f64::consts::PI;

/// Maximum thrust magnitude any ship can apply in a single tick.
pub const MAX_SPEED: i32 = 7;

/// Collision radius of every ship.
pub const SHIP_RADIUS: f64 = 0.5;

/// A ship may issue a dock command within this distance of a planet's
/// surface.
pub const DOCK_RADIUS: f64 = 4.0;

/// Buffer added to a body's radius when testing predicted collisions.
/// Absorbs the error introduced by quantizing bearings to whole degrees.
pub const FORECAST_MARGIN: f64 = SHIP_RADIUS + 0.1;

/// Maximum number of rotated-aim retries before a planning call gives up.
pub const MAX_COURSE_CORRECTIONS: i32 = 90;

/// Rotation applied to the aim point between correction attempts (1 degree).
pub const COURSE_STEP_RAD: f64 = PI / 180.0;

/// Clearance beyond a dock target's radius when choosing the approach
/// point. Keeps the final approach segment outside the target's own
/// inflated circle, which would otherwise block every docking run.
pub const DOCK_STANDOFF: f64 = 3.0;

/// Two points closer than this are treated as coincident.
pub const POSITION_EPSILON: f64 = 1e-9;
