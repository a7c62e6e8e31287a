use tracing::debug;

use crate::models::body::{Body, Ship};
use crate::models::command::Plan;
use crate::models::constants::{COURSE_STEP_RAD, DOCK_STANDOFF, MAX_COURSE_CORRECTIONS};
use crate::models::map::GameMap;
use crate::models::position::Position;
use crate::services::geometry;

use super::reservations::ReservationLedger;
use super::survey;

/// Why a correction attempt was rejected and the aim point rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deflection {
    /// A body intersects the segment toward the aim point.
    PathBlocked,
    /// The forecast position leaves the playing field.
    OutOfBounds,
    /// The forecast position lands on a teammate's claim.
    DestinationReserved,
}

/// Plot a thrust command from `ship` toward `target`, rotating the aim
/// point by `angular_step_rad` increments until the course is clear or the
/// correction budget runs out.
///
/// Each attempt is a fresh computation against the rotated aim point:
/// obstacles are surveyed along the full segment to the aim point, while
/// map bounds and prior reservations are checked against the position the
/// ship can actually reach this tick. On success that forecast position is
/// claimed in `ledger` before the plan is returned.
///
/// A target at the ship's own position short-circuits to a successful
/// zero-thrust plan: the ship has already arrived and there is nothing to
/// check or rotate.
///
/// Exhausting `max_corrections` yields a failed [`Plan`]; the search never
/// treats an unreachable target as a fault.
#[allow(clippy::too_many_arguments)]
pub fn navigate_towards(
    map: &GameMap,
    ship: &Ship,
    target: Position,
    max_thrust: i32,
    avoid_obstacles: bool,
    max_corrections: i32,
    angular_step_rad: f64,
    ledger: &mut ReservationLedger,
) -> Plan {
    let start = ship.position();
    let mut aim = target;

    for _ in 0..max_corrections {
        let dist = geometry::distance(start, aim);
        if dist == 0.0 {
            ledger.reserve(start);
            return Plan::thrust(0, 0);
        }
        let bearing_rad = geometry::bearing(start, aim);

        // Truncate toward zero so the ship never overshoots a target it
        // could otherwise reach exactly; a sub-unit remainder closes on a
        // later tick.
        let thrust = (dist as i32).min(max_thrust);
        let bearing_deg = geometry::bearing_deg_clipped(bearing_rad);
        let result = geometry::forecast_position(start, thrust, bearing_deg);

        if avoid_obstacles {
            if let Some(cause) = deflection_cause(map, ship, aim, result, ledger) {
                debug!(ship = ship.id(), ?cause, bearing_deg, "course deflected");
                aim = geometry::project(start, dist, bearing_rad + angular_step_rad);
                continue;
            }
        }

        ledger.reserve(result);
        return Plan::thrust(thrust, bearing_deg);
    }

    Plan::failed()
}

fn deflection_cause(
    map: &GameMap,
    ship: &Ship,
    aim: Position,
    result: Position,
    ledger: &ReservationLedger,
) -> Option<Deflection> {
    if !survey::obstacles_between(map, ship, aim).is_empty() {
        return Some(Deflection::PathBlocked);
    }
    if !map.in_bounds(result) {
        return Some(Deflection::OutOfBounds);
    }
    if ledger.would_collide(result) {
        return Some(Deflection::DestinationReserved);
    }
    None
}

/// Plot an approach to `berth`'s stand-off point with the standard budget
/// and the one-degree correction step.
pub fn navigate_to_dock(
    map: &GameMap,
    ship: &Ship,
    berth: &Body,
    max_thrust: i32,
    ledger: &mut ReservationLedger,
) -> Plan {
    let target = geometry::closest_standoff_point(ship.position(), berth, DOCK_STANDOFF);
    navigate_towards(
        map,
        ship,
        target,
        max_thrust,
        true,
        MAX_COURSE_CORRECTIONS,
        COURSE_STEP_RAD,
        ledger,
    )
}

/// Plot a course straight to `target` at the ship's own thrust cap, with
/// the standard budget and the one-degree correction step.
pub fn navigate_to_point(
    map: &GameMap,
    ship: &Ship,
    target: Position,
    ledger: &mut ReservationLedger,
) -> Plan {
    navigate_towards(
        map,
        ship,
        target,
        ship.max_thrust,
        true,
        MAX_COURSE_CORRECTIONS,
        COURSE_STEP_RAD,
        ledger,
    )
}
