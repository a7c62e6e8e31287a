use crate::models::body::{Body, Ship};
use crate::models::constants::{FORECAST_MARGIN, POSITION_EPSILON};
use crate::models::map::GameMap;
use crate::models::position::Position;
use crate::services::collision;
use crate::services::geometry;

/// Every body in the snapshot whose circle, inflated by the forecast
/// margin, intersects the travel segment from `ship` to `target`.
///
/// The planning ship is excluded by identifier, and any body sitting on
/// either endpoint (within `POSITION_EPSILON`) is excluded so a course
/// aimed at an entity's own position does not report that entity as a
/// blocker. Iterates every planet and every ship of every player; the
/// fleet sizes involved do not warrant a spatial index.
pub fn obstacles_between<'a>(map: &'a GameMap, ship: &Ship, target: Position) -> Vec<&'a Body> {
    let start = ship.position();
    let mut found = Vec::new();

    for planet in &map.planets {
        if blocks(planet, start, target) {
            found.push(planet);
        }
    }

    for other in &map.ships {
        if other.id() == ship.id() {
            continue;
        }
        if blocks(&other.body, start, target) {
            found.push(&other.body);
        }
    }

    found
}

fn blocks(body: &Body, start: Position, target: Position) -> bool {
    if geometry::distance(body.position, start) < POSITION_EPSILON
        || geometry::distance(body.position, target) < POSITION_EPSILON
    {
        return false;
    }
    collision::segment_intersects_circle(start, target, body, FORECAST_MARGIN)
}
