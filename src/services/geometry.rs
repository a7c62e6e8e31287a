//! Planar geometry for course plotting.

use crate::models::body::Body;
use crate::models::position::Position;

/// Euclidean distance between two points.
pub fn distance(a: Position, b: Position) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Bearing in radians of the vector `from → to`, in (-π, π].
/// With Y growing downward, positive bearings sweep clockwise on screen.
pub fn bearing(from: Position, to: Position) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// The point at `dist` from `origin` along `angle_rad`.
pub fn project(origin: Position, dist: f64, angle_rad: f64) -> Position {
    Position::new(
        origin.x + dist * angle_rad.cos(),
        origin.y + dist * angle_rad.sin(),
    )
}

/// Quantize a radian bearing to whole degrees in `[0, 360)`, the range the
/// engine accepts on the wire. Rounds to nearest, then folds into a single
/// turn.
pub fn bearing_deg_clipped(angle_rad: f64) -> i32 {
    let deg = angle_rad.to_degrees().round() as i64;
    (((deg % 360) + 360) % 360) as i32
}

/// Predicted position after applying `thrust` toward an already-quantized
/// integer-degree bearing.
///
/// The forecast converts the quantized degrees back to radians rather than
/// reusing the pre-quantization bearing, so it models the course the
/// engine will actually execute from the transmitted command.
pub fn forecast_position(origin: Position, thrust: i32, bearing_deg: i32) -> Position {
    project(origin, thrust as f64, (bearing_deg as f64).to_radians())
}

/// The approach point for `body` as seen from `from`: on the line from the
/// body's center toward `from`, `standoff` beyond its surface.
pub fn closest_standoff_point(from: Position, body: &Body, standoff: f64) -> Position {
    let reach = body.radius + standoff;
    let angle_rad = bearing(body.position, from);
    project(body.position, reach, angle_rad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    // --- Distance and bearing tests ---

    #[test]
    fn distance_three_four_five() {
        let d = distance(Position::new(0.0, 0.0), Position::new(3.0, 4.0));
        assert!((d - 5.0).abs() < EPSILON);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Position::new(10.0, 10.0);
        assert!((bearing(origin, Position::new(20.0, 10.0)) - 0.0).abs() < EPSILON);
        // Y grows downward, so "down the screen" is +π/2.
        assert!((bearing(origin, Position::new(10.0, 20.0)) - FRAC_PI_2).abs() < EPSILON);
        assert!((bearing(origin, Position::new(0.0, 10.0)) - PI).abs() < EPSILON);
        assert!((bearing(origin, Position::new(10.0, 0.0)) + FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn project_inverts_bearing_and_distance() {
        let origin = Position::new(5.0, -3.0);
        let target = Position::new(-7.5, 11.25);
        let d = distance(origin, target);
        let angle = bearing(origin, target);

        let reached = project(origin, d, angle);
        assert!((reached.x - target.x).abs() < 1e-9);
        assert!((reached.y - target.y).abs() < 1e-9);
    }

    // --- Degree quantization tests ---

    #[test]
    fn degrees_round_to_nearest() {
        assert_eq!(bearing_deg_clipped(0.0), 0);
        assert_eq!(bearing_deg_clipped(0.6_f64.to_radians()), 1);
        assert_eq!(bearing_deg_clipped(0.4_f64.to_radians()), 0);
        assert_eq!(bearing_deg_clipped(PI), 180);
    }

    #[test]
    fn degrees_fold_into_one_turn() {
        // -90° folds to 270; a bearing past a full turn folds back down.
        assert_eq!(bearing_deg_clipped(-FRAC_PI_2), 270);
        assert_eq!(bearing_deg_clipped(2.0 * PI + FRAC_PI_2), 90);
        assert_eq!(bearing_deg_clipped(-2.0 * PI), 0);
    }

    // --- Forecast tests ---

    #[test]
    fn forecast_follows_quantized_bearing() {
        let origin = Position::new(0.0, 0.0);
        let result = forecast_position(origin, 7, 0);
        assert!((result.x - 7.0).abs() < EPSILON);
        assert!(result.y.abs() < EPSILON);

        let result = forecast_position(origin, 7, 90);
        assert!(result.x.abs() < 1e-9);
        assert!((result.y - 7.0).abs() < 1e-9);
    }

    // --- Stand-off point tests ---

    #[test]
    fn standoff_point_sits_beyond_surface() {
        let planet = Body::new(0, Position::new(50.0, 50.0), 5.0, None).unwrap();
        let from = Position::new(50.0, 10.0);

        let point = closest_standoff_point(from, &planet, 3.0);
        // Straight up from the center: radius 5 plus stand-off 3.
        assert!((point.x - 50.0).abs() < 1e-9);
        assert!((point.y - 42.0).abs() < 1e-9);
        assert!((distance(point, planet.position) - 8.0).abs() < 1e-9);
    }
}
