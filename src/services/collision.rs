//! Swept-path collision test against circular bodies.

use crate::models::body::Body;
use crate::models::position::Position;

use super::geometry;

/// Whether the segment `start → end` passes within `margin` of `body`'s
/// circle.
///
/// Projects the body's center onto the infinite line through the segment,
/// clamps the projection parameter to `[0, 1]` so the closest point stays
/// on the segment, then compares the closest-approach distance to the
/// inflated radius. A zero-length segment degenerates to a point check.
pub fn segment_intersects_circle(start: Position, end: Position, body: &Body, margin: f64) -> bool {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length_sq = dx * dx + dy * dy;

    let closest = if length_sq == 0.0 {
        start
    } else {
        let t = (((body.position.x - start.x) * dx + (body.position.y - start.y) * dy)
            / length_sq)
            .clamp(0.0, 1.0);
        Position::new(start.x + t * dx, start.y + t * dy)
    };

    geometry::distance(closest, body.position) <= body.radius + margin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f64, y: f64, radius: f64) -> Body {
        Body::new(99, Position::new(x, y), radius, None).unwrap()
    }

    #[test]
    fn hits_circle_on_the_segment() {
        let hit = segment_intersects_circle(
            Position::new(0.0, 0.0),
            Position::new(20.0, 0.0),
            &body_at(10.0, 1.0, 2.0),
            0.0,
        );
        assert!(hit, "circle 1 unit off a crossing segment must intersect");
    }

    #[test]
    fn misses_circle_off_the_corridor() {
        let hit = segment_intersects_circle(
            Position::new(0.0, 0.0),
            Position::new(20.0, 0.0),
            &body_at(10.0, 5.0, 2.0),
            0.5,
        );
        assert!(!hit, "closest approach 5 > inflated radius 2.5");
    }

    #[test]
    fn clamps_to_segment_endpoints() {
        // The circle sits past the far endpoint; the infinite line passes
        // through it, but the segment stops 4 units short of the center.
        let past_end = body_at(24.0, 0.0, 2.0);
        assert!(!segment_intersects_circle(
            Position::new(0.0, 0.0),
            Position::new(20.0, 0.0),
            &past_end,
            0.5,
        ));
        // Inflate enough to reach the endpoint and it intersects again.
        assert!(segment_intersects_circle(
            Position::new(0.0, 0.0),
            Position::new(20.0, 0.0),
            &past_end,
            2.0,
        ));
    }

    #[test]
    fn margin_inflates_the_circle() {
        let body = body_at(10.0, 3.0, 2.0);
        let start = Position::new(0.0, 0.0);
        let end = Position::new(20.0, 0.0);

        assert!(!segment_intersects_circle(start, end, &body, 0.5));
        assert!(segment_intersects_circle(start, end, &body, 1.5));
    }

    #[test]
    fn zero_length_segment_checks_the_point() {
        let body = body_at(10.0, 0.0, 2.0);
        let point = Position::new(11.0, 0.0);
        assert!(segment_intersects_circle(point, point, &body, 0.0));

        let far = Position::new(15.0, 0.0);
        assert!(!segment_intersects_circle(far, far, &body, 0.0));
    }
}
