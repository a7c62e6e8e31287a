use tracing::trace;

use crate::models::constants::FORECAST_MARGIN;
use crate::models::position::Position;
use crate::services::geometry;

/// Destinations already claimed by this player's ships during the current
/// tick's planning pass.
///
/// The ledger starts empty at tick start, grows monotonically as each ship
/// is planned, and is discarded (or [`reset`](Self::reset)) when the tick
/// ends. It is the only mutable state shared between planning calls, and
/// it is only sound under a strictly sequential pass: planning multiple
/// ships concurrently against one ledger is not supported.
#[derive(Debug, Default)]
pub struct ReservationLedger {
    points: Vec<Position>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        ReservationLedger { points: Vec::new() }
    }

    /// True when an existing reservation lies strictly within the forecast
    /// margin of `candidate`.
    pub fn would_collide(&self, candidate: Position) -> bool {
        self.points
            .iter()
            .any(|claimed| geometry::distance(*claimed, candidate) < FORECAST_MARGIN)
    }

    /// Claim `point` for the rest of the tick. Callers check
    /// [`would_collide`](Self::would_collide) first; no deduplication
    /// happens here.
    pub fn reserve(&mut self, point: Position) {
        trace!(x = point.x, y = point.y, "destination reserved");
        self.points.push(point);
    }

    /// Drop every reservation. Called exactly once at the start of each
    /// tick, before any ship is planned.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The claimed points, in planning order.
    pub fn points(&self) -> &[Position] {
        &self.points
    }
}
