//! Tick-level planning orchestrator
//!
//! One `TickPlanner` lives for exactly one tick. It borrows the frozen
//! map snapshot, owns the reservation ledger, and runs every planning
//! call strictly sequentially: the ledger grows after each success, so
//! the order ships are planned in decides who wins a contested
//! destination. It is an ordinary value, never a hidden singleton.

use tracing::debug;

use crate::models::body::{Body, Ship};
use crate::models::command::Plan;
use crate::models::map::GameMap;
use crate::models::position::Position;
use crate::services::navigation::{self, ReservationLedger};

/// Plans one tick's movement commands for a player's fleet.
pub struct TickPlanner<'a> {
    map: &'a GameMap,
    ledger: ReservationLedger,
}

impl<'a> TickPlanner<'a> {
    /// Start a fresh tick against `map` with an empty ledger.
    pub fn new(map: &'a GameMap) -> Self {
        TickPlanner {
            map,
            ledger: ReservationLedger::new(),
        }
    }

    /// Plot a course straight to `target` at the ship's own thrust cap.
    ///
    /// Returns a failed plan for ships that are docked or mid-docking;
    /// only undocked ships accept movement commands.
    pub fn plan_to_point(&mut self, ship: &Ship, target: Position) -> Plan {
        if !self.check_navigable(ship) {
            return Plan::failed();
        }
        navigation::navigate_to_point(self.map, ship, target, &mut self.ledger)
    }

    /// Plot an approach toward `berth`'s stand-off point, capped at
    /// `max_thrust`.
    ///
    /// Returns a failed plan for ships that are docked or mid-docking.
    pub fn plan_to_dock(&mut self, ship: &Ship, berth: &Body, max_thrust: i32) -> Plan {
        if !self.check_navigable(ship) {
            return Plan::failed();
        }
        navigation::navigate_to_dock(self.map, ship, berth, max_thrust, &mut self.ledger)
    }

    /// Drop every reservation. Call exactly once when a new tick begins
    /// and this planner is reused against a fresh snapshot.
    pub fn reset(&mut self) {
        self.ledger.reset();
    }

    /// The destinations claimed so far this tick.
    pub fn reservations(&self) -> &ReservationLedger {
        &self.ledger
    }

    fn check_navigable(&self, ship: &Ship) -> bool {
        if ship.is_navigable() {
            return true;
        }
        debug!(ship = ship.id(), status = ?ship.docking_status, "ship cannot navigate");
        false
    }
}
