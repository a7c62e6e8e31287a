use super::constants::{DOCK_RADIUS, MAX_SPEED, SHIP_RADIUS};
use super::errors::{NavError, NavResult};
use super::position::Position;
use crate::services::geometry;

/// Identifier of an owning player.
pub type PlayerId = i32;

/// Opaque entity identifier. Unique within a kind (ship ids never collide
/// with other ship ids; planet ids never collide with other planet ids).
pub type EntityId = i32;

/// Docking state of a ship. Only undocked ships accept navigation
/// commands; the other states belong to the engine's docking sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockingStatus {
    Undocked,
    Docking,
    Docked,
    Undocking,
}

/// A circular entity on the map. Planets and ships are bodies alike for
/// collision purposes; a body never moves during one tick's planning.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: EntityId,
    pub position: Position,
    pub radius: f64,
    /// Owning player. Unclaimed planets carry no owner.
    pub owner: Option<PlayerId>,
}

impl Body {
    /// Create a body, validating the radius.
    pub fn new(id: EntityId, position: Position, radius: f64, owner: Option<PlayerId>) -> NavResult<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(NavError::InvalidRadius { radius });
        }
        Ok(Body {
            id,
            position,
            radius,
            owner,
        })
    }
}

/// A player's ship: a body plus the state the planner needs to know about.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub body: Body,
    pub docking_status: DockingStatus,
    /// Maximum thrust magnitude this ship can apply in one tick.
    pub max_thrust: i32,
}

impl Ship {
    /// Create an undocked ship with the standard radius and thrust cap.
    pub fn new(id: EntityId, owner: PlayerId, position: Position) -> Self {
        Ship {
            body: Body {
                id,
                position,
                radius: SHIP_RADIUS,
                owner: Some(owner),
            },
            docking_status: DockingStatus::Undocked,
            max_thrust: MAX_SPEED,
        }
    }

    pub fn id(&self) -> EntityId {
        self.body.id
    }

    pub fn position(&self) -> Position {
        self.body.position
    }

    /// Only undocked ships can be issued movement commands.
    pub fn is_navigable(&self) -> bool {
        self.docking_status == DockingStatus::Undocked
    }

    /// Whether the ship is close enough to `target` to begin docking:
    /// within `DOCK_RADIUS` of the target's surface.
    pub fn can_dock(&self, target: &Body) -> bool {
        geometry::distance(self.position(), target.position) <= DOCK_RADIUS + target.radius
    }
}
