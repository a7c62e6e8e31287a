//! Fleet Navigation Core
//!
//! Per-tick thrust-and-bearing planning for circular ships on a bounded
//! 2D map. Each planning call turns a ship and a target into a single
//! bounded command, steering around planets, other ships, the map edge,
//! and destinations already claimed by the same player's fleet this tick.
//!
//! # Overview
//!
//! The decision layer (whatever chooses *what* each ship should do)
//! creates one [`TickPlanner`] per tick against a frozen map snapshot and
//! asks it for a [`Plan`] per ship, in a fixed order. Ships planned
//! earlier get priority over contested destinations; a plan that cannot
//! find a clear course within the correction budget comes back as a
//! failed no-op, never an error.
//!
//! # Modules
//!
//! - [`models`] - Domain models (positions, bodies, the map snapshot, commands)
//! - [`services`] - Geometry, collision testing, and the course-correction search
//! - [`planner`] - The tick-level orchestrator owning the reservation ledger
//!
//! # Example
//!
//! ```rust
//! use helmsman::models::body::Ship;
//! use helmsman::models::map::GameMap;
//! use helmsman::models::position::Position;
//! use helmsman::TickPlanner;
//!
//! let mut map = GameMap::new(240.0, 160.0).unwrap();
//! map.ships.push(Ship::new(0, 1, Position::new(10.0, 80.0)));
//!
//! let ship = map.ships[0].clone();
//! let mut planner = TickPlanner::new(&map);
//! let plan = planner.plan_to_point(&ship, Position::new(50.0, 80.0));
//! assert!(plan.success);
//! ```

pub mod models;
pub mod planner;
pub mod services;

// Re-export commonly used types
pub use models::command::{Command, Plan};
pub use planner::TickPlanner;
