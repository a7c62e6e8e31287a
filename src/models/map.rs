use super::body::{Body, Ship};
use super::errors::{NavError, NavResult};
use super::position::Position;

/// The frozen world snapshot for one tick: the rectangular playing field
/// plus every planet and every ship of every player visible at tick start.
/// Navigation never mutates a map; it is the read-only input for one
/// tick's decisions.
#[derive(Debug, Clone)]
pub struct GameMap {
    width: f64,
    height: f64,
    pub planets: Vec<Body>,
    pub ships: Vec<Ship>,
}

impl GameMap {
    /// Create an empty map, validating the dimensions.
    pub fn new(width: f64, height: f64) -> NavResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(NavError::InvalidMapDimensions { width, height });
        }
        Ok(GameMap {
            width,
            height,
            planets: Vec::new(),
            ships: Vec::new(),
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether a predicted position lies inside the playing field.
    /// X spans `[0, width]` inclusive on both ends; Y spans `[0, height)`
    /// half-open. The asymmetry is the engine's convention.
    pub fn in_bounds(&self, position: Position) -> bool {
        0.0 <= position.x
            && position.x <= self.width
            && 0.0 <= position.y
            && position.y < self.height
    }
}
