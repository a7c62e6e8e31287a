use thiserror::Error;

/// Construction-time validation errors.
///
/// Planning itself never returns an error: an unreachable target is
/// reported through a failed [`Plan`](crate::models::command::Plan), not a
/// fault.
#[derive(Debug, Error)]
pub enum NavError {
    /// Map dimensions must be positive, finite numbers.
    #[error("map dimensions must be positive and finite, got {width} x {height}")]
    InvalidMapDimensions { width: f64, height: f64 },
    /// Body radii must be non-negative, finite numbers.
    #[error("body radius must be non-negative and finite, got {radius}")]
    InvalidRadius { radius: f64 },
}

/// Type alias for Results using NavError
pub type NavResult<T> = Result<T, NavError>;
