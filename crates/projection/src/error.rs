//! Error types for projection setup.

use thiserror::Error;

/// Result type for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors raised while building a projection from grid parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Earth radius must be positive and finite, got {0}")]
    InvalidEarthRadius(f64),

    #[error("Scale factor must be positive and finite, got {0}")]
    InvalidScaleFactor(f64),

    #[error("Parameter '{name}' is not finite: {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("First grid point ({lat}, {lon}) has no image in the projection plane")]
    FirstPointUnprojectable { lat: f64, lon: f64 },
}
