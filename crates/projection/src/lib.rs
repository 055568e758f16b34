//! Coordinate reference system transformations.
//!
//! Implements map projections from scratch without external dependencies.

pub mod error;
pub mod polar;

pub use error::{ProjectionError, ProjectionResult};
pub use polar::{scale_factor, Pole, PolarStereographic, DEFAULT_SCALE_FACTOR};
