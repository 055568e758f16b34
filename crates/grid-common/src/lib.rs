//! Common types shared by the GRIB2 grid crates.

pub mod coord;
pub mod error;
pub mod grid;
pub mod options;

pub use coord::Coordinate;
pub use error::{OptionsError, OptionsResult};
pub use grid::ScanMode;
pub use options::{GridOptions, LadZeroPolicy, LongitudeConvention};
