//! Error types for GRIB2 parsing.

use crate::tables::EarthShape;
use projection::ProjectionError;
use thiserror::Error;

/// Result type for GRIB2 parser operations.
pub type Grib2Result<T> = Result<T, Grib2Error>;

/// Errors that can occur while decoding GRIB2 grid definitions.
#[derive(Error, Debug)]
pub enum Grib2Error {
    #[error("Invalid GRIB2 format: {0}")]
    InvalidFormat(String),

    #[error("Invalid section {section}: {reason}")]
    InvalidSection { section: u8, reason: String },

    #[error("Unexpected end of data at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Grid definition template 3.{0} is not supported")]
    UnsupportedTemplate(u16),

    #[error("Template 3.{template} projection is not implemented for earth shape {shape}")]
    UnsupportedProjection { template: u16, shape: EarthShape },

    #[error("Earth shape {0} does not define a radius")]
    MissingEarthRadius(EarthShape),

    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),
}
