//! GRIB2 grid definition parsing (WMO FM 92 GRIB Edition 2).
//!
//! Decodes Section 3 grid definition templates and enumerates the
//! geographic coordinate of every grid point, in data order.
//!
//! Supported templates:
//! - 3.0 regular latitude/longitude
//! - 3.20 polar stereographic (spherical earth)

pub mod error;
pub mod points;
pub mod reader;
pub mod sections;
pub mod tables;
pub mod templates;

pub use error::{Grib2Error, Grib2Result};
pub use points::{GridLattice, GridPoints};
pub use reader::BufferedBinaryReader;
pub use sections::{parse_grid_definition, GridDefinitionSection};
pub use tables::{EarthShape, ProjectionCentre};
pub use templates::{
    EarthGridDefinition, GridDefinitionTemplate, GridGeometry, LatLonGridDefinition,
    PolarStereographicGridDefinition,
};
