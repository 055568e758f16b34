//! Grid definition templates (Code Table 3.1).
//!
//! Each template embeds the shared [`EarthGridDefinition`] by value and adds
//! its own projection parameters. [`GridDefinitionTemplate`] is the tagged
//! union the section parser hands back.

pub mod earth;
pub mod latlon;
pub mod polar_stereographic;

pub use earth::EarthGridDefinition;
pub use latlon::{LatLonGridDefinition, RegularLatLon};
pub use polar_stereographic::PolarStereographicGridDefinition;

use crate::error::{Grib2Error, Grib2Result};
use crate::points::{GridLattice, GridPoints};
use crate::reader::BufferedBinaryReader;
use crate::tables::EarthShape;
use grid_common::{GridOptions, ScanMode};
use projection::PolarStereographic;

/// Geometry every grid point template exposes.
pub trait GridGeometry {
    fn earth(&self) -> &EarthGridDefinition;

    fn scan_mode(&self) -> ScanMode;

    fn earth_shape(&self) -> EarthShape {
        self.earth().shape
    }

    fn nx(&self) -> u32 {
        self.earth().nx
    }

    fn ny(&self) -> u32 {
        self.earth().ny
    }

    /// Number of grid points, and of coordinates the grid enumerates.
    fn num_points(&self) -> usize {
        self.earth().num_points()
    }
}

/// A decoded grid definition template.
#[derive(Debug, Clone, PartialEq)]
pub enum GridDefinitionTemplate {
    LatLon(LatLonGridDefinition),
    PolarStereographic(PolarStereographicGridDefinition),
}

impl GridDefinitionTemplate {
    /// Decode template `number` from a reader positioned after the template
    /// number octets.
    pub fn decode(number: u16, reader: &mut BufferedBinaryReader) -> Grib2Result<Self> {
        match number {
            latlon::TEMPLATE_NUMBER => Ok(GridDefinitionTemplate::LatLon(
                LatLonGridDefinition::decode(reader)?,
            )),
            polar_stereographic::TEMPLATE_NUMBER => Ok(GridDefinitionTemplate::PolarStereographic(
                PolarStereographicGridDefinition::decode(reader)?,
            )),
            other => Err(Grib2Error::UnsupportedTemplate(other)),
        }
    }

    pub fn template_number(&self) -> u16 {
        match self {
            GridDefinitionTemplate::LatLon(_) => latlon::TEMPLATE_NUMBER,
            GridDefinitionTemplate::PolarStereographic(_) => polar_stereographic::TEMPLATE_NUMBER,
        }
    }

    /// Coordinates of every grid point in data order, with default options.
    pub fn grid_points(&self) -> Grib2Result<GridPoints<TemplateLattice>> {
        self.grid_points_with(&GridOptions::default())
    }

    /// Coordinates of every grid point in data order.
    pub fn grid_points_with(&self, options: &GridOptions) -> Grib2Result<GridPoints<TemplateLattice>> {
        let lattice = match self {
            GridDefinitionTemplate::LatLon(def) => TemplateLattice::LatLon(def.lattice()),
            GridDefinitionTemplate::PolarStereographic(def) => {
                TemplateLattice::PolarStereographic(def.projection(options)?)
            }
        };
        Ok(GridPoints::new(
            lattice,
            self.scan_mode(),
            self.nx() as usize,
            self.ny() as usize,
            options.longitude,
        ))
    }
}

impl GridGeometry for GridDefinitionTemplate {
    fn earth(&self) -> &EarthGridDefinition {
        match self {
            GridDefinitionTemplate::LatLon(def) => def.earth(),
            GridDefinitionTemplate::PolarStereographic(def) => def.earth(),
        }
    }

    fn scan_mode(&self) -> ScanMode {
        match self {
            GridDefinitionTemplate::LatLon(def) => def.scan_mode(),
            GridDefinitionTemplate::PolarStereographic(def) => def.scan_mode(),
        }
    }
}

/// Lattice of any supported template.
#[derive(Debug, Clone)]
pub enum TemplateLattice {
    LatLon(RegularLatLon),
    PolarStereographic(PolarStereographic),
}

impl GridLattice for TemplateLattice {
    fn lattice_to_geo(&self, i: usize, j: usize) -> (f64, f64) {
        match self {
            TemplateLattice::LatLon(lattice) => lattice.lattice_to_geo(i, j),
            TemplateLattice::PolarStereographic(lattice) => lattice.lattice_to_geo(i, j),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_template() {
        let mut reader = BufferedBinaryReader::new(vec![0u8; 64]);
        match GridDefinitionTemplate::decode(30, &mut reader) {
            Err(Grib2Error::UnsupportedTemplate(30)) => {}
            other => panic!("expected UnsupportedTemplate(30), got {:?}", other),
        }
        // Nothing consumed for an unknown template
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_dispatch_by_number() {
        // All-zero template 3.20: sphere R=6367470, 0 x 0 grid
        let mut reader = BufferedBinaryReader::new(vec![0u8; 51]);
        let template = GridDefinitionTemplate::decode(20, &mut reader).unwrap();
        assert_eq!(template.template_number(), 20);
        assert_eq!(template.earth_shape(), EarthShape::Spherical6367470);
        assert_eq!(template.num_points(), 0);
        assert_eq!(reader.remaining(), 0);

        let mut reader = BufferedBinaryReader::new(vec![0u8; 58]);
        let template = GridDefinitionTemplate::decode(0, &mut reader).unwrap();
        assert_eq!(template.template_number(), 0);
        assert_eq!(reader.remaining(), 0);
    }
}
