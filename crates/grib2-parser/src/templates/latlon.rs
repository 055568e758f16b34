//! Template 3.0: latitude/longitude (equidistant cylindrical, Plate Carree).
//!
//! Layout after the template number (octets 15-72 of Section 3):
//!
//! ```text
//! 0-23   earth shape, radii, Ni, Nj       (EarthGridDefinition)
//! 24-27  basic angle of the initial production domain
//! 28-31  subdivisions of basic angle
//! 32-35  La1 (signed)   36-39  Lo1
//! 40     resolution and component flags
//! 41-44  La2 (signed)   45-48  Lo2
//! 49-52  Di             53-56  Dj
//! 57     scanning mode
//! ```

use crate::error::Grib2Result;
use crate::points::{GridLattice, GridPoints};
use crate::reader::BufferedBinaryReader;
use crate::templates::{EarthGridDefinition, GridGeometry};
use grid_common::{GridOptions, ScanMode};
use tracing::debug;

/// Grid definition template number.
pub const TEMPLATE_NUMBER: u16 = 0;

const MISSING_U32: u32 = 0xFFFF_FFFF;

/// Decoded Template 3.0. Angles are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct LatLonGridDefinition {
    pub earth: EarthGridDefinition,
    pub basic_angle: u32,
    pub subdivisions: u32,
    pub la1: f64,
    pub lo1: f64,
    pub resolution_flags: u8,
    pub la2: f64,
    pub lo2: f64,
    /// i direction increment, derived from the corners when missing
    pub di: f64,
    /// j direction increment, derived from the corners when missing
    pub dj: f64,
    pub scan_mode_flags: u8,
}

impl LatLonGridDefinition {
    pub fn decode(reader: &mut BufferedBinaryReader) -> Grib2Result<Self> {
        let earth = EarthGridDefinition::decode(reader)?;
        let basic_angle = reader.read_u32()?;
        let subdivisions = reader.read_u32()?;

        // Angles are in units of basic_angle / subdivisions, or 1e-6 degrees
        // when the basic angle is unset
        let unit = if basic_angle == 0
            || basic_angle == MISSING_U32
            || subdivisions == 0
            || subdivisions == MISSING_U32
        {
            1e-6
        } else {
            basic_angle as f64 / subdivisions as f64
        };

        let la1 = reader.read_i32()? as f64 * unit;
        let lo1 = reader.read_u32()? as f64 * unit;
        let resolution_flags = reader.read_u8()?;
        let la2 = reader.read_i32()? as f64 * unit;
        let lo2 = reader.read_u32()? as f64 * unit;
        let di_raw = reader.read_u32()?;
        let dj_raw = reader.read_u32()?;
        let scan_mode_flags = reader.read_u8()?;

        let di = if di_raw == MISSING_U32 {
            span_step(lon_span(lo1, lo2, ScanMode::from_grib2_flag(scan_mode_flags)), earth.nx)
        } else {
            di_raw as f64 * unit
        };
        let dj = if dj_raw == MISSING_U32 {
            span_step((la2 - la1).abs(), earth.ny)
        } else {
            dj_raw as f64 * unit
        };

        debug!(
            template = TEMPLATE_NUMBER,
            nx = earth.nx,
            ny = earth.ny,
            la1,
            lo1,
            la2,
            lo2,
            di,
            dj,
            scan_mode = scan_mode_flags,
            "Decoded lat/lon grid definition"
        );

        Ok(Self {
            earth,
            basic_angle,
            subdivisions,
            la1,
            lo1,
            resolution_flags,
            la2,
            lo2,
            di,
            dj,
            scan_mode_flags,
        })
    }

    /// The regular lattice covered by this grid.
    pub fn lattice(&self) -> RegularLatLon {
        let west = if self.scan_mode().i_negative {
            self.lo2
        } else {
            self.lo1
        };
        RegularLatLon {
            south: self.la1.min(self.la2),
            west,
            di: self.di,
            dj: self.dj,
        }
    }

    /// Coordinates of every grid point in data order, with default options.
    pub fn grid_points(&self) -> Grib2Result<GridPoints<RegularLatLon>> {
        self.grid_points_with(&GridOptions::default())
    }

    /// Coordinates of every grid point in data order.
    pub fn grid_points_with(&self, options: &GridOptions) -> Grib2Result<GridPoints<RegularLatLon>> {
        Ok(GridPoints::new(
            self.lattice(),
            self.scan_mode(),
            self.earth.nx as usize,
            self.earth.ny as usize,
            options.longitude,
        ))
    }
}

impl GridGeometry for LatLonGridDefinition {
    fn earth(&self) -> &EarthGridDefinition {
        &self.earth
    }

    fn scan_mode(&self) -> ScanMode {
        ScanMode::from_grib2_flag(self.scan_mode_flags)
    }
}

/// Eastward longitude distance covered going from the first to the last
/// point in scan direction.
fn lon_span(lo1: f64, lo2: f64, scan_mode: ScanMode) -> f64 {
    let span = if scan_mode.i_negative { lo1 - lo2 } else { lo2 - lo1 };
    span.rem_euclid(360.0)
}

fn span_step(span: f64, n: u32) -> f64 {
    if n > 1 {
        span / (n - 1) as f64
    } else {
        0.0
    }
}

/// Evenly spaced latitude/longitude lattice anchored at its south-west point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularLatLon {
    pub south: f64,
    pub west: f64,
    pub di: f64,
    pub dj: f64,
}

impl GridLattice for RegularLatLon {
    fn lattice_to_geo(&self, i: usize, j: usize) -> (f64, f64) {
        (self.south + j as f64 * self.dj, self.west + i as f64 * self.di)
    }
}
