//! Template 3.20: polar stereographic projection.
//!
//! Layout after the template number (octets 15-65 of Section 3):
//!
//! ```text
//! 0-23   earth shape, radii, Nx, Ny       (EarthGridDefinition)
//! 24-27  La1   latitude of first grid point    (signed, 1e-6 deg)
//! 28-31  Lo1   longitude of first grid point   (1e-6 deg)
//! 32     resolution and component flags         (Flag Table 3.3)
//! 33-36  LaD   latitude where Dx and Dy apply  (signed, 1e-6 deg)
//! 37-40  LoV   orientation of the grid         (1e-6 deg)
//! 41-44  Dx    x-direction grid length         (1e-3 m)
//! 45-48  Dy    y-direction grid length         (1e-3 m)
//! 49     projection centre flag                 (Flag Table 3.5)
//! 50     scanning mode                          (Flag Table 3.4)
//! ```

use crate::error::{Grib2Error, Grib2Result};
use crate::points::GridPoints;
use crate::reader::BufferedBinaryReader;
use crate::tables::ProjectionCentre;
use crate::templates::{EarthGridDefinition, GridGeometry};
use grid_common::{GridOptions, ScanMode};
use projection::{scale_factor, Pole, PolarStereographic};
use tracing::debug;

/// Grid definition template number.
pub const TEMPLATE_NUMBER: u16 = 20;

const MICRODEGREES: f64 = 1e-6;
const MILLIMETERS: f64 = 1e-3;

/// Decoded Template 3.20.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarStereographicGridDefinition {
    pub earth: EarthGridDefinition,
    /// Latitude of first grid point (degrees)
    pub la1: f64,
    /// Longitude of first grid point (degrees)
    pub lo1: f64,
    pub resolution_flags: u8,
    /// Latitude where Dx and Dy are specified (degrees)
    pub lad: f64,
    /// Orientation longitude (degrees)
    pub lov: f64,
    /// x-direction grid length (meters)
    pub dx: f64,
    /// y-direction grid length (meters)
    pub dy: f64,
    pub projection_centre: ProjectionCentre,
    /// Raw scanning mode byte
    pub scan_mode_flags: u8,
}

impl PolarStereographicGridDefinition {
    /// Decode the template from a reader positioned just after the
    /// template number.
    pub fn decode(reader: &mut BufferedBinaryReader) -> Grib2Result<Self> {
        let earth = EarthGridDefinition::decode(reader)?;
        let la1 = reader.read_i32()? as f64 * MICRODEGREES;
        let lo1 = reader.read_u32()? as f64 * MICRODEGREES;
        let resolution_flags = reader.read_u8()?;

        let lad = reader.read_i32()? as f64 * MICRODEGREES;
        let lov = reader.read_u32()? as f64 * MICRODEGREES;
        let dx = reader.read_u32()? as f64 * MILLIMETERS;
        let dy = reader.read_u32()? as f64 * MILLIMETERS;
        let projection_centre = ProjectionCentre::from_flags(reader.read_u8()?);
        let scan_mode_flags = reader.read_u8()?;

        debug!(
            template = TEMPLATE_NUMBER,
            shape = %earth.shape,
            nx = earth.nx,
            ny = earth.ny,
            lad,
            lov,
            dx,
            dy,
            projection_centre = projection_centre.flags(),
            scan_mode = scan_mode_flags,
            "Decoded polar stereographic grid definition"
        );

        Ok(Self {
            earth,
            la1,
            lo1,
            resolution_flags,
            lad,
            lov,
            dx,
            dy,
            projection_centre,
            scan_mode_flags,
        })
    }

    pub fn pole(&self) -> Pole {
        self.projection_centre.pole()
    }

    /// Latitude of the projection origin: +90 or -90 degrees.
    pub fn origin_latitude(&self) -> f64 {
        self.pole().origin_latitude()
    }

    /// Scale factor applied to the projection under `options`.
    pub fn scale_factor(&self, options: &GridOptions) -> f64 {
        scale_factor(self.lad, options.lad_zero)
    }

    /// Build the projection for this grid.
    ///
    /// Fails with [`Grib2Error::UnsupportedProjection`] for oblate earth
    /// shapes; only the spherical equations are implemented.
    pub fn projection(&self, options: &GridOptions) -> Grib2Result<PolarStereographic> {
        if !self.earth.shape.is_spherical() {
            return Err(Grib2Error::UnsupportedProjection {
                template: TEMPLATE_NUMBER,
                shape: self.earth.shape,
            });
        }
        let earth_radius = self.earth.earth_radius()?;

        Ok(PolarStereographic::from_grib2(
            self.la1,
            self.lo1,
            self.lov,
            self.pole(),
            self.scale_factor(options),
            self.dx,
            self.dy,
            self.earth.nx as usize,
            self.earth.ny as usize,
            earth_radius,
        )?)
    }

    /// Coordinates of every grid point in data order, with default options.
    ///
    /// The grid is anchored with La1/Lo1 at lattice index `(0, 0)`, i growing
    /// along +x and j along +y. The scanning mode only reorders the points,
    /// so La1/Lo1 is the first value emitted only when the scan starts at
    /// `(0, 0)` (flags `0x40`, `0x60`). With the common `0x00` scan, for
    /// example, La1/Lo1 is the first value of the last row emitted.
    pub fn grid_points(&self) -> Grib2Result<GridPoints<PolarStereographic>> {
        self.grid_points_with(&GridOptions::default())
    }

    /// Coordinates of every grid point in data order.
    ///
    /// All validation happens here, before the first coordinate is produced.
    pub fn grid_points_with(
        &self,
        options: &GridOptions,
    ) -> Grib2Result<GridPoints<PolarStereographic>> {
        let projection = self.projection(options)?;
        Ok(GridPoints::new(
            projection,
            self.scan_mode(),
            self.earth.nx as usize,
            self.earth.ny as usize,
            options.longitude,
        ))
    }
}

impl GridGeometry for PolarStereographicGridDefinition {
    fn earth(&self) -> &EarthGridDefinition {
        &self.earth
    }

    fn scan_mode(&self) -> ScanMode {
        ScanMode::from_grib2_flag(self.scan_mode_flags)
    }
}
