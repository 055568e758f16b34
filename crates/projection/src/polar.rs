//! Polar Stereographic projection (spherical earth).
//!
//! Used by GRIB2 Grid Definition Template 3.20 for high-latitude grids
//! such as the NCEP Alaska and Arctic domains. The projection plane touches
//! (or cuts) the sphere around one pole; grid rows and columns are evenly
//! spaced in the plane.
//!
//! The projection parameters include:
//! - Projection centre: north or south pole
//! - Orientation longitude (LoV): meridian parallel to the y axis
//! - Scale factor k0, derived from LaD
//! - Grid spacing: dx, dy in meters
//! - First grid point: lat1, lon1
//!
//! Formulas follow Snyder, "Map Projections: A Working Manual" (1987),
//! equations 21-5 to 21-17, with `h` = +1 for the north pole and -1 for the
//! south pole:
//!
//! ```text
//! rho = 2 R k0 tan(pi/4 - h*lat/2)
//! x   = rho sin(lon - lov)
//! y   = -h rho cos(lon - lov)
//! ```

use crate::error::{ProjectionError, ProjectionResult};
use grid_common::LadZeroPolicy;
use std::f64::consts::FRAC_PI_2;
use std::f64::consts::FRAC_PI_4;

/// Scale factor used when `LaD` is not set.
///
/// GRIB grid lengths are "in units of meters, at the 60 degree latitude
/// circle nearest to the pole". The polar stereographic scale at latitude
/// phi is `2 k0 / (1 + sin phi)`, which equals one at 60 degrees when
/// `k0 = (1 + sin 60) / 2`.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.9330127018922193;

/// Scale factor for a template's `LaD` (degrees).
///
/// `LaD == 0.0` is treated per `policy`: with [`LadZeroPolicy::UseDefault`]
/// the value is [`DEFAULT_SCALE_FACTOR`]; otherwise, and for every non-zero
/// `LaD`, the result is `1 + sin(|LaD|)`.
pub fn scale_factor(lad_deg: f64, policy: LadZeroPolicy) -> f64 {
    if lad_deg == 0.0 && policy == LadZeroPolicy::UseDefault {
        return DEFAULT_SCALE_FACTOR;
    }
    1.0 + lad_deg.abs().to_radians().sin()
}

/// Pole on the projection plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pole {
    North,
    South,
}

impl Pole {
    /// Latitude of the projection origin in degrees.
    pub fn origin_latitude(&self) -> f64 {
        match self {
            Pole::North => 90.0,
            Pole::South => -90.0,
        }
    }

    fn sign(&self) -> f64 {
        match self {
            Pole::North => 1.0,
            Pole::South => -1.0,
        }
    }
}

/// Polar Stereographic projection parameters.
///
/// These parameters define the projection from grid (i, j) coordinates to
/// geographic (lat/lon) and back. Grid index `(0, 0)` is the first grid
/// point; i grows with x and j grows with y.
#[derive(Debug, Clone)]
pub struct PolarStereographic {
    /// Pole at the centre of the projection
    pub pole: Pole,
    /// Orientation longitude (LoV) in radians
    pub lov: f64,
    /// Scale factor k0
    pub scale: f64,
    /// Sphere radius (meters)
    pub earth_radius: f64,
    /// Grid spacing in X direction (meters)
    pub dx: f64,
    /// Grid spacing in Y direction (meters)
    pub dy: f64,
    /// Number of grid points in X (i) direction
    pub nx: usize,
    /// Number of grid points in Y (j) direction
    pub ny: usize,
    /// Plane x of first grid point
    x0: f64,
    /// Plane y of first grid point
    y0: f64,
}

impl PolarStereographic {
    /// Create a new Polar Stereographic projection from GRIB2 parameters.
    ///
    /// # Arguments
    /// * `lat1_deg` - Latitude of first grid point (degrees)
    /// * `lon1_deg` - Longitude of first grid point (degrees)
    /// * `lov_deg` - Orientation of the grid (degrees)
    /// * `pole` - Projection centre
    /// * `scale` - Scale factor k0 (see [`scale_factor`])
    /// * `dx` - Grid spacing X (meters)
    /// * `dy` - Grid spacing Y (meters)
    /// * `nx` - Number of X grid points
    /// * `ny` - Number of Y grid points
    /// * `earth_radius` - Sphere radius (meters)
    #[allow(clippy::too_many_arguments)]
    pub fn from_grib2(
        lat1_deg: f64,
        lon1_deg: f64,
        lov_deg: f64,
        pole: Pole,
        scale: f64,
        dx: f64,
        dy: f64,
        nx: usize,
        ny: usize,
        earth_radius: f64,
    ) -> ProjectionResult<Self> {
        if !(earth_radius.is_finite() && earth_radius > 0.0) {
            return Err(ProjectionError::InvalidEarthRadius(earth_radius));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ProjectionError::InvalidScaleFactor(scale));
        }
        for (name, value) in [
            ("lat1", lat1_deg),
            ("lon1", lon1_deg),
            ("lov", lov_deg),
            ("dx", dx),
            ("dy", dy),
        ] {
            if !value.is_finite() {
                return Err(ProjectionError::NonFinite { name, value });
            }
        }

        let mut proj = Self {
            pole,
            lov: lov_deg.to_radians(),
            scale,
            earth_radius,
            dx,
            dy,
            nx,
            ny,
            x0: 0.0,
            y0: 0.0,
        };

        // The opposite pole sits at infinity on the plane
        if pole.sign() * lat1_deg <= -90.0 {
            return Err(ProjectionError::FirstPointUnprojectable {
                lat: lat1_deg,
                lon: lon1_deg,
            });
        }
        let (x0, y0) = proj.project(lat1_deg, lon1_deg);
        proj.x0 = x0;
        proj.y0 = y0;

        Ok(proj)
    }

    /// Forward transform: geographic degrees to plane meters.
    ///
    /// The opposite pole maps to infinity.
    pub fn project(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let h = self.pole.sign();
        let lat = lat_deg.to_radians();
        let dlon = lon_deg.to_radians() - self.lov;

        let rho = 2.0 * self.earth_radius * self.scale * (FRAC_PI_4 - h * lat / 2.0).tan();

        (rho * dlon.sin(), -h * rho * dlon.cos())
    }

    /// Inverse transform: plane meters to geographic degrees.
    ///
    /// Longitude is returned unnormalised; it lies within 180 degrees of LoV.
    pub fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let h = self.pole.sign();
        let rho = x.hypot(y);
        if rho == 0.0 {
            return (self.pole.origin_latitude(), self.lov.to_degrees());
        }

        let c = 2.0 * (rho / (2.0 * self.earth_radius * self.scale)).atan();
        let lat = h * (FRAC_PI_2 - c);
        let lon = self.lov + x.atan2(-h * y);

        (lat.to_degrees(), lon.to_degrees())
    }

    /// Convert grid indices (i, j) to geographic coordinates (lat/lon in degrees).
    pub fn grid_to_geo(&self, i: f64, j: f64) -> (f64, f64) {
        self.unproject(self.x0 + i * self.dx, self.y0 + j * self.dy)
    }

    /// Convert geographic coordinates (lat/lon in degrees) to grid indices (i, j).
    ///
    /// The indices may be fractional for interpolation purposes. Degenerate
    /// spacing (zero dx or dy) yields non-finite indices.
    pub fn geo_to_grid(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let (x, y) = self.project(lat_deg, lon_deg);
        ((x - self.x0) / self.dx, (y - self.y0) / self.dy)
    }

    /// Check if a geographic point is within the grid.
    pub fn contains(&self, lat_deg: f64, lon_deg: f64) -> bool {
        let (i, j) = self.geo_to_grid(lat_deg, lon_deg);
        i >= 0.0 && i <= (self.nx as f64 - 1.0) && j >= 0.0 && j <= (self.ny as f64 - 1.0)
    }

    /// Get grid dimensions.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }
}
