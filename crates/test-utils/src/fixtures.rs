//! Common test fixtures for GRIB2 grid tests.
//!
//! This module provides template definitions that represent common
//! operational grids.

use crate::generators::{EarthFields, LatLonTemplate, PolarStereographicTemplate};

/// NCEP grid 91: NAM Alaska 2.976 km polar stereographic.
pub fn nam_alaska() -> PolarStereographicTemplate {
    PolarStereographicTemplate {
        earth: EarthFields {
            shape: 6,
            radius_scale_factor: 0,
            radius_scaled_value: 0,
            nx: 1649,
            ny: 1105,
        },
        la1: 40_530_101,
        lo1: 181_429_000,
        resolution_flags: 0x08,
        lad: 60_000_000,
        lov: 210_000_000,
        dx: 2_976_563,
        dy: 2_976_563,
        projection_centre: 0,
        scan_mode: 0x40,
    }
}

/// Coarse 100 km south polar grid over the Southern Ocean and Antarctica.
pub fn antarctic() -> PolarStereographicTemplate {
    PolarStereographicTemplate {
        earth: EarthFields {
            shape: 6,
            radius_scale_factor: 0,
            radius_scaled_value: 0,
            nx: 60,
            ny: 60,
        },
        la1: -45_000_000,
        lo1: 225_000_000,
        resolution_flags: 0x08,
        lad: -60_000_000,
        lov: 0,
        dx: 100_000_000,
        dy: 100_000_000,
        projection_centre: 0x80,
        scan_mode: 0x40,
    }
}

/// GFS 1 degree global grid (NCEP grid 3).
pub fn gfs_1p00() -> LatLonTemplate {
    LatLonTemplate {
        earth: EarthFields {
            shape: 6,
            radius_scale_factor: 0,
            radius_scaled_value: 0,
            nx: 360,
            ny: 181,
        },
        basic_angle: 0,
        subdivisions: 0xFFFF_FFFF,
        la1: 90_000_000,
        lo1: 0,
        resolution_flags: 0x30,
        la2: -90_000_000,
        lo2: 359_000_000,
        di: 1_000_000,
        dj: 1_000_000,
        scan_mode: 0x00,
    }
}
