//! GRIB2 code and flag tables used by grid definition templates.

use projection::Pole;
use std::fmt;

/// Shape of the Earth (Code Table 3.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthShape {
    /// 0: Sphere with radius 6 367 470 m
    Spherical6367470,
    /// 1: Sphere with radius specified by data producer
    CustomSpherical,
    /// 2: Oblate spheroid, IAU 1965
    Iau1965,
    /// 3: Oblate spheroid, axes specified by data producer in km
    CustomOblateKm,
    /// 4: Oblate spheroid, IAG-GRS80
    Grs80,
    /// 5: WGS84
    Wgs84,
    /// 6: Sphere with radius 6 371 229 m
    Spherical6371229,
    /// 7: Oblate spheroid, axes specified by data producer in m
    CustomOblate,
    /// 8: Sphere with radius 6 371 200 m, WGS84 datum
    Spherical6371200,
    /// 9: OSGB 1936 Datum, Airy 1830 spheroid
    Osgb1936,
    /// Reserved, local use or missing
    Other(u8),
}

impl EarthShape {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => EarthShape::Spherical6367470,
            1 => EarthShape::CustomSpherical,
            2 => EarthShape::Iau1965,
            3 => EarthShape::CustomOblateKm,
            4 => EarthShape::Grs80,
            5 => EarthShape::Wgs84,
            6 => EarthShape::Spherical6371229,
            7 => EarthShape::CustomOblate,
            8 => EarthShape::Spherical6371200,
            9 => EarthShape::Osgb1936,
            other => EarthShape::Other(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            EarthShape::Spherical6367470 => 0,
            EarthShape::CustomSpherical => 1,
            EarthShape::Iau1965 => 2,
            EarthShape::CustomOblateKm => 3,
            EarthShape::Grs80 => 4,
            EarthShape::Wgs84 => 5,
            EarthShape::Spherical6371229 => 6,
            EarthShape::CustomOblate => 7,
            EarthShape::Spherical6371200 => 8,
            EarthShape::Osgb1936 => 9,
            EarthShape::Other(code) => *code,
        }
    }

    /// True for the sphere models. Reserved and local codes are never spherical.
    pub fn is_spherical(&self) -> bool {
        matches!(
            self,
            EarthShape::Spherical6367470
                | EarthShape::CustomSpherical
                | EarthShape::Spherical6371229
                | EarthShape::Spherical6371200
        )
    }

    /// Radius in meters for the spheres with a fixed radius.
    ///
    /// `CustomSpherical` carries its radius in the template instead.
    pub fn fixed_radius(&self) -> Option<f64> {
        match self {
            EarthShape::Spherical6367470 => Some(6_367_470.0),
            EarthShape::Spherical6371229 => Some(6_371_229.0),
            EarthShape::Spherical6371200 => Some(6_371_200.0),
            _ => None,
        }
    }
}

impl fmt::Display for EarthShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EarthShape::Spherical6367470 => "sphere R=6367470m",
            EarthShape::CustomSpherical => "sphere with producer radius",
            EarthShape::Iau1965 => "IAU 1965 spheroid",
            EarthShape::CustomOblateKm => "oblate spheroid (km)",
            EarthShape::Grs80 => "IAG-GRS80",
            EarthShape::Wgs84 => "WGS84",
            EarthShape::Spherical6371229 => "sphere R=6371229m",
            EarthShape::CustomOblate => "oblate spheroid (m)",
            EarthShape::Spherical6371200 => "sphere R=6371200m",
            EarthShape::Osgb1936 => "OSGB 1936",
            EarthShape::Other(_) => "reserved",
        };
        write!(f, "{} ({})", self.code(), name)
    }
}

/// Projection centre flag (Flag Table 3.5).
///
/// A value of zero puts the north pole on the projection plane. Any other
/// value selects the south pole: bit 1 (0x80) is the standard south flag,
/// and encoders that write the field as a bare boolean or set only bit 2
/// (0x40, bipolar) are read the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionCentre(u8);

impl ProjectionCentre {
    pub const SOUTH_POLE: u8 = 0x80;
    pub const BIPOLAR: u8 = 0x40;

    pub fn from_flags(flags: u8) -> Self {
        Self(flags)
    }

    pub fn flags(&self) -> u8 {
        self.0
    }

    pub fn pole(&self) -> Pole {
        if self.0 != 0 {
            Pole::South
        } else {
            Pole::North
        }
    }

    pub fn is_bipolar(&self) -> bool {
        self.0 & Self::BIPOLAR != 0
    }
}
