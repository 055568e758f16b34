//! Earth shape and grid size fields shared by the grid point templates.

use crate::error::{Grib2Error, Grib2Result};
use crate::reader::BufferedBinaryReader;
use crate::tables::EarthShape;

const MISSING_U8: u8 = 0xFF;
const MISSING_U32: u32 = 0xFFFF_FFFF;

/// Leading fields of Templates 3.0 to 3.90 (octets 15-38 of Section 3).
#[derive(Debug, Clone, PartialEq)]
pub struct EarthGridDefinition {
    pub shape: EarthShape,
    /// Scale factor of radius of spherical Earth
    pub radius_scale_factor: u8,
    /// Scaled value of radius of spherical Earth
    pub radius_scaled_value: u32,
    pub major_axis_scale_factor: u8,
    pub major_axis_scaled_value: u32,
    pub minor_axis_scale_factor: u8,
    pub minor_axis_scaled_value: u32,
    /// Number of points along the x axis (Ni / Nx)
    pub nx: u32,
    /// Number of points along the y axis (Nj / Ny)
    pub ny: u32,
}

impl EarthGridDefinition {
    pub fn decode(reader: &mut BufferedBinaryReader) -> Grib2Result<Self> {
        Ok(Self {
            shape: EarthShape::from_code(reader.read_u8()?),
            radius_scale_factor: reader.read_u8()?,
            radius_scaled_value: reader.read_u32()?,
            major_axis_scale_factor: reader.read_u8()?,
            major_axis_scaled_value: reader.read_u32()?,
            minor_axis_scale_factor: reader.read_u8()?,
            minor_axis_scaled_value: reader.read_u32()?,
            nx: reader.read_u32()?,
            ny: reader.read_u32()?,
        })
    }

    /// Total number of grid points.
    pub fn num_points(&self) -> usize {
        self.nx as usize * self.ny as usize
    }

    /// Sphere radius in meters.
    ///
    /// Fixed for the standard spheres; for a producer-specified sphere it is
    /// `scaled_value * 10^-scale_factor`. Oblate shapes have no single
    /// radius.
    pub fn earth_radius(&self) -> Grib2Result<f64> {
        if let Some(radius) = self.shape.fixed_radius() {
            return Ok(radius);
        }
        if self.shape == EarthShape::CustomSpherical
            && self.radius_scale_factor != MISSING_U8
            && self.radius_scaled_value != MISSING_U32
        {
            return Ok(self.radius_scaled_value as f64
                * 10f64.powi(-(self.radius_scale_factor as i32)));
        }
        Err(Grib2Error::MissingEarthRadius(self.shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth(shape: u8, scale: u8, value: u32) -> EarthGridDefinition {
        EarthGridDefinition {
            shape: EarthShape::from_code(shape),
            radius_scale_factor: scale,
            radius_scaled_value: value,
            major_axis_scale_factor: 0,
            major_axis_scaled_value: 0,
            minor_axis_scale_factor: 0,
            minor_axis_scaled_value: 0,
            nx: 10,
            ny: 20,
        }
    }

    #[test]
    fn test_decode_field_order() {
        let mut data = vec![6, 1];
        data.extend_from_slice(&2u32.to_be_bytes());
        data.push(3);
        data.extend_from_slice(&4u32.to_be_bytes());
        data.push(5);
        data.extend_from_slice(&6u32.to_be_bytes());
        data.extend_from_slice(&649u32.to_be_bytes());
        data.extend_from_slice(&553u32.to_be_bytes());

        let mut reader = BufferedBinaryReader::new(data);
        let def = EarthGridDefinition::decode(&mut reader).unwrap();
        assert_eq!(def.shape, EarthShape::Spherical6371229);
        assert_eq!(def.radius_scale_factor, 1);
        assert_eq!(def.radius_scaled_value, 2);
        assert_eq!(def.major_axis_scale_factor, 3);
        assert_eq!(def.major_axis_scaled_value, 4);
        assert_eq!(def.minor_axis_scale_factor, 5);
        assert_eq!(def.minor_axis_scaled_value, 6);
        assert_eq!(def.nx, 649);
        assert_eq!(def.ny, 553);
        assert_eq!(def.num_points(), 649 * 553);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_fixed_radius() {
        assert_eq!(earth(0, 0, 0).earth_radius().unwrap(), 6_367_470.0);
        assert_eq!(earth(6, 0xFF, 0xFFFF_FFFF).earth_radius().unwrap(), 6_371_229.0);
    }

    #[test]
    fn test_custom_radius() {
        // 63712290 * 10^-1 m
        let radius = earth(1, 1, 63_712_290).earth_radius().unwrap();
        assert!((radius - 6_371_229.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_radius() {
        assert!(matches!(
            earth(1, 0xFF, 0xFFFF_FFFF).earth_radius(),
            Err(Grib2Error::MissingEarthRadius(EarthShape::CustomSpherical))
        ));
        assert!(matches!(
            earth(5, 0, 0).earth_radius(),
            Err(Grib2Error::MissingEarthRadius(EarthShape::Wgs84))
        ));
    }
}
