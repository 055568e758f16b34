//! Byte generators for GRIB2 grid definition test data.
//!
//! Field values are taken in their raw wire units (microdegrees,
//! millimeters) so tests can assert on exact bit patterns.

use bytes::{BufMut, Bytes, BytesMut};

/// Encode an integer as a GRIB2 4-octet sign-and-magnitude value.
///
/// # Example
///
/// ```
/// use test_utils::encode_grib2_signed;
///
/// assert_eq!(encode_grib2_signed(1), 0x0000_0001);
/// assert_eq!(encode_grib2_signed(-1), 0x8000_0001);
/// ```
pub fn encode_grib2_signed(value: i32) -> u32 {
    let magnitude = value.unsigned_abs() & 0x7FFF_FFFF;
    if value < 0 {
        magnitude | 0x8000_0000
    } else {
        magnitude
    }
}

/// Earth shape and grid size octets shared by Templates 3.0 and 3.20.
#[derive(Debug, Clone, Copy)]
pub struct EarthFields {
    pub shape: u8,
    pub radius_scale_factor: u8,
    pub radius_scaled_value: u32,
    pub nx: u32,
    pub ny: u32,
}

impl Default for EarthFields {
    /// Sphere with radius 6 371 229 m, 10 x 10 points.
    fn default() -> Self {
        Self {
            shape: 6,
            radius_scale_factor: 0,
            radius_scaled_value: 0,
            nx: 10,
            ny: 10,
        }
    }
}

impl EarthFields {
    fn put(&self, buf: &mut BytesMut) {
        buf.put_u8(self.shape);
        buf.put_u8(self.radius_scale_factor);
        buf.put_u32(self.radius_scaled_value);
        // Oblate spheroid axes are unused by the sphere shapes
        buf.put_u8(0);
        buf.put_u32(0);
        buf.put_u8(0);
        buf.put_u32(0);
        buf.put_u32(self.nx);
        buf.put_u32(self.ny);
    }
}

/// Template 3.20 (polar stereographic) body, in wire units.
#[derive(Debug, Clone, Copy)]
pub struct PolarStereographicTemplate {
    pub earth: EarthFields,
    /// Latitude of first grid point, microdegrees
    pub la1: i32,
    /// Longitude of first grid point, microdegrees
    pub lo1: u32,
    pub resolution_flags: u8,
    /// LaD, microdegrees
    pub lad: i32,
    /// LoV, microdegrees
    pub lov: u32,
    /// Dx, millimeters
    pub dx: u32,
    /// Dy, millimeters
    pub dy: u32,
    pub projection_centre: u8,
    pub scan_mode: u8,
}

impl Default for PolarStereographicTemplate {
    /// 10 x 10 north polar grid, first point 60N 100E, LaD 45, LoV 100E,
    /// 50 m spacing, scanning +i +j.
    fn default() -> Self {
        Self {
            earth: EarthFields::default(),
            la1: 60_000_000,
            lo1: 100_000_000,
            resolution_flags: 0x08,
            lad: 45_000_000,
            lov: 100_000_000,
            dx: 50_000,
            dy: 50_000,
            projection_centre: 0,
            scan_mode: 0x40,
        }
    }
}

impl PolarStereographicTemplate {
    /// Octets following the template number.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(51);
        self.earth.put(&mut buf);
        buf.put_u32(encode_grib2_signed(self.la1));
        buf.put_u32(self.lo1);
        buf.put_u8(self.resolution_flags);
        buf.put_slice(&self.projection_block());
        buf.freeze()
    }

    /// The 18 octets from LaD through the scanning mode.
    pub fn projection_block(&self) -> [u8; 18] {
        let mut block = [0u8; 18];
        block[0..4].copy_from_slice(&encode_grib2_signed(self.lad).to_be_bytes());
        block[4..8].copy_from_slice(&self.lov.to_be_bytes());
        block[8..12].copy_from_slice(&self.dx.to_be_bytes());
        block[12..16].copy_from_slice(&self.dy.to_be_bytes());
        block[16] = self.projection_centre;
        block[17] = self.scan_mode;
        block
    }
}

/// Template 3.0 (latitude/longitude) body, in wire units.
#[derive(Debug, Clone, Copy)]
pub struct LatLonTemplate {
    pub earth: EarthFields,
    pub basic_angle: u32,
    pub subdivisions: u32,
    /// Microdegrees when the basic angle is zero
    pub la1: i32,
    pub lo1: u32,
    pub resolution_flags: u8,
    pub la2: i32,
    pub lo2: u32,
    pub di: u32,
    pub dj: u32,
    pub scan_mode: u8,
}

impl Default for LatLonTemplate {
    /// 1 degree, 10 x 10 grid from 50N 0E to 41N 9E, scanning north to south.
    fn default() -> Self {
        Self {
            earth: EarthFields::default(),
            basic_angle: 0,
            subdivisions: 0xFFFF_FFFF,
            la1: 50_000_000,
            lo1: 0,
            resolution_flags: 0x30,
            la2: 41_000_000,
            lo2: 9_000_000,
            di: 1_000_000,
            dj: 1_000_000,
            scan_mode: 0x00,
        }
    }
}

impl LatLonTemplate {
    /// Octets following the template number.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(58);
        self.earth.put(&mut buf);
        buf.put_u32(self.basic_angle);
        buf.put_u32(self.subdivisions);
        buf.put_u32(encode_grib2_signed(self.la1));
        buf.put_u32(self.lo1);
        buf.put_u8(self.resolution_flags);
        buf.put_u32(encode_grib2_signed(self.la2));
        buf.put_u32(self.lo2);
        buf.put_u32(self.di);
        buf.put_u32(self.dj);
        buf.put_u8(self.scan_mode);
        buf.freeze()
    }
}

/// Build a minimal GRIB2 message: Section 0, a blank Section 1, Section 3
/// wrapping `template`, and the end section.
pub fn grib2_message(template_number: u16, template: &[u8], num_data_points: u32) -> Bytes {
    let section1_len = 21usize;
    let section3_len = 14 + template.len();
    let total = 16 + section1_len + section3_len + 4;

    let mut buf = BytesMut::with_capacity(total);

    // Section 0
    buf.put_slice(b"GRIB");
    buf.put_u16(0);
    buf.put_u8(0); // discipline: meteorological
    buf.put_u8(2); // edition
    buf.put_u64(total as u64);

    // Section 1
    buf.put_u32(section1_len as u32);
    buf.put_u8(1);
    buf.put_bytes(0, section1_len - 5);

    // Section 3
    buf.put_u32(section3_len as u32);
    buf.put_u8(3);
    buf.put_u8(0); // source: Code Table 3.1
    buf.put_u32(num_data_points);
    buf.put_u8(0);
    buf.put_u8(0);
    buf.put_u16(template_number);
    buf.put_slice(template);

    // Section 8
    buf.put_slice(b"7777");

    buf.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_signed() {
        assert_eq!(encode_grib2_signed(0), 0);
        assert_eq!(encode_grib2_signed(45_000_000), 45_000_000);
        assert_eq!(encode_grib2_signed(-90_000_000), 90_000_000 | 0x8000_0000);
    }

    #[test]
    fn test_template_lengths() {
        assert_eq!(PolarStereographicTemplate::default().to_bytes().len(), 51);
        assert_eq!(LatLonTemplate::default().to_bytes().len(), 58);
    }

    #[test]
    fn test_projection_block_layout() {
        let block = PolarStereographicTemplate::default().projection_block();
        assert_eq!(&block[0..4], &45_000_000u32.to_be_bytes());
        assert_eq!(&block[4..8], &100_000_000u32.to_be_bytes());
        assert_eq!(&block[8..12], &50_000u32.to_be_bytes());
        assert_eq!(&block[12..16], &50_000u32.to_be_bytes());
        assert_eq!(block[16], 0);
        assert_eq!(block[17], 0x40);
    }

    #[test]
    fn test_message_layout() {
        let template = PolarStereographicTemplate::default().to_bytes();
        let msg = grib2_message(20, &template, 100);

        assert_eq!(&msg[0..4], b"GRIB");
        assert_eq!(msg[7], 2);
        assert_eq!(u64::from_be_bytes(msg[8..16].try_into().unwrap()), msg.len() as u64);
        assert_eq!(msg[16 + 4], 1);
        assert_eq!(msg[37 + 4], 3);
        assert_eq!(&msg[msg.len() - 4..], b"7777");
    }
}
