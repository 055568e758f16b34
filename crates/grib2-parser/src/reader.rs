//! Sequential big-endian reader over a GRIB2 message buffer.
//!
//! GRIB2 stores every multi-octet integer big-endian. Signed integers use
//! sign-and-magnitude: the most significant bit is the sign and the
//! remaining bits are the absolute value. This is NOT two's complement.

use crate::error::{Grib2Error, Grib2Result};
use bytes::{Buf, Bytes};

fn sign_magnitude_32(raw: u32) -> i32 {
    let magnitude = (raw & 0x7FFF_FFFF) as i32;
    if raw & 0x8000_0000 != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Positioned reader over an owned message buffer.
///
/// Every read either consumes exactly the requested octets or fails with
/// [`Grib2Error::UnexpectedEof`] without consuming anything.
#[derive(Debug, Clone)]
pub struct BufferedBinaryReader {
    buf: Bytes,
    len: usize,
}

impl BufferedBinaryReader {
    pub fn new(data: impl Into<Bytes>) -> Self {
        let buf = data.into();
        let len = buf.len();
        Self { buf, len }
    }

    /// Offset of the next octet, from the start of the buffer.
    pub fn position(&self) -> usize {
        self.len - self.buf.remaining()
    }

    /// Octets left to read.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn ensure(&self, needed: usize) -> Grib2Result<()> {
        if self.buf.remaining() < needed {
            return Err(Grib2Error::UnexpectedEof {
                offset: self.position(),
                needed,
                available: self.buf.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Grib2Result<u8> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn read_u16(&mut self) -> Grib2Result<u16> {
        self.ensure(2)?;
        Ok(self.buf.get_u16())
    }

    pub fn read_u32(&mut self) -> Grib2Result<u32> {
        self.ensure(4)?;
        Ok(self.buf.get_u32())
    }

    pub fn read_u64(&mut self) -> Grib2Result<u64> {
        self.ensure(8)?;
        Ok(self.buf.get_u64())
    }

    /// Read a 4-octet sign-and-magnitude integer.
    pub fn read_i32(&mut self) -> Grib2Result<i32> {
        Ok(sign_magnitude_32(self.read_u32()?))
    }

    /// Skip `n` octets.
    pub fn skip(&mut self, n: usize) -> Grib2Result<()> {
        self.ensure(n)?;
        self.buf.advance(n);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_are_big_endian() {
        let mut reader = BufferedBinaryReader::new(vec![
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0xFF,
        ]);
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
        assert_eq!(reader.read_u32().unwrap(), 0x0304_0506);
        assert_eq!(reader.read_u8().unwrap(), 0x07);
        assert_eq!(reader.position(), 7);
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.read_u8().unwrap(), 0xFF);
    }

    #[test]
    fn test_short_read_fails_without_consuming() {
        let mut reader = BufferedBinaryReader::new(vec![0x00, 0x01, 0x02]);
        reader.skip(1).unwrap();

        match reader.read_u32() {
            Err(Grib2Error::UnexpectedEof {
                offset,
                needed,
                available,
            }) => {
                assert_eq!(offset, 1);
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            other => panic!("expected UnexpectedEof, got {:?}", other),
        }

        // Position unchanged after the failed read
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
        assert!(reader.read_u8().is_err());
    }

    #[test]
    fn test_signed_reads_use_sign_magnitude() {
        let mut reader = BufferedBinaryReader::new(vec![
            0x00, 0x00, 0x03, 0xE8, // 1000
            0x80, 0x00, 0x03, 0xE8, // -1000
            0x80, 0x00, 0x00, 0x01, // -1
            0x02, 0xAE, 0xA5, 0x40, // 45_000_000
        ]);
        assert_eq!(reader.read_i32().unwrap(), 1000);
        assert_eq!(reader.read_i32().unwrap(), -1000);
        assert_eq!(reader.read_i32().unwrap(), -1);
        assert_eq!(reader.read_i32().unwrap(), 45_000_000);
    }

    #[test]
    fn test_signed_read_edge_cases() {
        let south_pole = (90_000_000_u32 | 0x8000_0000).to_be_bytes();
        let cases: [([u8; 4], i32); 5] = [
            ([0x7F, 0xFF, 0xFF, 0xFF], i32::MAX),
            // Negative zero
            ([0x80, 0x00, 0x00, 0x00], 0),
            // Two's complement -1 is a large negative in sign-magnitude
            ([0xFF, 0xFF, 0xFF, 0xFF], -2_147_483_647),
            ([0x00, 0x00, 0x00, 0x00], 0),
            (south_pole, -90_000_000),
        ];
        for (raw, expected) in cases {
            let mut reader = BufferedBinaryReader::new(raw.to_vec());
            assert_eq!(reader.read_i32().unwrap(), expected, "raw {:02X?}", raw);
        }
    }

    #[test]
    fn test_short_signed_read() {
        let mut reader = BufferedBinaryReader::new(vec![0x80, 0x00]);
        assert!(matches!(
            reader.read_i32(),
            Err(Grib2Error::UnexpectedEof { needed: 4, available: 2, .. })
        ));
        assert_eq!(reader.position(), 0);
    }
}
