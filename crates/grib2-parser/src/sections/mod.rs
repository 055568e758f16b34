//! GRIB2 section parsing.
//!
//! Locates sections inside a single GRIB2 message and decodes Section 3
//! (Grid Definition) into a [`GridDefinitionTemplate`].

use crate::error::{Grib2Error, Grib2Result};
use crate::reader::BufferedBinaryReader;
use crate::templates::{GridDefinitionTemplate, GridGeometry};
use bytes::Bytes;
use tracing::{debug, warn};

/// Section 0 is always 16 octets.
const INDICATOR_LENGTH: usize = 16;

/// Section 0: Indicator Section (16 bytes)
#[derive(Debug, Clone)]
pub struct Indicator {
    pub magic: [u8; 4],
    pub reserved: u16,
    pub discipline: u8,
    pub edition: u8,
    pub message_length: u64,
}

/// Section 3: Grid Definition Section
#[derive(Debug, Clone)]
pub struct GridDefinitionSection {
    /// Source of grid definition (Code Table 3.0)
    pub source: u8,
    pub num_data_points: u32,
    /// Octets for optional list of numbers defining number of points
    pub optional_list_octets: u8,
    /// Interpretation of list of numbers (Code Table 3.11)
    pub optional_list_interpretation: u8,
    pub template_number: u16,
    pub template: GridDefinitionTemplate,
}

// ===== Parsing Functions =====

/// Parse Section 0 (Indicator) from start of message
pub fn parse_indicator(data: &[u8]) -> Grib2Result<Indicator> {
    if data.len() < INDICATOR_LENGTH {
        return Err(Grib2Error::InvalidFormat(
            "Not enough data for indicator section".to_string(),
        ));
    }

    if &data[0..4] != b"GRIB" {
        return Err(Grib2Error::InvalidFormat(
            "Invalid GRIB magic bytes".to_string(),
        ));
    }

    // Octets 1-4: "GRIB"
    // Octets 5-6: Reserved
    // Octet 7: Discipline
    // Octet 8: GRIB Edition Number
    // Octets 9-16: Total length of GRIB message
    let mut reader = BufferedBinaryReader::new(Bytes::copy_from_slice(&data[4..INDICATOR_LENGTH]));
    let reserved = reader.read_u16()?;
    let discipline = reader.read_u8()?;
    let edition = reader.read_u8()?;
    let message_length = reader.read_u64()?;

    if edition != 2 {
        return Err(Grib2Error::InvalidFormat(format!(
            "Expected GRIB edition 2, got {}",
            edition
        )));
    }

    Ok(Indicator {
        magic: [data[0], data[1], data[2], data[3]],
        reserved,
        discipline,
        edition,
        message_length,
    })
}

/// Parse Section 3 (Grid Definition) of a message.
pub fn parse_grid_definition(data: &[u8]) -> Grib2Result<GridDefinitionSection> {
    parse_indicator(data)?;
    let offset = find_section(data, 3)?;
    let length = section_length(data, offset);

    let mut reader = BufferedBinaryReader::new(Bytes::copy_from_slice(&data[offset..offset + length]));

    // Octets 1-4: Section length
    // Octet 5: Section number (3)
    // Octet 6: Source of grid definition
    // Octets 7-10: Number of data points
    // Octet 11: Number of octets for optional list
    // Octet 12: Interpretation of optional list
    // Octets 13-14: Grid definition template number
    // Octets 15+: Template
    reader.skip(5)?;
    let source = reader.read_u8()?;
    let num_data_points = reader.read_u32()?;
    let optional_list_octets = reader.read_u8()?;
    let optional_list_interpretation = reader.read_u8()?;
    let template_number = reader.read_u16()?;

    let template = GridDefinitionTemplate::decode(template_number, &mut reader)?;

    if template.num_points() != num_data_points as usize {
        warn!(
            template = template_number,
            declared = num_data_points,
            nx = template.nx(),
            ny = template.ny(),
            "Section 3 point count does not match grid dimensions"
        );
    }
    debug!(
        template = template_number,
        num_data_points,
        trailing = reader.remaining(),
        "Parsed grid definition section"
    );

    Ok(GridDefinitionSection {
        source,
        num_data_points,
        optional_list_octets,
        optional_list_interpretation,
        template_number,
        template,
    })
}

// ===== Helper Functions =====

fn section_length(data: &[u8], offset: usize) -> usize {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]) as usize
}

/// Find a section by number within a message.
///
/// Returns the offset of the section's first octet.
pub fn find_section(data: &[u8], section_num: u8) -> Grib2Result<usize> {
    let mut offset = INDICATOR_LENGTH;

    loop {
        // End section is the literal "7777"
        if data.len() >= offset + 4 && &data[offset..offset + 4] == b"7777" {
            return Err(Grib2Error::InvalidSection {
                section: section_num,
                reason: "Reached end of message without finding section".to_string(),
            });
        }

        if offset + 5 > data.len() {
            return Err(Grib2Error::InvalidSection {
                section: section_num,
                reason: "Section not found".to_string(),
            });
        }

        let length = section_length(data, offset);
        if length < 5 || offset + length > data.len() {
            return Err(Grib2Error::InvalidSection {
                section: section_num,
                reason: "Invalid section length".to_string(),
            });
        }

        if data[offset + 4] == section_num {
            return Ok(offset);
        }

        offset += length;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(edition: u8, length: u64) -> Vec<u8> {
        let mut data = b"GRIB".to_vec();
        data.extend_from_slice(&[0, 0, 0, edition]);
        data.extend_from_slice(&length.to_be_bytes());
        data
    }

    #[test]
    fn test_parse_indicator() {
        let ind = parse_indicator(&indicator(2, 1234)).unwrap();
        assert_eq!(&ind.magic, b"GRIB");
        assert_eq!(ind.edition, 2);
        assert_eq!(ind.discipline, 0);
        assert_eq!(ind.message_length, 1234);
    }

    #[test]
    fn test_parse_indicator_rejects_bad_input() {
        assert!(matches!(
            parse_indicator(b"GRIB"),
            Err(Grib2Error::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_indicator(&indicator(1, 100)),
            Err(Grib2Error::InvalidFormat(_))
        ));

        let mut data = indicator(2, 100);
        data[0] = b'X';
        assert!(matches!(parse_indicator(&data), Err(Grib2Error::InvalidFormat(_))));
    }

    #[test]
    fn test_find_section() {
        let mut data = indicator(2, 0);
        // Section 1 with 21 octets, then a 6 octet section 3, then end
        data.extend_from_slice(&21u32.to_be_bytes());
        data.push(1);
        data.extend_from_slice(&[0; 16]);
        data.extend_from_slice(&6u32.to_be_bytes());
        data.push(3);
        data.push(0);
        data.extend_from_slice(b"7777");

        assert_eq!(find_section(&data, 1).unwrap(), 16);
        assert_eq!(find_section(&data, 3).unwrap(), 37);
        assert!(matches!(
            find_section(&data, 4),
            Err(Grib2Error::InvalidSection { section: 4, .. })
        ));
    }

    #[test]
    fn test_find_section_bad_length() {
        let mut data = indicator(2, 0);
        data.extend_from_slice(&1000u32.to_be_bytes());
        data.push(1);
        assert!(matches!(
            find_section(&data, 3),
            Err(Grib2Error::InvalidSection { section: 3, .. })
        ));
    }
}
