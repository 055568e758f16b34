//! Common test utilities for grib2-parser tests
//!
//! Provides helpers for:
//! - Decoding templates built with `test_utils`
//! - Turning on log output while debugging a test

#![allow(dead_code)]

use grib2_parser::{BufferedBinaryReader, PolarStereographicGridDefinition};
use test_utils::PolarStereographicTemplate;

/// Decode a template 3.20 body built by `test_utils`.
pub fn decode_polar(template: &PolarStereographicTemplate) -> PolarStereographicGridDefinition {
    let mut reader = BufferedBinaryReader::new(template.to_bytes());
    let def = PolarStereographicGridDefinition::decode(&mut reader)
        .expect("Failed to decode template 3.20");
    assert_eq!(reader.remaining(), 0, "template 3.20 left trailing octets");
    def
}

/// Send `tracing` output to the test harness. Set RUST_LOG=debug to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
