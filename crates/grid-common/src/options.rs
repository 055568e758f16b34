//! Options controlling grid point generation.
//!
//! Options are plain serde structs so they can live in the same YAML files
//! as the rest of a model configuration:
//!
//! ```yaml
//! lad_zero: use_default
//! longitude: positive360
//! ```

use crate::error::OptionsResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a polar stereographic `LaD` of exactly zero is interpreted.
///
/// GRIB2 has no "missing" marker for `LaD`, and encoders that leave the
/// field blank write zero. A zero is therefore ambiguous between
/// "true scale at the equator" and "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LadZeroPolicy {
    /// Zero means "not set": use the 60 degree default scale factor.
    #[default]
    UseDefault,
    /// Zero is a real latitude: apply the sine formula at the equator.
    Literal,
}

/// Range that generated longitudes are normalised into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongitudeConvention {
    /// (-180, 180]
    #[default]
    Signed180,
    /// [0, 360)
    Positive360,
}

impl LongitudeConvention {
    /// Normalise a longitude in degrees into this convention's range.
    pub fn normalize(&self, lon: f64) -> f64 {
        match self {
            LongitudeConvention::Signed180 => {
                let wrapped = lon.rem_euclid(360.0);
                if wrapped > 180.0 {
                    wrapped - 360.0
                } else {
                    wrapped
                }
            }
            LongitudeConvention::Positive360 => {
                let wrapped = lon.rem_euclid(360.0);
                // rem_euclid can round up to exactly 360.0 for tiny negatives
                if wrapped >= 360.0 {
                    0.0
                } else {
                    wrapped
                }
            }
        }
    }
}

/// Grid point generation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub lad_zero: LadZeroPolicy,
    pub longitude: LongitudeConvention,
}

impl GridOptions {
    /// Parse options from a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> OptionsResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load options from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> OptionsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GridOptions::default();
        assert_eq!(options.lad_zero, LadZeroPolicy::UseDefault);
        assert_eq!(options.longitude, LongitudeConvention::Signed180);
    }

    #[test]
    fn test_from_yaml() {
        let options = GridOptions::from_yaml_str("lad_zero: literal\nlongitude: positive360\n").unwrap();
        assert_eq!(options.lad_zero, LadZeroPolicy::Literal);
        assert_eq!(options.longitude, LongitudeConvention::Positive360);
    }

    #[test]
    fn test_from_yaml_partial() {
        let options = GridOptions::from_yaml_str("longitude: positive360").unwrap();
        assert_eq!(options.lad_zero, LadZeroPolicy::UseDefault);
        assert_eq!(options.longitude, LongitudeConvention::Positive360);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_policy() {
        assert!(GridOptions::from_yaml_str("lad_zero: sometimes").is_err());
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("grid-options-{}.yaml", std::process::id()));
        std::fs::write(&path, "lad_zero: literal\n").unwrap();
        let options = GridOptions::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(options.lad_zero, LadZeroPolicy::Literal);
        assert_eq!(options.longitude, LongitudeConvention::Signed180);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("grid-options-does-not-exist.yaml");
        assert!(matches!(
            GridOptions::load(path),
            Err(crate::error::OptionsError::Io(_))
        ));
    }

    #[test]
    fn test_normalize_signed() {
        let c = LongitudeConvention::Signed180;
        assert!((c.normalize(270.0) - (-90.0)).abs() < 1e-12);
        assert!((c.normalize(180.0) - 180.0).abs() < 1e-12);
        assert!((c.normalize(-180.0) - 180.0).abs() < 1e-12);
        assert!((c.normalize(-45.0) - (-45.0)).abs() < 1e-12);
        assert!((c.normalize(725.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_positive() {
        let c = LongitudeConvention::Positive360;
        assert!((c.normalize(-90.0) - 270.0).abs() < 1e-12);
        assert!((c.normalize(360.0) - 0.0).abs() < 1e-12);
        assert!((c.normalize(45.0) - 45.0).abs() < 1e-12);
    }
}
