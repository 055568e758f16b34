//! Geographic coordinate value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check both components against another coordinate within `tolerance` degrees.
    pub fn approx_eq(&self, other: &Coordinate, tolerance: f64) -> bool {
        (self.latitude - other.latitude).abs() <= tolerance
            && (self.longitude - other.longitude).abs() <= tolerance
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple_is_lat_lon() {
        let c: Coordinate = (60.0, -105.0).into();
        assert_eq!(c.latitude, 60.0);
        assert_eq!(c.longitude, -105.0);
    }

    #[test]
    fn test_approx_eq() {
        let a = Coordinate::new(45.0, 10.0);
        let b = Coordinate::new(45.0000001, 9.9999999);
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&Coordinate::new(45.1, 10.0), 1e-6));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}
