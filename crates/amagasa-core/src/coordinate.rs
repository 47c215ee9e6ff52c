//! Geographic coordinates for location-based classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair in decimal degrees.
///
/// Values are plain IEEE-754 doubles with no range clamping; what an
/// out-of-range position means is up to the weather source consuming it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_display() {
        let coordinate = Coordinate::new(37.58, -122.35);
        assert_eq!(coordinate.to_string(), "(37.58, -122.35)");
    }

    #[test]
    fn test_coordinate_equality() {
        assert_eq!(Coordinate::new(35.0, 139.0), Coordinate::new(35.0, 139.0));
        assert_ne!(Coordinate::new(35.0, 139.0), Coordinate::new(35.0, 139.5));
    }

    #[test]
    fn test_coordinate_serialization() {
        let coordinate = Coordinate::new(35.669784, 139.817728);
        let json = serde_json::to_string(&coordinate).unwrap();
        let parsed: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, coordinate);
    }
}
