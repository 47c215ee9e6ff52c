//! Built-in weather source.

use crate::classification::Classification;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::traits::WeatherSource;

/// Placeholder weather feed that always reports fair skies.
///
/// Stands in for a real upstream feed; the coordinate overload accepts a
/// location and ignores it. Tests that need any other behavior inject a
/// double instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherStation;

impl WeatherStation {
    /// Create a station.
    pub fn new() -> Self {
        Self
    }
}

impl WeatherSource for WeatherStation {
    fn classify(&self) -> Result<Classification> {
        Ok(Classification::Fair)
    }

    fn classify_at(&self, _coordinate: Coordinate) -> Result<Classification> {
        Ok(Classification::Fair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_always_reports_fair() {
        let station = WeatherStation::new();
        assert_eq!(station.classify().unwrap(), Classification::Fair);
        assert_eq!(
            station.classify_at(Coordinate::new(35.0, 139.0)).unwrap(),
            Classification::Fair
        );
    }
}
