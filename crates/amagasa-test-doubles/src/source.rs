//! Stub and mock weather sources.

use amagasa_core::{Classification, Coordinate, Result, WeatherSource};

use crate::calls::{CallLog, SourceCall};

/// Weather source fixed to one classification.
///
/// Pure input control: the stub answers the same classification on every
/// call, with or without a coordinate, and records nothing. Use it when a
/// test only cares about what the subject does with a known condition.
#[derive(Debug, Clone, Copy)]
pub struct StubSource {
    classification: Classification,
}

impl StubSource {
    /// Create a stub that always answers `classification`.
    pub fn new(classification: Classification) -> Self {
        Self { classification }
    }
}

impl WeatherSource for StubSource {
    fn classify(&self) -> Result<Classification> {
        Ok(self.classification)
    }

    fn classify_at(&self, _coordinate: Coordinate) -> Result<Classification> {
        Ok(self.classification)
    }
}

/// Call-recording weather source.
///
/// Answers a single canned classification (Fair unless built with
/// [`MockSource::returning`]) and logs every call with its argument and
/// result for later verification. Argument-dependent answers belong to
/// [`RespondingSource`](crate::RespondingSource) instead.
#[derive(Debug, Default)]
pub struct MockSource {
    response: Classification,
    calls: CallLog<SourceCall>,
}

impl MockSource {
    /// Create a mock that answers Fair.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers `classification`.
    pub fn returning(classification: Classification) -> Self {
        Self {
            response: classification,
            calls: CallLog::new(),
        }
    }

    /// True once the subject has consulted the source.
    pub fn was_called(&self) -> bool {
        self.calls.was_called()
    }

    /// Coordinate of the most recent `classify_at` call, if any.
    ///
    /// Coordinate-free `classify` calls do not count; they carry no
    /// argument to report.
    pub fn last_coordinate(&self) -> Option<Coordinate> {
        self.calls.calls().iter().rev().find_map(|call| match call {
            SourceCall::ClassifyAt { coordinate, .. } => Some(*coordinate),
            SourceCall::Classify { .. } => None,
        })
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.calls()
    }
}

impl WeatherSource for MockSource {
    fn classify(&self) -> Result<Classification> {
        self.calls.record(SourceCall::Classify {
            result: self.response,
        });
        Ok(self.response)
    }

    fn classify_at(&self, coordinate: Coordinate) -> Result<Classification> {
        self.calls.record(SourceCall::ClassifyAt {
            coordinate,
            result: self.response,
        });
        Ok(self.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_answers_fixed_classification() {
        let stub = StubSource::new(Classification::Precipitating);
        assert_eq!(stub.classify().unwrap(), Classification::Precipitating);
        assert_eq!(
            stub.classify_at(Coordinate::new(35.0, 139.0)).unwrap(),
            Classification::Precipitating
        );
    }

    #[test]
    fn test_mock_defaults_to_fair() {
        let mock = MockSource::new();
        assert_eq!(mock.classify().unwrap(), Classification::Fair);
    }

    #[test]
    fn test_mock_records_calls_with_arguments() {
        let mock = MockSource::returning(Classification::Overcast);
        assert!(!mock.was_called());
        assert_eq!(mock.last_coordinate(), None);

        mock.classify().unwrap();
        let coordinate = Coordinate::new(37.58, -122.35);
        mock.classify_at(coordinate).unwrap();

        assert!(mock.was_called());
        assert_eq!(mock.last_coordinate(), Some(coordinate));
        assert_eq!(
            mock.calls(),
            vec![
                SourceCall::Classify {
                    result: Classification::Overcast
                },
                SourceCall::ClassifyAt {
                    coordinate,
                    result: Classification::Overcast
                },
            ]
        );
    }

    #[test]
    fn test_mock_last_coordinate_skips_plain_classify() {
        let mock = MockSource::new();
        let coordinate = Coordinate::new(51.5, -0.1);
        mock.classify_at(coordinate).unwrap();
        mock.classify().unwrap();

        assert_eq!(mock.last_coordinate(), Some(coordinate));
    }
}
