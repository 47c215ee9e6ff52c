//! Call recording shared by the mock and spy doubles.

use parking_lot::Mutex;

use amagasa_core::{Classification, Coordinate};

/// Recorded call on a weather-source double.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceCall {
    /// `classify()` and the classification it answered.
    Classify {
        /// The classification returned to the caller.
        result: Classification,
    },
    /// `classify_at(..)` with its argument and the classification it answered.
    ClassifyAt {
        /// The coordinate the caller passed.
        coordinate: Coordinate,
        /// The classification returned to the caller.
        result: Classification,
    },
}

/// Recorded call on a recorder double.
#[derive(Debug, Clone, PartialEq)]
pub enum RecorderCall {
    /// `record(..)` with the classification it received.
    Record {
        /// The classification the caller passed.
        classification: Classification,
    },
}

/// Recorded call on a formatter double.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatterCall {
    /// `format(..)` with its argument and the delegated result.
    Format {
        /// The classification the caller passed.
        classification: Classification,
        /// The text the wrapped formatter produced.
        result: String,
    },
}

/// Append-only log of the calls a double has observed.
///
/// The subject under test only ever appends; verification code reads the
/// log after the fact. Entries keep arrival order and are never mutated,
/// so assertions about call order hold.
#[derive(Debug)]
pub struct CallLog<C> {
    calls: Mutex<Vec<C>>,
}

impl<C> Default for CallLog<C> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl<C> CallLog<C> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one call record.
    pub fn record(&self, call: C) {
        self.calls.lock().push(call);
    }

    /// True once at least one call has been recorded.
    pub fn was_called(&self) -> bool {
        !self.calls.lock().is_empty()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    /// True while no call has been recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Discard every recorded call.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<C: Clone> CallLog<C> {
    /// The most recent call, if any.
    pub fn last(&self) -> Option<C> {
        self.calls.lock().last().cloned()
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> Vec<C> {
        self.calls.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_arrival_order() {
        let log = CallLog::new();
        assert!(log.is_empty());
        assert!(!log.was_called());

        log.record(RecorderCall::Record {
            classification: Classification::Fair,
        });
        log.record(RecorderCall::Record {
            classification: Classification::Precipitating,
        });

        assert!(log.was_called());
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.calls(),
            vec![
                RecorderCall::Record {
                    classification: Classification::Fair
                },
                RecorderCall::Record {
                    classification: Classification::Precipitating
                },
            ]
        );
        assert_eq!(
            log.last(),
            Some(RecorderCall::Record {
                classification: Classification::Precipitating
            })
        );
    }

    #[test]
    fn test_clear_empties_the_log() {
        let log = CallLog::new();
        log.record(SourceCall::Classify {
            result: Classification::Fair,
        });
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.last(), None);
    }
}
