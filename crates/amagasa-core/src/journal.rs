//! In-memory observation journal.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::classification::Classification;
use crate::error::Result;
use crate::traits::Recorder;

/// One recorded observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// The classification that was recorded.
    pub classification: Classification,
    /// When it was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Recorder that appends timestamped observations to an in-memory log.
///
/// Small but behaviorally real: entries can be read back after the fact,
/// which is everything the advisor's recording path needs. Interior
/// mutability keeps [`Recorder::record`] on a shared reference.
#[derive(Debug, Default)]
pub struct ObservationJournal {
    entries: Mutex<Vec<Observation>>,
}

impl ObservationJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// All observations, oldest first.
    pub fn entries(&self) -> Vec<Observation> {
        self.entries.lock().clone()
    }

    /// Number of recorded observations.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Recorder for ObservationJournal {
    fn record(&self, classification: Classification) -> Result<()> {
        self.entries.lock().push(Observation {
            classification,
            recorded_at: Utc::now(),
        });
        Ok(())
    }
}
