//! Call-recording recorder double.

use amagasa_core::{Classification, Recorder, Result};

use crate::calls::{CallLog, RecorderCall};

/// Recorder that captures what the subject hands it and nothing more.
///
/// Output verification: where a stub controls what flows *into* the
/// subject, this mock checks what flows *out* of it. Each `record` call
/// is logged with its argument; nothing is persisted anywhere else.
#[derive(Debug, Default)]
pub struct MockRecorder {
    calls: CallLog<RecorderCall>,
}

impl MockRecorder {
    /// Create a recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once `record` has been called.
    pub fn was_called(&self) -> bool {
        self.calls.was_called()
    }

    /// Number of `record` calls.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Classification of the most recent `record` call, if any.
    pub fn last_classification(&self) -> Option<Classification> {
        self.calls.last().map(|call| match call {
            RecorderCall::Record { classification } => classification,
        })
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> Vec<RecorderCall> {
        self.calls.calls()
    }
}

impl Recorder for MockRecorder {
    fn record(&self, classification: Classification) -> Result<()> {
        self.calls.record(RecorderCall::Record { classification });
        Ok(())
    }
}
