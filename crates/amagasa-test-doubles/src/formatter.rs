//! Pass-through formatter spy.

use amagasa_core::{Classification, Formatter, Result};

use crate::calls::{CallLog, FormatterCall};

/// Formatter spy: records each call, then delegates to the wrapped
/// formatter and returns its actual result.
///
/// Unlike a mock, the real behavior still runs; the wrapper only watches.
/// The log keeps the delegate's rendered text alongside the argument, so
/// a test can verify both the interaction and the real output in one
/// place. A failing delegate propagates its error and only answered
/// calls are logged.
#[derive(Debug, Default)]
pub struct SpyFormatter<F> {
    inner: F,
    calls: CallLog<FormatterCall>,
}

impl<F> SpyFormatter<F> {
    /// Wrap a formatter.
    pub fn wrap(inner: F) -> Self {
        Self {
            inner,
            calls: CallLog::new(),
        }
    }

    /// The wrapped formatter.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// True once `format` has been called.
    pub fn was_called(&self) -> bool {
        self.calls.was_called()
    }

    /// Number of `format` calls.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Classification of the most recent `format` call, if any.
    pub fn last_classification(&self) -> Option<Classification> {
        self.calls.last().map(|call| match call {
            FormatterCall::Format { classification, .. } => classification,
        })
    }

    /// Text the delegate produced for the most recent call, if any.
    pub fn last_rendered(&self) -> Option<String> {
        self.calls.last().map(|call| match call {
            FormatterCall::Format { result, .. } => result,
        })
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> Vec<FormatterCall> {
        self.calls.calls()
    }
}

impl<F: Formatter> Formatter for SpyFormatter<F> {
    fn format(&self, classification: Classification) -> Result<String> {
        let result = self.inner.format(classification)?;
        self.calls.record(FormatterCall::Format {
            classification,
            result: result.clone(),
        });
        Ok(result)
    }
}
