//! Plain-text classification rendering.

use crate::classification::Classification;
use crate::error::Result;
use crate::traits::Formatter;

/// Formats a classification as `Weather is <classification>`.
///
/// Pure and deterministic, so tests can use the real instance directly.
/// When the call itself must also be verified, wrap it in a spy from the
/// doubles crate rather than faking the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    /// Create a formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for ReportFormatter {
    fn format(&self, classification: Classification) -> Result<String> {
        Ok(format!("Weather is {}", classification))
    }
}
