//! Capability traits consumed by the umbrella advisor.
//!
//! Each trait is a seam where a test substitutes a double for the real
//! collaborator. The stub, mock, spy, and responder implementations live
//! in the `amagasa-test-doubles` crate; the real implementations are in
//! this crate ([`WeatherStation`](crate::WeatherStation),
//! [`ObservationJournal`](crate::ObservationJournal),
//! [`ReportFormatter`](crate::ReportFormatter)).

use crate::classification::Classification;
use crate::coordinate::Coordinate;
use crate::error::Result;

/// Produces sky classifications, with or without a location.
pub trait WeatherSource: Send + Sync {
    /// Classify current conditions with no location context.
    fn classify(&self) -> Result<Classification>;

    /// Classify current conditions at the given coordinate.
    fn classify_at(&self, coordinate: Coordinate) -> Result<Classification>;
}

/// Receives classifications the advisor chooses to keep.
pub trait Recorder: Send + Sync {
    /// Record one observed classification.
    fn record(&self, classification: Classification) -> Result<()>;
}

/// Renders classifications as human-readable text.
pub trait Formatter: Send + Sync {
    /// Format one classification.
    fn format(&self, classification: Classification) -> Result<String>;
}
