//! The umbrella decision service.

use tracing::{debug, instrument};

use crate::classification::Classification;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::traits::{Formatter, Recorder, WeatherSource};

/// Decides whether to bring an umbrella, based on an injected weather source.
///
/// Collaborators are borrowed for the advisor's lifetime; the advisor never
/// owns or constructs them. The source is required, the recorder and
/// formatter are optional and only invoked when attached. All inputs are
/// trait objects, so tests swap in doubles without touching this type.
pub struct UmbrellaAdvisor<'a> {
    source: &'a dyn WeatherSource,
    recorder: Option<&'a dyn Recorder>,
    formatter: Option<&'a dyn Formatter>,
}

impl<'a> UmbrellaAdvisor<'a> {
    /// Create an advisor over `source`, with no recorder or formatter.
    pub fn new(source: &'a dyn WeatherSource) -> Self {
        Self {
            source,
            recorder: None,
            formatter: None,
        }
    }

    /// Attach a recorder for observations.
    pub fn with_recorder(mut self, recorder: &'a dyn Recorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Attach a formatter for observations.
    pub fn with_formatter(mut self, formatter: &'a dyn Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Whether current conditions call for an umbrella.
    ///
    /// Pure question: consults the source and maps the classification,
    /// with no recording or formatting side effects.
    #[instrument(skip(self))]
    pub fn decide(&self) -> Result<bool> {
        let classification = self.source.classify()?;
        debug!(classification = %classification, "classified current conditions");
        Ok(classification.requires_umbrella())
    }

    /// Whether conditions at `coordinate` call for an umbrella.
    #[instrument(skip(self), fields(coordinate = %coordinate))]
    pub fn decide_at(&self, coordinate: Coordinate) -> Result<bool> {
        let classification = self.source.classify_at(coordinate)?;
        debug!(classification = %classification, "classified conditions at location");
        Ok(classification.requires_umbrella())
    }

    /// Classify current conditions and hand them to the attached collaborators.
    ///
    /// The recorder runs first, then the formatter; a recorder failure
    /// propagates before the formatter is consulted. The formatted text is
    /// discarded here, the call itself is the observable effect.
    #[instrument(skip(self))]
    pub fn observe(&self) -> Result<()> {
        let classification = self.source.classify()?;
        self.forward(classification)
    }

    /// Like [`observe`](Self::observe), classified at `coordinate`.
    #[instrument(skip(self), fields(coordinate = %coordinate))]
    pub fn observe_at(&self, coordinate: Coordinate) -> Result<()> {
        let classification = self.source.classify_at(coordinate)?;
        self.forward(classification)
    }

    fn forward(&self, classification: Classification) -> Result<()> {
        if let Some(recorder) = self.recorder {
            recorder.record(classification)?;
            debug!(classification = %classification, "recorded observation");
        }
        if let Some(formatter) = self.formatter {
            formatter.format(classification)?;
        }
        Ok(())
    }
}
