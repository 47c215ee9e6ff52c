//! Weather source answering from coordinate-matched bindings.

use tracing::{debug, warn};

use amagasa_core::{Classification, Coordinate, Error, Result, WeatherSource};

/// Decides whether one binding is willing to answer for a coordinate.
enum CoordinateMatcher {
    /// Matches every coordinate.
    Any,
    /// Matches exactly this coordinate, by IEEE-754 equality.
    Exact(Coordinate),
    /// Matches the coordinates the predicate accepts.
    Where(Box<dyn Fn(Coordinate) -> bool + Send + Sync>),
}

impl CoordinateMatcher {
    fn matches(&self, coordinate: Coordinate) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => *expected == coordinate,
            Self::Where(predicate) => predicate(coordinate),
        }
    }
}

/// What a binding answers once its matcher accepts.
enum Answer {
    Fixed(Classification),
    Computed(Box<dyn Fn(Coordinate) -> Classification + Send + Sync>),
}

impl Answer {
    fn resolve(&self, coordinate: Coordinate) -> Classification {
        match self {
            Self::Fixed(classification) => *classification,
            Self::Computed(compute) => compute(coordinate),
        }
    }
}

struct Binding {
    matcher: CoordinateMatcher,
    answer: Answer,
}

/// Weather source that answers from an ordered list of bindings.
///
/// Register broad defaults first and narrow overrides after: a call is
/// resolved by walking the bindings newest-first and taking the first one
/// whose matcher accepts the coordinate. A `classify_at` call no binding
/// matches fails with [`Error::UnmatchedBinding`]; this double never
/// invents an answer.
///
/// Coordinate-free `classify` calls are served by the newest wildcard
/// *fixed* binding. Computed answers are skipped there, they need a
/// coordinate to work with; with nothing eligible the call fails with
/// [`Error::NoDefaultResponse`].
#[derive(Default)]
pub struct RespondingSource {
    bindings: Vec<Binding>,
}

impl RespondingSource {
    /// Create a responder with no bindings.
    ///
    /// Every call on it fails until a binding is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a classification to every coordinate.
    ///
    /// Registered first, this acts as the default that later, narrower
    /// bindings override.
    pub fn with_default(self, classification: Classification) -> Self {
        self.bind(CoordinateMatcher::Any, Answer::Fixed(classification))
    }

    /// Bind a classification to one exact coordinate.
    ///
    /// Exact means IEEE-754 equality on both fields. For a tolerance or a
    /// region, use [`with_response_when`](Self::with_response_when).
    pub fn with_response(self, coordinate: Coordinate, classification: Classification) -> Self {
        self.bind(
            CoordinateMatcher::Exact(coordinate),
            Answer::Fixed(classification),
        )
    }

    /// Bind a classification to the coordinates accepted by `predicate`.
    pub fn with_response_when(
        self,
        predicate: impl Fn(Coordinate) -> bool + Send + Sync + 'static,
        classification: Classification,
    ) -> Self {
        self.bind(
            CoordinateMatcher::Where(Box::new(predicate)),
            Answer::Fixed(classification),
        )
    }

    /// Bind a computed answer to every coordinate.
    ///
    /// The closure sees the coordinate of each call it serves, so one
    /// binding can cover position-dependent behavior that would otherwise
    /// take many exact responses.
    pub fn with_answer(
        self,
        answer: impl Fn(Coordinate) -> Classification + Send + Sync + 'static,
    ) -> Self {
        self.bind(CoordinateMatcher::Any, Answer::Computed(Box::new(answer)))
    }

    fn bind(mut self, matcher: CoordinateMatcher, answer: Answer) -> Self {
        self.bindings.push(Binding { matcher, answer });
        self
    }
}

impl WeatherSource for RespondingSource {
    fn classify(&self) -> Result<Classification> {
        for (index, binding) in self.bindings.iter().enumerate().rev() {
            if let (CoordinateMatcher::Any, Answer::Fixed(classification)) =
                (&binding.matcher, &binding.answer)
            {
                debug!(binding = index, classification = %classification, "answered coordinate-free call");
                return Ok(*classification);
            }
        }
        warn!("coordinate-free call with no coordinate-free binding");
        Err(Error::NoDefaultResponse)
    }

    fn classify_at(&self, coordinate: Coordinate) -> Result<Classification> {
        for (index, binding) in self.bindings.iter().enumerate().rev() {
            if binding.matcher.matches(coordinate) {
                let classification = binding.answer.resolve(coordinate);
                debug!(
                    binding = index,
                    coordinate = %coordinate,
                    classification = %classification,
                    "binding answered"
                );
                return Ok(classification);
            }
        }
        warn!(coordinate = %coordinate, "no binding matched");
        Err(Error::UnmatchedBinding { coordinate })
    }
}
