//! Amagasa core: weather domain model and umbrella decision service.
//!
//! The business logic here is deliberately small. A weather source
//! classifies the sky, the advisor maps that classification onto a yes/no
//! umbrella decision, and a validator checks station identifiers. The
//! substance of the crate is its seams: the advisor talks to every
//! collaborator through the capability traits in [`traits`], so a test can
//! hand it a stub, mock, spy, or responder from `amagasa-test-doubles`
//! instead of the real thing.
//!
//! # Example
//!
//! ```
//! use amagasa_core::{UmbrellaAdvisor, WeatherStation};
//!
//! let station = WeatherStation::new();
//! let advisor = UmbrellaAdvisor::new(&station);
//! assert!(!advisor.decide()?);
//! # Ok::<(), amagasa_core::Error>(())
//! ```

#![warn(missing_docs)]

pub mod advisor;
pub mod classification;
pub mod coordinate;
pub mod error;
pub mod journal;
pub mod report;
pub mod station;
pub mod traits;
pub mod validation;

pub use advisor::UmbrellaAdvisor;
pub use classification::Classification;
pub use coordinate::Coordinate;
pub use error::{Error, Result};
pub use journal::{Observation, ObservationJournal};
pub use report::ReportFormatter;
pub use station::WeatherStation;
pub use traits::{Formatter, Recorder, WeatherSource};
pub use validation::StationCodeValidator;
