//! Test doubles for the Amagasa capability traits.
//!
//! Every double here is hand-built against the traits in `amagasa-core`,
//! one substitution behavior per type:
//!
//! - [`StubSource`]: fixed response, records nothing
//! - [`MockSource`] / [`MockRecorder`]: canned response plus a call log
//!   with verification accessors
//! - [`SpyFormatter`]: records the call, then lets the wrapped real
//!   formatter do the work
//! - [`RespondingSource`]: ordered coordinate-matched bindings, including
//!   computed answers; unmatched calls fail loudly
//!
//! Doubles are built per test case and dropped with it; no verification
//! state outlives a case or crosses threads between cases.

pub mod assertions;
pub mod calls;
pub mod formatter;
pub mod recorder;
pub mod responder;
pub mod source;

pub use calls::{CallLog, FormatterCall, RecorderCall, SourceCall};
pub use formatter::SpyFormatter;
pub use recorder::MockRecorder;
pub use responder::RespondingSource;
pub use source::{MockSource, StubSource};

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

/// Initialize tracing for tests, once per process
pub fn init() {
    static INIT: Lazy<()> = Lazy::new(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,amagasa=debug"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_file(true)
            .with_line_number(true)
            .try_init()
            .ok();
    });

    Lazy::force(&INIT);
}
