//! # Dispatcher
//!
//! Conditional log dispatch.
//!
//! Responsible for:
//! - the production gate (debug build / public message / forced override)
//! - the verbosity threshold
//! - formatting `"[file:line] symbol message"`
//! - delivering to a sink, falling back to stdout when it is unavailable
//!
//! # Example
//!
//! ```no_run
//! use dispatcher::{create_dispatcher, llog, LoggerConfig, Severity};
//!
//! let logger = create_dispatcher(LoggerConfig::default()).unwrap();
//! llog!(logger, Severity::Success, "saved {} files", 3);
//! logger.set_verbosity_threshold(Severity::Warning);
//! ```

pub mod dispatcher;
pub mod error;
mod macros;
pub mod metrics;
pub mod sinks;

pub use contracts::{BuildMode, CallerLocation, LogRecord, LogSink, LoggerConfig, Severity};
pub use dispatcher::{
    create_dispatcher, format_statement, DispatcherBuilder, LogDispatcher, LogRequest, Outcome,
    SuppressReason,
};
pub use error::DispatcherError;
pub use metrics::{DispatchMetrics, MetricsSnapshot};
pub use sinks::{ConsoleSink, MemorySink, TracingSink, UnavailableSink};
#[cfg(unix)]
pub use sinks::SyslogSink;
