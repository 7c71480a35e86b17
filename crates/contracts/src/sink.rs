//! LogSink trait - Dispatcher output interface
//!
//! Defines the abstract interface for Sinks.

use serde::{Deserialize, Serialize};

use crate::{ContractError, SinkClass};

/// Sink selected by configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkType {
    /// Forward to the `tracing` subscriber
    #[default]
    Tracing,
    /// Platform system log (syslog(3) on unix)
    Syslog,
    /// Plain standard output
    Console,
}

/// A formatted log line on its way to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Fully formatted statement (`"[file:line] symbol message"`)
    pub message: String,
    /// Sink severity class
    pub class: SinkClass,
    /// Sink subsystem identifier
    pub subsystem: String,
    /// Sink category identifier
    pub category: String,
}

/// Log output trait
///
/// All sink implementations must implement this trait. Sinks are shared
/// between threads, so delivery takes `&self`.
pub trait LogSink: Send + Sync {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Deliver one record
    ///
    /// # Errors
    /// [`ContractError::SinkUnavailable`] when the sink cannot be reached in
    /// this environment, or a write error. Either makes the caller fall back
    /// to standard output.
    fn emit(&self, record: &LogRecord) -> Result<(), ContractError>;
}

impl<S: LogSink + ?Sized> LogSink for std::sync::Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn emit(&self, record: &LogRecord) -> Result<(), ContractError> {
        (**self).emit(record)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn emit(&self, record: &LogRecord) -> Result<(), ContractError> {
        (**self).emit(record)
    }
}
