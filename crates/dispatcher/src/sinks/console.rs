//! ConsoleSink - plain line output, also the dispatcher's fallback

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use contracts::{ContractError, LogRecord, LogSink};

/// Writes the formatted statement, one per line, to a writer
///
/// Only the statement is written; class, subsystem and category are dropped,
/// the same way a bare `print` would.
pub struct ConsoleSink<W = Stdout> {
    name: String,
    writer: Mutex<W>,
}

impl ConsoleSink<Stdout> {
    /// Sink writing to the process's standard output
    pub fn stdout() -> Self {
        Self::new("stdout", io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogSink for ConsoleSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, record: &LogRecord) -> Result<(), ContractError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{}", record.message)?;
        writer.flush()?;
        Ok(())
    }
}
