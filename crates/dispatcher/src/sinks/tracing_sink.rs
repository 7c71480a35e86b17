//! TracingSink - forwards records to the `tracing` subscriber

use contracts::{ContractError, LogRecord, LogSink, SinkClass};
use tracing::{error, info};

/// Sink that hands records to whatever `tracing` subscriber is installed
///
/// Error class maps to `ERROR`; info and default class map to `INFO` and
/// keep their class in the `class` field.
pub struct TracingSink {
    name: String,
}

impl TracingSink {
    /// Create a new TracingSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new("tracing")
    }
}

impl LogSink for TracingSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, record: &LogRecord) -> Result<(), ContractError> {
        match record.class {
            SinkClass::Error => error!(
                target: "llog",
                subsystem = %record.subsystem,
                category = %record.category,
                class = %record.class,
                "{}",
                record.message
            ),
            SinkClass::Info | SinkClass::Default => info!(
                target: "llog",
                subsystem = %record.subsystem,
                category = %record.category,
                class = %record.class,
                "{}",
                record.message
            ),
        }
        Ok(())
    }
}
