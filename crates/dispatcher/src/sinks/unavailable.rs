//! UnavailableSink - stands in for a sink the platform does not have

use contracts::{ContractError, LogRecord, LogSink};

/// Rejects every record with [`ContractError::SinkUnavailable`], so the
/// dispatcher falls back to standard output.
pub struct UnavailableSink {
    name: String,
}

impl UnavailableSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl LogSink for UnavailableSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, _record: &LogRecord) -> Result<(), ContractError> {
        Err(ContractError::sink_unavailable(&self.name))
    }
}
