//! MemorySink - keeps records in memory

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use contracts::{ContractError, LogRecord, LogSink};

/// Sink that stores every record it receives
///
/// Clones share the same buffer, so a host (or a test) can keep one handle
/// and give the other to the dispatcher.
#[derive(Clone, Default)]
pub struct MemorySink {
    name: String,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Arc::default(),
        }
    }

    /// Copy of every record received so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Formatted statements received so far
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, record: &LogRecord) -> Result<(), ContractError> {
        self.lock().push(record.clone());
        Ok(())
    }
}
