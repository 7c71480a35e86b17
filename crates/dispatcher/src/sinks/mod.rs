//! Sink implementations
//!
//! Contains TracingSink, SyslogSink (unix), ConsoleSink, MemorySink and
//! UnavailableSink.

mod console;
mod memory;
#[cfg(unix)]
mod syslog;
mod tracing_sink;
mod unavailable;

pub use self::console::ConsoleSink;
pub use self::memory::MemorySink;
#[cfg(unix)]
pub use self::syslog::SyslogSink;
pub use self::tracing_sink::TracingSink;
pub use self::unavailable::UnavailableSink;
