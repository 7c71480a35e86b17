//! Dispatch metrics
//!
//! Thin wrappers over the `metrics` facade so metric names and labels live
//! in one place. Without an installed recorder every call is a no-op.

use contracts::Severity;
use metrics::counter;

/// Record a message delivered to its sink
pub fn record_emitted(severity: Severity, sink_name: &str) {
    counter!(
        "llog_messages_emitted_total",
        "severity" => severity.as_str(),
        "sink" => sink_name.to_string()
    )
    .increment(1);
}

/// Record a suppressed message
///
/// `reason` is a static label such as `"production_gate"` or `"threshold"`.
pub fn record_suppressed(severity: Severity, reason: &'static str) {
    counter!(
        "llog_messages_suppressed_total",
        "severity" => severity.as_str(),
        "reason" => reason
    )
    .increment(1);
}

/// Record a message written to standard output because the sink failed
pub fn record_fallback(sink_name: &str) {
    counter!("llog_sink_fallback_total", "sink" => sink_name.to_string()).increment(1);
}

/// Record a message lost because the fallback failed as well
pub fn record_dropped(sink_name: &str) {
    counter!("llog_messages_dropped_total", "sink" => sink_name.to_string()).increment(1);
}
