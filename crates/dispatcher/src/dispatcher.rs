//! LogDispatcher - gate, format and deliver log messages

use std::error::Error;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use tracing::{debug, instrument};

use contracts::{
    BuildMode, CallerLocation, EnvOverride, LogRecord, LogSink, LoggerConfig, OverridePolicy,
    Severity, SinkType,
};

use crate::error::DispatcherError;
use crate::metrics::{DispatchMetrics, MetricsSnapshot};
use crate::sinks::{ConsoleSink, TracingSink};

/// Why a call produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuppressReason {
    /// Release build, not public, no override
    ProductionGate,
    /// Severity more verbose than the threshold
    AboveThreshold,
    /// `log_optional_error` was given nothing
    NoError,
}

impl SuppressReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            SuppressReason::ProductionGate => "production_gate",
            SuppressReason::AboveThreshold => "threshold",
            SuppressReason::NoError => "no_error",
        }
    }
}

/// Result of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Delivered to the configured sink
    Emitted,
    /// Written to the fallback because the sink was missing or failed
    FellBack,
    /// Both the sink and the fallback failed; nothing was written
    Dropped,
    /// Nothing was written
    Suppressed(SuppressReason),
}

impl Outcome {
    /// Whether the message reached any output
    pub fn is_delivered(self) -> bool {
        matches!(self, Outcome::Emitted | Outcome::FellBack)
    }
}

/// Per-call parameters of [`LogDispatcher::log`]
///
/// Built with [`LogRequest::new`] or [`LogRequest::at`], which record the
/// caller's file and line.
#[derive(Debug, Clone)]
pub struct LogRequest<'a> {
    pub severity: Severity,
    pub is_public: bool,
    pub include_caller_info: bool,
    /// Overrides the dispatcher's subsystem for this call
    pub subsystem: Option<&'a str>,
    /// Overrides the dispatcher's category for this call
    pub category: Option<&'a str>,
    pub location: CallerLocation,
}

impl<'a> LogRequest<'a> {
    /// Info severity, not public, caller info included
    #[track_caller]
    pub fn new() -> Self {
        Self::at(Severity::Info)
    }

    #[track_caller]
    pub fn at(severity: Severity) -> Self {
        Self {
            severity,
            is_public: false,
            include_caller_info: true,
            subsystem: None,
            category: None,
            location: CallerLocation::caller(),
        }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Mark the message safe to emit in release builds
    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn caller_info(mut self, include: bool) -> Self {
        self.include_caller_info = include;
        self
    }

    pub fn subsystem(mut self, subsystem: &'a str) -> Self {
        self.subsystem = Some(subsystem);
        self
    }

    pub fn category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    pub fn location(mut self, location: CallerLocation) -> Self {
        self.location = location;
        self
    }
}

impl Default for LogRequest<'_> {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

/// Build the statement handed to sinks: `"{caller} {symbol} {message}"`.
///
/// Empty segments keep their separator, so `"[a.rs:1]  msg"` is what a call
/// with icons disabled renders.
pub fn format_statement(location: Option<&CallerLocation>, symbol: &str, message: &str) -> String {
    match location {
        Some(location) => format!("{location} {symbol} {message}"),
        None => format!(" {symbol} {message}"),
    }
}

/// Builder for creating a LogDispatcher
pub struct DispatcherBuilder {
    config: LoggerConfig,
    sink: Option<Box<dyn LogSink>>,
    fallback: Option<Box<dyn LogSink>>,
    override_policy: Option<Box<dyn OverridePolicy>>,
}

impl DispatcherBuilder {
    /// Create a new DispatcherBuilder
    ///
    /// Without further calls the dispatcher has no sink (every record goes
    /// to the fallback), writes the fallback to stdout and reads
    /// `config.force_logging_var` from the environment.
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            sink: None,
            fallback: None,
            override_policy: None,
        }
    }

    /// Primary sink
    pub fn sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Destination used when the primary sink is missing or fails
    pub fn fallback(mut self, fallback: impl LogSink + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Replace the environment lookup of the forced-logging override
    pub fn override_policy(mut self, policy: impl OverridePolicy + 'static) -> Self {
        self.override_policy = Some(Box::new(policy));
        self
    }

    pub fn build(self) -> LogDispatcher {
        let override_policy = self
            .override_policy
            .unwrap_or_else(|| Box::new(EnvOverride::new(self.config.force_logging_var.clone())));
        let fallback = self
            .fallback
            .unwrap_or_else(|| Box::new(ConsoleSink::stdout()));

        LogDispatcher {
            threshold: AtomicU8::new(self.config.verbosity_threshold.rank()),
            icons_enabled: AtomicBool::new(self.config.icons_enabled),
            config: self.config,
            sink: self.sink,
            fallback,
            override_policy,
            metrics: DispatchMetrics::new(),
        }
    }
}

/// Create the sink named by `config.sink`
#[instrument(name = "dispatcher_create_sink", skip(config), fields(sink_type = ?config.sink))]
fn create_sink(config: &LoggerConfig) -> Result<Box<dyn LogSink>, DispatcherError> {
    match config.sink {
        SinkType::Tracing => Ok(Box::new(TracingSink::default())),
        SinkType::Console => Ok(Box::new(ConsoleSink::stdout())),
        #[cfg(unix)]
        SinkType::Syslog => {
            let sink = crate::sinks::SyslogSink::open(&config.subsystem)
                .map_err(|e| DispatcherError::sink_creation("syslog", e.to_string()))?;
            Ok(Box::new(sink))
        }
        #[cfg(not(unix))]
        SinkType::Syslog => Ok(Box::new(crate::sinks::UnavailableSink::new("syslog"))),
    }
}

/// Convenience function to create a dispatcher whose sink is chosen by the config
pub fn create_dispatcher(config: LoggerConfig) -> Result<LogDispatcher, DispatcherError> {
    let sink = create_sink(&config)?;
    let mut builder = DispatcherBuilder::new(config);
    builder.sink = Some(sink);
    Ok(builder.build())
}

/// Decides whether a message is emitted, formats it and forwards it
///
/// `Send + Sync`: share it behind an `Arc` or a `static`. Threshold and icon
/// changes are relaxed stores; concurrent calls may observe them late.
pub struct LogDispatcher {
    config: LoggerConfig,
    threshold: AtomicU8,
    icons_enabled: AtomicBool,
    sink: Option<Box<dyn LogSink>>,
    fallback: Box<dyn LogSink>,
    override_policy: Box<dyn OverridePolicy>,
    metrics: DispatchMetrics,
}

impl LogDispatcher {
    pub fn builder(config: LoggerConfig) -> DispatcherBuilder {
        DispatcherBuilder::new(config)
    }

    pub fn verbosity_threshold(&self) -> Severity {
        Severity::from_rank(self.threshold.load(Ordering::Relaxed)).unwrap_or(Severity::Custom)
    }

    pub fn set_verbosity_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold.rank(), Ordering::Relaxed);
    }

    pub fn icons_enabled(&self) -> bool {
        self.icons_enabled.load(Ordering::Relaxed)
    }

    pub fn set_icons_enabled(&self, enabled: bool) {
        self.icons_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn build_mode(&self) -> BuildMode {
        self.config.build_mode
    }

    /// Current configuration, including live threshold and icon changes
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            verbosity_threshold: self.verbosity_threshold(),
            icons_enabled: self.icons_enabled(),
            ..self.config.clone()
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Gate, format and deliver one message
    ///
    /// Never fails: sink errors fall back to the fallback writer and are
    /// only reported at debug level.
    pub fn log(&self, message: &str, request: LogRequest<'_>) -> Outcome {
        if let Err(reason) = self.admit(request.severity, request.is_public) {
            self.metrics.inc_suppressed(reason);
            observability::record_suppressed(request.severity, reason.as_str());
            return Outcome::Suppressed(reason);
        }

        let record = LogRecord {
            message: self.render(message, &request),
            class: request.severity.sink_class(),
            subsystem: request
                .subsystem
                .unwrap_or(self.config.subsystem.as_str())
                .to_string(),
            category: request
                .category
                .unwrap_or(self.config.category.as_str())
                .to_string(),
        };
        self.deliver(&record, request.severity)
    }

    /// Info message with every default
    #[track_caller]
    pub fn log_message(&self, message: &str) -> Outcome {
        self.log(message, LogRequest::new())
    }

    #[track_caller]
    pub fn log_at(&self, severity: Severity, message: &str) -> Outcome {
        self.log(message, LogRequest::at(severity))
    }

    /// Log an error's `Display` text at error severity
    #[track_caller]
    pub fn log_error<E: Error + ?Sized>(&self, error: &E, is_public: bool) -> Outcome {
        let request = LogRequest::at(Severity::Error).public(is_public);
        self.log(&error.to_string(), request)
    }

    /// No-op for `None`, otherwise [`LogDispatcher::log_error`] (not public)
    #[track_caller]
    pub fn log_optional_error<E: Error + ?Sized>(&self, error: Option<&E>) -> Outcome {
        match error {
            Some(error) => self.log_error(error, false),
            None => Outcome::Suppressed(SuppressReason::NoError),
        }
    }

    /// Emission rule, evaluated in order: the production gate short-circuits
    /// before the threshold is consulted.
    fn admit(&self, severity: Severity, is_public: bool) -> Result<(), SuppressReason> {
        if !self.config.build_mode.is_debug() && !(is_public || self.override_policy.is_forced())
        {
            return Err(SuppressReason::ProductionGate);
        }
        if !severity.within(self.verbosity_threshold()) {
            return Err(SuppressReason::AboveThreshold);
        }
        Ok(())
    }

    fn render(&self, message: &str, request: &LogRequest<'_>) -> String {
        let symbol = if self.icons_enabled() {
            request.severity.symbol()
        } else {
            ""
        };
        let location = request.include_caller_info.then_some(&request.location);
        format_statement(location, symbol, message)
    }

    fn deliver(&self, record: &LogRecord, severity: Severity) -> Outcome {
        if let Some(sink) = &self.sink {
            match sink.emit(record) {
                Ok(()) => {
                    self.metrics.inc_emitted();
                    observability::record_emitted(severity, sink.name());
                    return Outcome::Emitted;
                }
                Err(e) => {
                    self.metrics.inc_sink_failures();
                    debug!(sink = sink.name(), error = %e, "Sink rejected record, using fallback");
                }
            }
        }

        match self.fallback.emit(record) {
            Ok(()) => {
                self.metrics.inc_fallback();
                observability::record_fallback(self.fallback.name());
                Outcome::FellBack
            }
            Err(e) => {
                self.metrics.inc_dropped();
                observability::record_dropped(self.fallback.name());
                debug!(sink = self.fallback.name(), error = %e, "Fallback write failed, record dropped");
                Outcome::Dropped
            }
        }
    }
}
