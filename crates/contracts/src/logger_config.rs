//! Logger configuration contracts that can be shared across crates.

use serde::{Deserialize, Serialize};

use crate::{BuildMode, Severity, SinkType, FORCE_LOGGING_VAR};

/// Default sink subsystem identifier.
pub const DEFAULT_SUBSYSTEM: &str = "com.lightlogger.system";

/// Default sink category identifier.
pub const DEFAULT_CATEGORY: &str = "general";

/// Logger configuration
///
/// Owned by a single logger instance. `verbosity_threshold` and
/// `icons_enabled` remain adjustable on the live logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Most verbose severity still emitted
    pub verbosity_threshold: Severity,

    /// Prefix messages with the severity symbol
    pub icons_enabled: bool,

    /// Build profile to behave as
    pub build_mode: BuildMode,

    /// Default sink subsystem
    pub subsystem: String,

    /// Default sink category
    pub category: String,

    /// Environment variable whose presence forces logging
    pub force_logging_var: String,

    /// Where emitted records go
    pub sink: SinkType,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            verbosity_threshold: Severity::Custom,
            icons_enabled: true,
            build_mode: BuildMode::current(),
            subsystem: DEFAULT_SUBSYSTEM.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            force_logging_var: FORCE_LOGGING_VAR.to_string(),
            sink: SinkType::default(),
        }
    }
}

impl LoggerConfig {
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.verbosity_threshold = threshold;
        self
    }

    pub fn with_icons(mut self, enabled: bool) -> Self {
        self.icons_enabled = enabled;
        self
    }

    pub fn with_build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = mode;
        self
    }
}
