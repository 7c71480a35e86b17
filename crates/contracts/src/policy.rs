//! Production gate inputs: build mode and the forced-logging override.

use serde::{Deserialize, Serialize};

/// Name of the environment variable whose presence forces logging.
pub const FORCE_LOGGING_VAR: &str = "LLOG_FORCE_LOGGING";

/// Build profile the logger behaves as.
///
/// Runtime value rather than a `cfg` branch so both gates can be exercised
/// from the same test binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Profile of the current compilation (`debug_assertions`).
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }

    pub const fn is_debug(self) -> bool {
        matches!(self, BuildMode::Debug)
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::current()
    }
}

/// Decides whether non-public messages are forced through in release mode.
pub trait OverridePolicy: Send + Sync {
    /// Queried on every gated call, never cached by the caller.
    fn is_forced(&self) -> bool;
}

/// Reads the process environment on every query.
///
/// Presence alone counts: an empty value still forces logging.
#[derive(Debug, Clone)]
pub struct EnvOverride {
    var: String,
}

impl EnvOverride {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvOverride {
    fn default() -> Self {
        Self::new(FORCE_LOGGING_VAR)
    }
}

impl OverridePolicy for EnvOverride {
    fn is_forced(&self) -> bool {
        std::env::var_os(&self.var).is_some()
    }
}

/// Constant answer, for hosts that resolve the override up front and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedOverride(pub bool);

impl OverridePolicy for FixedOverride {
    fn is_forced(&self) -> bool {
        self.0
    }
}

impl<F> OverridePolicy for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_forced(&self) -> bool {
        self()
    }
}
