//! Severity scale and its mapping onto sink classes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ContractError;

/// Message severity.
///
/// Variants are declared in rank order, so the derived `Ord` is the
/// verbosity order: `None` is the most severe (always shown once the gate
/// opens), `Custom` the most verbose.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Severity {
    None = 0,
    Error,
    Warning,
    Success,
    #[default]
    Info,
    Timer,
    AppEvent,
    Custom,
}

impl Severity {
    /// All severities, in rank order.
    pub const ALL: [Severity; 8] = [
        Severity::None,
        Severity::Error,
        Severity::Warning,
        Severity::Success,
        Severity::Info,
        Severity::Timer,
        Severity::AppEvent,
        Severity::Custom,
    ];

    /// Numeric rank (0 = `None` ... 7 = `Custom`).
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Severity::rank`].
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(usize::from(rank)).copied()
    }

    /// Symbol prepended to the message when icons are enabled.
    pub const fn symbol(self) -> &'static str {
        match self {
            Severity::None => "",
            Severity::Error => "⛔️",
            Severity::Warning => "⚠️",
            Severity::Success => "✅",
            Severity::Info => "📬",
            Severity::Timer => "⏲",
            Severity::AppEvent => "📱",
            Severity::Custom => "✏️",
        }
    }

    /// Severity class understood by the sink.
    pub const fn sink_class(self) -> SinkClass {
        match self {
            Severity::Info => SinkClass::Info,
            Severity::Error | Severity::Warning => SinkClass::Error,
            Severity::None
            | Severity::Success
            | Severity::Timer
            | Severity::AppEvent
            | Severity::Custom => SinkClass::Default,
        }
    }

    /// Stable lowercase name, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Timer => "timer",
            Severity::AppEvent => "app_event",
            Severity::Custom => "custom",
        }
    }

    /// Whether a message at `self` passes a verbosity threshold.
    #[inline]
    pub fn within(self, threshold: Severity) -> bool {
        self <= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "success" => Ok(Self::Success),
            "info" => Ok(Self::Info),
            "timer" => Ok(Self::Timer),
            "app_event" | "appevent" | "app-event" => Ok(Self::AppEvent),
            "custom" => Ok(Self::Custom),
            _ => Err(ContractError::UnknownSeverity(s.to_string())),
        }
    }
}

/// Severity class of the external sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkClass {
    Error,
    Info,
    Default,
}

impl SinkClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            SinkClass::Error => "error",
            SinkClass::Info => "info",
            SinkClass::Default => "default",
        }
    }
}

impl fmt::Display for SinkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
