//! # Contracts
//!
//! Frozen interface contracts shared by every llog crate: the severity scale,
//! the sink interface, the override policy and the logger configuration.
//! All other crates depend on this crate, reverse dependencies are prohibited.
//!
//! ## Emission rule
//! A message is emitted iff
//! `(debug build || public || override present) && severity <= threshold`.

mod error;
mod location;
mod logger_config;
mod policy;
mod severity;
mod sink;

pub use error::*;
pub use location::CallerLocation;
pub use logger_config::*;
pub use policy::*;
pub use severity::*;
pub use sink::*;
