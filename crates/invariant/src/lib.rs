//! # Invariant
//!
//! Debug-time invariant checks. Unlike logging, a failed check halts the
//! thread with a panic; in release mode the condition is not evaluated.
//!
//! ```should_panic
//! # if cfg!(debug_assertions) {
//! invariant::assert_condition(|| 1 + 1 == 3, "arithmetic is broken");
//! # } else { panic!() }
//! ```

use contracts::BuildMode;

/// Check `condition` using the build mode of the current compilation.
#[track_caller]
pub fn assert_condition(condition: impl FnOnce() -> bool, message: &str) {
    InvariantChecker::default().check(condition, message);
}

/// Invariant checker bound to an explicit build mode
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantChecker {
    build_mode: BuildMode,
}

impl InvariantChecker {
    pub fn new(build_mode: BuildMode) -> Self {
        Self { build_mode }
    }

    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    /// Evaluate `condition` in debug mode and panic with `message` if false.
    ///
    /// Release mode skips the closure entirely.
    #[track_caller]
    pub fn check(&self, condition: impl FnOnce() -> bool, message: &str) {
        if !self.build_mode.is_debug() {
            return;
        }
        if !condition() {
            tracing::error!(invariant = message, "Invariant violated");
            panic!("{message}");
        }
    }
}
