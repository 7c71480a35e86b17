//! `llog!` - format-style front end for [`LogDispatcher::log`](crate::LogDispatcher::log)
//!
//! ```ignore
//! use dispatcher::{llog, Severity};
//!
//! llog!(logger, "loaded {} items", count);
//! llog!(logger, Severity::Success, "saved {}", path);
//! llog!(logger, public Severity::Error, "upload failed: {}", err);
//! ```
//!
//! The caller's file and line are those of the macro invocation.

#[macro_export]
macro_rules! llog {
    ($logger:expr, public $severity:expr, $($arg:tt)+) => {
        $logger.log(
            &::std::format!($($arg)+),
            $crate::LogRequest::at($severity).public(true),
        )
    };
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.log(
            &::std::format!($fmt $(, $arg)*),
            $crate::LogRequest::new(),
        )
    };
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log(
            &::std::format!($($arg)+),
            $crate::LogRequest::at($severity),
        )
    };
}
