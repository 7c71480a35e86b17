//! SyslogSink - the platform system log on unix
//!
//! Calls `openlog`/`syslog` from libc directly. The connection is opened
//! once per process and never closed, matching the process-lifetime
//! semantics of syslog's ident parameter.

use std::ffi::CString;
use std::sync::OnceLock;

use contracts::{ContractError, LogRecord, LogSink, SinkClass};

/// Ident of the first SyslogSink opened in this process.
static IDENT: OnceLock<CString> = OnceLock::new();

/// Sink writing to syslog(3) under the `LOG_USER` facility
///
/// The subsystem given at open time becomes the syslog ident; later sinks
/// reuse the first ident. Each line carries the record's own subsystem and
/// category, see [`SyslogSink::line`].
pub struct SyslogSink {
    name: String,
}

impl SyslogSink {
    /// Open the process-wide syslog connection with `ident`
    ///
    /// # Errors
    /// `ident` contains a NUL byte.
    pub fn open(ident: &str) -> Result<Self, ContractError> {
        let candidate = CString::new(ident).map_err(|_| {
            ContractError::config_validation("subsystem", "syslog ident contains a NUL byte")
        })?;

        let mut opened_now = false;
        let ident = IDENT.get_or_init(|| {
            opened_now = true;
            candidate
        });

        if opened_now {
            // SAFETY: runs once, guarded by the OnceLock above. The ident
            // pointer stays valid for the process lifetime because it lives
            // in a static.
            unsafe {
                libc::openlog(ident.as_ptr(), libc::LOG_PID, libc::LOG_USER);
            }
        }

        Ok(Self {
            name: "syslog".to_string(),
        })
    }

    /// Text handed to syslog(3): `"{subsystem}[{category}]: {message}"`
    pub fn line(record: &LogRecord) -> String {
        format!("{}[{}]: {}", record.subsystem, record.category, record.message)
    }

    /// syslog(3) priority for a sink class
    pub fn priority(class: SinkClass) -> libc::c_int {
        match class {
            SinkClass::Error => libc::LOG_ERR,
            SinkClass::Info => libc::LOG_INFO,
            SinkClass::Default => libc::LOG_NOTICE,
        }
    }
}

impl LogSink for SyslogSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, record: &LogRecord) -> Result<(), ContractError> {
        let message = CString::new(Self::line(record))
            .map_err(|_| ContractError::sink_write(&self.name, "message contains a NUL byte"))?;

        // SAFETY: both arguments are valid NUL-terminated strings. The
        // message goes through "%s" so '%' in user text is never read as a
        // format directive.
        unsafe {
            libc::syslog(
                libc::LOG_USER | Self::priority(record.class),
                c"%s".as_ptr(),
                message.as_ptr(),
            );
        }
        Ok(())
    }
}
