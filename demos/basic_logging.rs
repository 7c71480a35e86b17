//! Basic Logging Demo
//!
//! Loads a logger config, initializes tracing and walks through every
//! severity, the release gate and the error adapters.
//!
//! Run with: cargo run -p llog_demos --bin basic_logging [config_path]
//! Set LLOG_FORCE_LOGGING (or put it in .env) to force output in release builds.

use std::path::PathBuf;

use anyhow::Result;
use config_loader::ConfigLoader;
use contracts::{LoggerConfig, Severity};
use dispatcher::{create_dispatcher, llog, LogRequest};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init()?;

    let config = load_config()?;
    info!(
        threshold = %config.verbosity_threshold,
        build_mode = ?config.build_mode,
        sink = ?config.sink,
        "Logger config loaded"
    );

    let logger = create_dispatcher(config)?;

    // ==== Every severity ====
    for severity in Severity::ALL {
        llog!(logger, severity, "severity {} (rank {})", severity, severity.rank());
    }

    // ==== Public messages pass the release gate ====
    llog!(logger, public Severity::Success, "public message, visible in release");

    // ==== Runtime threshold / icon changes ====
    logger.set_verbosity_threshold(Severity::Warning);
    let outcome = logger.log_at(Severity::Info, "too verbose for the new threshold");
    info!(?outcome, "Info after lowering threshold");

    logger.set_icons_enabled(false);
    logger.log(
        "no icon, no caller",
        LogRequest::at(Severity::Warning).caller_info(false),
    );

    // ==== Error adapters ====
    let missing = std::fs::read_to_string("/definitely/not/here").err();
    logger.log_optional_error(missing.as_ref());
    logger.log_optional_error(None::<&std::io::Error>);

    invariant::assert_condition(|| logger.metrics().delivered() > 0, "demo produced no output");

    let metrics = logger.metrics();
    info!(
        emitted = metrics.emitted,
        fallback = metrics.fallback,
        suppressed = metrics.suppressed(),
        "Demo complete"
    );
    Ok(())
}

fn load_config() -> Result<LoggerConfig> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/llog.toml")));

    if path.exists() {
        info!(path = %path.display(), "Loading config file");
        Ok(ConfigLoader::load_from_path(&path)?)
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        Ok(LoggerConfig::default())
    }
}
