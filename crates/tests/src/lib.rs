//! # Integration Tests
//!
//! Cross-crate tests: config file -> dispatcher -> sinks, plus the emission
//! rule checked over every severity pair.

#[cfg(test)]
mod contract_tests {
    use contracts::{Severity, FORCE_LOGGING_VAR};

    #[test]
    fn test_severity_table_and_override_name() {
        assert_eq!(Severity::ALL.len(), 8);
        assert_eq!(Severity::ALL.first(), Some(&Severity::None));
        assert_eq!(Severity::ALL.last(), Some(&Severity::Custom));
        assert_eq!(FORCE_LOGGING_VAR, "LLOG_FORCE_LOGGING");
    }
}

#[cfg(test)]
mod emission_rule_tests {
    use contracts::{BuildMode, FixedOverride, LoggerConfig, Severity};
    use dispatcher::{LogDispatcher, LogRequest, MemorySink, Outcome, SuppressReason};

    fn logger(config: LoggerConfig, forced: bool) -> (LogDispatcher, MemorySink) {
        let sink = MemorySink::new("memory");
        let logger = LogDispatcher::builder(config)
            .sink(sink.clone())
            .fallback(MemorySink::new("fallback"))
            .override_policy(FixedOverride(forced))
            .build();
        (logger, sink)
    }

    /// rank(s1) <= rank(s2) with threshold s2 emits s1; otherwise suppressed.
    #[test]
    fn test_threshold_order_over_all_pairs() {
        let (logger, sink) = logger(LoggerConfig::default().with_build_mode(BuildMode::Debug), false);

        for threshold in Severity::ALL {
            logger.set_verbosity_threshold(threshold);
            for severity in Severity::ALL {
                sink.clear();
                let outcome = logger.log_at(severity, "sample");
                if severity.rank() <= threshold.rank() {
                    assert_eq!(outcome, Outcome::Emitted, "{severity} under {threshold}");
                    assert_eq!(sink.len(), 1);
                } else {
                    assert_eq!(
                        outcome,
                        Outcome::Suppressed(SuppressReason::AboveThreshold),
                        "{severity} under {threshold}"
                    );
                    assert!(sink.is_empty());
                }
            }
        }
    }

    /// Threshold `none` lets only `none` through, even for public or forced
    /// messages in release mode.
    #[test]
    fn test_none_threshold_blocks_everything_else() {
        let config = LoggerConfig::default()
            .with_build_mode(BuildMode::Release)
            .with_threshold(Severity::None);
        let (logger, sink) = logger(config, true);

        for severity in Severity::ALL {
            let outcome = logger.log("x", LogRequest::at(severity).public(true));
            assert_eq!(outcome.is_delivered(), severity == Severity::None, "{severity}");
        }
        assert_eq!(sink.len(), 1);
    }

    /// Every combination of the three-way gate in release mode.
    #[test]
    fn test_release_gate_truth_table() {
        let release = LoggerConfig::default().with_build_mode(BuildMode::Release);
        for forced in [false, true] {
            let (logger, _) = logger(release.clone(), forced);
            for is_public in [false, true] {
                let outcome = logger.log("m", LogRequest::new().public(is_public));
                assert_eq!(
                    outcome.is_delivered(),
                    is_public || forced,
                    "public={is_public} forced={forced}"
                );
            }
        }
    }

    /// Debug mode ignores both public flag and override.
    #[test]
    fn test_debug_bypasses_gate() {
        let (logger, sink) = logger(LoggerConfig::default().with_build_mode(BuildMode::Debug), false);
        assert!(logger.log_message("private").is_delivered());
        assert_eq!(sink.len(), 1);
    }
}

#[cfg(test)]
mod environment_override_tests {
    use contracts::{BuildMode, LoggerConfig, FORCE_LOGGING_VAR};
    use dispatcher::{LogDispatcher, MemorySink, Outcome, SuppressReason};

    fn release_logger(var: &str) -> (LogDispatcher, MemorySink) {
        let sink = MemorySink::new("memory");
        let config = LoggerConfig {
            force_logging_var: var.to_string(),
            ..LoggerConfig::default().with_build_mode(BuildMode::Release)
        };
        let logger = LogDispatcher::builder(config)
            .sink(sink.clone())
            .fallback(MemorySink::new("fallback"))
            .build();
        (logger, sink)
    }

    #[test]
    fn test_override_variable_read_on_every_call() {
        let var = "LLOG_TESTS_FORCE_EVERY_CALL";
        std::env::remove_var(var);
        let (logger, sink) = release_logger(var);

        assert_eq!(
            logger.log_message("before"),
            Outcome::Suppressed(SuppressReason::ProductionGate)
        );

        std::env::set_var(var, "");
        assert_eq!(logger.log_message("during"), Outcome::Emitted);

        std::env::remove_var(var);
        assert!(!logger.log_message("after").is_delivered());

        assert_eq!(sink.len(), 1);
        assert!(sink.messages()[0].ends_with("during"));
    }

    #[test]
    fn test_default_variable_name_forces_logging() {
        std::env::set_var(FORCE_LOGGING_VAR, "1");
        let (logger, sink) = release_logger(FORCE_LOGGING_VAR);
        let outcome = logger.log_message("forced");
        std::env::remove_var(FORCE_LOGGING_VAR);

        assert_eq!(outcome, Outcome::Emitted);
        assert_eq!(sink.len(), 1);
    }
}

#[cfg(test)]
mod formatting_tests {
    use contracts::{BuildMode, CallerLocation, LoggerConfig, Severity};
    use dispatcher::{LogDispatcher, LogRequest, MemorySink};

    fn logger(icons: bool) -> (LogDispatcher, MemorySink) {
        let sink = MemorySink::new("memory");
        let config = LoggerConfig::default()
            .with_build_mode(BuildMode::Debug)
            .with_icons(icons);
        let logger = LogDispatcher::builder(config).sink(sink.clone()).build();
        (logger, sink)
    }

    #[test]
    fn test_saved_example() {
        let (logger, sink) = logger(true);
        logger.log(
            "Saved",
            LogRequest::at(Severity::Success).location(CallerLocation::new("Foo.swift", 42)),
        );
        assert_eq!(sink.messages(), vec!["[Foo.swift:42] ✅ Saved".to_string()]);
    }

    #[test]
    fn test_segments_can_be_turned_off() {
        let (logger, sink) = logger(false);
        logger.log("Saved", LogRequest::at(Severity::Success).caller_info(false));

        let message = &sink.messages()[0];
        assert!(!message.contains('✅'));
        assert!(!message.contains('['));
        assert!(message.ends_with("Saved"));
    }
}

#[cfg(test)]
mod error_adapter_tests {
    use contracts::{BuildMode, LoggerConfig, SinkClass};
    use dispatcher::{LogDispatcher, MemorySink};
    use std::fmt;

    #[derive(Debug)]
    struct UploadError;

    impl fmt::Display for UploadError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("upload rejected")
        }
    }

    impl std::error::Error for UploadError {}

    #[test]
    fn test_absent_error_never_reaches_sink() {
        let sink = MemorySink::new("memory");
        let fallback = MemorySink::new("fallback");
        let logger = LogDispatcher::builder(LoggerConfig::default().with_build_mode(BuildMode::Debug))
            .sink(sink.clone())
            .fallback(fallback.clone())
            .build();

        logger.log_optional_error(None::<&UploadError>);
        assert!(sink.is_empty());
        assert!(fallback.is_empty());
        assert_eq!(logger.metrics().suppressed(), 0);
    }

    #[test]
    fn test_custom_error_logged_at_error_class() {
        let sink = MemorySink::new("memory");
        let logger = LogDispatcher::builder(LoggerConfig::default().with_build_mode(BuildMode::Debug))
            .sink(sink.clone())
            .build();

        logger.log_optional_error(Some(&UploadError));
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].class, SinkClass::Error);
        assert!(records[0].message.ends_with("⛔️ upload rejected"));
    }
}

#[cfg(test)]
mod fallback_tests {
    use contracts::{BuildMode, LoggerConfig};
    use dispatcher::{LogDispatcher, MemorySink, Outcome, UnavailableSink};

    #[test]
    fn test_broken_fallback_counts_nothing_delivered() {
        let logger = LogDispatcher::builder(LoggerConfig::default().with_build_mode(BuildMode::Debug))
            .sink(UnavailableSink::new("primary"))
            .fallback(UnavailableSink::new("broken_stdout"))
            .build();

        assert!(!logger.log_message("lost").is_delivered());
        assert_eq!(logger.metrics().delivered(), 0);
    }

    #[test]
    fn test_working_fallback_counts_delivery() {
        let fallback = MemorySink::new("fallback");
        let logger = LogDispatcher::builder(LoggerConfig::default().with_build_mode(BuildMode::Debug))
            .sink(UnavailableSink::new("primary"))
            .fallback(fallback.clone())
            .build();

        assert_eq!(logger.log_message("kept"), Outcome::FellBack);
        assert_eq!(logger.metrics().delivered(), 1);
        assert_eq!(fallback.len(), 1);
    }
}

#[cfg(test)]
mod config_pipeline_tests {
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::Severity;
    use dispatcher::{create_dispatcher, LogDispatcher, MemorySink, Outcome};

    const CONFIG: &str = r#"
verbosity_threshold = "success"
icons_enabled = true
build_mode = "debug"
subsystem = "com.example.tests"
category = "pipeline"
sink = "tracing"
"#;

    #[test]
    fn test_loaded_config_drives_dispatcher() {
        let config = ConfigLoader::load_from_str(CONFIG, ConfigFormat::Toml).unwrap();
        let sink = MemorySink::new("memory");
        let logger = LogDispatcher::builder(config).sink(sink.clone()).build();

        assert_eq!(logger.log_at(Severity::Success, "ok"), Outcome::Emitted);
        assert!(!logger.log_at(Severity::Info, "too chatty").is_delivered());

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subsystem, "com.example.tests");
        assert_eq!(records[0].category, "pipeline");
    }

    #[test]
    fn test_create_dispatcher_from_loaded_config() {
        let config = ConfigLoader::load_from_str(CONFIG, ConfigFormat::Toml).unwrap();
        let logger = create_dispatcher(config).unwrap();
        assert_eq!(logger.log_at(Severity::Error, "to tracing"), Outcome::Emitted);
        assert_eq!(logger.metrics().emitted, 1);
    }
}

#[cfg(test)]
mod invariant_tests {
    use contracts::{BuildMode, LoggerConfig};
    use dispatcher::{LogDispatcher, MemorySink};
    use invariant::InvariantChecker;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    /// A failed check halts before anything further is logged.
    #[test]
    fn test_failed_invariant_halts_before_emission() {
        let sink = MemorySink::new("memory");
        let logger = LogDispatcher::builder(LoggerConfig::default().with_build_mode(BuildMode::Debug))
            .sink(sink.clone())
            .build();
        let checker = InvariantChecker::new(BuildMode::Debug);

        let result = catch_unwind(AssertUnwindSafe(|| {
            checker.check(|| false, "invariant X");
            logger.log_message("unreachable");
        }));

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("invariant X"));
        assert!(sink.is_empty());
    }
}

#[cfg(test)]
mod concurrency_tests {
    use contracts::{BuildMode, LoggerConfig, Severity};
    use dispatcher::{LogDispatcher, MemorySink};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_dispatcher_across_threads() {
        let sink = MemorySink::new("memory");
        let logger = Arc::new(
            LogDispatcher::builder(LoggerConfig::default().with_build_mode(BuildMode::Debug))
                .sink(sink.clone())
                .build(),
        );

        let workers: Vec<_> = (0..4)
            .map(|i| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for j in 0..25 {
                        logger.log_at(Severity::Timer, &format!("worker {i} tick {j}"));
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(sink.len(), 100);
        assert_eq!(logger.metrics().emitted, 100);
    }
}
