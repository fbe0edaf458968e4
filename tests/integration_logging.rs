// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration test for the global logging setup.
//!
//! Installing a global subscriber is once-per-process, so this file holds a
//! single test.

use envvar_rs::Accessors;
use envvar_rs::env::Env;
use envvar_rs::logging::{LogConfig, LogLevel, init_logging};

#[test]
fn logging_writes_accessor_events_to_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let log_path = dir.path().join("nested").join("envvar.log");

    let env = Env::new()
        .with("APP_LOG_LEVEL", "off")
        .with("APP_LOG_FILE", log_path.display().to_string())
        .with("APP_LOG_FILE_LEVEL", "debug");
    let config = LogConfig::from_env(&Accessors::new(env), "APP").expect("valid log config");
    assert_eq!(config.file_level(), LogLevel::DEBUG);

    let guard = init_logging(&config).expect("logging should initialize");
    assert!(
        init_logging(&LogConfig::default()).is_err(),
        "second global subscriber must be rejected"
    );

    let port = Accessors::new(Env::new()).number_or("PORT", 8080.0);
    assert_eq!(port, Ok(8080.0));
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).expect("log file should exist");
    assert!(contents.contains("using default"), "{contents}");
    assert!(contents.contains("PORT"), "{contents}");
}
