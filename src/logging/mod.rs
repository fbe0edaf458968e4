// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging infrastructure using the `tracing` ecosystem.
//!
//! The accessors only emit events (`debug!` on default fallback, `trace!` on
//! coercion, never the values themselves). This module lets an application
//! install a subscriber, configured from its own environment.
//!
//! ```text
//! LogConfig::from_env(&accessors, "APP")
//!   APP_LOG_LEVEL        enum     0-6 | off..dump   (default info)
//!   APP_LOG_FILE         string   optional
//!   APP_LOG_FILE_LEVEL   enum     (default: console level)
//!   APP_LOG_TIMESTAMPS   boolean  (default true)
//!   APP_LOG_TARGET       boolean  (default false)
//!        |
//!        v
//! init_logging(&LogConfig)
//!    registry
//!    |       |
//!    v       v
//! Console   File (optional)
//! EnvFilter EnvFilter
//!           non_blocking
//!        |
//!        v
//!    LogGuard (flush on drop)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO
//!            4=DEBUG  5=TRACE  6=DUMP
//! ```


use std::fmt;
use std::path::Path;

use anyhow::Context;
use bon::Builder;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self as tracing_fmt, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::accessor::Accessors;
use crate::env::ReadEnv;
use crate::error::{EnvResult, EnvVarError, Result, ValueReason};

/// Log level (0-6) for configuration.
///
/// - 0: Silent - no output at all
/// - 1: Error - only errors
/// - 2: Warn - errors and warnings
/// - 3: Info - default, general information
/// - 4: Debug - detailed debugging information
/// - 5: Trace - very verbose tracing
/// - 6: Dump - same filter as trace, kept for compatibility with 0-6 scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);
    pub const DUMP: Self = Self(6);

    /// Names accepted by [`from_name`](Self::from_name), indexed by level.
    pub const NAMES: [&'static str; 7] = ["off", "error", "warn", "info", "debug", "trace", "dump"];

    /// Every spelling accepted in `*_LOG_LEVEL` variables.
    pub const ACCEPTED: [&'static str; 14] = [
        "0", "1", "2", "3", "4", "5", "6", "off", "error", "warn", "info", "debug", "trace",
        "dump",
    ];

    /// Convert from u8 value, returning None if out of range.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= 6 { Some(Self(level)) } else { None }
    }

    /// Parses a level number (`"0"`-`"6"`) or name (`"off"`-`"dump"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if let Ok(level) = name.parse::<u8>() {
            return Self::from_u8(level);
        }
        Self::NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(|i| u8::try_from(i).ok())
            .map(Self)
    }

    /// Get the raw u8 value.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Get the level name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        Self::NAMES[self.0 as usize]
    }

    /// Convert to tracing Level.
    #[must_use]
    pub const fn to_tracing_level(self) -> Option<Level> {
        match self.0 {
            0 => None,
            1 => Some(Level::ERROR),
            2 => Some(Level::WARN),
            3 => Some(Level::INFO),
            4 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }

    /// Convert to `EnvFilter` directive string.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
    #[builder(setters(name = with_show_timestamps), default = true)]
    show_timestamps: bool,
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    /// Reads the logging configuration from `<prefix>_LOG_*` variables.
    ///
    /// # Errors
    ///
    /// Returns the accessor error of the first malformed variable.
    pub fn from_env<E: ReadEnv>(vars: &Accessors<E>, prefix: &str) -> EnvResult<Self> {
        let key = |suffix: &str| format!("{prefix}_LOG_{suffix}");

        let console_level = read_level(vars, &key("LEVEL"), LogLevel::INFO)?;
        let file_level = read_level(vars, &key("FILE_LEVEL"), console_level)?;

        let file_key = key("FILE");
        let log_file = if vars.env().contains(&file_key) {
            Some(vars.string(&file_key)?).filter(|path| !path.is_empty())
        } else {
            None
        };

        Ok(Self::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(log_file)
            .with_show_timestamps(vars.boolean_or(&key("TIMESTAMPS"), true)?)
            .with_show_target(vars.boolean_or(&key("TARGET"), false)?)
            .build())
    }

    /// Get the console log level.
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    /// Get the file log level.
    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    /// Get the log file path if set.
    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    /// Check if timestamps should be shown in console output.
    #[must_use]
    pub const fn show_timestamps(&self) -> bool {
        self.show_timestamps
    }

    /// Check if target (module path) should be shown in output.
    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }
}

fn read_level<E: ReadEnv>(
    vars: &Accessors<E>,
    name: &str,
    default: LogLevel,
) -> EnvResult<LogLevel> {
    let raw = vars.one_of_or(name, &LogLevel::ACCEPTED, default.name())?;
    LogLevel::from_name(&raw).ok_or_else(|| {
        EnvVarError::value(
            name,
            ValueReason::NotOneOf(LogLevel::ACCEPTED.iter().map(ToString::to_string).collect()),
        )
    })
}

/// RAII guard that keeps the logging system alive.
/// When dropped, flushes all pending log writes.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system with the given configuration.
///
/// Returns a guard that must be kept alive for the duration of the program.
/// When the guard is dropped, pending logs are flushed.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created, or if a
/// global subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use envvar_rs::accessor::Accessors;
/// use envvar_rs::logging::{LogConfig, init_logging};
///
/// let config = LogConfig::from_env(&Accessors::system(), "APP")?;
/// let _guard = init_logging(&config)?;
/// tracing::info!("Logging initialized");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_filter = EnvFilter::new(config.console_level().to_filter_string());

    let console_layer = if config.show_timestamps() {
        tracing_fmt::layer()
            .with_target(config.show_target())
            .with_level(true)
            .with_ansi(true)
            .with_filter(console_filter)
            .boxed()
    } else {
        tracing_fmt::layer()
            .without_time()
            .with_target(config.show_target())
            .with_level(true)
            .with_ansi(true)
            .with_filter(console_filter)
            .boxed()
    };

    let (file_layer, file_guard) = if let Some(log_path) = config.log_file() {
        let log_path = Path::new(log_path);

        if let Some(parent) = log_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }

        let file = std::fs::File::create(log_path)
            .with_context(|| format!("failed to create log file {}", log_path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        let file_filter = EnvFilter::new(config.file_level().to_filter_string());

        let layer = tracing_fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_level(true)
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(file_filter);

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install global tracing subscriber")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
