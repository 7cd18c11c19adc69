//! Logging infrastructure.
//!
//! The library emits diagnostics through the `log` facade. This module
//! provides the stderr backend a binary installs, with a small three-level
//! verbosity model.

use std::env;
use std::fmt;

use log::{Metadata, Record};

/// Output verbosity, ordered from least to most verbose.
///
/// # Examples
///
/// ```
/// use pathkit::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Errors only.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, and debug diagnostics.
    Verbose,
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes "quiet", "normal", and "verbose", case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level this setting lets through.
    #[must_use]
    pub fn max_level(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Error,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

/// A stderr backend for the `log` facade honoring a [`LogLevel`].
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger with the given verbosity.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured verbosity.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level.max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Install a global stderr logger and return the level it was given.
///
/// The priority order is:
/// 1. CLI flags (`verbose` wins over `quiet` when both are set)
/// 2. The `PATHKIT_LOG_MODE` environment variable
/// 3. Normal
///
/// Installation is attempted once per process; later calls still return the
/// level they resolved.
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var("PATHKIT_LOG_MODE")
            .ok()
            .and_then(|value| LogLevel::parse(&value).ok())
            .unwrap_or(LogLevel::Normal)
    };

    if log::set_boxed_logger(Box::new(Logger::new(level))).is_ok() {
        log::set_max_level(level.max_level());
    }
    level
}
