//! Logging infrastructure for the pathval library.
//!
//! The library itself only emits records through the [`log`] facade. This
//! module provides a simple stderr-based sink for binaries and tests that
//! want to see them, with three coarse verbosity levels.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted by [`init_logger`].
pub const ENV_LOG_MODE: &str = "PATHVAL_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use pathval::LogLevel;
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
    /// Everything, down to trace records.
    Verbose,
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

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathval::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` level let through at this setting.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Error,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Trace,
        }
    }
}

/// A simple stderr-based logger implementing [`log::Log`].
///
/// # Examples
///
/// ```
/// use pathval::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert_eq!(logger.level(), LogLevel::Normal);
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Install this logger as the global `log` sink.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.level_filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `PATHVAL_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use pathval::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    // CLI flags take precedence
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(ENV_LOG_MODE) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use serial_test::serial;

    fn metadata(level: Level) -> Metadata<'static> {
        Metadata::builder().level(level).target("pathval").build()
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("QUIET").unwrap(), LogLevel::Quiet);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_enabled_by_level() {
        let quiet = Logger::new(LogLevel::Quiet);
        assert!(quiet.enabled(&metadata(Level::Error)));
        assert!(!quiet.enabled(&metadata(Level::Warn)));

        let normal = Logger::default();
        assert!(normal.enabled(&metadata(Level::Warn)));
        assert!(!normal.enabled(&metadata(Level::Info)));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.enabled(&metadata(Level::Debug)));
        assert!(verbose.enabled(&metadata(Level::Trace)));
    }

    #[test]
    fn test_init_logger_flags() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        env::set_var(ENV_LOG_MODE, "verbose");
        assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);

        env::set_var(ENV_LOG_MODE, "invalid");
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);

        // CLI flag should override env
        env::set_var(ENV_LOG_MODE, "normal");
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);

        env::remove_var(ENV_LOG_MODE);
        assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
    }
}
