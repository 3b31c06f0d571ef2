//! stderr backend for the `log` facade.
//!
//! Library code only ever calls `log::error!` and friends. Binaries install
//! a [`Logger`] once at startup through [`init_logger`].

use std::env;
use std::fmt;
use std::str::FromStr;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no CLI flag selects a level.
pub const LOG_MODE_ENV: &str = "WINFS_LOG_MODE";

/// How much the process reports on stderr.
///
/// ```
/// use winfs::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("Verbose".parse::<LogLevel>(), Ok(LogLevel::Verbose));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything down to debug, prefixed with the emitting module.
    Verbose,
}

impl LogLevel {
    /// The `log` crate filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// Writes enabled records to stderr as `LEVEL: message`.
///
/// ```
/// use winfs::{LogLevel, Logger};
///
/// assert_eq!(Logger::default().level(), LogLevel::Normal);
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger emitting records up to `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn format(&self, record: &Record<'_>) -> String {
        if self.level == LogLevel::Verbose {
            format!("{} [{}]: {}", record.level(), record.target(), record.args())
        } else {
            format!("{}: {}", record.level(), record.args())
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

/// Picks the level: `verbose` beats `quiet`, either beats `WINFS_LOG_MODE`,
/// and an unset or unparsable variable means [`LogLevel::Normal`].
#[must_use]
pub fn resolve_level(verbose: bool, quiet: bool) -> LogLevel {
    match (verbose, quiet) {
        (true, _) => LogLevel::Verbose,
        (false, true) => LogLevel::Quiet,
        (false, false) => env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default(),
    }
}

/// Installs the process logger and returns the level it uses.
///
/// A logger can only be installed once per process; later calls resolve and
/// return a level without replacing the installed one.
///
/// ```
/// use winfs::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false), LogLevel::Verbose);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = resolve_level(verbose, quiet);
    if log::set_boxed_logger(Box::new(Logger::new(level))).is_ok() {
        log::set_max_level(level.filter());
    }
    level
}
