//! Leveled console/file logger with colorized severity tags and
//! caller-location annotations.
//!
//! This crate provides print-style helpers (info, debug, warn, error) that
//! gate output by a verbosity level, prefix lines with a severity marker and
//! optionally the calling source location, and colorize output by severity.
//!
//! # Details
//! A process-wide default logger backs the free functions and macros; host
//! applications that prefer explicit injection can construct a [`Logger`] of
//! their own and call the same operations on it. Logging never fails: setup
//! problems degrade to console-only output and location problems degrade to
//! omitting the location.
//!
//! # Examples
//! ```rust
//! use printlog::Level;
//!
//! printlog::set_level(Level::Debug);
//! printlog::infoln("starting up");
//! printlog::infof!("loaded {} entries", 3);
//! printlog::debugln("cache warm");
//! printlog::warnln("disk nearly full");
//!
//! let err = printlog::errorf!("bad input: {}", "x");
//! assert!(err.to_string().ends_with(": bad input: x"));
//! ```

mod caller;
mod error;
mod level;
mod logger;
mod macros;

pub use caller::Caller;
pub use error::LocatedError;
pub use level::Level;
pub use logger::Logger;

use once_cell::sync::Lazy;

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// The process-wide default logger, writing to standard output.
pub fn logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Set the verbosity level of the default logger.
pub fn set_level(level: Level) {
    DEFAULT_LOGGER.set_level(level);
}

/// Attach a log file to the default logger.
///
/// See [`Logger::set_log_file`] for the naming scheme and the best-effort
/// failure policy.
pub fn set_log_file(prefix: &str) {
    DEFAULT_LOGGER.set_log_file(prefix);
}

/// Print an info line through the default logger.
pub fn infoln(text: &str) {
    DEFAULT_LOGGER.infoln(text);
}

/// Print a warning line through the default logger, regardless of level.
pub fn warnln(text: &str) {
    DEFAULT_LOGGER.warnln(text);
}

/// Print a debug line through the default logger, tagged with the call site.
#[track_caller]
pub fn debugln(text: &str) {
    DEFAULT_LOGGER.debugln(text);
}
