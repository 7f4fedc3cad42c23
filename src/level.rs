//! Module for the logger verbosity level.
//!
//! This module defines the ordered set of verbosity levels and conversions
//! between levels and their textual and numeric representations.
//!
//! # Details
//! Levels are ordered so that gating reduces to a comparison: a message of a
//! given severity is emitted when the current level is at least that severity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LocatedError;

/// Verbosity level controlling which messages are emitted.
///
/// `Silent` suppresses info and debug output (warnings are always emitted),
/// `Info` is the default on process start, and `Debug` enables everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Suppress info and debug output.
    Silent = 0,
    /// Emit info output (the default).
    #[default]
    Info = 1,
    /// Emit info and debug output.
    Debug = 2,
}

impl Level {
    /// Reconstruct a level from its stored numeric form.
    ///
    /// Values above `Debug` clamp to `Debug`; only values produced by
    /// `as u8` on a `Level` are ever stored, so the clamp is unreachable
    /// in practice.
    pub(crate) fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Silent,
            1 => Level::Info,
            _ => Level::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Silent => "silent",
            Level::Info => "info",
            Level::Debug => "debug",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Level {
    type Err = LocatedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Level::Silent),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            other => Err(crate::errorf!("unknown verbosity level: {}", other)),
        }
    }
}
