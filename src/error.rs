//! Module for the logger's error value type.
//!
//! This module defines the error value built by [`errorf!`](crate::errorf),
//! carrying a formatted message behind a caller-location prefix.
//!
//! # Details
//! The rendered message is a flat string: by default no underlying cause is
//! attached, so call sites that match on message text keep working. A cause
//! can be attached explicitly with [`LocatedError::with_source`], in which
//! case it is reachable through the standard `source()` chain.

use thiserror::Error;

use crate::caller::{Caller, rel_path};

/// Error value carrying a formatted message and the location it was built at.
///
/// Renders as `[!<file>:<line>]: <message>`, where `<file>` is the last two
/// segments of the caller's source path. When the path has fewer than two
/// segments the bracket prefix is empty and the message renders as
/// `: <message>`.
#[derive(Debug, Error)]
#[error("{prefix}: {message}")]
pub struct LocatedError {
    prefix: String,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl LocatedError {
    /// Build an error value with a location prefix derived from `caller`.
    ///
    /// # Arguments
    /// * `caller`  - The call site to derive the bracket prefix from.
    /// * `message` - The already-formatted message body.
    ///
    /// # Returns
    /// * `LocatedError` - An error with no attached cause.
    pub fn new(caller: Caller<'_>, message: String) -> LocatedError {
        let prefix = match rel_path(caller.file) {
            Some(path) => format!("[!{}:{}]", path, caller.line),
            None => String::new(),
        };
        LocatedError {
            prefix,
            message,
            source: None,
        }
    }

    /// Attach an underlying cause to this error.
    ///
    /// The rendered message does not change; the cause is only reachable
    /// through `source()`.
    pub fn with_source(
        mut self,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> LocatedError {
        self.source = Some(Box::new(source));
        self
    }

    /// The formatted message body, without the location prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}
