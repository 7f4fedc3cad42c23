//! Module for the logger instance and its print operations.
//!
//! This module defines the [`Logger`] struct holding the verbosity level and
//! output destinations, together with every severity print operation.
//!
//! # Details
//! A logger writes to a console destination (stdout by default) and, once a
//! log file has been attached, duplicates debug lines to that file with the
//! color codes stripped. The output state sits behind a mutex, so the
//! colorize-print sequence of concurrent callers cannot interleave. Logging
//! never returns an error and never panics the host: write failures, a
//! failed file open, and a poisoned lock all degrade silently.

use colored::Colorize;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::caller::{Caller, simple_path};
use crate::level::Level;

/// Output destinations of a logger.
struct Output {
    console: Box<dyn Write + Send>,
    file: Option<File>,
}

/// A leveled logger with colorized severity tags.
///
/// The crate keeps a process-wide default instance reachable through
/// [`logger()`](crate::logger) and the free functions; host applications that
/// prefer explicit injection can construct and pass their own.
pub struct Logger {
    level: AtomicU8,
    output: Mutex<Output>,
}

impl Logger {
    /// Create a logger writing to standard output at the default level.
    pub fn new() -> Logger {
        Logger::with_console(Box::new(io::stdout()))
    }

    /// Create a logger writing to a custom console destination.
    ///
    /// # Arguments
    /// * `console` - The writer that receives all console output.
    ///
    /// # Returns
    /// * `Logger` - A logger at the default level with no file attached.
    ///
    /// # Examples
    /// ```rust
    /// // Capture output in-process instead of printing:
    /// // let logger = Logger::with_console(Box::new(buffer));
    /// ```
    pub fn with_console(console: Box<dyn Write + Send>) -> Logger {
        Logger {
            level: AtomicU8::new(Level::default() as u8),
            output: Mutex::new(Output {
                console,
                file: None,
            }),
        }
    }

    /// Set the verbosity level for all subsequent print calls.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// The current verbosity level.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Attach a log file that duplicates subsequent debug lines.
    ///
    /// The file is named `<prefix>_<unixSeconds>.log` in the current working
    /// directory, or `<unixSeconds>.log` when the prefix is empty, and is
    /// opened in append/create mode. On open failure the destination is left
    /// unchanged and no error surfaces: logging setup must never abort the
    /// host program. Calling this again replaces the previous file, but
    /// callers should not rely on that.
    pub fn set_log_file(&self, prefix: &str) {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let name = if prefix.is_empty() {
            format!("{}.log", seconds)
        } else {
            format!("{}_{}.log", prefix, seconds)
        };
        let Ok(file) = OpenOptions::new().append(true).create(true).open(&name) else {
            return;
        };
        if let Ok(mut output) = self.output.lock() {
            output.file = Some(file);
        }
    }

    /// Print `[+] <text>` in bright blue, followed by a newline.
    ///
    /// Emitted only when the level is at least [`Level::Info`].
    pub fn infoln(&self, text: &str) {
        if self.level() < Level::Info {
            return;
        }
        let line = format!("[+] {}", text);
        self.emit(&line.bright_blue().to_string(), None, true);
    }

    /// Print `[+] ` and the formatted message in bright blue, no newline.
    ///
    /// Usually invoked through [`infof!`](crate::infof).
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        if self.level() < Level::Info {
            return;
        }
        let text = format!("[+] {}", args);
        self.emit(&text.bright_blue().to_string(), None, false);
    }

    /// Print `[+:<file>:<line>] <func>()` for a traced call site, uncolored.
    ///
    /// Usually invoked through [`info_func!`](crate::info_func). A call site
    /// whose path cannot be shortened is silently skipped.
    pub fn info_func(&self, caller: Caller<'_>, func: &str) {
        if self.level() < Level::Info {
            return;
        }
        let Some(path) = simple_path(caller.file) else {
            return;
        };
        let line = format!("[+:{}:{}] {}()", path, caller.line, func);
        self.emit(&line, None, true);
    }

    /// Print the text in red followed by a newline, regardless of level.
    pub fn warnln(&self, text: &str) {
        self.emit(&text.red().to_string(), None, true);
    }

    /// Print the formatted message in red, no newline, regardless of level.
    ///
    /// Usually invoked through [`warnf!`](crate::warnf).
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        let text = format!("{}", args);
        self.emit(&text.red().to_string(), None, false);
    }

    /// Print a debug line for the immediate caller, followed by a newline.
    ///
    /// The line carries a `[D:<file>:<line>] ` prefix, or `[D] ` when the
    /// caller's path cannot be shortened. Emitted only when the level is
    /// [`Level::Debug`], in yellow, and duplicated to the attached log file
    /// without color codes.
    #[track_caller]
    pub fn debugln(&self, text: &str) {
        self.debug_write(Caller::from_location(Location::caller()), format_args!("{}", text), true);
    }

    /// Print a formatted debug message for `caller`, no newline.
    ///
    /// Usually invoked through [`debugf!`](crate::debugf), which supplies the
    /// call site. Same gating, coloring, and file duplication as
    /// [`debugln`](Logger::debugln).
    pub fn debugf(&self, caller: Caller<'_>, args: fmt::Arguments<'_>) {
        self.debug_write(caller, args, false);
    }

    /// Print `[+<file>:<line>] <func>()` in yellow for a traced call site.
    ///
    /// Usually invoked through [`debug_func!`](crate::debug_func). Console
    /// only; never duplicated to the log file. A call site whose path cannot
    /// be shortened is silently skipped.
    pub fn debug_func(&self, caller: Caller<'_>, func: &str) {
        if self.level() < Level::Debug {
            return;
        }
        let Some(path) = simple_path(caller.file) else {
            return;
        };
        let line = format!("[+{}:{}] {}()", path, caller.line, func);
        self.emit(&line.yellow().to_string(), None, true);
    }

    fn debug_write(&self, caller: Caller<'_>, args: fmt::Arguments<'_>, newline: bool) {
        if self.level() < Level::Debug {
            return;
        }
        let prefix = match simple_path(caller.file) {
            Some(path) => format!("[D:{}:{}] ", path, caller.line),
            None => "[D] ".to_string(),
        };
        let plain = format!("{}{}", prefix, args);
        self.emit(&plain.yellow().to_string(), Some(&plain), newline);
    }

    /// Write to the console and, for dual-destination lines, the log file.
    ///
    /// `file_text` carries the plain rendering without color codes. A
    /// poisoned lock means another logging call panicked mid-write; the line
    /// is dropped rather than panicking the host as well.
    fn emit(&self, console_text: &str, file_text: Option<&str>, newline: bool) {
        let Ok(mut output) = self.output.lock() else {
            return;
        };
        if newline {
            let _ = writeln!(output.console, "{}", console_text);
        } else {
            let _ = write!(output.console, "{}", console_text);
            let _ = output.console.flush();
        }
        if let Some(plain) = file_text {
            if let Some(file) = output.file.as_mut() {
                if newline {
                    let _ = writeln!(file, "{}", plain);
                } else {
                    let _ = write!(file, "{}", plain);
                }
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Logger {
        Logger::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Console writer that both the test and the logger can hold.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            strip_ansi(&String::from_utf8(self.0.lock().unwrap().clone()).unwrap())
        }
    }

    /// Drop ANSI color sequences so assertions see the plain text.
    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn capture() -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        (Logger::with_console(Box::new(buf.clone())), buf)
    }

    #[test]
    fn info_emitted_at_info_and_above() {
        let (logger, buf) = capture();
        logger.infoln("hello");
        logger.infof(format_args!("x={}", 5));
        assert_eq!(buf.contents(), "[+] hello\n[+] x=5");

        logger.set_level(Level::Debug);
        logger.infoln("again");
        assert!(buf.contents().ends_with("[+] again\n"));
    }

    #[test]
    fn info_suppressed_when_silent() {
        let (logger, buf) = capture();
        logger.set_level(Level::Silent);
        logger.infoln("hidden");
        logger.infof(format_args!("also hidden"));
        logger.info_func(Caller { file: "/a/b/c", line: 1 }, "f");
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn warn_ignores_the_level() {
        let (logger, buf) = capture();
        logger.set_level(Level::Silent);
        logger.warnln("careful");
        logger.warnf(format_args!("count={}", 2));
        assert_eq!(buf.contents(), "careful\ncount=2");
    }

    #[test]
    fn debug_suppressed_below_debug() {
        let (logger, buf) = capture();
        logger.debugln("hidden");
        logger.debugf(Caller { file: "/a/b/c", line: 3 }, format_args!("hidden"));
        logger.debug_func(Caller { file: "/a/b/c", line: 3 }, "f");
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn debug_prefix_carries_shortened_location() {
        let (logger, buf) = capture();
        logger.set_level(Level::Debug);
        logger.debugf(
            Caller { file: "/tmp/aaa/bbb/ccc.rs", line: 9 },
            format_args!("x={}", 5),
        );
        assert_eq!(buf.contents(), "[D:bbb/ccc.rs:9] x=5");
    }

    #[test]
    fn debug_falls_back_when_path_is_short() {
        let (logger, buf) = capture();
        logger.set_level(Level::Debug);
        // This file is src/logger.rs: two segments, below the three the
        // debug shortener requires.
        logger.debugln("no location");
        assert_eq!(buf.contents(), "[D] no location\n");
    }

    #[test]
    fn func_traces_render_name_and_location() {
        let (logger, buf) = capture();
        logger.set_level(Level::Debug);
        logger.info_func(Caller { file: "/a/b/c.rs", line: 4 }, "app::start");
        logger.debug_func(Caller { file: "/a/b/c.rs", line: 8 }, "app::start");
        assert_eq!(buf.contents(), "[+:b/c.rs:4] app::start()\n[+b/c.rs:8] app::start()\n");
    }

    #[test]
    fn func_traces_skip_unshortenable_paths() {
        let (logger, buf) = capture();
        logger.set_level(Level::Debug);
        logger.info_func(Caller { file: "lib.rs", line: 1 }, "f");
        logger.debug_func(Caller { file: "lib.rs", line: 1 }, "f");
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn level_round_trips_through_the_logger() {
        let (logger, _) = capture();
        assert_eq!(logger.level(), Level::Info);
        logger.set_level(Level::Silent);
        assert_eq!(logger.level(), Level::Silent);
        logger.set_level(Level::Debug);
        assert_eq!(logger.level(), Level::Debug);
    }
}
