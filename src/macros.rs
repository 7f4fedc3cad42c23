//! Formatting macros over the default logger.
//!
//! The printf-style operations live here as macros so that they can accept a
//! format string with arguments and, where the output carries a location,
//! capture the invoking file and line with `file!()` / `line!()`.

/// Print a formatted info message through the default logger, no newline.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)*) => {
        $crate::logger().infof(::std::format_args!($($arg)*))
    };
}

/// Print a formatted warning through the default logger, no newline.
///
/// Warnings are emitted regardless of the verbosity level.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)*) => {
        $crate::logger().warnf(::std::format_args!($($arg)*))
    };
}

/// Print a formatted debug message through the default logger, no newline.
///
/// The line is prefixed with the shortened invoking file and line, and is
/// duplicated to the attached log file, if any.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {
        $crate::logger().debugf(
            $crate::Caller {
                file: ::std::file!(),
                line: ::std::line!(),
            },
            ::std::format_args!($($arg)*),
        )
    };
}

/// Build a [`LocatedError`](crate::LocatedError) from a format string.
///
/// The error is returned, never printed, and carries a bracketed location
/// prefix derived from the invoking file and line. The message is flat; use
/// [`with_source`](crate::LocatedError::with_source) to attach a cause.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::LocatedError::new(
            $crate::Caller {
                file: ::std::file!(),
                line: ::std::line!(),
            },
            ::std::format!($($arg)*),
        )
    };
}

/// Trace the enclosing function at info level: `[+:<file>:<line>] <func>()`.
///
/// Expands to nothing visible when the level is below info or when the
/// invoking path cannot be shortened.
#[macro_export]
macro_rules! info_func {
    () => {{
        fn __here() {}
        fn __name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::logger().info_func(
            $crate::Caller {
                file: ::std::file!(),
                line: ::std::line!(),
            },
            __name_of(__here).trim_end_matches("::__here"),
        );
    }};
}

/// Trace the enclosing function at debug level: `[+<file>:<line>] <func>()`.
///
/// Console only; never duplicated to the log file.
#[macro_export]
macro_rules! debug_func {
    () => {{
        fn __here() {}
        fn __name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::logger().debug_func(
            $crate::Caller {
                file: ::std::file!(),
                line: ::std::line!(),
            },
            __name_of(__here).trim_end_matches("::__here"),
        );
    }};
}
