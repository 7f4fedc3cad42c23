//! Module for caller-location capture and path shortening.
//!
//! This module defines the transient location record attached to debug and
//! error output, and the helpers that shorten an absolute source path into a
//! human-scannable form.
//!
//! # Details
//! The two shortening helpers deliberately disagree on the minimum number of
//! path segments they accept. The error-prefix variant accepts two, the
//! info/debug variant requires three. Callers treat a rejected path as
//! "omit the location", never as an error.

use std::panic::Location;

/// Source location of a logging call, captured at call time.
///
/// Built from [`std::panic::Location`] for direct function calls and from
/// `file!()` / `line!()` inside the formatting macros. Never stored.
#[derive(Debug, Clone, Copy)]
pub struct Caller<'a> {
    /// Source file path as the compiler recorded it.
    pub file: &'a str,
    /// Line number of the call.
    pub line: u32,
}

impl<'a> Caller<'a> {
    /// Build a caller record from a captured panic location.
    pub fn from_location(location: &'a Location<'a>) -> Caller<'a> {
        Caller {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Shorten a source path to its last two segments, requiring at least two.
///
/// Used for error prefixes. Segments are the non-empty `/`-separated
/// components, so `""` and `"/a"` are rejected.
pub(crate) fn rel_path(path: &str) -> Option<String> {
    shorten(path, 2)
}

/// Shorten a source path to its last two segments, requiring at least three.
///
/// Used for info and debug prefixes.
///
/// # Examples
/// ```rust
/// // Input:  /tmp/aaa/bbb/ccc
/// // Output: bbb/ccc
/// ```
pub(crate) fn simple_path(path: &str) -> Option<String> {
    shorten(path, 3)
}

fn shorten(path: &str, min_segments: usize) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < min_segments {
        return None;
    }
    Some(segments[segments.len() - 2..].join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rel_path_keeps_last_two_segments() {
        assert_eq!(rel_path("/a/b/c").as_deref(), Some("b/c"));
        assert_eq!(rel_path("a/b").as_deref(), Some("a/b"));
    }

    #[test]
    fn rel_path_rejects_short_inputs() {
        assert_eq!(rel_path(""), None);
        assert_eq!(rel_path("/a"), None);
        assert_eq!(rel_path("lib.rs"), None);
    }

    #[test]
    fn simple_path_requires_three_segments() {
        assert_eq!(simple_path("/a/b/c").as_deref(), Some("b/c"));
        assert_eq!(simple_path("/tmp/aaa/bbb/ccc").as_deref(), Some("bbb/ccc"));
        assert_eq!(simple_path("/a/b"), None);
        assert_eq!(simple_path("src/lib.rs"), None);
        assert_eq!(simple_path(""), None);
    }

    #[test]
    fn caller_from_location_reports_this_file() {
        let caller = Caller::from_location(Location::caller());
        assert!(caller.file.ends_with("caller.rs"));
        assert!(caller.line > 0);
    }
}
