//! Call-site capture for error instances.
//!
//! Constructors are `#[track_caller]` all the way down, so the recorded
//! location is the caller's line and never a frame inside this crate.

use std::fmt;
use std::panic::Location;

/// Source location where an [`HttpError`](crate::HttpError) was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trace {
    file: &'static str,
    line: u32,
    column: u32,
}

impl Trace {
    /// Capture the location of the outermost `#[track_caller]` caller.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Self::from(Location::caller())
    }

    /// Source file of the call site.
    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Line of the call site.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Column of the call site.
    #[inline]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static Location<'static>> for Trace {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_points_at_this_file() {
        let line = line!() + 1;
        let trace = Trace::capture();

        assert!(trace.file().ends_with("trace.rs"));
        assert_eq!(trace.line(), line);
        assert!(trace.column() > 0);
    }

    #[test]
    fn display_is_file_line_column() {
        let trace = Trace::capture();
        let rendered = trace.to_string();

        assert!(rendered.starts_with(trace.file()));
        assert!(rendered.ends_with(&format!(":{}:{}", trace.line(), trace.column())));
    }
}
