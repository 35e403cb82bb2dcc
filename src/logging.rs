//! Structured log record for error instances.
//!
//! The crate has no log sink of its own. [`HttpError::record`] hands out an
//! [`ErrorRecord`] that borrows from the error, exposing every field
//! (including the ones left out of `Display` and serialization) to whatever
//! logger the application uses.
//!
//! - Borrows from `HttpError` with an explicit lifetime
//! - CANNOT outlive the error that created it
//! - NO heap allocations in accessors
//! - `write_to` truncates each field so one oversized message cannot flood
//!   the log
//!
//! [`HttpError::record`]: crate::HttpError::record

use crate::{HttpError, StatusCode, Trace};
use std::borrow::Cow;
use std::fmt;

/// Longest field `write_to` emits before cutting it.
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Marker appended where a field was cut.
pub const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Borrowed view of an [`HttpError`] for structured logging.
///
/// # Example
///
/// ```rust
/// # use http_errors::NotFoundError;
/// let err = NotFoundError::new("/missing");
/// let record = err.record();
///
/// let mut line = String::new();
/// record.write_to(&mut line).unwrap();
/// assert!(line.starts_with("[404] name='404 Not Found' type='NotFoundError' message='/missing'"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorRecord<'a> {
    /// Status code.
    pub code: StatusCode,
    /// Reason phrase.
    pub status: &'a str,
    /// `"<code> <status>"`.
    pub name: &'a str,
    /// Type name of the variant.
    pub type_name: &'a str,
    /// Caller-supplied message, untruncated.
    pub message: &'a str,
    /// Creation site.
    pub trace: &'a Trace,
}

impl<'a> ErrorRecord<'a> {
    pub(crate) fn new(err: &'a HttpError) -> Self {
        Self {
            code: err.code(),
            status: err.status(),
            name: err.name(),
            type_name: err.variant().type_name(),
            message: err.message(),
            trace: err.trace(),
        }
    }

    /// Write the record as a single log line without intermediate buffers.
    ///
    /// Format:
    /// `[<code>] name='<name>' type='<type>' message='<message>' at='<file:line:col>'`
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] name='{}' type='{}' message='{}' at='{}'",
            self.code,
            truncate_with_indicator(self.name),
            truncate_with_indicator(self.type_name),
            truncate_with_indicator(self.message),
            self.trace
        )
    }

    /// Get the status code.
    ///
    /// Accessors return fields untruncated; only `write_to` truncates.
    #[inline]
    pub const fn code(&self) -> StatusCode {
        self.code
    }

    /// Get the reason phrase.
    #[inline]
    pub const fn status(&self) -> &str {
        self.status
    }

    /// Get the `"<code> <status>"` name.
    #[inline]
    pub const fn name(&self) -> &str {
        self.name
    }

    /// Get the variant's type name.
    #[inline]
    pub const fn type_name(&self) -> &str {
        self.type_name
    }

    /// Get the caller-supplied message.
    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    /// Get the creation site.
    #[inline]
    pub const fn trace(&self) -> &Trace {
        self.trace
    }

    /// Whether the underlying status usually signals a transient failure.
    #[inline]
    pub const fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl fmt::Display for ErrorRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Truncate a string for display, marking the cut with an indicator.
///
/// Borrows when the field fits.
pub(crate) fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    // Last char boundary at or before the limit
    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}
