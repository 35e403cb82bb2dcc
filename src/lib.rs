//! # HTTP Errors
//!
//! Typed HTTP error values, one error type per status code (400-599).
//!
//! ## Design
//!
//! 1. **One base kind**: every error instance is an [`HttpError`], so a single
//!    `match`/downcast catches all of them
//! 2. **One type per status**: each code has an [`ErrorVariant`] (runtime) and
//!    a zero-sized marker such as [`NotFoundError`] (compile time)
//! 3. **Names are derived**, never hand-maintained: `"Not Found"` becomes
//!    `NotFoundError`
//! 4. **Lookups are validated**: a code, numeric string, reason phrase or
//!    derived name goes through [`resolve`] and fails with a [`ResolveError`]
//!
//! The registry behind [`create_http_error`] and [`resolve`] is built once from
//! the standard status table and is read-only afterwards.
//!
//! ## Quick Start
//!
//! ```rust
//! use http_errors::{create_http_error, NotFoundError, Result, StatusError};
//!
//! fn find_user(id: u32) -> Result<String> {
//!     if id != 1 {
//!         return Err(NotFoundError::new(format!("user {} does not exist", id)));
//!     }
//!     Ok("alice".to_string())
//! }
//!
//! let err = find_user(7).unwrap_err();
//! assert_eq!(err.to_string(), "404 Not Found: user 7 does not exist");
//! assert_eq!(err.code(), 404);
//! assert!(err.is_a::<NotFoundError>());
//!
//! // Same type, obtained at runtime from any kind of code reference
//! let by_name = create_http_error("Not Found", None).unwrap();
//! assert!(by_name.matches(&err));
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use http_errors::{create_http_error, ResolveError};
//!
//! assert_eq!(create_http_error(200, None).err(), Some(ResolveError::OutOfRange { code: 200 }));
//! assert_eq!(create_http_error(999, None).err(), Some(ResolveError::UnknownCode { code: 999 }));
//! assert!(matches!(
//!     create_http_error("Not a Valid Error", None),
//!     Err(ResolveError::InvalidReference { .. })
//! ));
//! ```
//!
//! ## Logging
//!
//! `Display` shows `"<code> <status>[: <message>]"`. The full picture (type
//! name and call site) is available through [`HttpError::record`]:
//!
//! ```rust
//! use http_errors::BadGatewayError;
//!
//! let err = BadGatewayError::new("upstream closed connection");
//! err.with_record(|record| {
//!     assert_eq!(record.type_name(), "BadGatewayError");
//!     assert!(record.is_retryable());
//! });
//! ```
//!
//! ## Features
//!
//! - `serde` (default): `Serialize` for [`HttpError`] (only the message is
//!   emitted) and [`StatusCode`] (as a number)

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::borrow::Cow;
use std::fmt;

pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod logging;
pub mod naming;
pub mod registry;
pub mod trace;
pub mod variant;

pub use codes::*;
pub use definitions::*;
pub use logging::*;
pub use registry::*;
pub use trace::*;
pub use variant::*;

/// Type alias for Results using our error type.
pub type Result<T> = std::result::Result<T, HttpError>;

/// Resolve `code` against the standard table and return its error type.
///
/// `name` overrides the derived type name; the instance name stays
/// `"<code> <status>"`.
///
/// # Errors
///
/// Any [`ResolveError`]: missing or non-numeric input, a code below 400, a code
/// missing from the table, or text that is neither a reason phrase nor a
/// derived name.
///
/// ```rust
/// use http_errors::create_http_error;
///
/// let teapot = create_http_error("ImATeapotError", None).unwrap();
/// assert_eq!(teapot.code(), 418);
///
/// let custom = create_http_error(404, Some("PageMissingError")).unwrap();
/// assert_eq!(custom.type_name(), "PageMissingError");
/// assert_eq!(custom.new("/faq").to_string(), "404 Not Found: /faq");
/// ```
pub fn create_http_error<'a>(
    code: impl Into<CodeInput<'a>>,
    name: Option<&str>,
) -> std::result::Result<ErrorVariant, ResolveError> {
    registry::global().create_http_error(code, name)
}

/// Validate a code reference against the standard table.
///
/// # Errors
///
/// See [`create_http_error`].
pub fn resolve<'a>(code: impl Into<CodeInput<'a>>) -> std::result::Result<StatusCode, ResolveError> {
    registry::global().resolve(code)
}

/// One HTTP error instance.
///
/// Every error produced by this crate has this type, whatever its status.
/// The status-specific type lives in [`variant`](HttpError::variant).
///
/// # Fields
///
/// - `message`: free text supplied by the caller, possibly empty
/// - `variant`: code, reason phrase and type name (not serialized)
/// - `trace`: where the instance was created (not serialized)
#[must_use = "errors should be handled or logged"]
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HttpError {
    #[cfg_attr(feature = "serde", serde(skip))]
    variant: ErrorVariant,
    message: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(skip))]
    trace: Trace,
}

impl HttpError {
    #[inline]
    pub(crate) fn from_parts(variant: ErrorVariant, message: Cow<'static, str>, trace: Trace) -> Self {
        Self { variant, message, trace }
    }

    /// Status code.
    #[inline]
    pub fn code(&self) -> StatusCode {
        self.variant.code()
    }

    /// Reason phrase, e.g. `Not Found`.
    #[inline]
    pub fn status(&self) -> &'static str {
        self.variant.status()
    }

    /// `"<code> <status>"`, e.g. `404 Not Found`.
    #[inline]
    pub fn name(&self) -> &str {
        self.variant.name()
    }

    /// Caller-supplied message, empty when none was given.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where this instance was created.
    #[inline]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The error type this instance belongs to.
    #[inline]
    pub fn variant(&self) -> &ErrorVariant {
        &self.variant
    }

    /// Whether this instance belongs to `variant`.
    #[inline]
    pub fn is(&self, variant: &ErrorVariant) -> bool {
        self.variant == *variant
    }

    /// Whether this instance belongs to the marker `T`.
    ///
    /// ```rust
    /// use http_errors::{ConflictError, GoneError};
    ///
    /// let err = ConflictError::new("version mismatch");
    /// assert!(err.is_a::<ConflictError>());
    /// assert!(!err.is_a::<GoneError>());
    /// ```
    #[inline]
    pub fn is_a<T: StatusError>(&self) -> bool {
        self.variant.code() == T::CODE && self.variant.type_name() == T::NAME
    }

    /// Whether the status usually signals a transient failure.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        self.code().is_retryable()
    }

    /// Borrowed structured view for loggers.
    ///
    /// The record cannot outlive `self`.
    #[inline]
    pub fn record(&self) -> ErrorRecord<'_> {
        ErrorRecord::new(self)
    }

    /// Run `f` with the structured view and return its result.
    #[inline]
    pub fn with_record<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorRecord<'_>) -> R,
    {
        f(&self.record())
    }
}

impl fmt::Debug for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpError")
            .field("code", &self.code())
            .field("status", &self.status())
            .field("type_name", &self.variant.type_name())
            .field("message", &self.message)
            .field("trace", &self.trace)
            .finish()
    }
}

impl fmt::Display for HttpError {
    /// Format: `"<code> <status>"`, followed by `": <message>"` when a message
    /// was given.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant.name())?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}

impl From<ResolveError> for HttpError {
    /// A failed lookup is the caller's fault: `400 Bad Request` carrying the
    /// public message.
    #[track_caller]
    fn from(err: ResolveError) -> Self {
        BadRequestError::new(err.to_public())
    }
}

// ============================================================================
// Tests
// ============================================================================
