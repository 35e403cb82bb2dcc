//! Constructible error types, one per status code.
//!
//! An [`ErrorVariant`] is what the factory hands out: a cheap handle (shared
//! `Arc`) carrying the code, reason phrase and type name. Calling
//! [`ErrorVariant::new`] produces an [`HttpError`] instance. Converting the
//! variant directly (`HttpError::from(variant)`) is the bare form and yields
//! the same instance without a message.
//!
//! ```rust
//! use http_errors::{create_http_error, HttpError};
//!
//! let not_found = create_http_error(404, None).unwrap();
//!
//! let with_new = not_found.new("/missing");
//! let bare: HttpError = not_found.clone().into();
//!
//! assert!(not_found.matches(&with_new));
//! assert!(not_found.matches(&bare));
//! assert_eq!(bare.to_string(), "404 Not Found");
//! ```

use crate::{HttpError, StatusCode, Trace};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

struct VariantInner {
    code: StatusCode,
    status: &'static str,
    type_name: Cow<'static, str>,
    // "<code> <status>", shared by every instance
    name: String,
}

/// An error type bound to exactly one status code.
///
/// Equality is by code and type name: two variants created separately for
/// the same code and name are interchangeable.
#[derive(Clone)]
pub struct ErrorVariant(Arc<VariantInner>);

impl ErrorVariant {
    /// Internal constructor - code and status must already agree with a table.
    #[doc(hidden)]
    pub fn __from_parts(
        code: StatusCode,
        status: &'static str,
        type_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self(Arc::new(VariantInner {
            code,
            status,
            type_name: type_name.into(),
            name: format!("{} {}", code, status),
        }))
    }

    /// Same code and status under a different type name.
    pub(crate) fn renamed(&self, type_name: impl Into<Cow<'static, str>>) -> Self {
        Self::__from_parts(self.0.code, self.0.status, type_name)
    }

    /// Create an instance with a message.
    ///
    /// The instance's trace is the caller's location.
    #[track_caller]
    #[inline]
    pub fn new(&self, message: impl Into<Cow<'static, str>>) -> HttpError {
        HttpError::from_parts(self.clone(), message.into(), Trace::capture())
    }

    /// Create an instance with an empty message.
    #[track_caller]
    #[inline]
    pub fn empty(&self) -> HttpError {
        HttpError::from_parts(self.clone(), Cow::Borrowed(""), Trace::capture())
    }

    /// Whether `err` is an instance of this variant.
    #[inline]
    pub fn matches(&self, err: &HttpError) -> bool {
        err.variant() == self
    }

    /// Status code.
    #[inline]
    pub fn code(&self) -> StatusCode {
        self.0.code
    }

    /// Reason phrase.
    #[inline]
    pub fn status(&self) -> &'static str {
        self.0.status
    }

    /// Type name, e.g. `NotFoundError`.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.0.type_name
    }

    /// Instance name, e.g. `404 Not Found`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }
}

impl PartialEq for ErrorVariant {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.code == other.0.code && self.0.type_name == other.0.type_name)
    }
}

impl Eq for ErrorVariant {}

impl fmt::Debug for ErrorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorVariant")
            .field("code", &self.0.code)
            .field("status", &self.0.status)
            .field("type_name", &self.0.type_name)
            .finish()
    }
}

impl fmt::Display for ErrorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.type_name)
    }
}

/// Compile-time identity of a typed error marker.
///
/// Implemented by [`define_http_error!`](crate::define_http_error) for the
/// standard markers ([`NotFoundError`](crate::NotFoundError), ...) and for
/// markers defined by users.
pub trait StatusError {
    /// Status code.
    const CODE: StatusCode;
    /// Reason phrase from the standard table.
    const STATUS: &'static str;
    /// Type name of the marker.
    const NAME: &'static str;

    /// The marker's variant, created once.
    fn variant() -> &'static ErrorVariant;
}

impl From<ErrorVariant> for HttpError {
    #[track_caller]
    #[inline]
    fn from(variant: ErrorVariant) -> Self {
        HttpError::from_parts(variant, Cow::Borrowed(""), Trace::capture())
    }
}

impl From<&ErrorVariant> for HttpError {
    #[track_caller]
    #[inline]
    fn from(variant: &ErrorVariant) -> Self {
        variant.empty()
    }
}
