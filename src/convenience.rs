//! Macros for defining error markers and creating instances.
//!
//! # Usage
//!
//! ```rust
//! use http_errors::{define_http_error, http_error, StatusError};
//!
//! // A second name for 404, next to the standard NotFoundError
//! define_http_error!(
//!     /// Requested page does not exist.
//!     MissingPageError = 404
//! );
//!
//! let page = "/about";
//! let err = http_error!(MissingPageError, "no page at {}", page);
//!
//! assert_eq!(err.to_string(), "404 Not Found: no page at /about");
//! assert!(err.is_a::<MissingPageError>());
//! assert_eq!(MissingPageError::NAME, "MissingPageError");
//! ```
//!
//! Markers only accept codes of the standard table at or above 400:
//!
//! ```rust,compile_fail
//! # use http_errors::define_http_error;
//! define_http_error!(FineError = 200);
//! # let _ = <FineError as http_errors::StatusError>::CODE;
//! ```
//!
//! Instances created through these macros record the macro call site as
//! their trace.

/// Define a zero-sized error marker for a standard status code.
///
/// The marker implements [`StatusError`](crate::StatusError) and gets
/// `new(message)` / `empty()` constructors plus a conversion into
/// [`HttpError`](crate::HttpError). The code must be >= 400 and present in
/// [`STATUS_CODES`](crate::definitions::STATUS_CODES); anything else fails to
/// compile once the marker is used.
///
/// # Example
///
/// ```rust
/// # use http_errors::{define_http_error, HttpError};
/// define_http_error!(TeapotError = 418);
///
/// let err: HttpError = TeapotError.into();
/// assert_eq!(err.to_string(), "418 I'm a Teapot");
/// ```
#[macro_export]
macro_rules! define_http_error {
    ($(#[$docs:meta])* $name:ident = $code:expr) => {
        #[doc = ::core::concat!("Error marker for status `", ::core::stringify!($code), "`.")]
        $(#[$docs])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl $crate::StatusError for $name {
            const CODE: $crate::StatusCode = $crate::StatusCode::const_new($code);
            const STATUS: &'static str = $crate::definitions::standard_reason($code);
            const NAME: &'static str = ::core::stringify!($name);

            fn variant() -> &'static $crate::ErrorVariant {
                static VARIANT: ::std::sync::OnceLock<$crate::ErrorVariant> =
                    ::std::sync::OnceLock::new();
                VARIANT.get_or_init(|| {
                    $crate::ErrorVariant::__from_parts(
                        <Self as $crate::StatusError>::CODE,
                        <Self as $crate::StatusError>::STATUS,
                        <Self as $crate::StatusError>::NAME,
                    )
                })
            }
        }

        impl $name {
            /// Create an instance with a message.
            #[track_caller]
            #[inline]
            pub fn new(
                message: impl ::core::convert::Into<::std::borrow::Cow<'static, str>>,
            ) -> $crate::HttpError {
                <Self as $crate::StatusError>::variant().new(message)
            }

            /// Create an instance with an empty message.
            #[track_caller]
            #[inline]
            pub fn empty() -> $crate::HttpError {
                <Self as $crate::StatusError>::variant().empty()
            }
        }

        impl ::core::convert::From<$name> for $crate::HttpError {
            #[track_caller]
            #[inline]
            fn from(_: $name) -> Self {
                $name::empty()
            }
        }
    };
}

/// Define several error markers at once.
///
/// # Example
///
/// ```rust
/// # use http_errors::{define_http_errors, StatusError};
/// define_http_errors! {
///     NoSuchUserError = 404,
///     UserLockedError = 423,
/// }
///
/// assert_eq!(NoSuchUserError::CODE, 404);
/// assert_eq!(UserLockedError::STATUS, "Locked");
/// ```
#[macro_export]
macro_rules! define_http_errors {
    ($( $(#[$docs:meta])* $name:ident = $code:expr ),+ $(,)?) => {
        $(
            $crate::define_http_error!($(#[$docs])* $name = $code);
        )+
    };
}

/// Create an instance of a marker, optionally with a formatted message.
///
/// # Example
///
/// ```rust
/// # use http_errors::{http_error, BadRequestError, NotFoundError};
/// let id = 7;
/// let err = http_error!(NotFoundError, "user {} not found", id);
/// assert_eq!(err.message(), "user 7 not found");
///
/// let bare = http_error!(BadRequestError);
/// assert_eq!(bare.to_string(), "400 Bad Request");
/// ```
#[macro_export]
macro_rules! http_error {
    ($marker:ty) => {
        <$marker as $crate::StatusError>::variant().empty()
    };
    ($marker:ty, $fmt:literal $(, $arg:expr)* $(,)?) => {
        <$marker as $crate::StatusError>::variant().new(::std::format!($fmt $(, $arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================
