//! Standard HTTP status table and the typed error markers derived from it.
//!
//! # Table
//!
//! [`STATUS_CODES`] is the authoritative `code -> reason phrase` mapping used
//! by the global registry. It covers every code from 100 to 511 that common
//! HTTP runtimes expose, sorted by code. Other tables can be plugged in through
//! the [`StatusTable`] trait and [`Registry::build`](crate::Registry::build).
//!
//! # Markers
//!
//! Every error code (>= 400) in the table has a zero-sized marker type named
//! after its reason phrase (`404 Not Found` -> [`NotFoundError`]). The marker's
//! reason phrase is looked up at compile time, so a marker for a code missing
//! from the table does not build.
//!
//! ```rust
//! use http_errors::{NotFoundError, StatusError};
//!
//! let err = NotFoundError::new("/missing");
//! assert_eq!(err.code(), 404);
//! assert_eq!(NotFoundError::STATUS, "Not Found");
//! assert!(err.is_a::<NotFoundError>());
//! ```

use crate::define_http_errors;

/// Lowest code treated as an error status.
pub const MIN_ERROR_CODE: u16 = 400;

/// Highest code a status table may contain.
pub const MAX_STATUS_CODE: u16 = 599;

/// Standard `code -> reason phrase` table, sorted by code.
pub const STATUS_CODES: &[(u16, &str)] = &[
    // 1xx Informational
    (100, "Continue"),
    (101, "Switching Protocols"),
    (102, "Processing"),
    (103, "Early Hints"),
    // 2xx Success
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (207, "Multi-Status"),
    (208, "Already Reported"),
    (226, "IM Used"),
    // 3xx Redirection
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (308, "Permanent Redirect"),
    // 4xx Client Error
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Payload Too Large"),
    (414, "URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (418, "I'm a Teapot"),
    (421, "Misdirected Request"),
    (422, "Unprocessable Entity"),
    (423, "Locked"),
    (424, "Failed Dependency"),
    (425, "Too Early"),
    (426, "Upgrade Required"),
    (428, "Precondition Required"),
    (429, "Too Many Requests"),
    (431, "Request Header Fields Too Large"),
    (451, "Unavailable For Legal Reasons"),
    // 5xx Server Error
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
    (506, "Variant Also Negotiates"),
    (507, "Insufficient Storage"),
    (508, "Loop Detected"),
    (509, "Bandwidth Limit Exceeded"),
    (510, "Not Extended"),
    (511, "Network Authentication Required"),
];

/// Look up a reason phrase in [`STATUS_CODES`].
///
/// Usable in const contexts.
pub const fn reason_phrase(code: u16) -> Option<&'static str> {
    let mut i = 0;
    while i < STATUS_CODES.len() {
        if STATUS_CODES[i].0 == code {
            return Some(STATUS_CODES[i].1);
        }
        i += 1;
    }
    None
}

/// Reason phrase for a code that must exist in [`STATUS_CODES`].
///
/// # Panics
///
/// Panics if the code is not in the table. In const contexts (marker
/// definitions) this is a compile error.
#[doc(hidden)]
pub const fn standard_reason(code: u16) -> &'static str {
    match reason_phrase(code) {
        Some(reason) => reason,
        None => panic!("Status code is not in the standard table"),
    }
}

/// Read-only source of reason phrases.
///
/// Implementors return their entries as a slice; lookup is provided.
/// Entries must use codes in 100-599 and non-empty phrases, which
/// [`Registry::build`](crate::Registry::build) verifies.
pub trait StatusTable {
    /// All `(code, reason phrase)` pairs.
    fn entries(&self) -> &[(u16, &'static str)];

    /// Reason phrase for `code`, if present.
    fn reason(&self, code: u16) -> Option<&'static str> {
        self.entries()
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, reason)| *reason)
    }
}

/// The built-in [`STATUS_CODES`] table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardStatusTable;

impl StatusTable for StandardStatusTable {
    fn entries(&self) -> &[(u16, &'static str)] {
        STATUS_CODES
    }

    fn reason(&self, code: u16) -> Option<&'static str> {
        STATUS_CODES
            .binary_search_by_key(&code, |(candidate, _)| *candidate)
            .ok()
            .map(|index| STATUS_CODES[index].1)
    }
}

impl StatusTable for [(u16, &'static str)] {
    fn entries(&self) -> &[(u16, &'static str)] {
        self
    }
}

impl<const N: usize> StatusTable for [(u16, &'static str); N] {
    fn entries(&self) -> &[(u16, &'static str)] {
        self
    }
}

impl StatusTable for Vec<(u16, &'static str)> {
    fn entries(&self) -> &[(u16, &'static str)] {
        self
    }
}

// Defines the markers and keeps a listing of them for consistency checks.
macro_rules! standard_error_markers {
    ($( $name:ident = $code:literal ),+ $(,)?) => {
        define_http_errors! { $( $name = $code ),+ }

        /// `(code, marker name)` of every standard marker, in table order.
        pub const STANDARD_MARKERS: &[(u16, &str)] = &[ $( ($code, stringify!($name)) ),+ ];
    };
}

// -----------------------------------------------------------------------------
// 4xx - Client errors
// -----------------------------------------------------------------------------
standard_error_markers! {
    BadRequestError                    = 400,
    UnauthorizedError                  = 401,
    PaymentRequiredError               = 402,
    ForbiddenError                     = 403,
    NotFoundError                      = 404,
    MethodNotAllowedError              = 405,
    NotAcceptableError                 = 406,
    ProxyAuthenticationRequiredError   = 407,
    RequestTimeoutError                = 408,
    ConflictError                      = 409,
    GoneError                          = 410,
    LengthRequiredError                = 411,
    PreconditionFailedError            = 412,
    PayloadTooLargeError               = 413,
    URITooLongError                    = 414,
    UnsupportedMediaTypeError          = 415,
    RangeNotSatisfiableError           = 416,
    ExpectationFailedError             = 417,
    ImATeapotError                     = 418,
    MisdirectedRequestError            = 421,
    UnprocessableEntityError           = 422,
    LockedError                        = 423,
    FailedDependencyError              = 424,
    TooEarlyError                      = 425,
    UpgradeRequiredError               = 426,
    PreconditionRequiredError          = 428,
    TooManyRequestsError               = 429,
    RequestHeaderFieldsTooLargeError   = 431,
    UnavailableForLegalReasonsError    = 451,
    // -------------------------------------------------------------------------
    // 5xx - Server errors
    // -------------------------------------------------------------------------
    InternalServerError                = 500,
    NotImplementedError                = 501,
    BadGatewayError                    = 502,
    ServiceUnavailableError            = 503,
    GatewayTimeoutError                = 504,
    HTTPVersionNotSupportedError       = 505,
    VariantAlsoNegotiatesError         = 506,
    InsufficientStorageError           = 507,
    LoopDetectedError                  = 508,
    BandwidthLimitExceededError        = 509,
    NotExtendedError                   = 510,
    NetworkAuthenticationRequiredError = 511,
}
