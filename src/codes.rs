//! Status code identity and input validation.
//!
//! A [`StatusCode`] is an error status (400-599). The standard codes can be
//! built in const contexts with [`StatusCode::const_new`], which refuses codes
//! outside the error range or missing from the standard table at compile time.
//! Codes coming from callers go through [`resolve`](crate::resolve), which
//! accepts numbers, numeric strings, reason phrases and derived names, and
//! reports failures as a [`ResolveError`].
//!
//! ```rust
//! use http_errors::{StatusCode, StatusClass};
//!
//! const NOT_FOUND: StatusCode = StatusCode::const_new(404);
//!
//! assert_eq!(NOT_FOUND.as_u16(), 404);
//! assert_eq!(NOT_FOUND.class(), StatusClass::ClientError);
//! assert_eq!(NOT_FOUND.to_string(), "404");
//! ```

use crate::definitions::{self, MAX_STATUS_CODE, MIN_ERROR_CODE};
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// Status Code (Identity)
// ============================================================================

/// An HTTP error status code (400-599).
///
/// `Copy` because it's a plain `u16`; equality with bare integers is provided
/// so tests and callers can write `code == 404`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    /// Create a status code from the standard table, validated at compile time.
    ///
    /// # Panics
    ///
    /// Panics if `code` is below 400 or not in
    /// [`STATUS_CODES`](crate::definitions::STATUS_CODES). In const contexts
    /// this is a compile error.
    #[inline]
    pub const fn const_new(code: u16) -> Self {
        assert!(code >= MIN_ERROR_CODE, "Code needs to be a valid error status");
        assert!(
            definitions::reason_phrase(code).is_some(),
            "Status code does not exist"
        );
        Self(code)
    }

    /// Create a status code from the standard table with runtime validation.
    ///
    /// # Errors
    ///
    /// [`ResolveError::OutOfRange`] below 400, [`ResolveError::UnknownCode`]
    /// when the code is not in the standard table.
    #[inline]
    pub fn checked_new(code: u16) -> Result<Self, ResolveError> {
        if code < MIN_ERROR_CODE {
            return Err(ResolveError::OutOfRange { code: code.into() });
        }
        if definitions::reason_phrase(code).is_none() {
            return Err(ResolveError::UnknownCode { code: code.into() });
        }
        Ok(Self(code))
    }

    /// Constructor for codes already validated against a registry table.
    #[inline]
    pub(crate) const fn from_validated(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Reason phrase from the standard table.
    ///
    /// Registries built from other tables carry their own phrase on each
    /// [`ErrorVariant`](crate::ErrorVariant).
    #[inline]
    pub const fn reason(self) -> Option<&'static str> {
        definitions::reason_phrase(self.0)
    }

    /// Get the status class.
    #[inline]
    pub const fn class(self) -> StatusClass {
        if self.0 < 500 {
            StatusClass::ClientError
        } else {
            StatusClass::ServerError
        }
    }

    /// 4xx client error.
    #[inline]
    pub const fn is_client_error(self) -> bool {
        matches!(self.class(), StatusClass::ClientError)
    }

    /// 5xx server error.
    #[inline]
    pub const fn is_server_error(self) -> bool {
        matches!(self.class(), StatusClass::ServerError)
    }

    /// Codes that usually signal a transient failure.
    #[inline]
    pub const fn is_retryable(self) -> bool {
        matches!(self.0, 429 | 502 | 503 | 504)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq<u16> for StatusCode {
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

impl PartialEq<StatusCode> for u16 {
    fn eq(&self, other: &StatusCode) -> bool {
        *self == other.0
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = ResolveError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::checked_new(code)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StatusCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

/// Status class of an error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// 400-499
    ClientError,
    /// 500-599
    ServerError,
}

impl StatusClass {
    /// Human-readable class name.
    #[inline]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
        }
    }
}

// ============================================================================
// Caller Input
// ============================================================================

/// Anything a caller may pass as a status code reference.
///
/// Built through `From` conversions; `Option::None` stands for a missing
/// argument.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeInput<'a> {
    /// An integer code.
    Integer(i64),
    /// A floating point code, truncated toward zero when finite.
    Float(f64),
    /// A numeric string, reason phrase or derived name.
    Text(Cow<'a, str>),
    /// No code was supplied.
    Missing,
}

impl From<u16> for CodeInput<'_> {
    fn from(code: u16) -> Self {
        Self::Integer(code.into())
    }
}

impl From<u32> for CodeInput<'_> {
    fn from(code: u32) -> Self {
        Self::Integer(code.into())
    }
}

impl From<i32> for CodeInput<'_> {
    fn from(code: i32) -> Self {
        Self::Integer(code.into())
    }
}

impl From<i64> for CodeInput<'_> {
    fn from(code: i64) -> Self {
        Self::Integer(code)
    }
}

impl From<f64> for CodeInput<'_> {
    fn from(code: f64) -> Self {
        Self::Float(code)
    }
}

impl From<StatusCode> for CodeInput<'_> {
    fn from(code: StatusCode) -> Self {
        Self::Integer(code.0.into())
    }
}

impl<'a> From<&'a str> for CodeInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for CodeInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for CodeInput<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a, T> From<Option<T>> for CodeInput<'a>
where
    T: Into<CodeInput<'a>>,
{
    fn from(input: Option<T>) -> Self {
        input.map_or(Self::Missing, Into::into)
    }
}

/// Outcome of reading a [`CodeInput`] as a number.
pub(crate) enum Numeric<'a> {
    Code(i64),
    Reference(&'a str),
}

impl<'a> CodeInput<'a> {
    /// Read the input as an integer, or hand back the text to look up.
    pub(crate) fn numeric(&self) -> Result<Numeric<'_>, ResolveError> {
        match self {
            Self::Integer(code) => Ok(Numeric::Code(*code)),
            Self::Float(code) if code.is_finite() => Ok(Numeric::Code(code.trunc() as i64)),
            Self::Float(_) | Self::Missing => Err(ResolveError::NotANumber),
            Self::Text(text) => match leading_integer(text) {
                Some(code) => Ok(Numeric::Code(code)),
                None => Ok(Numeric::Reference(text.as_ref())),
            },
        }
    }
}

/// Integer prefix of `text` after leading whitespace: an optional sign and at
/// least one ASCII digit. The rest of the text is ignored, so `"404.5"` and
/// `"404 Not Found"` both read as 404. Values past `i64` saturate.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let digit = i64::from(digit - b'0');
        value = value
            .saturating_mul(10)
            .saturating_add(if negative { -digit } else { digit });
    }

    seen.then_some(value)
}

// ============================================================================
// Resolution Errors
// ============================================================================

/// Why a code reference could not be turned into an error status.
///
/// Every variant is a caller error; nothing here is retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No code given, or the value is not a number.
    NotANumber,
    /// Numeric code below 400.
    OutOfRange {
        /// The rejected code.
        code: i64,
    },
    /// Numeric code missing from the status table.
    UnknownCode {
        /// The rejected code.
        code: i64,
    },
    /// Text matching no reason phrase or derived name.
    InvalidReference {
        /// The text as given.
        reference: String,
    },
}

impl ResolveError {
    /// Message without the caller's input echoed back.
    pub fn to_public(&self) -> &'static str {
        match self {
            Self::NotANumber => "Code needs to be a valid number",
            Self::OutOfRange { .. } => "Code needs to be a valid error status",
            Self::UnknownCode { .. } => "Status code does not exist",
            Self::InvalidReference { .. } => "Code reference is not a known status",
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => f.write_str("Code needs to be a valid number"),
            Self::OutOfRange { code } => {
                write!(f, "Code {} needs to be a valid error status (400-{})", code, MAX_STATUS_CODE)
            }
            Self::UnknownCode { code } => write!(f, "Status code {} does not exist", code),
            Self::InvalidReference { reference } => {
                write!(f, "'{}' is not a known status or error name", reference)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

// ============================================================================
// Tests
// ============================================================================
