//! Property-based tests for http_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use http_errors::naming::{derive_name, is_valid_name};
use http_errors::{
    MAX_FIELD_OUTPUT_LEN, NotFoundError, ResolveError, STATUS_CODES, TRUNCATION_INDICATOR, create_http_error,
    global, resolve,
};
use proptest::prelude::*;

fn error_codes() -> impl Strategy<Value = (u16, &'static str)> {
    let codes: Vec<(u16, &'static str)> = STATUS_CODES.iter().copied().filter(|(code, _)| *code >= 400).collect();
    prop::sample::select(codes)
}

// ============================================================================
// RESOLUTION PROPERTIES
// ============================================================================

proptest! {
    /// Every table code resolves to itself, in any input form
    #[test]
    fn table_codes_resolve_to_themselves((code, reason) in error_codes()) {
        prop_assert_eq!(resolve(code).unwrap(), code);
        prop_assert_eq!(resolve(code.to_string()).unwrap(), code);
        prop_assert_eq!(resolve(f64::from(code) + 0.5).unwrap(), code);
        prop_assert_eq!(resolve(reason).unwrap(), code);

        let name = derive_name(reason).unwrap();
        prop_assert_eq!(resolve(name.as_str()).unwrap(), code);
        prop_assert_eq!(global().name_of(code), Some(name.as_str()));
    }

    /// Anything below 400 is out of range, whether or not it is a real status
    #[test]
    fn codes_below_400_are_out_of_range(code in i64::MIN..400i64) {
        prop_assert_eq!(resolve(code), Err(ResolveError::OutOfRange { code }));
    }

    /// Codes at or above 400 either resolve or are unknown, never out of range
    #[test]
    fn codes_from_400_are_known_or_unknown(code in 400i64..100_000i64) {
        match resolve(code) {
            Ok(status) => prop_assert!(STATUS_CODES.iter().any(|(c, _)| i64::from(*c) == code && status == *c)),
            Err(err) => prop_assert_eq!(err, ResolveError::UnknownCode { code }),
        }
    }

    /// Resolution of arbitrary text never panics and only fails in known ways
    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,64}") {
        match resolve(text.as_str()) {
            Ok(code) => prop_assert!(code.as_u16() >= 400),
            Err(ResolveError::NotANumber) => prop_assert!(false, "text input is never NaN"),
            Err(_) => {}
        }
    }

    /// The factory is idempotent
    #[test]
    fn factory_returns_equal_variants((code, _) in error_codes()) {
        let first = create_http_error(code, None).unwrap();
        let second = create_http_error(code, None).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.code(), code);
    }
}

// ============================================================================
// NAMING PROPERTIES
// ============================================================================

proptest! {
    /// Derived names are identifiers ending in exactly one "Error"
    #[test]
    fn derived_names_are_valid(phrase in "[A-Za-z' -]{0,40}") {
        if let Some(name) = derive_name(&phrase) {
            prop_assert!(name.ends_with("Error"));
            prop_assert!(name.chars().all(|c| c.is_ascii_alphabetic()));
            if phrase.starts_with(|c: char| c.is_ascii_alphabetic()) && name != "Error" {
                prop_assert!(is_valid_name(&name));
            }
        } else {
            prop_assert!(!phrase.chars().any(|c| c.is_ascii_alphabetic()));
        }
    }

    /// Derivation depends only on the phrase
    #[test]
    fn derivation_is_deterministic(phrase in "\\PC{0,40}") {
        prop_assert_eq!(derive_name(&phrase), derive_name(&phrase));
    }
}

// ============================================================================
// INSTANCE PROPERTIES
// ============================================================================

proptest! {
    /// Display is "<code> <status>" plus ": <message>" when non-empty
    #[test]
    fn display_format((code, reason) in error_codes(), message in "\\PC{0,100}") {
        let err = create_http_error(code, None).unwrap().new(message.clone());
        let expected = if message.is_empty() {
            format!("{} {}", code, reason)
        } else {
            format!("{} {}: {}", code, reason, message)
        };
        prop_assert_eq!(err.to_string(), expected);
        prop_assert_eq!(err.message(), message.as_str());
    }

    /// Log lines stay valid UTF-8 and bounded whatever the message
    #[test]
    fn record_output_is_bounded(message in "\\PC{0,5000}") {
        let err = NotFoundError::new(message);
        let mut buffer = String::new();
        err.record().write_to(&mut buffer).unwrap();

        prop_assert!(std::str::from_utf8(buffer.as_bytes()).is_ok());
        // name + type + message fields, plus code, trace and formatting
        prop_assert!(buffer.len() < 3 * MAX_FIELD_OUTPUT_LEN + 512);
        if err.message().len() > MAX_FIELD_OUTPUT_LEN {
            prop_assert!(buffer.contains(TRUNCATION_INDICATOR));
        }
    }
}
