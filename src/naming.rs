//! Type-name derivation from reason phrases.
//!
//! `"Not Found"` becomes `"NotFoundError"`. Each space-separated word is
//! capitalized, everything that is not an ASCII letter is dropped, a trailing
//! `"Error"` is stripped and exactly one `"Error"` is appended, so
//! `"Internal Server Error"` becomes `"InternalServerError"`.

/// Suffix carried by every derived name.
pub const NAME_SUFFIX: &str = "Error";

/// Derive the error type name for a reason phrase.
///
/// Returns `None` when the phrase has no ASCII letters at all.
///
/// ```rust
/// use http_errors::naming::derive_name;
///
/// assert_eq!(derive_name("Not Found").as_deref(), Some("NotFoundError"));
/// assert_eq!(derive_name("Internal Server Error").as_deref(), Some("InternalServerError"));
/// assert_eq!(derive_name("I'm a Teapot").as_deref(), Some("ImATeapotError"));
/// assert_eq!(derive_name("4 0 4"), None);
/// ```
pub fn derive_name(phrase: &str) -> Option<String> {
    let mut name = String::with_capacity(phrase.len() + NAME_SUFFIX.len());

    for word in phrase.split(' ') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            push_letters(&mut name, first.to_uppercase());
            push_letters(&mut name, chars);
        }
    }

    if name.is_empty() {
        return None;
    }

    if name.ends_with(NAME_SUFFIX) {
        name.truncate(name.len() - NAME_SUFFIX.len());
    }
    name.push_str(NAME_SUFFIX);
    Some(name)
}

/// Whether `name` could have come out of [`derive_name`].
pub fn is_valid_name(name: &str) -> bool {
    name.len() > NAME_SUFFIX.len()
        && name.ends_with(NAME_SUFFIX)
        && name.starts_with(|c: char| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphabetic())
}

#[inline]
fn push_letters(name: &mut String, chars: impl Iterator<Item = char>) {
    name.extend(chars.filter(char::is_ascii_alphabetic));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_and_joins_words() {
        assert_eq!(derive_name("Not Found").as_deref(), Some("NotFoundError"));
        assert_eq!(
            derive_name("Request Header Fields Too Large").as_deref(),
            Some("RequestHeaderFieldsTooLargeError")
        );
        assert_eq!(
            derive_name("Unavailable For Legal Reasons").as_deref(),
            Some("UnavailableForLegalReasonsError")
        );
    }

    #[test]
    fn lowercase_words_are_capitalized() {
        assert_eq!(derive_name("I'm a Teapot").as_deref(), Some("ImATeapotError"));
        assert_eq!(derive_name("not found").as_deref(), Some("NotFoundError"));
    }

    #[test]
    fn acronyms_are_kept() {
        assert_eq!(
            derive_name("HTTP Version Not Supported").as_deref(),
            Some("HTTPVersionNotSupportedError")
        );
        assert_eq!(derive_name("URI Too Long").as_deref(), Some("URITooLongError"));
    }

    #[test]
    fn trailing_error_is_not_doubled() {
        assert_eq!(
            derive_name("Internal Server Error").as_deref(),
            Some("InternalServerError")
        );
        assert_eq!(derive_name("Error").as_deref(), Some("Error"));
    }

    #[test]
    fn punctuation_and_digits_are_dropped() {
        assert_eq!(
            derive_name("Non-Authoritative Information").as_deref(),
            Some("NonAuthoritativeInformationError")
        );
        assert_eq!(derive_name("Multi-Status").as_deref(), Some("MultiStatusError"));
        assert_eq!(derive_name("Error 42").as_deref(), Some("Error"));
    }

    #[test]
    fn repeated_spaces_are_ignored() {
        assert_eq!(derive_name("  Not   Found ").as_deref(), Some("NotFoundError"));
    }

    #[test]
    fn phrases_without_letters_have_no_name() {
        assert_eq!(derive_name(""), None);
        assert_eq!(derive_name("   "), None);
        assert_eq!(derive_name("404 - 42"), None);
    }

    #[test]
    fn derived_names_are_valid() {
        for (_, reason) in crate::definitions::STATUS_CODES {
            let name = derive_name(reason).unwrap();
            assert!(is_valid_name(&name), "{} -> {}", reason, name);
        }
    }

    #[test]
    fn validity_rejects_odd_names() {
        assert!(!is_valid_name("Error"));
        assert!(!is_valid_name("notFoundError"));
        assert!(!is_valid_name("Not Found Error"));
        assert!(!is_valid_name("NotFound"));
    }
}
