//! Name index and variant registry.
//!
//! A [`Registry`] is built once from a [`StatusTable`]: every entry's reason
//! phrase goes into the reverse index, and every error code (>= 400) gets a
//! derived type name and an [`ErrorVariant`]. After construction nothing is
//! mutated, so a registry can be shared freely across threads.
//!
//! The process-wide registry over the standard table is available through
//! [`global`]; it is built on first use.
//!
//! # Determinism
//!
//! Each code's entry is independent of the others. Conflicts (the same code
//! twice, two codes sharing a phrase or a derived name) are reported as a
//! [`RegistryError`] whatever the table order, never resolved by
//! last-write-wins.
//!
//! ```rust
//! use http_errors::{Registry, ResolveError};
//!
//! let registry = Registry::build(&[(404u16, "Missing"), (503, "Try Later")]).unwrap();
//!
//! assert_eq!(registry.resolve("Missing").unwrap(), 404);
//! assert_eq!(registry.resolve("TryLaterError").unwrap(), 503);
//! assert_eq!(registry.name_of(404), Some("MissingError"));
//! assert_eq!(registry.resolve(500), Err(ResolveError::UnknownCode { code: 500 }));
//! ```

use crate::codes::Numeric;
use crate::definitions::{MAX_STATUS_CODE, MIN_ERROR_CODE, StandardStatusTable, StatusTable};
use crate::naming::derive_name;
use crate::{CodeInput, ErrorVariant, ResolveError, StatusCode};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

/// Lowest code a status table may contain.
const MIN_STATUS_CODE: u16 = 100;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Registry over the standard status table, built on first use.
///
/// # Panics
///
/// Panics if the built-in table is inconsistent. The table is covered by
/// this crate's tests, so this indicates a broken build rather than a runtime
/// condition.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(|| match Registry::build(&StandardStatusTable) {
        Ok(registry) => registry,
        Err(err) => panic!("standard status table is inconsistent: {}", err),
    })
}

/// Bidirectional code/name index plus one variant per error code.
pub struct Registry {
    statuses: BTreeMap<u16, &'static str>,
    variants: BTreeMap<u16, ErrorVariant>,
    reverse: HashMap<Cow<'static, str>, u16>,
}

impl Registry {
    /// Build a registry from a status table.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found; see [`RegistryError`].
    pub fn build<T>(table: &T) -> Result<Self, RegistryError>
    where
        T: StatusTable + ?Sized,
    {
        let mut registry = Self {
            statuses: BTreeMap::new(),
            variants: BTreeMap::new(),
            reverse: HashMap::new(),
        };

        for &(code, phrase) in table.entries() {
            registry.register(code, phrase)?;
        }

        Ok(registry)
    }

    fn register(&mut self, code: u16, phrase: &'static str) -> Result<(), RegistryError> {
        if !(MIN_STATUS_CODE..=MAX_STATUS_CODE).contains(&code) {
            return Err(RegistryError::CodeOutOfRange { code });
        }
        if self.statuses.insert(code, phrase).is_some() {
            return Err(RegistryError::DuplicateCode { code });
        }
        self.insert_reference(Cow::Borrowed(phrase), code)?;

        if code < MIN_ERROR_CODE {
            return Ok(());
        }

        let name = derive_name(phrase).ok_or(RegistryError::EmptyName { code, phrase })?;
        self.insert_reference(Cow::Owned(name.clone()), code)?;
        self.variants.insert(
            code,
            ErrorVariant::__from_parts(StatusCode::from_validated(code), phrase, name),
        );
        Ok(())
    }

    fn insert_reference(&mut self, reference: Cow<'static, str>, code: u16) -> Result<(), RegistryError> {
        match self.reverse.get(&*reference).copied() {
            // A phrase can equal its own derived name ("Error" -> "Error").
            Some(existing) if existing == code => Ok(()),
            Some(existing) => Err(RegistryError::DuplicateReference {
                reference: reference.into_owned(),
                first: existing.min(code),
                second: existing.max(code),
            }),
            None => {
                self.reverse.insert(reference, code);
                Ok(())
            }
        }
    }

    /// Validate a code reference.
    ///
    /// Text that is not an integer is looked up as a reason phrase or derived
    /// name; everything else is read as a number and checked against the
    /// error range and the table.
    ///
    /// # Errors
    ///
    /// See [`ResolveError`] for the taxonomy.
    pub fn resolve<'a>(&self, input: impl Into<CodeInput<'a>>) -> Result<StatusCode, ResolveError> {
        let input = input.into();
        let code = match input.numeric()? {
            Numeric::Code(code) => code,
            Numeric::Reference(reference) => match self.lookup(reference) {
                Some(code) => i64::from(code),
                None => {
                    return Err(ResolveError::InvalidReference {
                        reference: reference.to_owned(),
                    });
                }
            },
        };
        self.validate(code)
    }

    fn validate(&self, code: i64) -> Result<StatusCode, ResolveError> {
        if code < i64::from(MIN_ERROR_CODE) {
            return Err(ResolveError::OutOfRange { code });
        }
        match u16::try_from(code) {
            Ok(code) if self.variants.contains_key(&code) => Ok(StatusCode::from_validated(code)),
            _ => Err(ResolveError::UnknownCode { code }),
        }
    }

    /// Variant for an already validated code, optionally under another name.
    ///
    /// Without `name`, or with an empty one, this is the registered variant
    /// itself.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownCode`] if this registry has no such code, which
    /// only happens for codes validated against a different table.
    pub fn create_error_type(&self, code: StatusCode, name: Option<&str>) -> Result<ErrorVariant, ResolveError> {
        let registered = self
            .variants
            .get(&code.as_u16())
            .ok_or(ResolveError::UnknownCode { code: code.as_u16().into() })?;

        Ok(match name {
            Some(name) if !name.is_empty() && name != registered.type_name() => {
                registered.renamed(name.to_owned())
            }
            _ => registered.clone(),
        })
    }

    /// Resolve `code` and return its error type.
    ///
    /// # Errors
    ///
    /// Any [`ResolveError`] from [`Registry::resolve`].
    pub fn create_http_error<'a>(
        &self,
        code: impl Into<CodeInput<'a>>,
        name: Option<&str>,
    ) -> Result<ErrorVariant, ResolveError> {
        let code = self.resolve(code)?;
        self.create_error_type(code, name)
    }

    /// Registered variant for a code.
    pub fn variant(&self, code: u16) -> Option<&ErrorVariant> {
        self.variants.get(&code)
    }

    /// Registered variant by reason phrase or derived name.
    pub fn variant_by_name(&self, reference: &str) -> Option<&ErrorVariant> {
        self.lookup(reference).and_then(|code| self.variants.get(&code))
    }

    /// Derived type name for an error code.
    pub fn name_of(&self, code: u16) -> Option<&str> {
        self.variants.get(&code).map(ErrorVariant::type_name)
    }

    /// Code for a reason phrase or derived name, including codes below 400.
    pub fn lookup(&self, reference: &str) -> Option<u16> {
        self.reverse
            .get(reference)
            .or_else(|| self.reverse.get(reference.trim()))
            .copied()
    }

    /// Reason phrase for any code in the table.
    pub fn reason(&self, code: u16) -> Option<&'static str> {
        self.statuses.get(&code).copied()
    }

    /// Every registered variant, ordered by code.
    pub fn variants(&self) -> impl Iterator<Item = &ErrorVariant> {
        self.variants.values()
    }

    /// Number of registered error variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the table had no error codes.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("statuses", &self.statuses.len())
            .field("variants", &self.variants.len())
            .field("references", &self.reverse.len())
            .finish()
    }
}

// ============================================================================
// Registry Errors
// ============================================================================

/// Inconsistent status table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Code outside 100-599.
    CodeOutOfRange {
        /// The offending code.
        code: u16,
    },
    /// Same code listed twice.
    DuplicateCode {
        /// The repeated code.
        code: u16,
    },
    /// Reason phrase with no letters to derive a name from.
    EmptyName {
        /// Code of the entry.
        code: u16,
        /// Its reason phrase.
        phrase: &'static str,
    },
    /// Two codes share a reason phrase or a derived name.
    DuplicateReference {
        /// The shared phrase or name.
        reference: String,
        /// Lower of the two codes.
        first: u16,
        /// Higher of the two codes.
        second: u16,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeOutOfRange { code } => {
                write!(f, "Status code {} is out of range ({}-{})", code, MIN_STATUS_CODE, MAX_STATUS_CODE)
            }
            Self::DuplicateCode { code } => write!(f, "Status code {} is listed twice", code),
            Self::EmptyName { code, phrase } => {
                write!(f, "Cannot derive a name for {} from '{}'", code, phrase)
            }
            Self::DuplicateReference { reference, first, second } => {
                write!(f, "'{}' refers to both {} and {}", reference, first, second)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::STATUS_CODES;

    #[test]
    fn global_registry_covers_every_error_code() {
        let registry = global();
        let expected = STATUS_CODES.iter().filter(|(code, _)| *code >= MIN_ERROR_CODE).count();

        assert_eq!(registry.len(), expected);
        assert!(!registry.is_empty());
        for (code, reason) in STATUS_CODES.iter().filter(|(code, _)| *code >= MIN_ERROR_CODE) {
            let variant = registry.variant(*code).unwrap();
            assert_eq!(variant.code(), *code);
            assert_eq!(variant.status(), *reason);
            assert_eq!(registry.resolve(*code).unwrap(), *code);
        }
    }

    #[test]
    fn global_registry_is_built_once() {
        assert!(std::ptr::eq(global(), global()));
    }

    #[test]
    fn phrases_and_names_round_trip() {
        let registry = global();
        for variant in registry.variants() {
            let code = variant.code();
            assert_eq!(registry.resolve(variant.status()).unwrap(), code);
            assert_eq!(registry.resolve(variant.type_name()).unwrap(), code);
            assert_eq!(registry.name_of(code.as_u16()), Some(variant.type_name()));
            assert_eq!(registry.variant_by_name(variant.status()), Some(variant));
        }
    }

    #[test]
    fn resolution_errors() {
        let registry = global();
        assert_eq!(registry.resolve(200), Err(ResolveError::OutOfRange { code: 200 }));
        assert_eq!(registry.resolve("200"), Err(ResolveError::OutOfRange { code: 200 }));
        assert_eq!(registry.resolve(-5), Err(ResolveError::OutOfRange { code: -5 }));
        assert_eq!(registry.resolve(999), Err(ResolveError::UnknownCode { code: 999 }));
        assert_eq!(registry.resolve(600), Err(ResolveError::UnknownCode { code: 600 }));
        assert_eq!(registry.resolve(419), Err(ResolveError::UnknownCode { code: 419 }));
        assert_eq!(
            registry.resolve(i64::MAX),
            Err(ResolveError::UnknownCode { code: i64::MAX })
        );
        assert_eq!(registry.resolve(None::<u16>), Err(ResolveError::NotANumber));
        assert_eq!(registry.resolve(f64::NAN), Err(ResolveError::NotANumber));
        assert_eq!(
            registry.resolve("Not a Valid Error"),
            Err(ResolveError::InvalidReference {
                reference: "Not a Valid Error".to_string()
            })
        );
        assert_eq!(
            registry.resolve(""),
            Err(ResolveError::InvalidReference {
                reference: String::new()
            })
        );
    }

    #[test]
    fn phrases_below_error_range_resolve_then_fail_range_check() {
        let registry = global();
        assert_eq!(registry.lookup("OK"), Some(200));
        assert_eq!(registry.resolve("OK"), Err(ResolveError::OutOfRange { code: 200 }));
        assert_eq!(registry.reason(302), Some("Found"));
        assert_eq!(registry.name_of(302), None);
    }

    #[test]
    fn lookup_tolerates_surrounding_whitespace() {
        assert_eq!(global().resolve(" Not Found ").unwrap(), 404);
        assert_eq!(global().resolve("404").unwrap(), 404);
    }

    #[test]
    fn create_error_type_with_override() {
        let registry = global();
        let code = registry.resolve(404).unwrap();

        let default = registry.create_error_type(code, None).unwrap();
        let same = registry.create_error_type(code, Some("NotFoundError")).unwrap();
        let custom = registry.create_error_type(code, Some("MissingPageError")).unwrap();

        assert_eq!(default.type_name(), "NotFoundError");
        assert_eq!(default, same);
        assert_eq!(custom.type_name(), "MissingPageError");
        assert_eq!(custom.code(), 404);
        assert_eq!(custom.name(), "404 Not Found");
        assert_ne!(default, custom);
    }

    #[test]
    fn empty_override_keeps_derived_name() {
        let registry = global();
        let code = registry.resolve(404).unwrap();

        let unnamed = registry.create_error_type(code, Some("")).unwrap();
        assert_eq!(unnamed.type_name(), "NotFoundError");
        assert_eq!(unnamed, registry.create_error_type(code, None).unwrap());
    }

    #[test]
    fn create_http_error_resolves_first() {
        let registry = global();
        let by_phrase = registry.create_http_error("Not Found", None).unwrap();
        let by_code = registry.create_http_error(404, None).unwrap();
        assert_eq!(by_phrase, by_code);
        assert_eq!(
            registry.create_http_error(200, None).err(),
            Some(ResolveError::OutOfRange { code: 200 })
        );
    }

    #[test]
    fn custom_table_is_independent_of_standard() {
        let registry = Registry::build(&[(200u16, "Fine"), (404, "Missing"), (599, "Odd Failure")]).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve("OddFailureError").unwrap(), 599);
        assert_eq!(registry.resolve("Fine"), Err(ResolveError::OutOfRange { code: 200 }));
        assert_eq!(registry.resolve(500), Err(ResolveError::UnknownCode { code: 500 }));

        let standard_only = StatusCode::const_new(500);
        assert_eq!(
            registry.create_error_type(standard_only, None),
            Err(ResolveError::UnknownCode { code: 500 })
        );
    }

    #[test]
    fn registration_order_does_not_matter() {
        let forward: Vec<(u16, &'static str)> = STATUS_CODES.to_vec();
        let mut backward = forward.clone();
        backward.reverse();

        let a = Registry::build(&forward).unwrap();
        let b = Registry::build(&backward).unwrap();

        let names_a: Vec<_> = a.variants().map(|v| (v.code(), v.type_name().to_owned())).collect();
        let names_b: Vec<_> = b.variants().map(|v| (v.code(), v.type_name().to_owned())).collect();
        assert_eq!(names_a, names_b);
        assert_eq!(a.reverse, b.reverse);
    }

    #[test]
    fn duplicate_phrases_are_fatal_in_any_order() {
        let expected = RegistryError::DuplicateReference {
            reference: "Broken".to_string(),
            first: 500,
            second: 502,
        };
        assert_eq!(
            Registry::build(&[(500u16, "Broken"), (502, "Broken")]).err(),
            Some(expected.clone())
        );
        assert_eq!(
            Registry::build(&[(502u16, "Broken"), (500, "Broken")]).err(),
            Some(expected)
        );
    }

    #[test]
    fn colliding_derived_names_are_fatal() {
        let result = Registry::build(&[(500u16, "Bad Thing"), (501, "bad thing")]);
        assert_eq!(
            result.err(),
            Some(RegistryError::DuplicateReference {
                reference: "BadThingError".to_string(),
                first: 500,
                second: 501,
            })
        );
    }

    #[test]
    fn malformed_tables_are_rejected() {
        assert_eq!(
            Registry::build(&[(404u16, "Missing"), (404, "Gone")]).err(),
            Some(RegistryError::DuplicateCode { code: 404 })
        );
        assert_eq!(
            Registry::build(&[(600u16, "Beyond")]).err(),
            Some(RegistryError::CodeOutOfRange { code: 600 })
        );
        assert_eq!(
            Registry::build(&[(404u16, "4 0 4")]).err(),
            Some(RegistryError::EmptyName { code: 404, phrase: "4 0 4" })
        );
    }

    #[test]
    fn phrase_equal_to_its_name_is_not_a_conflict() {
        let registry = Registry::build(&[(500u16, "Error")]).unwrap();
        assert_eq!(registry.name_of(500), Some("Error"));
        assert_eq!(registry.resolve("Error").unwrap(), 500);
    }
}
