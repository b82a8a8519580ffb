//! User Name Value Object
//!
//! The user name is the public handle a user registers and logs in
//! with, and the string that scopes listing ownership. Input is NFKC
//! normalized and trimmed; the original casing is kept for display
//! while a lowercase canonical form backs uniqueness and lookups.
//!
//! ## Invariants (on the canonical form)
//! - 3 to 30 characters
//! - ASCII letters, digits and `_ . - +` only
//! - starts and ends with a letter, digit or `_`
//! - no `..`, no whitespace, at least one letter or digit
//! - not on the reserved-word list

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

const MIN_CHARS: usize = 3;
const MAX_CHARS: usize = 30;

const ALLOWED_SPECIALS: &[char] = &['_', '.', '-', '+'];

/// Names rejected by default: route collisions plus anything that
/// reads as privileged or anonymous. Admin accounts are created
/// out-of-band, so none of these are ever legitimate signups.
const DEFAULT_RESERVED_WORDS: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "system",
    "superuser",
    "moderator",
    "staff",
    "support",
    "register",
    "login",
    "logout",
    "dashboard",
    "cars",
    "car-info",
    "location",
    "exchange-rates",
    "api",
    "null",
    "undefined",
    "anonymous",
    "guest",
    "me",
    "self",
];

/// User name validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("User name cannot be empty")]
    Empty,

    #[error("User name is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    #[error("User name is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("Invalid character '{char}' at position {position}. Only a-z, 0-9, _, ., -, + are allowed")]
    InvalidCharacter { char: char, position: usize },

    #[error("User name cannot start with '{char}'. Must start with a-z, 0-9, or _")]
    InvalidStart { char: char },

    #[error("User name cannot end with '{char}'. Must end with a-z, 0-9, or _")]
    InvalidEnd { char: char },

    #[error("User name cannot contain consecutive dots (..)")]
    ConsecutiveDots,

    #[error("User name must contain at least one letter or digit")]
    NoAlphanumeric,

    #[error("User name cannot contain whitespace")]
    ContainsWhitespace,

    #[error("'{word}' is a reserved user name")]
    Reserved { word: String },
}

/// Validated user name, holding both the display form and the
/// canonical (lowercase) form.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Normalize and validate raw input.
    ///
    /// Pass `None` to validate against the default reserved-word list.
    pub fn new(
        input: impl AsRef<str>,
        reserved_words: Option<&[&str]>,
    ) -> Result<Self, UserNameError> {
        let original: String = input.as_ref().nfkc().collect::<String>().trim().to_string();
        let canonical = original.to_lowercase();

        validate(
            &canonical,
            reserved_words.unwrap_or(DEFAULT_RESERVED_WORDS),
        )?;

        Ok(Self {
            original,
            canonical,
        })
    }

    /// Normalize login input without the registration rules, mirroring
    /// the lenient password parse at login. Accounts created
    /// out-of-band (admins) may carry names [`new`](Self::new) would
    /// reject, such as reserved words; whether the name exists is the
    /// store's call.
    pub fn lenient(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let original: String = input.as_ref().nfkc().collect::<String>().trim().to_string();
        if original.is_empty() {
            return Err(UserNameError::Empty);
        }

        let canonical = original.to_lowercase();
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Rehydrate a name that was validated when it was stored.
    pub fn from_db(original: &str) -> Self {
        Self {
            original: original.to_string(),
            canonical: original.to_lowercase(),
        }
    }

    /// The name as the user typed it (case preserved)
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The lowercase form used for uniqueness and ownership matching
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

fn validate(name: &str, reserved: &[&str]) -> Result<(), UserNameError> {
    if name.is_empty() {
        return Err(UserNameError::Empty);
    }

    let length = name.chars().count();
    if length < MIN_CHARS {
        return Err(UserNameError::TooShort {
            length,
            min: MIN_CHARS,
        });
    }
    if length > MAX_CHARS {
        return Err(UserNameError::TooLong {
            length,
            max: MAX_CHARS,
        });
    }

    if name.contains(char::is_whitespace) {
        return Err(UserNameError::ContainsWhitespace);
    }

    if let Some((position, char)) = name
        .chars()
        .enumerate()
        .find(|(_, c)| !is_allowed(*c))
    {
        return Err(UserNameError::InvalidCharacter { char, position });
    }

    // Non-empty by the check above, so first/last always exist
    let first = name.chars().next().unwrap_or('_');
    let last = name.chars().next_back().unwrap_or('_');
    if !is_edge_char(first) {
        return Err(UserNameError::InvalidStart { char: first });
    }
    if !is_edge_char(last) {
        return Err(UserNameError::InvalidEnd { char: last });
    }

    if name.contains("..") {
        return Err(UserNameError::ConsecutiveDots);
    }

    if !name.contains(|c: char| c.is_ascii_alphanumeric()) {
        return Err(UserNameError::NoAlphanumeric);
    }

    if reserved.contains(&name) {
        return Err(UserNameError::Reserved {
            word: name.to_string(),
        });
    }

    Ok(())
}

#[inline]
fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || ALLOWED_SPECIALS.contains(&c)
}

#[inline]
fn is_edge_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value, None)
    }
}

impl TryFrom<&str> for UserName {
    type Error = UserNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value, None)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_keeps_case_duality() {
        let name = UserName::new("  AlIcE_123  ", None).unwrap();
        assert_eq!(name.original(), "AlIcE_123");
        assert_eq!(name.canonical(), "alice_123");
    }

    #[test]
    fn test_nfkc_folds_fullwidth_input() {
        // Full-width 'Ａ' (U+FF21) becomes plain ASCII under NFKC
        let name = UserName::new("Ａlice", None).unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = UserName::new("  AlIcE_123  ", None).unwrap();
        let twice = UserName::new(once.as_str(), None).unwrap();
        assert_eq!(once.canonical(), twice.canonical());
    }

    #[test]
    fn test_empty_and_whitespace_only_are_empty() {
        assert!(matches!(UserName::new("", None), Err(UserNameError::Empty)));
        assert!(matches!(
            UserName::new("   ", None),
            Err(UserNameError::Empty)
        ));
    }

    #[test]
    fn test_length_boundaries() {
        assert!(matches!(
            UserName::new("ab", None),
            Err(UserNameError::TooShort { length: 2, min: 3 })
        ));
        assert!(UserName::new("abc", None).is_ok());
        assert!(UserName::new("a".repeat(30), None).is_ok());
        assert!(matches!(
            UserName::new("a".repeat(31), None),
            Err(UserNameError::TooLong { length: 31, .. })
        ));
    }

    #[test]
    fn test_allowed_charset() {
        for ok in ["alice123", "alice_bob", "alice.bob", "alice-bob", "alice+tag"] {
            assert!(UserName::new(ok, None).is_ok(), "{ok} should be valid");
        }
        assert!(matches!(
            UserName::new("alice@bob", None),
            Err(UserNameError::InvalidCharacter { char: '@', position: 5 })
        ));
        assert!(matches!(
            UserName::new("日本語", None),
            Err(UserNameError::InvalidCharacter { .. })
        ));
        assert!(matches!(
            UserName::new("alice🎉", None),
            Err(UserNameError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_internal_whitespace_is_rejected() {
        assert!(matches!(
            UserName::new("alice bob", None),
            Err(UserNameError::ContainsWhitespace)
        ));
    }

    #[test]
    fn test_edge_characters() {
        assert!(UserName::new("_alice", None).is_ok());
        assert!(UserName::new("alice_", None).is_ok());
        assert!(UserName::new("123alice", None).is_ok());
        assert!(matches!(
            UserName::new(".alice", None),
            Err(UserNameError::InvalidStart { char: '.' })
        ));
        assert!(matches!(
            UserName::new("alice+", None),
            Err(UserNameError::InvalidEnd { char: '+' })
        ));
    }

    #[test]
    fn test_dot_runs_and_symbol_only_names() {
        assert!(UserName::new("alice.bob.charlie", None).is_ok());
        assert!(matches!(
            UserName::new("alice..bob", None),
            Err(UserNameError::ConsecutiveDots)
        ));
        assert!(matches!(
            UserName::new("___", None),
            Err(UserNameError::NoAlphanumeric)
        ));
    }

    #[test]
    fn test_reserved_words_match_canonically() {
        assert!(matches!(
            UserName::new("admin", None),
            Err(UserNameError::Reserved { word }) if word == "admin"
        ));
        // Casing does not get around the list
        assert!(matches!(
            UserName::new("ADMIN", None),
            Err(UserNameError::Reserved { word }) if word == "admin"
        ));
        assert!(matches!(
            UserName::new("dashboard", None),
            Err(UserNameError::Reserved { .. })
        ));
    }

    #[test]
    fn test_lenient_skips_registration_rules() {
        // Reserved words and odd characters pass; only the
        // normalization applies.
        let name = UserName::lenient("  Admin ").unwrap();
        assert_eq!(name.original(), "Admin");
        assert_eq!(name.canonical(), "admin");

        assert!(UserName::lenient("x").is_ok());
        assert!(UserName::lenient("strange name!").is_ok());
        assert!(matches!(UserName::lenient("   "), Err(UserNameError::Empty)));
    }

    #[test]
    fn test_custom_reserved_list_replaces_default() {
        let custom = &["taken"];
        assert!(UserName::new("admin", Some(custom)).is_ok());
        assert!(matches!(
            UserName::new("taken", Some(custom)),
            Err(UserNameError::Reserved { .. })
        ));
    }

    #[test]
    fn test_serde_round_trip_keeps_original_case() {
        let name = UserName::new("Alice", None).unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Alice\"");

        let parsed: UserName = serde_json::from_str("\"ALICE\"").unwrap();
        assert_eq!(parsed.as_str(), "alice");
        assert_eq!(parsed.original(), "ALICE");

        assert!(serde_json::from_str::<UserName>("\"ab\"").is_err());
    }

    #[test]
    fn test_display_shows_original() {
        let name = UserName::new("Alice", None).unwrap();
        assert_eq!(name.to_string(), "Alice");
        assert!(format!("{name:?}").contains("canonical"));
    }
}
