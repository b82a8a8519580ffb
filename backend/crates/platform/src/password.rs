//! Password Handling
//!
//! Argon2id hashing behind two entry points: a lenient parse for login
//! (the stored hash is the arbiter there) and a policy-checked parse
//! for registration. Cleartext material is zeroized on drop and an
//! optional application-wide pepper can be folded into the hash input.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Registration policy: minimum length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hard cap on any password, applied even at login
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Characters that satisfy the symbol requirement of the policy
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+";

/// Password policy violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,

    #[error("Password must contain at least one special character (!@#$%^&*()_+)")]
    MissingSpecialCharacter,
}

/// Hashing and hash-parsing failures
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Cleartext password, zeroized on drop.
///
/// Deliberately not `Clone`; `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Lenient parse for login. NFKC-normalizes so the same visual
    /// password always hashes identically, rejects empty input,
    /// control characters and anything over [`MAX_PASSWORD_LENGTH`].
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Character count, not bytes
        let actual = normalized.chars().count();
        if actual > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual,
            });
        }

        let has_forbidden_control = normalized
            .chars()
            .any(|c| c.is_control() && !matches!(c, ' ' | '\t' | '\n'));
        if has_forbidden_control {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    /// Policy-checked parse for registration: [`MIN_PASSWORD_LENGTH`]
    /// characters minimum with at least one uppercase letter, one
    /// digit and one symbol from [`SPECIAL_CHARACTERS`].
    pub fn new_for_registration(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::new(raw)?;
        let chars = || password.0.chars();

        let actual = chars().count();
        if actual < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual,
            });
        }
        if !chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if !chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        if !chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
            return Err(PasswordPolicyError::MissingSpecialCharacter);
        }

        Ok(password)
    }

    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    /// Hash with Argon2id (default parameters, fresh random salt),
    /// folding in the pepper when one is configured. Returns the PHC
    /// string wrapped in [`HashedPassword`].
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let input = peppered(self.0.as_bytes(), pepper);
        let salt = SaltString::generate(OsRng);

        let hash = Argon2::default()
            .hash_password(&input, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

/// Append the pepper to the password bytes when present.
fn peppered(password: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
    let mut bytes = password.to_vec();
    if let Some(p) = pepper {
        bytes.extend_from_slice(p);
    }
    bytes
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Argon2id hash in PHC string form, safe to store and log-adjacent
/// (Debug still hides it).
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Parse a PHC string, e.g. one loaded from the database.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a cleartext candidate. The pepper must match the one
    /// used at hash time. Any parse failure counts as a mismatch;
    /// argon2 compares in constant time internally.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };

        let input = peppered(password.0.as_bytes(), pepper);
        Argon2::default().verify_password(&input, &parsed).is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_parse_bounds() {
        assert!(matches!(
            ClearTextPassword::new(String::new()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        assert!(matches!(
            ClearTextPassword::new("        ".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        assert!(matches!(
            ClearTextPassword::new("a".repeat(MAX_PASSWORD_LENGTH + 1)),
            Err(PasswordPolicyError::TooLong { .. })
        ));
        // The composition rules only bind at registration
        assert!(ClearTextPassword::new("weakpass".to_string()).is_ok());
    }

    #[test]
    fn test_registration_policy_rejections() {
        let cases: &[(&str, PasswordPolicyError)] = &[
            ("Ab1!", PasswordPolicyError::TooShort { min: 8, actual: 4 }),
            ("secure1pass!", PasswordPolicyError::MissingUppercase),
            ("SecurePass!", PasswordPolicyError::MissingDigit),
            ("SecurePass1", PasswordPolicyError::MissingSpecialCharacter),
        ];
        for (candidate, expected) in cases {
            let err = ClearTextPassword::new_for_registration(candidate.to_string()).unwrap_err();
            assert_eq!(&err, expected, "candidate {candidate:?}");
        }
    }

    #[test]
    fn test_registration_policy_accepts() {
        for candidate in ["Secure1pass!", "A1234567+", "Tr0ub4dor_and_more"] {
            assert!(
                ClearTextPassword::new_for_registration(candidate.to_string()).is_ok(),
                "expected {candidate:?} to pass the policy"
            );
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong = ClearTextPassword::new_unchecked("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_pepper_must_match() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(Some(b"my_secret_pepper")).unwrap();

        assert!(hashed.verify(&password, Some(b"my_secret_pepper")));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_survives_storage() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        let stored = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(stored).unwrap();
        assert!(restored.verify(&password, None));

        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_never_prints_the_secret() {
        let password = ClearTextPassword::new_unchecked("secret".to_string());
        let debug = format!("{password:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("secret"));
    }
}
