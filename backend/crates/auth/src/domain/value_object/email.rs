//! Email address value object.
//!
//! Validation is deliberately shallow: the address only receives the
//! welcome mail and never identifies a login, so we check shape, not
//! deliverability. Input is trimmed and lowercased.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

// RFC 5321 limits
const MAX_TOTAL: usize = 254;
const MAX_LOCAL: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }
        if email.len() > MAX_TOTAL {
            return Err(AppError::bad_request(format!(
                "Email must be at most {MAX_TOTAL} characters"
            )));
        }
        if !has_valid_shape(&email) {
            return Err(AppError::bad_request("Invalid email format"));
        }

        Ok(Self(email))
    }

    /// Rehydrate an address that was validated before it was stored.
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `local@domain` with a non-empty local part of at most [`MAX_LOCAL`]
/// bytes and a dotted hostname-ish domain. A second `@` fails the
/// domain character check.
fn has_valid_shape(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > MAX_LOCAL {
        return false;
    }

    let domain_chars_ok = domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');

    !domain.is_empty()
        && domain.contains('.')
        && domain_chars_ok
        && !domain.starts_with(['.', '-'])
        && !domain.ends_with(['.', '-'])
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_shapes() {
        for ok in [
            "user@example.com",
            "user.name@example.co.uk",
            "user+tag@example.com",
        ] {
            assert!(Email::new(ok).is_ok(), "{ok} should be accepted");
        }
    }

    #[test]
    fn test_rejects_malformed_input() {
        for bad in [
            "",
            "userexample.com",
            "user@",
            "@example.com",
            "user@@example.com",
            "user@example",
            "user@.example.com",
            "user@example.com-",
        ] {
            assert!(Email::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_trims_and_lowercases() {
        let email = Email::new("  User@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }
}
