//! Session Token
//!
//! The cookie value is `<session_id>.<signature>` where the signature
//! is HMAC-SHA256 over the session ID string, base64url encoded. The
//! session itself lives server-side; the token only proves the ID was
//! issued by us.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Sign a session ID into a cookie-safe token
pub fn sign_session_token(secret: &[u8; 32], session_id: Uuid) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Parse and verify a session token, returning the session ID
///
/// Any malformed or tampered token maps to `SessionInvalid`; the
/// caller never learns which check failed.
pub fn parse_session_token(secret: &[u8; 32], token: &str) -> AuthResult<Uuid> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 2 {
        return Err(AuthError::SessionInvalid);
    }

    let session_id_str = parts[0];
    let signature_b64 = parts[1];

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::SessionInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::SessionInvalid)?;

    session_id_str
        .parse()
        .map_err(|_| AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_sign_and_parse_round_trip() {
        let id = Uuid::new_v4();
        let token = sign_session_token(&SECRET, id);
        assert_eq!(parse_session_token(&SECRET, &token).unwrap(), id);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let id = Uuid::new_v4();
        let token = sign_session_token(&SECRET, id);

        // Swap the session ID but keep the signature
        let other = Uuid::new_v4();
        let signature = token.split('.').nth(1).unwrap();
        let forged = format!("{other}.{signature}");

        assert!(matches!(
            parse_session_token(&SECRET, &forged),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let id = Uuid::new_v4();
        let token = sign_session_token(&SECRET, id);
        let other_secret = [8u8; 32];
        assert!(parse_session_token(&other_secret, &token).is_err());
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        assert!(parse_session_token(&SECRET, "").is_err());
        assert!(parse_session_token(&SECRET, "no-dot-here").is_err());
        assert!(parse_session_token(&SECRET, "a.b.c").is_err());
        assert!(parse_session_token(&SECRET, "not-a-uuid.c2ln").is_err());
    }
}
