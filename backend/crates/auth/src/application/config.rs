//! Auth runtime configuration.

use std::time::Duration;

pub use platform::cookie::SameSite;

const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub session_cookie_name: String,
    /// HMAC key for session token signing
    pub session_secret: [u8; 32],
    pub session_ttl: Duration,
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
    /// Application-wide secret folded into password hashes
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: DEFAULT_SESSION_TTL,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Development preset: random signing key, plain-HTTP cookies.
    /// Sessions do not survive a restart.
    pub fn development() -> Self {
        use rand::RngCore;

        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);

        Self {
            session_secret: secret,
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Session TTL as whole seconds, for the cookie Max-Age.
    pub fn session_ttl_secs(&self) -> u64 {
        self.session_ttl.as_secs()
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
