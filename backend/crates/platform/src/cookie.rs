//! Session cookie helpers: Set-Cookie serialization and extraction
//! from request headers.

use axum::http::{HeaderMap, header};
use std::fmt::Write;

/// SameSite attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// Attributes applied to every session cookie this service sets.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Serialize a `Set-Cookie` header value carrying `value`.
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut out = format!("{}={}", self.name, value);
        if self.http_only {
            out.push_str("; HttpOnly");
        }
        if self.secure {
            out.push_str("; Secure");
        }
        // write! into a String cannot fail
        let _ = write!(
            out,
            "; SameSite={}; Path={}",
            self.same_site.as_str(),
            self.path
        );
        if let Some(max_age) = self.max_age_secs {
            let _ = write!(out, "; Max-Age={max_age}");
        }
        out
    }

    /// Serialize a `Set-Cookie` header value that removes the cookie.
    pub fn build_delete_cookie(&self) -> String {
        format!("{}=; HttpOnly; Path={}; Max-Age=0", self.name, self.path)
    }
}

/// Look up a cookie by name in the request `Cookie` header.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(header::COOKIE)?.to_str().ok()?;

    for pair in header.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=')
            && key == name
        {
            return Some(value.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_set_cookie_carries_all_attributes() {
        let config = CookieConfig {
            max_age_secs: Some(43200),
            ..CookieConfig::default()
        };

        assert_eq!(
            config.build_set_cookie("value123"),
            "session=value123; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age=43200"
        );
    }

    #[test]
    fn test_insecure_cookie_omits_secure() {
        let config = CookieConfig {
            secure: false,
            ..CookieConfig::default()
        };
        assert!(!config.build_set_cookie("v").contains("Secure"));
    }

    #[test]
    fn test_delete_cookie_expires_immediately() {
        let cookie = CookieConfig::default().build_delete_cookie();
        assert!(cookie.starts_with("session=;"));
        assert!(cookie.ends_with("Max-Age=0"));
    }

    #[test]
    fn test_extract_cookie_by_name() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; session=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "session").as_deref(),
            Some("abc123")
        );
        assert_eq!(extract_cookie(&headers, "foo").as_deref(), Some("bar"));
        assert_eq!(extract_cookie(&headers, "missing"), None);
        assert_eq!(extract_cookie(&HeaderMap::new(), "session"), None);
    }
}
