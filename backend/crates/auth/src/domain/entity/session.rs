//! Session Entity
//!
//! Represents an authenticated user session. Held in the in-memory
//! session store; the client only carries a signed reference to it.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_role::UserRole;

/// Server-side session record
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Canonical user name of the authenticated user
    pub user_name: String,
    /// User role at session creation
    pub user_role: UserRole,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_name: String, user_role: UserRole, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_name,
            user_role,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_not_expired() {
        let session = Session::new(
            "alice".to_string(),
            UserRole::Regular,
            Duration::hours(12),
        );
        assert!(!session.is_expired());
        assert!(session.remaining_ms() > 0);
    }

    #[test]
    fn test_zero_ttl_session_expires() {
        let session = Session::new(
            "alice".to_string(),
            UserRole::Regular,
            Duration::milliseconds(-1),
        );
        assert!(session.is_expired());
        assert_eq!(session.remaining_ms(), 0);
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = Session::new("a".to_string(), UserRole::Regular, Duration::hours(1));
        let b = Session::new("a".to_string(), UserRole::Regular, Duration::hours(1));
        assert_ne!(a.session_id, b.session_id);
    }
}
