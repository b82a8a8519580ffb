//! In-Memory Session Store
//!
//! Sessions live in a process-local map and do not survive restarts; a
//! restart simply signs everyone out. Expired entries are evicted
//! lazily on lookup.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::entity::session::Session;
use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};

/// In-memory session store
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently held (including expired, pre-eviction)
    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every expired session. Returns the number evicted.
    pub fn evict_expired(&self) -> AuthResult<usize> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| AuthError::Internal("Session store lock poisoned".to_string()))?;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        Ok(before - sessions.len())
    }
}

impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| AuthError::Internal("Session store lock poisoned".to_string()))?;
        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        {
            let sessions = self
                .sessions
                .read()
                .map_err(|_| AuthError::Internal("Session store lock poisoned".to_string()))?;
            match sessions.get(&session_id) {
                Some(s) if !s.is_expired() => return Ok(Some(s.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Found but expired: evict under the write lock
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| AuthError::Internal("Session store lock poisoned".to_string()))?;
        sessions.remove(&session_id);
        Ok(None)
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| AuthError::Internal("Session store lock poisoned".to_string()))?;
        sessions.remove(&session_id);
        Ok(())
    }
}
