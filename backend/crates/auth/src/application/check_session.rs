//! Session verification: token parse, store lookup, expiry check.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};

pub struct SessionInfoOutput {
    pub user_name: String,
    pub user_role: String,
    pub expires_at_ms: i64,
}

pub struct CheckSessionUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_store,
            config,
        }
    }

    pub async fn execute(&self, session_token: &str) -> AuthResult<SessionInfoOutput> {
        let session = self.get_session(session_token).await?;

        Ok(SessionInfoOutput {
            user_name: session.user_name.clone(),
            user_role: session.user_role.code().to_string(),
            expires_at_ms: session.expires_at_ms,
        })
    }

    /// Parse, verify and look up the session. Expired sessions are
    /// reaped on the way out.
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = parse_session_token(&self.config.session_secret, session_token)?;

        let session = self
            .session_store
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_store.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }
}
