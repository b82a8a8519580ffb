//! Logout Use Case
//!
//! Deletes the server-side session. Idempotent: an invalid or
//! already-cleared token still results in a signed-out client.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::parse_session_token;
use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_store,
            config,
        }
    }

    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = match parse_session_token(&self.config.session_secret, session_token) {
            Ok(id) => id,
            Err(_) => {
                // Nothing to delete; the cookie gets cleared regardless
                tracing::debug!("Logout with invalid session token");
                return Ok(());
            }
        };

        self.session_store.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User logged out");

        Ok(())
    }
}
