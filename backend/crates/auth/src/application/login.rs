//! Login Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::sign_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::value_object::{user_name::UserName, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Session token for cookie
    pub session_token: String,
    /// User name as registered (original case)
    pub user_name: String,
    /// Role of the authenticated user
    pub user_role: UserRole,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    user_repo: Arc<U>,
    session_store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    pub fn new(user_repo: Arc<U>, session_store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_store,
            config,
        }
    }

    /// Authenticate and open a session.
    ///
    /// Every failure before the password check collapses into
    /// `InvalidCredentials` so responses do not reveal whether the
    /// user name exists.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Canonicalize only. Accounts created out-of-band (admins)
        // may carry names the registration rules reject.
        let user_name =
            UserName::lenient(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Lenient parse: the stored hash is the arbiter, not the
        // registration policy of the day.
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;
        let session = Session::new(
            user.user_name.canonical().to_string(),
            user.user_role,
            ttl,
        );

        self.session_store.create(&session).await?;

        let session_token = sign_session_token(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_name = %user.user_name,
            session_id = %session.session_id,
            role = %user.user_role,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            user_name: user.user_name.original().to_string(),
            user_role: user.user_role,
        })
    }
}
