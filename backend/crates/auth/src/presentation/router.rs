//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use platform::mail::Mailer;
use std::sync::Arc;

use crate::domain::repository::{SessionStore, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router for any repository implementations
pub fn auth_router_generic<U, S>(
    users: Arc<U>,
    sessions: Arc<S>,
    mailer: Arc<Mailer>,
    config: Arc<crate::application::config::AuthConfig>,
) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let state = AuthAppState {
        users,
        sessions,
        mailer,
        config,
    };

    Router::new()
        .route("/register", post(handlers::register::<U, S>))
        .route("/login", post(handlers::login::<U, S>))
        .route("/logout", get(handlers::logout::<U, S>))
        .route("/session", get(handlers::session_status::<U, S>))
        .with_state(state)
}
