//! Auth Middleware
//!
//! Middleware for requiring a session and, on admin routes, the admin
//! role on protected routes.

use axum::Json;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::error::AuthError;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::user_role::UserRole;

/// Middleware state
pub struct AuthMiddlewareState<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> Clone for AuthMiddlewareState<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            config: Arc::clone(&self.config),
        }
    }
}

/// Authenticated caller, stored in request extensions by
/// [`require_session`] for downstream handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Canonical user name
    pub user_name: String,
    pub user_role: UserRole,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }
}

/// Middleware that requires a valid session
///
/// On success the request gains a [`CurrentUser`] extension. On
/// failure the client gets 401 with a redirect hint to the login page.
pub async fn require_session<S>(
    state: AuthMiddlewareState<S>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: SessionStore + Send + Sync + 'static,
{
    let headers = req.headers();

    let token = platform::cookie::extract_cookie(headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.sessions.clone(), state.config.clone());

    let session = if let Some(token) = token {
        use_case.get_session(&token).await.ok()
    } else {
        None
    };

    let Some(session) = session else {
        return Err((
            StatusCode::UNAUTHORIZED,
            [("X-Auth-Required", "true")],
            Json(json!({
                "error": "Authentication required",
                "redirectTo": "/login",
            })),
        )
            .into_response());
    };

    req.extensions_mut().insert(CurrentUser {
        user_name: session.user_name,
        user_role: session.user_role,
    });

    Ok(next.run(req).await)
}

/// Middleware that requires the admin role
///
/// Must run after [`require_session`]; a request without a
/// [`CurrentUser`] extension is treated as unauthenticated.
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, Response> {
    match req.extensions().get::<CurrentUser>() {
        Some(user) if user.is_admin() => Ok(next.run(req).await),
        Some(user) => {
            tracing::warn!(user_name = %user.user_name, "Non-admin attempted admin route");
            // Logged above with the caller's name, so skip the
            // variant's own logging path.
            Err(AuthError::AdminRequired.to_app_error().into_response())
        }
        None => Err((
            StatusCode::UNAUTHORIZED,
            [("X-Auth-Required", "true")],
            Json(json!({
                "error": "Authentication required",
                "redirectTo": "/login",
            })),
        )
            .into_response()),
    }
}
