//! Auth HTTP handlers: register, login, logout and session status.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::{CookieConfig, extract_cookie};
use platform::mail::Mailer;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::value_object::user_role::UserRole;
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, SessionStatusResponse,
};

/// State shared by all auth routes. Generic over the repository and
/// session store so tests can plug in in-memory fakes.
pub struct AuthAppState<U, S>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub sessions: Arc<S>,
    pub mailer: Arc<Mailer>,
    pub config: Arc<AuthConfig>,
}

// Manual Clone: a derive would require U: Clone and S: Clone.
impl<U, S> Clone for AuthAppState<U, S>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            sessions: Arc::clone(&self.sessions),
            mailer: Arc::clone(&self.mailer),
            config: Arc::clone(&self.config),
        }
    }
}

/// POST /register
pub async fn register<U, S>(
    State(state): State<AuthAppState<U, S>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let output = RegisterUseCase::new(
        state.users.clone(),
        state.mailer.clone(),
        state.config.clone(),
    )
    .execute(RegisterInput {
        user_name: req.user_name,
        email: req.email,
        password: req.password,
        first_name: req.first_name,
        last_name: req.last_name,
        age: req.age,
        country: req.country,
        gender: req.gender,
    })
    .await?;

    let body = RegisterResponse {
        user_name: output.user_name,
    };
    Ok((StatusCode::CREATED, Json(body)))
}

/// POST /login
pub async fn login<U, S>(
    State(state): State<AuthAppState<U, S>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let output = LoginUseCase::new(
        state.users.clone(),
        state.sessions.clone(),
        state.config.clone(),
    )
    .execute(LoginInput {
        user_name: req.user_name,
        password: req.password,
    })
    .await?;

    let cookie = session_cookie(&state.config).build_set_cookie(&output.session_token);

    let redirect_to = match output.user_role {
        UserRole::Admin => "/admin",
        UserRole::Regular => "/dashboard",
    };

    let body = LoginResponse {
        user_name: output.user_name,
        user_role: output.user_role.code().to_string(),
        redirect_to: redirect_to.to_string(),
    };
    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)], Json(body)))
}

/// GET /logout
///
/// Clears the cookie unconditionally; a missing or bogus token still
/// gets a 204.
pub async fn logout<U, S>(
    State(state): State<AuthAppState<U, S>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, &state.config.session_cookie_name) {
        // Server-side invalidation is best effort
        let _ = LogoutUseCase::new(state.sessions.clone(), state.config.clone())
            .execute(&token)
            .await;
    }

    let cookie = session_cookie(&state.config).build_delete_cookie();
    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

/// GET /session
pub async fn session_status<U, S>(
    State(state): State<AuthAppState<U, S>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let mut session_info = None;
    if let Some(token) = extract_cookie(&headers, &state.config.session_cookie_name) {
        session_info = CheckSessionUseCase::new(state.sessions.clone(), state.config.clone())
            .execute(&token)
            .await
            .ok();
    }

    let body = match session_info {
        Some(info) => SessionStatusResponse {
            authenticated: true,
            user_name: Some(info.user_name),
            user_role: Some(info.user_role),
            expires_at_ms: Some(info.expires_at_ms),
        },
        None => SessionStatusResponse {
            authenticated: false,
            user_name: None,
            user_role: None,
            expires_at_ms: None,
        },
    };
    Ok(Json(body))
}

fn session_cookie(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl_secs() as i64),
    }
}
