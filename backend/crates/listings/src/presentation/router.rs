//! Listings Routers
//!
//! Two routers with different gates: the dashboard requires any valid
//! session, the admin surface additionally requires the admin role.

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{Next, from_fn},
    routing::{get, post},
};
use std::sync::Arc;

use auth::domain::repository::SessionStore;
use auth::{AuthMiddlewareState, require_admin, require_session};

use crate::domain::repository::ListingRepository;
use crate::presentation::handlers::{self, ListingAppState};

/// Router for `/dashboard` (session required)
pub fn dashboard_router<R, S>(repo: Arc<R>, auth_state: AuthMiddlewareState<S>) -> Router
where
    R: ListingRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let state = ListingAppState { repo };

    Router::new()
        .route("/dashboard", get(handlers::dashboard::<R>))
        .layer(from_fn(move |req: Request<Body>, next: Next| {
            let auth_state = auth_state.clone();
            async move { require_session(auth_state, req, next).await }
        }))
        .with_state(state)
}

/// Router for `/admin` and its mutations (admin role required)
pub fn admin_router<R, S>(repo: Arc<R>, auth_state: AuthMiddlewareState<S>) -> Router
where
    R: ListingRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let state = ListingAppState { repo };

    // Layers run bottom-up: the session check populates CurrentUser,
    // then the role check reads it.
    Router::new()
        .route("/admin", get(handlers::admin_overview::<R>))
        .route("/admin/add-car", post(handlers::add_car::<R>))
        .route("/admin/edit-car", post(handlers::edit_car::<R>))
        .route("/admin/delete-car/{car_id}", post(handlers::delete_car::<R>))
        .layer(from_fn(require_admin))
        .layer(from_fn(move |req: Request<Body>, next: Next| {
            let auth_state = auth_state.clone();
            async move { require_session(auth_state, req, next).await }
        }))
        .with_state(state)
}
