//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Postgres user store, in-memory session store
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration with profile data and a password strength policy
//! - Login/logout with server-side sessions and cookie-based tokens
//! - Role-based access (Regular, Admin)
//! - Welcome mail on registration (delivery failure never blocks signup)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Session tokens are HMAC-SHA256 signed session IDs
//! - Sessions live in process memory only; a restart logs everyone out
//! - Username uniqueness is ultimately enforced by a database unique index

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemorySessionStore;
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthMiddlewareState, CurrentUser, require_admin, require_session};
pub use presentation::router::auth_router_generic;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
