//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer: users in Postgres, sessions in memory.

use crate::domain::entity::{session::Session, user::User};
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// The store's unique constraint on the canonical user name is the
    /// authoritative duplicate guard; a collision surfaces as
    /// `AuthError::UserNameTaken`.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by user name (canonical form)
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;
}

/// Session store trait
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Store a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find a live session by ID (expired sessions are not returned)
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Delete a session. Idempotent: deleting an absent session is Ok.
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;
}
