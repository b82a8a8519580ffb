//! User Entity
//!
//! Aggregate holding the user's profile and credentials. Users are
//! created once at registration and never updated or deleted here;
//! role changes happen out-of-band.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_name::UserName, user_role::UserRole};

/// Profile fields captured at registration
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub age: i16,
    pub country: String,
    pub gender: String,
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique by canonical form, used for login and listing ownership)
    pub user_name: UserName,
    /// Contact address for the welcome mail
    pub email: Email,
    /// Argon2id password hash (PHC string)
    pub password_hash: HashedPassword,
    /// Profile data
    pub profile: UserProfile,
    /// Role (Regular, Admin); fixed at creation
    pub user_role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default (regular) role
    pub fn new(
        user_name: UserName,
        email: Email,
        password_hash: HashedPassword,
        profile: UserProfile,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            profile,
            user_role: UserRole::default(),
            created_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }
}
