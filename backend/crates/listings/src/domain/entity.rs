//! Car Listing Entity

use chrono::{DateTime, Utc};
use kernel::id::ListingId;

/// Car listing entity
///
/// `deleted_at` marks a soft-deleted row: it stays in storage but is
/// excluded from every read path.
#[derive(Debug, Clone)]
pub struct CarListing {
    pub listing_id: ListingId,
    /// Canonical user name of the assigned owner
    pub owner_user_name: String,
    pub picture1: String,
    pub picture2: String,
    pub picture3: String,
    pub model: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// Set on first edit, None until then
    pub updated_at: Option<DateTime<Utc>>,
    /// Set by soft delete, None while active
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CarListing {
    /// Create a new active listing
    pub fn new(
        owner_user_name: String,
        picture1: String,
        picture2: String,
        picture3: String,
        model: String,
        description: String,
    ) -> Self {
        Self {
            listing_id: ListingId::new(),
            owner_user_name,
            picture1,
            picture2,
            picture3,
            model,
            description,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
