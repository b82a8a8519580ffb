//! Repository Traits
//!
//! Interface for listing persistence. Every read excludes soft-deleted
//! rows; the implementation owns the filtering.

use crate::domain::entity::CarListing;
use crate::error::ListingResult;
use kernel::id::ListingId;

/// Listing repository trait
#[trait_variant::make(ListingRepository: Send)]
pub trait LocalListingRepository {
    /// Insert a new listing
    async fn insert(&self, listing: &CarListing) -> ListingResult<()>;

    /// Find an active (non-deleted) listing by ID
    async fn find_active_by_id(&self, listing_id: &ListingId) -> ListingResult<Option<CarListing>>;

    /// Update model and description, setting `updated_at`.
    /// Returns false when no active listing matched.
    async fn update_details(
        &self,
        listing_id: &ListingId,
        model: &str,
        description: &str,
    ) -> ListingResult<bool>;

    /// Soft-delete a listing. Returns false when no active listing
    /// matched (already deleted or never existed).
    async fn soft_delete(&self, listing_id: &ListingId) -> ListingResult<bool>;

    /// Active listings owned by a user, newest first
    async fn list_for_owner(&self, owner_user_name: &str) -> ListingResult<Vec<CarListing>>;

    /// All active listings, newest first
    async fn list_all(&self) -> ListingResult<Vec<CarListing>>;
}
