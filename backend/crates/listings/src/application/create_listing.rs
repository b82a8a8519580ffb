//! Create Listing Use Case

use std::sync::Arc;

use crate::domain::entity::CarListing;
use crate::domain::repository::ListingRepository;
use crate::error::ListingResult;

/// Create listing input
pub struct CreateListingInput {
    /// User name the listing is assigned to. Accepted as-is; an
    /// unknown name simply produces a listing nobody sees on their
    /// dashboard.
    pub owner_user_name: String,
    pub picture1: String,
    pub picture2: String,
    pub picture3: String,
    pub model: String,
    pub description: String,
}

/// Create listing use case
pub struct CreateListingUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
}

impl<R> CreateListingUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateListingInput) -> ListingResult<CarListing> {
        let listing = CarListing::new(
            input.owner_user_name.trim().to_lowercase(),
            input.picture1,
            input.picture2,
            input.picture3,
            input.model,
            input.description,
        );

        self.repo.insert(&listing).await?;

        tracing::info!(
            listing_id = %listing.listing_id,
            owner = %listing.owner_user_name,
            "Listing created"
        );

        Ok(listing)
    }
}
