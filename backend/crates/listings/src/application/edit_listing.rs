//! Edit Listing Use Case

use std::sync::Arc;

use crate::application::parse_listing_id;
use crate::domain::repository::ListingRepository;
use crate::error::{ListingError, ListingResult};

/// Edit listing input
///
/// Only model and description are editable; pictures and ownership are
/// fixed at creation.
pub struct EditListingInput {
    /// Raw listing ID from the client
    pub listing_id: String,
    pub model: String,
    pub description: String,
}

/// Edit listing use case
pub struct EditListingUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
}

impl<R> EditListingUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: EditListingInput) -> ListingResult<()> {
        let listing_id = parse_listing_id(&input.listing_id)?;

        let updated = self
            .repo
            .update_details(&listing_id, &input.model, &input.description)
            .await?;

        if !updated {
            // Absent and soft-deleted look the same to the caller
            return Err(ListingError::NotFound);
        }

        tracing::info!(listing_id = %listing_id, "Listing edited");

        Ok(())
    }
}
