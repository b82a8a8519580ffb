//! Delete Listing Use Case
//!
//! Soft delete: the row is kept but leaves every read path. Deleting
//! an already-deleted or unknown listing is a successful no-op.

use std::sync::Arc;

use crate::application::parse_listing_id;
use crate::domain::repository::ListingRepository;
use crate::error::ListingResult;

/// Delete listing use case
pub struct DeleteListingUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteListingUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_listing_id: &str) -> ListingResult<()> {
        let listing_id = parse_listing_id(raw_listing_id)?;

        let deleted = self.repo.soft_delete(&listing_id).await?;

        if deleted {
            tracing::info!(listing_id = %listing_id, "Listing soft-deleted");
        } else {
            tracing::debug!(listing_id = %listing_id, "Delete was a no-op");
        }

        Ok(())
    }
}
