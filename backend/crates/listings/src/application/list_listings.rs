//! List Listings Use Cases

use std::sync::Arc;

use crate::domain::entity::CarListing;
use crate::domain::repository::ListingRepository;
use crate::error::ListingResult;

/// Listings owned by one user (dashboard view)
pub struct ListForOwnerUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
}

impl<R> ListForOwnerUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_user_name: &str) -> ListingResult<Vec<CarListing>> {
        self.repo.list_for_owner(owner_user_name).await
    }
}

/// All active listings (admin view)
pub struct ListAllUseCase<R>
where
    R: ListingRepository,
{
    repo: Arc<R>,
}

impl<R> ListAllUseCase<R>
where
    R: ListingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ListingResult<Vec<CarListing>> {
        self.repo.list_all().await
    }
}
