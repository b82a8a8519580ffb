//! Application Layer
//!
//! Use cases for the listing lifecycle.

pub mod create_listing;
pub mod delete_listing;
pub mod edit_listing;
pub mod list_listings;

pub use create_listing::{CreateListingInput, CreateListingUseCase};
pub use delete_listing::DeleteListingUseCase;
pub use edit_listing::{EditListingInput, EditListingUseCase};
pub use list_listings::{ListAllUseCase, ListForOwnerUseCase};

use crate::error::{ListingError, ListingResult};
use kernel::id::ListingId;
use uuid::Uuid;

/// Parse a client-supplied listing ID.
///
/// Leading/trailing whitespace is tolerated; anything that is not a
/// UUID is a 400, not a 404.
pub(crate) fn parse_listing_id(raw: &str) -> ListingResult<ListingId> {
    let trimmed = raw.trim();
    trimmed
        .parse::<Uuid>()
        .map(ListingId::from_uuid)
        .map_err(|_| ListingError::InvalidId(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_id_trims_whitespace() {
        let id = Uuid::new_v4();
        let parsed = parse_listing_id(&format!("  {id}  ")).unwrap();
        assert_eq!(parsed.as_uuid(), &id);
    }

    #[test]
    fn test_parse_listing_id_rejects_garbage() {
        assert!(matches!(
            parse_listing_id("not-a-uuid"),
            Err(ListingError::InvalidId(_))
        ));
        assert!(parse_listing_id("").is_err());
    }
}
