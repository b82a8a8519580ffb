//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::CarListing;

/// Car listing as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListingDto {
    pub listing_id: String,
    pub owner_user_name: String,
    pub picture1: String,
    pub picture2: String,
    pub picture3: String,
    pub model: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CarListing> for CarListingDto {
    fn from(listing: CarListing) -> Self {
        Self {
            listing_id: listing.listing_id.to_string(),
            owner_user_name: listing.owner_user_name,
            picture1: listing.picture1,
            picture2: listing.picture2,
            picture3: listing.picture3,
            model: listing.model,
            description: listing.description,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

/// Add car request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCarRequest {
    pub user_name: String,
    #[serde(default)]
    pub picture1: String,
    #[serde(default)]
    pub picture2: String,
    #[serde(default)]
    pub picture3: String,
    pub model: String,
    pub description: String,
}

/// Edit car request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCarRequest {
    pub listing_id: String,
    pub model: String,
    pub description: String,
}

/// Listings page response (dashboard and admin views)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsResponse {
    pub listings: Vec<CarListingDto>,
}
