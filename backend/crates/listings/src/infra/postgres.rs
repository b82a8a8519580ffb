//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::CarListing;
use crate::domain::repository::ListingRepository;
use crate::error::ListingResult;
use kernel::id::ListingId;

/// PostgreSQL-backed listing repository
#[derive(Clone)]
pub struct PgListingRepository {
    pool: PgPool,
}

impl PgListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    listing_id,
    owner_user_name,
    picture1,
    picture2,
    picture3,
    model,
    description,
    created_at,
    updated_at,
    deleted_at
"#;

impl ListingRepository for PgListingRepository {
    async fn insert(&self, listing: &CarListing) -> ListingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO car_listings (
                listing_id,
                owner_user_name,
                picture1,
                picture2,
                picture3,
                model,
                description,
                created_at,
                updated_at,
                deleted_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(listing.listing_id.as_uuid())
        .bind(&listing.owner_user_name)
        .bind(&listing.picture1)
        .bind(&listing.picture2)
        .bind(&listing.picture3)
        .bind(&listing.model)
        .bind(&listing.description)
        .bind(listing.created_at)
        .bind(listing.updated_at)
        .bind(listing.deleted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_active_by_id(&self, listing_id: &ListingId) -> ListingResult<Option<CarListing>> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM car_listings WHERE listing_id = $1 AND deleted_at IS NULL",
        ))
        .bind(listing_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ListingRow::into_listing))
    }

    async fn update_details(
        &self,
        listing_id: &ListingId,
        model: &str,
        description: &str,
    ) -> ListingResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE car_listings SET
                model = $2,
                description = $3,
                updated_at = NOW()
            WHERE listing_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(listing_id.as_uuid())
        .bind(model)
        .bind(description)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn soft_delete(&self, listing_id: &ListingId) -> ListingResult<bool> {
        let deleted = sqlx::query(
            r#"
            UPDATE car_listings SET
                deleted_at = NOW()
            WHERE listing_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(listing_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted > 0)
    }

    async fn list_for_owner(&self, owner_user_name: &str) -> ListingResult<Vec<CarListing>> {
        let rows = sqlx::query_as::<_, ListingRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM car_listings
            WHERE owner_user_name = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        ))
        .bind(owner_user_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }

    async fn list_all(&self) -> ListingResult<Vec<CarListing>> {
        let rows = sqlx::query_as::<_, ListingRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM car_listings
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ListingRow::into_listing).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ListingRow {
    listing_id: Uuid,
    owner_user_name: String,
    picture1: String,
    picture2: String,
    picture3: String,
    model: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    deleted_at: Option<DateTime<Utc>>,
}

impl ListingRow {
    fn into_listing(self) -> CarListing {
        CarListing {
            listing_id: ListingId::from_uuid(self.listing_id),
            owner_user_name: self.owner_user_name,
            picture1: self.picture1,
            picture2: self.picture2,
            picture3: self.picture3,
            model: self.model,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}
