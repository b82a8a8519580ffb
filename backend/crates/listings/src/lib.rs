//! Listings (Car Listing) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Lifecycle Model
//! - Listings are created by admins and assigned to a user name
//! - Edits touch model/description only and bump `updated_at`
//! - Deletion is a soft delete: `deleted_at` is set and the row
//!   disappears from every read path; deleting twice is a no-op
//! - Regular users only ever see listings assigned to them

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ListingError, ListingResult};
pub use infra::postgres::PgListingRepository;
pub use presentation::router::{admin_router, dashboard_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
