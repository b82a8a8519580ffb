//! Domain Layer

pub mod entity;
pub mod repository;

pub use entity::CarListing;
pub use repository::ListingRepository;
