//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Extension;
use std::sync::Arc;

use auth::CurrentUser;

use crate::application::{
    CreateListingInput, CreateListingUseCase, DeleteListingUseCase, EditListingInput,
    EditListingUseCase, ListAllUseCase, ListForOwnerUseCase,
};
use crate::domain::repository::ListingRepository;
use crate::error::ListingResult;
use crate::presentation::dto::{AddCarRequest, CarListingDto, EditCarRequest, ListingsResponse};

/// Shared state for listing handlers
pub struct ListingAppState<R>
where
    R: ListingRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for ListingAppState<R>
where
    R: ListingRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

// ============================================================================
// Dashboard (session required)
// ============================================================================

/// GET /dashboard
///
/// Listings assigned to the authenticated user.
pub async fn dashboard<R>(
    State(state): State<ListingAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> ListingResult<Json<ListingsResponse>>
where
    R: ListingRepository + Send + Sync + 'static,
{
    let use_case = ListForOwnerUseCase::new(state.repo.clone());
    let listings = use_case.execute(&user.user_name).await?;

    Ok(Json(ListingsResponse {
        listings: listings.into_iter().map(CarListingDto::from).collect(),
    }))
}

// ============================================================================
// Admin (admin role required)
// ============================================================================

/// GET /admin
///
/// Every active listing, regardless of owner.
pub async fn admin_overview<R>(
    State(state): State<ListingAppState<R>>,
) -> ListingResult<Json<ListingsResponse>>
where
    R: ListingRepository + Send + Sync + 'static,
{
    let use_case = ListAllUseCase::new(state.repo.clone());
    let listings = use_case.execute().await?;

    Ok(Json(ListingsResponse {
        listings: listings.into_iter().map(CarListingDto::from).collect(),
    }))
}

/// POST /admin/add-car
pub async fn add_car<R>(
    State(state): State<ListingAppState<R>>,
    Json(req): Json<AddCarRequest>,
) -> ListingResult<impl IntoResponse>
where
    R: ListingRepository + Send + Sync + 'static,
{
    let use_case = CreateListingUseCase::new(state.repo.clone());

    let listing = use_case
        .execute(CreateListingInput {
            owner_user_name: req.user_name,
            picture1: req.picture1,
            picture2: req.picture2,
            picture3: req.picture3,
            model: req.model,
            description: req.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CarListingDto::from(listing))))
}

/// POST /admin/edit-car
pub async fn edit_car<R>(
    State(state): State<ListingAppState<R>>,
    Json(req): Json<EditCarRequest>,
) -> ListingResult<StatusCode>
where
    R: ListingRepository + Send + Sync + 'static,
{
    let use_case = EditListingUseCase::new(state.repo.clone());

    use_case
        .execute(EditListingInput {
            listing_id: req.listing_id,
            model: req.model,
            description: req.description,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /admin/delete-car/{car_id}
pub async fn delete_car<R>(
    State(state): State<ListingAppState<R>>,
    Path(car_id): Path<String>,
) -> ListingResult<StatusCode>
where
    R: ListingRepository + Send + Sync + 'static,
{
    let use_case = DeleteListingUseCase::new(state.repo.clone());

    use_case.execute(&car_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
