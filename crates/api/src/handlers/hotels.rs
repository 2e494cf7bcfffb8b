//! Handlers for the `/hotels` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use innkeeper_core::error::CoreError;
use innkeeper_core::types::DbId;
use innkeeper_db::models::hotel::{CreateHotel, Hotel, UpdateHotel};
use innkeeper_db::repositories::HotelRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::delete_outcome_to_result;

/// Query parameters for `GET /hotels`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring match over name and address.
    pub search: Option<String>,
}

/// POST /api/v1/hotels
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateHotel>,
) -> AppResult<(StatusCode, Json<Hotel>)> {
    input.validate()?;
    let hotel = HotelRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

/// GET /api/v1/hotels
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Hotel>>> {
    let hotels = HotelRepo::list(&state.pool, params.search.as_deref()).await?;
    Ok(Json(hotels))
}

/// GET /api/v1/hotels/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Hotel>> {
    let hotel = HotelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hotel",
            id,
        }))?;
    Ok(Json(hotel))
}

/// PUT /api/v1/hotels/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHotel>,
) -> AppResult<Json<Hotel>> {
    input.validate()?;
    let hotel = HotelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Hotel",
            id,
        }))?;
    Ok(Json(hotel))
}

/// DELETE /api/v1/hotels/{id}
///
/// What happens to the hotel's rooms follows the configured delete policy.
/// Under cascade, reservations can disappear with the rooms, so availability
/// is reconciled afterwards.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let outcome = HotelRepo::delete(&state.pool, id, state.config.delete_policy).await?;
    delete_outcome_to_result(outcome, "Hotel", id)?;

    state
        .reconciler
        .run(chrono::Utc::now().date_naive())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
