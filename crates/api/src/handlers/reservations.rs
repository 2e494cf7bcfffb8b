//! Handlers for the `/reservations` resource.
//!
//! Every successful mutation is followed, synchronously, by an availability
//! reconciliation pass: the handler does not return until the room flags
//! are consistent with the new reservation set.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use innkeeper_core::error::CoreError;
use innkeeper_core::types::DbId;
use innkeeper_db::models::reservation::{
    CreateReservation, Reservation, ReservationDetail, ReservationFilter, UpdateReservation,
};
use innkeeper_db::repositories::ReservationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/reservations
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    input.validate()?;
    let reservation = ReservationRepo::create(&state.pool, &input).await?;

    state
        .reconciler
        .run(chrono::Utc::now().date_naive())
        .await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/v1/reservations
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(filter): Query<ReservationFilter>,
) -> AppResult<Json<Vec<ReservationDetail>>> {
    let reservations = ReservationRepo::list(&state.pool, &filter).await?;
    Ok(Json(reservations))
}

/// GET /api/v1/reservations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;
    Ok(Json(reservation))
}

/// PUT /api/v1/reservations/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReservation>,
) -> AppResult<Json<Reservation>> {
    input.validate()?;
    let reservation = ReservationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;

    state
        .reconciler
        .run(chrono::Utc::now().date_naive())
        .await?;

    Ok(Json(reservation))
}

/// DELETE /api/v1/reservations/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ReservationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }));
    }

    state
        .reconciler
        .run(chrono::Utc::now().date_naive())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
