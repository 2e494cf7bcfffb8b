//! Handlers for the `/rooms` resource.
//!
//! Rooms are addressed by their room number, which doubles as the primary
//! key. The `available` flag cannot be set through this resource; it is
//! derived from the reservation calendar.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use innkeeper_core::error::CoreError;
use innkeeper_db::models::room::{CreateRoom, Room, RoomDetail, RoomFilter, UpdateRoom};
use innkeeper_db::repositories::RoomRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::delete_outcome_to_result;

/// POST /api/v1/rooms
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    input.validate()?;
    let room = RoomRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /api/v1/rooms
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(filter): Query<RoomFilter>,
) -> AppResult<Json<Vec<RoomDetail>>> {
    let rooms = RoomRepo::list(&state.pool, &filter).await?;
    Ok(Json(rooms))
}

/// GET /api/v1/rooms/{number}
pub async fn get_by_number(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(number): Path<i32>,
) -> AppResult<Json<Room>> {
    let room = RoomRepo::find_by_number(&state.pool, number)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: number.into(),
        }))?;
    Ok(Json(room))
}

/// PUT /api/v1/rooms/{number}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(number): Path<i32>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<Json<Room>> {
    let room = RoomRepo::update(&state.pool, number, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: number.into(),
        }))?;
    Ok(Json(room))
}

/// DELETE /api/v1/rooms/{number}
///
/// Refused with 409 while reservations reference the room.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(number): Path<i32>,
) -> AppResult<StatusCode> {
    let outcome = RoomRepo::delete(&state.pool, number).await?;
    delete_outcome_to_result(outcome, "Room", number.into())?;
    Ok(StatusCode::NO_CONTENT)
}
