//! Handlers for the `/customers` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use innkeeper_core::error::CoreError;
use innkeeper_core::types::DbId;
use innkeeper_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use innkeeper_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::delete_outcome_to_result;

/// Query parameters for `GET /customers`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring match over name and email.
    pub search: Option<String>,
}

/// POST /api/v1/customers
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    input.validate()?;
    let customer = CustomerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/v1/customers
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool, params.search.as_deref()).await?;
    Ok(Json(customers))
}

/// GET /api/v1/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}

/// PUT /api/v1/customers/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    input.validate()?;
    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}

/// DELETE /api/v1/customers/{id}
///
/// What happens to the customer's reservations follows the configured
/// delete policy. Under cascade, reservations disappear, so availability
/// is reconciled afterwards.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let outcome = CustomerRepo::delete(&state.pool, id, state.config.delete_policy).await?;
    delete_outcome_to_result(outcome, "Customer", id)?;

    state
        .reconciler
        .run(chrono::Utc::now().date_naive())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
