//! HTTP handlers, one module per resource.

pub mod auth;
pub mod availability;
pub mod customers;
pub mod hotels;
pub mod reservations;
pub mod rooms;

use innkeeper_core::error::CoreError;
use innkeeper_db::delete_policy::DeleteOutcome;

use crate::error::AppError;

/// Map a policy-aware delete outcome to an HTTP result for `entity`.
fn delete_outcome_to_result(
    outcome: DeleteOutcome,
    entity: &'static str,
    id: i64,
) -> Result<(), AppError> {
    match outcome {
        DeleteOutcome::Deleted => Ok(()),
        DeleteOutcome::NotFound => Err(AppError::Core(CoreError::NotFound { entity, id })),
        DeleteOutcome::Restricted { dependents } => Err(AppError::Core(CoreError::Conflict(
            format!("{entity} still has {dependents} dependent row(s); deletion is restricted"),
        ))),
    }
}
