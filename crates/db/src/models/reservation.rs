//! Reservation entity model and DTOs.

use innkeeper_core::types::{Date, DbId, Timestamp};
use innkeeper_core::validation::stay_interval;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A reservation row from the `reservations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    /// Nullable to support the set-null customer delete policy.
    pub customer_id: Option<DbId>,
    pub room_number: i32,
    pub check_in: Date,
    pub check_out: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A reservation joined with its customer's name for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReservationDetail {
    pub id: DbId,
    pub customer_id: Option<DbId>,
    pub customer_name: Option<String>,
    pub room_number: i32,
    pub check_in: Date,
    pub check_out: Date,
}

/// DTO for creating a new reservation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_create_reservation"))]
pub struct CreateReservation {
    pub customer_id: DbId,
    #[validate(range(min = 1, message = "room number must be positive"))]
    pub room_number: i32,
    pub check_in: Date,
    pub check_out: Date,
}

/// DTO for updating an existing reservation. All fields are optional.
///
/// When only one end of the stay interval is patched, the database CHECK
/// constraint still enforces `check_out > check_in` against the kept value.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_update_reservation"))]
pub struct UpdateReservation {
    pub customer_id: Option<DbId>,
    pub room_number: Option<i32>,
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
}

/// Optional filters for reservation listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationFilter {
    pub customer_id: Option<DbId>,
    pub room_number: Option<i32>,
}

fn validate_create_reservation(input: &CreateReservation) -> Result<(), ValidationError> {
    stay_interval(input.check_in, input.check_out)
}

fn validate_update_reservation(input: &UpdateReservation) -> Result<(), ValidationError> {
    match (input.check_in, input.check_out) {
        (Some(check_in), Some(check_out)) => stay_interval(check_in, check_out),
        _ => Ok(()),
    }
}
