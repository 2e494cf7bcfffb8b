//! Hotel entity model and DTOs.

use innkeeper_core::types::{DbId, Timestamp};
use innkeeper_core::validation::rating_in_half_steps;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A hotel row from the `hotels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hotel {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    /// 1.0 to 5.0 inclusive, half-star steps.
    pub rating: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new hotel.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_create_hotel"))]
pub struct CreateHotel {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    pub rating: f64,
}

/// DTO for updating an existing hotel. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_update_hotel"))]
pub struct UpdateHotel {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: Option<String>,
    pub rating: Option<f64>,
}

fn validate_create_hotel(input: &CreateHotel) -> Result<(), ValidationError> {
    rating_in_half_steps(input.rating)
}

fn validate_update_hotel(input: &UpdateHotel) -> Result<(), ValidationError> {
    match input.rating {
        Some(rating) => rating_in_half_steps(rating),
        None => Ok(()),
    }
}
