//! Room entity model and DTOs.
//!
//! The `available` flag is derived from the reservation calendar and is
//! deliberately absent from the create/update DTOs; it changes only through
//! availability reconciliation.

use innkeeper_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// The fixed set of room categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

/// A room row from the `rooms` table. The room number is the primary key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub number: i32,
    pub room_type: RoomType,
    /// Derived: false while a reservation's stay interval contains today.
    pub available: bool,
    /// Nullable to support the set-null hotel delete policy.
    pub hotel_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A room joined with its hotel's name for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomDetail {
    pub number: i32,
    pub room_type: RoomType,
    pub available: bool,
    pub hotel_id: Option<DbId>,
    pub hotel_name: Option<String>,
}

/// DTO for creating a new room.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoom {
    #[validate(range(min = 1, message = "room number must be positive"))]
    pub number: i32,
    pub room_type: RoomType,
    pub hotel_id: DbId,
}

/// DTO for updating an existing room. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoom {
    pub room_type: Option<RoomType>,
    pub hotel_id: Option<DbId>,
}

/// Optional filters for room listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomFilter {
    pub hotel_id: Option<DbId>,
    pub available: Option<bool>,
}
