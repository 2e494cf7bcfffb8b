//! Repository for the `rooms` table.

use sqlx::PgPool;

use crate::delete_policy::DeleteOutcome;
use crate::models::room::{CreateRoom, Room, RoomDetail, RoomFilter, UpdateRoom};

/// Column list for `rooms` queries.
const ROOM_COLUMNS: &str = "number, room_type, available, hotel_id, created_at, updated_at";

/// Provides CRUD operations for rooms plus the availability flag writer.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room and return the created row.
    ///
    /// New rooms start available; reconciliation corrects the flag as soon
    /// as a reservation touches them.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (number, room_type, hotel_id) \
             VALUES ($1, $2, $3) \
             RETURNING {ROOM_COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(input.number)
            .bind(input.room_type)
            .bind(input.hotel_id)
            .fetch_one(pool)
            .await
    }

    /// List rooms joined with their hotel's name, with optional filters.
    pub async fn list(pool: &PgPool, filter: &RoomFilter) -> Result<Vec<RoomDetail>, sqlx::Error> {
        let query = "SELECT r.number, r.room_type, r.available, r.hotel_id, h.name AS hotel_name \
             FROM rooms r \
             LEFT JOIN hotels h ON h.id = r.hotel_id \
             WHERE ($1::bigint IS NULL OR r.hotel_id = $1) \
               AND ($2::boolean IS NULL OR r.available = $2) \
             ORDER BY r.number";
        sqlx::query_as::<_, RoomDetail>(query)
            .bind(filter.hotel_id)
            .bind(filter.available)
            .fetch_all(pool)
            .await
    }

    /// List every room without joins (used by the availability reconciler).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {ROOM_COLUMNS} FROM rooms ORDER BY number");
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// Find a room by number. Returns `None` if it does not exist.
    pub async fn find_by_number(
        pool: &PgPool,
        number: i32,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE number = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(number)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a room. The `available` flag is not updatable here;
    /// it only changes through [`RoomRepo::update_availability`].
    pub async fn update(
        pool: &PgPool,
        number: i32,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET \
                 room_type = COALESCE($2, room_type), \
                 hotel_id = COALESCE($3, hotel_id), \
                 updated_at = now() \
             WHERE number = $1 \
             RETURNING {ROOM_COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(number)
            .bind(input.room_type)
            .bind(input.hotel_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a room's derived availability flag.
    pub async fn update_availability(
        pool: &PgPool,
        number: i32,
        available: bool,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE rooms SET available = $2, updated_at = now() WHERE number = $1")
                .bind(number)
                .bind(available)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a room. Always restricted while reservations reference it;
    /// a reservation without a room would be meaningless.
    pub async fn delete(pool: &PgPool, number: i32) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (dependents,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM reservations WHERE room_number = $1")
                .bind(number)
                .fetch_one(&mut *tx)
                .await?;
        if dependents > 0 {
            return Ok(DeleteOutcome::Restricted { dependents });
        }

        let result = sqlx::query("DELETE FROM rooms WHERE number = $1")
            .bind(number)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() > 0 {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }
}
