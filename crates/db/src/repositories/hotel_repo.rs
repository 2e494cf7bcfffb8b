//! Repository for the `hotels` table.

use sqlx::PgPool;

use innkeeper_core::types::DbId;

use crate::delete_policy::{DeleteOutcome, DeletePolicy};
use crate::models::hotel::{CreateHotel, Hotel, UpdateHotel};

/// Column list for `hotels` queries.
const HOTEL_COLUMNS: &str = "id, name, description, address, rating, created_at, updated_at";

/// Provides CRUD operations for hotels.
pub struct HotelRepo;

impl HotelRepo {
    /// Insert a new hotel and return the created row.
    pub async fn create(pool: &PgPool, input: &CreateHotel) -> Result<Hotel, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotels (name, description, address, rating) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {HOTEL_COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.address)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// List hotels, optionally filtered by a case-insensitive substring
    /// match over name and address.
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<Hotel>, sqlx::Error> {
        let query = format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels \
             WHERE $1::text IS NULL \
                OR name ILIKE '%' || $1 || '%' \
                OR address ILIKE '%' || $1 || '%' \
             ORDER BY name"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    /// Find a hotel by id. Returns `None` if it does not exist.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE id = $1");
        sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a hotel. Only non-`None` fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHotel,
    ) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!(
            "UPDATE hotels SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 address = COALESCE($4, address), \
                 rating = COALESCE($5, rating), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {HOTEL_COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.address)
            .bind(input.rating)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hotel, applying the configured policy to its rooms.
    ///
    /// Under `cascade`, reservations for the hotel's rooms go first, then
    /// the rooms, then the hotel, all in one transaction.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        policy: DeletePolicy,
    ) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (dependents,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM rooms WHERE hotel_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        match policy {
            DeletePolicy::Restrict if dependents > 0 => {
                return Ok(DeleteOutcome::Restricted { dependents });
            }
            DeletePolicy::Cascade => {
                sqlx::query(
                    "DELETE FROM reservations WHERE room_number IN \
                     (SELECT number FROM rooms WHERE hotel_id = $1)",
                )
                .bind(id)
                .execute(&mut *tx)
                .await?;
                sqlx::query("DELETE FROM rooms WHERE hotel_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
            }
            DeletePolicy::SetNull => {
                sqlx::query("UPDATE rooms SET hotel_id = NULL, updated_at = now() WHERE hotel_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
            }
            DeletePolicy::Restrict => {}
        }

        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
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
