//! Repository for the `reservations` table.

use sqlx::PgPool;

use innkeeper_core::types::{Date, DbId};

use crate::models::reservation::{
    CreateReservation, Reservation, ReservationDetail, ReservationFilter, UpdateReservation,
};

/// Column list for `reservations` queries.
const RESERVATION_COLUMNS: &str =
    "id, customer_id, room_number, check_in, check_out, created_at, updated_at";

/// Provides CRUD operations for reservations.
///
/// Callers that mutate reservations are responsible for running availability
/// reconciliation afterwards; the repository itself stays a plain data
/// accessor.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new reservation and return the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (customer_id, room_number, check_in, check_out) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {RESERVATION_COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(input.customer_id)
            .bind(input.room_number)
            .bind(input.check_in)
            .bind(input.check_out)
            .fetch_one(pool)
            .await
    }

    /// List reservations joined with their customer's name, newest stay
    /// first, with optional filters.
    pub async fn list(
        pool: &PgPool,
        filter: &ReservationFilter,
    ) -> Result<Vec<ReservationDetail>, sqlx::Error> {
        let query = "SELECT r.id, r.customer_id, c.name AS customer_name, r.room_number, \
                    r.check_in, r.check_out \
             FROM reservations r \
             LEFT JOIN customers c ON c.id = r.customer_id \
             WHERE ($1::bigint IS NULL OR r.customer_id = $1) \
               AND ($2::integer IS NULL OR r.room_number = $2) \
             ORDER BY r.check_in DESC, r.id DESC";
        sqlx::query_as::<_, ReservationDetail>(query)
            .bind(filter.customer_id)
            .bind(filter.room_number)
            .fetch_all(pool)
            .await
    }

    /// Find a reservation by id. Returns `None` if it does not exist.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a reservation. Only non-`None` fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReservation,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations SET \
                 customer_id = COALESCE($2, customer_id), \
                 room_number = COALESCE($3, room_number), \
                 check_in = COALESCE($4, check_in), \
                 check_out = COALESCE($5, check_out), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {RESERVATION_COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(input.customer_id)
            .bind(input.room_number)
            .bind(input.check_in)
            .bind(input.check_out)
            .fetch_optional(pool)
            .await
    }

    /// Delete a reservation by id.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List reservations whose closed stay interval contains `date`.
    pub async fn list_overlapping(
        pool: &PgPool,
        date: Date,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations \
             WHERE $1 BETWEEN check_in AND check_out"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(date)
            .fetch_all(pool)
            .await
    }
}
