//! Repository for the `customers` table.

use sqlx::PgPool;

use innkeeper_core::types::DbId;

use crate::delete_policy::{DeleteOutcome, DeletePolicy};
use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// Column list for `customers` queries.
const CUSTOMER_COLUMNS: &str = "id, name, email, phone, address, created_at, updated_at";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer and return the created row.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (name, email, phone, address) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {CUSTOMER_COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// List customers, optionally filtered by a case-insensitive substring
    /// match over name and email.
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers \
             WHERE $1::text IS NULL \
                OR name ILIKE '%' || $1 || '%' \
                OR email ILIKE '%' || $1 || '%' \
             ORDER BY name"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    /// Find a customer by id. Returns `None` if it does not exist.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a customer. Only non-`None` fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET \
                 name = COALESCE($2, name), \
                 email = COALESCE($3, email), \
                 phone = COALESCE($4, phone), \
                 address = COALESCE($5, address), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {CUSTOMER_COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer, applying the configured policy to their
    /// reservations.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        policy: DeletePolicy,
    ) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (dependents,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM reservations WHERE customer_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        match policy {
            DeletePolicy::Restrict if dependents > 0 => {
                return Ok(DeleteOutcome::Restricted { dependents });
            }
            DeletePolicy::Cascade => {
                sqlx::query("DELETE FROM reservations WHERE customer_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
            }
            DeletePolicy::SetNull => {
                sqlx::query(
                    "UPDATE reservations SET customer_id = NULL, updated_at = now() \
                     WHERE customer_id = $1",
                )
                .bind(id)
                .execute(&mut *tx)
                .await?;
            }
            DeletePolicy::Restrict => {}
        }

        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
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
