//! Repository for the `customers` table.

use reportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::Customer;

/// Column list for customers queries.
const CUSTOMER_COLUMNS: &str = "id, customer_number, name, email, created_at";

/// Provides read and delete operations for customer records.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Find a customer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer row. Returns `false` when no row existed, which the
    /// cascade treats as a no-op success.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
