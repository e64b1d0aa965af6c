//! Repository for the `customer_messages` table.

use reportal_core::message::{STATUS_READ, STATUS_RESOLVED, STATUS_UNREAD};
use reportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{CreateCustomerMessage, CustomerMessage};

/// Column list for customer_messages queries.
const MESSAGE_COLUMNS: &str = "id, project_id, folder_path, customer_id, message, \
    status, created_at, read_at, resolved_at";

/// Provides CRUD and status progression for customer messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new message in the `unread` state, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCustomerMessage,
    ) -> Result<CustomerMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO customer_messages
                (project_id, folder_path, customer_id, message, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {MESSAGE_COLUMNS}"
        );
        sqlx::query_as::<_, CustomerMessage>(&query)
            .bind(input.project_id)
            .bind(&input.folder_path)
            .bind(input.customer_id)
            .bind(&input.message)
            .bind(STATUS_UNREAD)
            .fetch_one(pool)
            .await
    }

    /// Find a message by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CustomerMessage>, sqlx::Error> {
        let query = format!("SELECT {MESSAGE_COLUMNS} FROM customer_messages WHERE id = $1");
        sqlx::query_as::<_, CustomerMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Advance a message to `read`. The guard in the WHERE clause keeps the
    /// status machine monotonic under racing writers; `None` means the row
    /// was not in a state this transition applies to.
    pub async fn mark_read(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CustomerMessage>, sqlx::Error> {
        let query = format!(
            "UPDATE customer_messages
             SET status = $2, read_at = NOW()
             WHERE id = $1 AND status = $3
             RETURNING {MESSAGE_COLUMNS}"
        );
        sqlx::query_as::<_, CustomerMessage>(&query)
            .bind(id)
            .bind(STATUS_READ)
            .bind(STATUS_UNREAD)
            .fetch_optional(pool)
            .await
    }

    /// Advance a message to `resolved` from either non-terminal state.
    pub async fn mark_resolved(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CustomerMessage>, sqlx::Error> {
        let query = format!(
            "UPDATE customer_messages
             SET status = $2, resolved_at = NOW()
             WHERE id = $1 AND status IN ($3, $4)
             RETURNING {MESSAGE_COLUMNS}"
        );
        sqlx::query_as::<_, CustomerMessage>(&query)
            .bind(id)
            .bind(STATUS_RESOLVED)
            .bind(STATUS_UNREAD)
            .bind(STATUS_READ)
            .fetch_optional(pool)
            .await
    }

    /// Delete every message belonging to a customer. Returns the number of
    /// rows removed.
    pub async fn delete_by_customer(pool: &PgPool, customer_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customer_messages WHERE customer_id = $1")
            .bind(customer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every message keyed to the given path within a project.
    pub async fn delete_for_path(
        pool: &PgPool,
        project_id: DbId,
        path: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM customer_messages WHERE project_id = $1 AND folder_path = $2",
        )
        .bind(project_id)
        .bind(path)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
