//! Repository for the `read_receipts` table.

use sqlx::PgPool;

use crate::models::read_receipt::{CreateReadReceipt, ReadReceipt};

/// Column list for read_receipts queries.
const RECEIPT_COLUMNS: &str = "id, file_path, reader_id, read_at";

/// Provides append and delete operations for read receipts.
pub struct ReadReceiptRepo;

impl ReadReceiptRepo {
    /// Append a receipt, returning the created row. Receipts are never
    /// updated; repeated reads simply append further rows.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReadReceipt,
    ) -> Result<ReadReceipt, sqlx::Error> {
        let query = format!(
            "INSERT INTO read_receipts (file_path, reader_id)
             VALUES ($1, $2)
             RETURNING {RECEIPT_COLUMNS}"
        );
        sqlx::query_as::<_, ReadReceipt>(&query)
            .bind(&input.file_path)
            .bind(input.reader_id)
            .fetch_one(pool)
            .await
    }

    /// Delete every receipt for the given file path. Returns the number of
    /// rows removed.
    pub async fn delete_for_path(pool: &PgPool, file_path: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM read_receipts WHERE file_path = $1")
            .bind(file_path)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
