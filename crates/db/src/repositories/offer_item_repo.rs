//! Repository for the `offer_items` table.

use reportal_core::types::DbId;
use sqlx::PgPool;

/// Provides delete operations for folder-owned catalog entries.
pub struct OfferItemRepo;

impl OfferItemRepo {
    /// Delete every catalog entry owned by a folder. Returns the number of
    /// rows removed.
    pub async fn delete_by_folder(pool: &PgPool, folder_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM offer_items WHERE folder_id = $1")
            .bind(folder_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
