//! Repository for the `files` table (metadata records only).

use reportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::file::StoredFile;

/// Column list for files queries.
const FILE_COLUMNS: &str = "id, project_id, folder_path, file_name, object_key, \
    is_report, uploaded_at";

/// Provides read and delete operations for file metadata.
pub struct FileRepo;

impl FileRepo {
    /// Find a file by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StoredFile>, sqlx::Error> {
        let query = format!("SELECT {FILE_COLUMNS} FROM files WHERE id = $1");
        sqlx::query_as::<_, StoredFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a file metadata row. Returns `false` when no row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
