//! Repository for the `folders` table.

use reportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::folder::Folder;

/// Column list for folders queries.
const FOLDER_COLUMNS: &str = "id, project_id, parent_id, name, created_at";

/// Provides tree traversal and delete operations for folders.
pub struct FolderRepo;

impl FolderRepo {
    /// Find a folder by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("SELECT {FOLDER_COLUMNS} FROM folders WHERE id = $1");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the direct children of a folder.
    pub async fn list_children(pool: &PgPool, parent_id: DbId) -> Result<Vec<Folder>, sqlx::Error> {
        let query = format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE parent_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a folder row. Returns `false` when no row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
