//! Repository for the `file_approvals` table.
//!
//! No uniqueness is enforced on `(project_id, customer_id, file_path)`:
//! duplicate and conflicting rows are legal here and collapsed at read time
//! by the reconciler in `reportal-core`.

use reportal_core::approval::file_key;
use reportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::approval::{CreateFileApproval, FileApproval};

/// Column list for file_approvals queries.
const APPROVAL_COLUMNS: &str = "id, project_id, customer_id, file_path, status, \
    uploaded_at, approved_at, auto_approve_deadline, created_at";

/// Provides CRUD operations for file approval records.
pub struct ApprovalRepo;

impl ApprovalRepo {
    /// Insert a new approval record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFileApproval,
    ) -> Result<FileApproval, sqlx::Error> {
        let query = format!(
            "INSERT INTO file_approvals
                (project_id, customer_id, file_path, status, uploaded_at, auto_approve_deadline)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {APPROVAL_COLUMNS}"
        );
        sqlx::query_as::<_, FileApproval>(&query)
            .bind(input.project_id)
            .bind(input.customer_id)
            .bind(&input.file_path)
            .bind(&input.status)
            .bind(input.uploaded_at)
            .bind(input.auto_approve_deadline)
            .fetch_one(pool)
            .await
    }

    /// List all raw approval records for a customer within a project,
    /// ordered by creation date ascending. Callers reconcile the result.
    pub async fn list_for_customer(
        pool: &PgPool,
        project_id: DbId,
        customer_id: DbId,
    ) -> Result<Vec<FileApproval>, sqlx::Error> {
        let query = format!(
            "SELECT {APPROVAL_COLUMNS} FROM file_approvals
             WHERE project_id = $1 AND customer_id = $2
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, FileApproval>(&query)
            .bind(project_id)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// Delete every approval record belonging to a customer. Returns the
    /// number of rows removed; zero rows is a valid no-op.
    pub async fn delete_by_customer(pool: &PgPool, customer_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM file_approvals WHERE customer_id = $1")
            .bind(customer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every approval record describing the given file within a
    /// project.
    ///
    /// Upstream writers store full, relative, and bare-basename spellings of
    /// the same path, so matching goes by the file's final path segment.
    pub async fn delete_for_path(
        pool: &PgPool,
        project_id: DbId,
        file_path: &str,
    ) -> Result<u64, sqlx::Error> {
        let basename = file_key(file_path);
        let suffix_pattern = format!("%/{basename}");
        let result = sqlx::query(
            "DELETE FROM file_approvals
             WHERE project_id = $1
               AND (file_path = $2 OR file_path = $3 OR file_path LIKE $4)",
        )
        .bind(project_id)
        .bind(file_path)
        .bind(basename)
        .bind(&suffix_pattern)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
