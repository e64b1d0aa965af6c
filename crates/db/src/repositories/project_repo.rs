//! Repository for the `projects` table.

use reportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::Project;

/// Column list for projects queries.
const PROJECT_COLUMNS: &str = "id, customer_id, name, project_number, created_at";

/// Provides read operations for project records.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
