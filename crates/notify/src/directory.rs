//! Directory lookup seam.
//!
//! The router resolves projects, customers, and the staff list through
//! [`Directory`] so it never talks to the database directly. Lookups that
//! find nothing return `Ok(None)` / an empty list — the router treats those
//! as soft-skip conditions, never hard failures.

use async_trait::async_trait;
use reportal_core::types::DbId;
use reportal_db::repositories::{CustomerRepo, ProjectRepo, StaffRepo};
use reportal_db::DbPool;

/// Error type for directory lookups.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Directory lookup failed: {0}")]
    Lookup(String),
}

/// Resolved project attributes needed for notification composition.
#[derive(Debug, Clone)]
pub struct ProjectEntry {
    pub customer_id: DbId,
    pub name: String,
    pub number: String,
}

/// Resolved customer attributes. All contact fields are optional; routing
/// degrades gracefully when they are missing.
#[derive(Debug, Clone)]
pub struct CustomerEntry {
    pub name: Option<String>,
    pub email: Option<String>,
    pub number: String,
}

/// Resolves identifiers to directory entries.
#[async_trait]
pub trait Directory: Send + Sync {
    async fn project(&self, id: DbId) -> Result<Option<ProjectEntry>, DirectoryError>;
    async fn customer(&self, id: DbId) -> Result<Option<CustomerEntry>, DirectoryError>;
    /// Email addresses of all enabled staff users.
    async fn staff_emails(&self) -> Result<Vec<String>, DirectoryError>;
}

/// Postgres-backed directory delegating to the repositories.
pub struct PgDirectory {
    pool: DbPool,
}

impl PgDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Directory for PgDirectory {
    async fn project(&self, id: DbId) -> Result<Option<ProjectEntry>, DirectoryError> {
        let project = ProjectRepo::find_by_id(&self.pool, id).await?;
        Ok(project.map(|p| ProjectEntry {
            customer_id: p.customer_id,
            name: p.name,
            number: p.project_number,
        }))
    }

    async fn customer(&self, id: DbId) -> Result<Option<CustomerEntry>, DirectoryError> {
        let customer = CustomerRepo::find_by_id(&self.pool, id).await?;
        Ok(customer.map(|c| CustomerEntry {
            name: c.name,
            email: c.email,
            number: c.customer_number,
        }))
    }

    async fn staff_emails(&self) -> Result<Vec<String>, DirectoryError> {
        Ok(StaffRepo::list_enabled_emails(&self.pool).await?)
    }
}
