//! Repository for the `staff_users` table.

use sqlx::PgPool;

/// Provides directory lookups over staff users.
pub struct StaffRepo;

impl StaffRepo {
    /// Email addresses of all enabled staff users, for notification fan-out.
    pub async fn list_enabled_emails(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT email FROM staff_users WHERE is_active = true ORDER BY email ASC",
        )
        .fetch_all(pool)
        .await
    }
}
