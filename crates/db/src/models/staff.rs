//! Staff directory models.

use reportal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `staff_users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StaffUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}
