//! Folder tree and catalog item models.

use reportal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `folders` table. `parent_id` is `None` for project roots;
/// nesting depth is unbounded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Folder {
    pub id: DbId,
    pub project_id: DbId,
    pub parent_id: Option<DbId>,
    pub name: String,
    pub created_at: Timestamp,
}

/// A catalog entry owned directly by a folder.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OfferItem {
    pub id: DbId,
    pub folder_id: DbId,
    pub title: String,
    pub position: i32,
    pub created_at: Timestamp,
}
