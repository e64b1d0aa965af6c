//! File metadata models.

use reportal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `files` table.
///
/// Metadata only; the payload bytes live in object storage under
/// `object_key`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredFile {
    pub id: DbId,
    pub project_id: DbId,
    pub folder_path: String,
    pub file_name: String,
    pub object_key: String,
    pub is_report: bool,
    pub uploaded_at: Timestamp,
}

impl StoredFile {
    /// Full hierarchical path of the file inside its project.
    pub fn full_path(&self) -> String {
        let folder = self.folder_path.trim_end_matches('/');
        if folder.is_empty() {
            self.file_name.clone()
        } else {
            format!("{folder}/{}", self.file_name)
        }
    }
}
