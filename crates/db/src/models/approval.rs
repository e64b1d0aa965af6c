//! File approval models.

use reportal_core::approval::{ApprovalRecord, ApprovalStatus};
use reportal_core::error::CoreError;
use reportal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `file_approvals` table.
///
/// Several rows may describe the same logical file; the reconciler in
/// `reportal-core` collapses them at read time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FileApproval {
    pub id: DbId,
    pub project_id: DbId,
    pub customer_id: DbId,
    pub file_path: String,
    pub status: String,
    pub uploaded_at: Option<Timestamp>,
    pub approved_at: Option<Timestamp>,
    pub auto_approve_deadline: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl FileApproval {
    /// Convert the row into the domain record consumed by the reconciler.
    pub fn to_domain(&self) -> Result<ApprovalRecord, CoreError> {
        Ok(ApprovalRecord {
            id: self.id,
            project_id: self.project_id,
            customer_id: self.customer_id,
            file_path: self.file_path.clone(),
            status: ApprovalStatus::parse(&self.status)?,
            uploaded_at: self.uploaded_at,
            approved_at: self.approved_at,
            auto_approve_deadline: self.auto_approve_deadline,
        })
    }
}

/// DTO for creating a new approval record at upload time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFileApproval {
    pub project_id: DbId,
    pub customer_id: DbId,
    pub file_path: String,
    pub status: String,
    pub uploaded_at: Option<Timestamp>,
    pub auto_approve_deadline: Option<Timestamp>,
}
