//! Read receipt models.

use reportal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `read_receipts` table. Append-only: existence of a
/// receipt for a path means that reader has seen the file.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReadReceipt {
    pub id: DbId,
    pub file_path: String,
    pub reader_id: DbId,
    pub read_at: Timestamp,
}

/// DTO for appending a read receipt.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReadReceipt {
    pub file_path: String,
    pub reader_id: DbId,
}
