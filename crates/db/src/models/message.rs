//! Customer message models.

use reportal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `customer_messages` table.
///
/// `status` moves strictly forward (`unread -> read -> resolved`);
/// the state machine lives in `reportal_core::message`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerMessage {
    pub id: DbId,
    pub project_id: DbId,
    pub folder_path: String,
    pub customer_id: DbId,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub read_at: Option<Timestamp>,
    pub resolved_at: Option<Timestamp>,
}

/// DTO for creating a new customer message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerMessage {
    pub project_id: DbId,
    pub folder_path: String,
    pub customer_id: DbId,
    pub message: String,
}
