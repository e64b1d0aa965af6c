//! Customer directory models.

use reportal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `customers` table.
///
/// `name` and `email` are optional: a customer record may be created from a
/// project number alone, and notification routing degrades gracefully when
/// either is missing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub customer_number: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: Timestamp,
}
