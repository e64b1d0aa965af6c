//! HTTP handlers.

pub mod approvals;
pub mod cascades;
pub mod messages;
pub mod receipts;
pub mod uploads;
