//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope per project
//! conventions, with the exception of the upload notification trigger,
//! whose success-shaped `{ success, skipped, reason }` contract is defined
//! in `handlers::uploads`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
