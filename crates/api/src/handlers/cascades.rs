//! Administrative cascade delete triggers.
//!
//! One endpoint per parent kind. Deleting an already-absent parent is a
//! no-op success, so these endpoints never return 404: re-invoking a
//! cascade is the designated recovery path after a partial failure, and
//! the second run must succeed trivially.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use reportal_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// DELETE /api/v1/customers/{id}
///
/// Remove a customer and every approval record and message referencing it.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.cascade.delete_customer(id).await;
    Ok(Json(DataResponse { data: outcome }))
}

/// DELETE /api/v1/files/{id}
///
/// Remove a file's approval records, receipts, and messages, its payload,
/// and its metadata row.
pub async fn delete_file(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.cascade.delete_file(id).await;
    Ok(Json(DataResponse { data: outcome }))
}

/// DELETE /api/v1/folders/{id}
///
/// Remove a folder subtree depth-first, including folder-owned catalog
/// items.
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.cascade.delete_folder(id).await;
    Ok(Json(DataResponse { data: outcome }))
}
