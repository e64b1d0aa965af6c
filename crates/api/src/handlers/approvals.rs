//! Handlers for the reconciled approval view.
//!
//! Raw approval records are never shown to users. Every read loads the full
//! record set for a customer's project and runs it through the reconciler
//! at the current time; the effective status is computed fresh on each
//! request and never written back.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use reportal_core::approval::{reconcile, ApprovalRecord};
use reportal_core::types::DbId;
use reportal_db::repositories::ApprovalRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/customers/{customer_id}/approvals
///
/// One effective approval per logical file, reconciled at request time.
pub async fn list_effective_approvals(
    State(state): State<AppState>,
    Path((project_id, customer_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let rows = ApprovalRepo::list_for_customer(&state.pool, project_id, customer_id).await?;

    let records: Vec<ApprovalRecord> = rows
        .iter()
        .map(|row| row.to_domain())
        .collect::<Result<_, _>>()?;

    let effective = reconcile(&records, Utc::now());
    Ok(Json(DataResponse { data: effective }))
}
