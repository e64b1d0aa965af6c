//! Upload notification trigger.
//!
//! Called by the upload flow after a file lands in storage. For
//! report-category uploads this stamps the auto-approval deadline onto a
//! new approval record, then routes a best-effort notification. Only
//! payload validation surfaces as a hard error; everything downstream is
//! absorbed into a success-shaped response, because notification is
//! auxiliary to the upload that already happened.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use reportal_core::approval::ApprovalStatus;
use reportal_core::business_days::report_approval_deadline;
use reportal_core::types::{DbId, Timestamp};
use reportal_db::models::approval::CreateFileApproval;
use reportal_db::repositories::{ApprovalRepo, ProjectRepo};
use reportal_notify::{RouteOutcome, UploadEvent};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for the upload notification trigger.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadNotifyRequest {
    #[validate(range(min = 1))]
    pub project_id: DbId,
    #[validate(length(min = 1))]
    pub file_path: String,
    #[validate(length(min = 1))]
    pub folder_path: String,
    #[validate(length(min = 1))]
    pub file_name: String,
    pub is_report: bool,
}

/// Success-shaped trigger response. `success: false` together with
/// `skipped: true` means the notification was intentionally not sent; the
/// upload itself is unaffected either way.
#[derive(Debug, Serialize)]
pub struct UploadNotifyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl UploadNotifyResponse {
    fn sent() -> Self {
        Self {
            success: true,
            skipped: None,
            reason: None,
        }
    }

    fn skipped(reason: &'static str) -> Self {
        Self {
            success: false,
            skipped: Some(true),
            reason: Some(reason),
        }
    }
}

/// POST /api/v1/uploads/notify
///
/// Validate the payload, stamp the approval deadline for reports, and
/// route the notification.
pub async fn notify_upload(
    State(state): State<AppState>,
    Json(input): Json<UploadNotifyRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let uploaded_at = Utc::now();

    if input.is_report {
        if let Err(reason) = record_report_approval(&state, &input, uploaded_at).await {
            return Ok(Json(UploadNotifyResponse::skipped(reason)));
        }
    }

    let event = UploadEvent {
        project_id: input.project_id,
        folder_path: input.folder_path,
        file_name: input.file_name,
        is_report: input.is_report,
        uploaded_at,
    };

    let response = match state.notifications.route(&event).await {
        RouteOutcome::Sent { recipients } => {
            tracing::info!(
                project_id = event.project_id,
                recipients,
                "Upload notification sent"
            );
            UploadNotifyResponse::sent()
        }
        RouteOutcome::Skipped { reason } => UploadNotifyResponse::skipped(reason.as_str()),
    };

    Ok(Json(response))
}

/// Create the pending approval record for a report upload, with the
/// deadline computed once from the upload time.
///
/// Failures here are absorbed into a skip reason rather than surfaced: the
/// upload already succeeded and this trigger never fails it retroactively.
async fn record_report_approval(
    state: &AppState,
    input: &UploadNotifyRequest,
    uploaded_at: Timestamp,
) -> Result<(), &'static str> {
    let project = match ProjectRepo::find_by_id(&state.pool, input.project_id).await {
        Ok(Some(project)) => project,
        Ok(None) => {
            tracing::info!(project_id = input.project_id, "Project not found, skipping");
            return Err("unknown_project");
        }
        Err(e) => {
            tracing::error!(project_id = input.project_id, error = %e,
                "Project lookup failed while recording approval");
            return Err("internal");
        }
    };

    let create = CreateFileApproval {
        project_id: project.id,
        customer_id: project.customer_id,
        file_path: input.file_path.clone(),
        status: ApprovalStatus::Pending.as_str().to_string(),
        uploaded_at: Some(uploaded_at),
        auto_approve_deadline: Some(report_approval_deadline(uploaded_at)),
    };

    match ApprovalRepo::create(&state.pool, &create).await {
        Ok(approval) => {
            tracing::info!(
                approval_id = approval.id,
                project_id = project.id,
                deadline = ?approval.auto_approve_deadline,
                "Report approval record created"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(project_id = project.id, error = %e,
                "Failed to create approval record");
            Err("internal")
        }
    }
}
