//! Handlers for customer messages.
//!
//! Status moves strictly forward (`unread -> read -> resolved`). The
//! state machine is validated here and enforced again by the guarded
//! UPDATE in the repository, so racing writers cannot move a message
//! backwards.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use reportal_core::error::CoreError;
use reportal_core::message::{validate_transition, STATUS_READ, STATUS_RESOLVED};
use reportal_core::types::DbId;
use reportal_db::models::message::CreateCustomerMessage;
use reportal_db::repositories::MessageRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating a customer message.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(range(min = 1))]
    pub project_id: DbId,
    #[validate(length(min = 1))]
    pub folder_path: String,
    #[validate(range(min = 1))]
    pub customer_id: DbId,
    #[validate(length(min = 1))]
    pub message: String,
}

/// POST /api/v1/messages
///
/// Create a message in the `unread` state.
pub async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<CreateMessageRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let create = CreateCustomerMessage {
        project_id: input.project_id,
        folder_path: input.folder_path,
        customer_id: input.customer_id,
        message: input.message,
    };
    let message = MessageRepo::create(&state.pool, &create).await?;

    tracing::info!(
        message_id = message.id,
        customer_id = message.customer_id,
        "Customer message created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// POST /api/v1/messages/{id}/read
///
/// Advance a message to `read`.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    advance(&state, id, STATUS_READ).await
}

/// POST /api/v1/messages/{id}/resolve
///
/// Advance a message to `resolved`.
pub async fn mark_resolved(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    advance(&state, id, STATUS_RESOLVED).await
}

/// Shared progression: load, validate the forward-only transition, then
/// apply the guarded update.
async fn advance(state: &AppState, id: DbId, target: &'static str) -> AppResult<impl IntoResponse> {
    let current = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "CustomerMessage",
            id,
        })?;

    validate_transition(&current.status, target)?;

    let updated = match target {
        STATUS_READ => MessageRepo::mark_read(&state.pool, id).await?,
        _ => MessageRepo::mark_resolved(&state.pool, id).await?,
    };

    // The guarded UPDATE matched no row: a racing writer advanced the
    // message first.
    let updated = updated.ok_or_else(|| {
        AppError::Core(CoreError::Conflict(format!(
            "Message {id} was advanced concurrently"
        )))
    })?;

    tracing::info!(message_id = id, status = %updated.status, "Message status advanced");
    Ok(Json(DataResponse { data: updated }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_message_payload_requires_all_fields() {
        let input = CreateMessageRequest {
            project_id: 1,
            folder_path: "reports".to_string(),
            customer_id: 7,
            message: "Please check the figures on page 3".to_string(),
        };
        assert!(input.validate().is_ok());

        let mut empty_message = input.clone();
        empty_message.message.clear();
        assert!(empty_message.validate().is_err());

        let mut bad_customer = input;
        bad_customer.customer_id = 0;
        assert!(bad_customer.validate().is_err());
    }
}
