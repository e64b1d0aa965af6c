//! Handlers for read receipts.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use reportal_core::types::DbId;
use reportal_db::models::read_receipt::CreateReadReceipt;
use reportal_db::repositories::ReadReceiptRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for appending a read receipt.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReceiptRequest {
    #[validate(length(min = 1))]
    pub file_path: String,
    #[validate(range(min = 1))]
    pub reader_id: DbId,
}

/// POST /api/v1/receipts
///
/// Record that a reader has seen a file. Receipts are append-only;
/// repeated reads append further rows.
pub async fn create_receipt(
    State(state): State<AppState>,
    Json(input): Json<CreateReceiptRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let create = CreateReadReceipt {
        file_path: input.file_path,
        reader_id: input.reader_id,
    };
    let receipt = ReadReceiptRepo::create(&state.pool, &create).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: receipt })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_payload_requires_path_and_reader() {
        let input = CreateReceiptRequest {
            file_path: "reports/summary.pdf".to_string(),
            reader_id: 7,
        };
        assert!(input.validate().is_ok());

        let mut empty_path = input.clone();
        empty_path.file_path.clear();
        assert!(empty_path.validate().is_err());

        let mut bad_reader = input;
        bad_reader.reader_id = 0;
        assert!(bad_reader.validate().is_err());
    }
}
