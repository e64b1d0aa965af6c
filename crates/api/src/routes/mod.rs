//! Route definitions.
//!
//! Route hierarchy under `/api/v1`:
//!
//! ```text
//! POST   /uploads/notify                                   upload notification trigger
//!
//! GET    /projects/{project_id}/customers/{customer_id}/approvals
//!                                                          reconciled approval view
//!
//! POST   /messages                                         create customer message
//! POST   /messages/{id}/read                               advance to read
//! POST   /messages/{id}/resolve                            advance to resolved
//!
//! POST   /receipts                                         append read receipt
//!
//! DELETE /customers/{id}                                   customer cascade
//! DELETE /files/{id}                                       file cascade
//! DELETE /folders/{id}                                     folder cascade
//! ```

pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{approvals, cascades, messages, receipts, uploads};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/uploads/notify", post(uploads::notify_upload))
        .route(
            "/projects/{project_id}/customers/{customer_id}/approvals",
            get(approvals::list_effective_approvals),
        )
        .route("/messages", post(messages::create_message))
        .route("/messages/{id}/read", post(messages::mark_read))
        .route("/messages/{id}/resolve", post(messages::mark_resolved))
        .route("/receipts", post(receipts::create_receipt))
        .route("/customers/{id}", delete(cascades::delete_customer))
        .route("/files/{id}", delete(cascades::delete_file))
        .route("/folders/{id}", delete(cascades::delete_folder))
}
