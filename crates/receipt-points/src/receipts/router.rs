use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{Receipt, ReceiptId};
use super::repository::{ReceiptRepository, RepositoryError};
use super::service::{ReceiptService, ReceiptServiceError};

/// Router builder exposing HTTP endpoints for intake and scoring.
///
/// Payloads that fail deserialization are rejected by the `Json` extractor
/// before the service runs, so a malformed submission never touches the
/// store.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:receipt_id/points", get(points_handler::<R>))
        .with_state(service)
}

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct ReceiptIdView {
    pub id: String,
}

/// Response body for a successful points lookup.
#[derive(Debug, Serialize)]
pub struct ReceiptPointsView {
    pub points: u64,
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    axum::Json(receipt): axum::Json<Receipt>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.submit(receipt) {
        Ok(record) => {
            let view = ReceiptIdView { id: record.id.0 };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ReceiptServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "receipt already stored under that id",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let id = ReceiptId(receipt_id);
    match service.score(&id) {
        Ok(outcome) => {
            let view = ReceiptPointsView {
                points: outcome.total_points,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ReceiptServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "no receipt found for that id",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
