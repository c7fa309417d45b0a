//! HTTP request handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tally_core::Receipt;
use tracing::debug;

use crate::dto::{HealthResponse, PointsResponse, ProcessReceiptResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// `POST /receipts/process`
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let Json(receipt) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Malformed receipt body");
        ApiError::MalformedInput(rejection.body_text())
    })?;

    let scored = state.process(&receipt)?;

    Ok(Json(ProcessReceiptResponse { id: scored.id }))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        receipts: state.receipt_count(),
    })
}
