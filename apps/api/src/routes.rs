//! HTTP routes and handlers.
//!
//! ```text
//! POST /receipts/process      RawReceipt JSON → { "id": "<uuid>" }
//! GET  /receipts/:id/points   → { "points": 28 }
//! GET  /health                → { "status": "healthy", ... }
//! ```

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use receipt_core::{Points, RawReceipt};
use receipt_store::ReceiptId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub receipts: usize,
}

/// Build the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .route("/health", get(health))
        .with_state(state)
}

/// Submits a receipt for processing.
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<RawReceipt>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(raw) = payload.map_err(|rejection| {
        debug!(error = %rejection, "unreadable receipt body");
        ApiError::from(rejection)
    })?;

    let id = state.processor.submit(&raw)?;
    Ok(Json(ProcessResponse { id }))
}

/// Returns the points awarded for the receipt.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.processor.get_points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// Health check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        receipts: state.processor.store().len(),
    })
}
