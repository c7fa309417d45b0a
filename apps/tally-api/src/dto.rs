//! Response bodies.

use serde::{Deserialize, Serialize};

/// `POST /receipts/process` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// `GET /receipts/{id}/points` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// `GET /health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub receipts: usize,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
