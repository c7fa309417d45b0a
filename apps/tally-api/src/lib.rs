//! # Tally API
//!
//! HTTP service that scores purchase receipts.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally API                                       │
//! │                                                                         │
//! │  POST /receipts/process       Receipt JSON ──► {"id": "..."}            │
//! │  GET  /receipts/{id}/points   ──► {"points": 28}      | 404             │
//! │  GET  /health                 ──► {"status": "ok", ...}                  │
//! │                                                                         │
//! │  Errors: {"error": "...", "code": "..."}                                │
//! │    400 MALFORMED_INPUT   body is not a receipt                          │
//! │    400 INVALID_RECEIPT   receipt failed validation or scoring           │
//! │    404 NOT_FOUND         unknown receipt id                             │
//! │    500 INTERNAL          store failure                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `TALLY_HOST` - Bind address (default: 0.0.0.0)
//! - `TALLY_PORT` - HTTP port (default: 8080)
//! - `TALLY_STORE_SHARDS` - Receipt store shard count (default: 16)
//! - `TALLY_LOG` - Tracing filter (default: `RUST_LOG`, then `info`)

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
