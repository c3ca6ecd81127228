//! # Receipt API
//!
//! HTTP server for receipt points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Server                              │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► routes ───► ReceiptProcessor             │
//! │                                                 │                       │
//! │                                                 ▼                       │
//! │                                            ScoreStore                   │
//! │                                           (in-memory)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `API_HOST` - Interface to bind (default: 0.0.0.0)
//! - `API_PORT` - HTTP port (default: 8080)
//! - `LOG_LEVEL` - Log filter when `RUST_LOG` is unset (default: info)
//! - `ENABLE_CORS` - Allow any origin (default: false)

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ServerError};
pub use routes::create_router;
pub use state::AppState;
