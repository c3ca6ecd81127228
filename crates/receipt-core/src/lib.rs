//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate turns a raw, unvalidated receipt into a validated [`Receipt`]
//! and scores it. It contains no I/O and no shared state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/api)                          │   │
//! │  │    POST /receipts/process ──► GET /receipts/{id}/points         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation │  │  points   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  RawReceipt│  │  7 rules  │  │   │
//! │  │   │   Item    │  │  (cents)  │  │  → Receipt │  │  → u64    │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 receipt-store (Result Store)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Raw wire shape and validated domain types
//! - [`money`] - Money type with integer cents (no floating point!)
//! - [`error`] - Validation error type
//! - [`validation`] - Field validators
//! - [`points`] - Scoring engine
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{calculate_points, validate_receipt, RawItem, RawReceipt};
//!
//! let raw = RawReceipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![RawItem::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//!
//! let receipt = validate_receipt(&raw).unwrap();
//! assert_eq!(calculate_points(&receipt), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use points::{calculate_points, points_breakdown, PointsBreakdown};
pub use types::*;
pub use validation::{validate_receipt, ValidationResult};
