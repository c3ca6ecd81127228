//! # receipt-store: Result Store for Receipt Points
//!
//! Holds computed points under freshly minted receipt ids, and exposes the
//! two operations the HTTP layer calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Data Flow                            │
//! │                                                                         │
//! │  POST /receipts/process            GET /receipts/{id}/points           │
//! │       │                                  │                              │
//! │       ▼                                  ▼                              │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ReceiptProcessor::submit        ReceiptProcessor::get_points  │   │
//! │  │     validate → score → insert       parse id → lookup           │   │
//! │  │            │                                │                   │   │
//! │  │            ▼                                ▼                   │   │
//! │  │   ┌──────────────────────────────────────────────────────────┐  │   │
//! │  │   │  ScoreStore: Arc<RwLock<HashMap<ReceiptId, Points>>>      │  │   │
//! │  │   └──────────────────────────────────────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`id`] - `ReceiptId`, a random UUID
//! - [`store`] - `ScoreStore`, the concurrent id → points map
//! - [`processor`] - `ReceiptProcessor` (`submit` / `get_points`)
//! - [`error`] - `ProcessError`
//!
//! ## Usage
//!
//! ```rust
//! use receipt_core::{RawItem, RawReceipt};
//! use receipt_store::ReceiptProcessor;
//!
//! let processor = ReceiptProcessor::default();
//! let raw = RawReceipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![RawItem::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//!
//! let id = processor.submit(&raw).unwrap();
//! assert_eq!(processor.get_points(&id.to_string()).unwrap(), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod processor;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ProcessError, ProcessResult};
pub use id::ReceiptId;
pub use processor::ReceiptProcessor;
pub use store::ScoreStore;
