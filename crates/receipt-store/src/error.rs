//! # Processor Error Types
//!
//! The two outcomes a caller of [`crate::ReceiptProcessor`] can see besides
//! success.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (receipt-core) ─► ProcessError::InvalidReceipt        │
//! │  unknown / malformed id         ─► ProcessError::NotFound              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (apps/api) ─► 400 / 404 with { "description": ... }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Display strings are the client-facing descriptions, so they are uniform:
//! which field failed is kept in the error source for logs, not the message.

use receipt_core::ValidationError;
use thiserror::Error;

/// Processor errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// The submitted receipt failed validation. Nothing was stored.
    #[error("The receipt is invalid.")]
    InvalidReceipt(#[from] ValidationError),

    /// No receipt was ever stored under the requested id.
    ///
    /// ## When This Occurs
    /// - The id is well formed but was never issued (typo, foreign id)
    /// - The id text is not a UUID at all
    #[error("No receipt found for that ID.")]
    NotFound,
}

/// Convenience type alias for Results with ProcessError.
pub type ProcessResult<T> = Result<T, ProcessError>;

// =============================================================================
// Unit Tests
// =============================================================================
