//! # Error Types
//!
//! Validation error type for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core (this file)                                              │
//! │  └── ValidationError  - Which field failed and why                     │
//! │                                                                         │
//! │  receipt-store                                                         │
//! │  └── ProcessError     - InvalidReceipt / NotFound (uniform messages)   │
//! │                                                                         │
//! │  apps/api                                                              │
//! │  └── ApiError         - What the HTTP client sees                      │
//! │                                                                         │
//! │  Flow: ValidationError → ProcessError → ApiError → JSON body           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Clients never see the field detail. It exists for logs and tests.

use thiserror::Error;

/// Input validation errors.
///
/// Each variant names the offending field. Item fields are named with their
/// index, e.g. `items[2].price`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A collection that must hold at least one element is empty.
    #[error("{field} must contain at least one element")]
    Empty { field: String },

    /// Field value does not have the required shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for a field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidFormat error for a field.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::Empty { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
