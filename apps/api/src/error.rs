//! API error types.
//!
//! Every failure reaches the client as `{ "description": "..." }`:
//!
//! | Error                                   | Status | Description                     |
//! |-----------------------------------------|--------|---------------------------------|
//! | `ProcessError::InvalidReceipt`          | 400    | The receipt is invalid.         |
//! | Unreadable JSON body                    | 400    | The receipt is invalid.         |
//! | `ProcessError::NotFound`                | 404    | No receipt found for that ID.   |

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipt_store::ProcessError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Body was not JSON or did not fit the receipt shape. Reported the same
    /// way as a receipt that fails validation.
    #[error("The receipt is invalid.")]
    MalformedBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Process(ProcessError::InvalidReceipt(_)) => StatusCode::BAD_REQUEST,
            ApiError::Process(ProcessError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub description: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            description: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::ValidationError;

    #[test]
    fn status_codes() {
        let invalid = ApiError::from(ProcessError::from(ValidationError::required("retailer")));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.to_string(), "The receipt is invalid.");

        let missing = ApiError::from(ProcessError::NotFound);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "No receipt found for that ID.");
    }
}
