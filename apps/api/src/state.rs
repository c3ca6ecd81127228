//! Application state for the API server.

use receipt_store::ReceiptProcessor;

/// Shared state handed to every handler.
///
/// Clones are cheap; they all point at the same score store.
#[derive(Debug, Clone)]
pub struct AppState {
    pub processor: ReceiptProcessor,
    pub version: String,
}

impl AppState {
    pub fn new(processor: ReceiptProcessor) -> Self {
        AppState {
            processor,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
