//! # Receipt Processor
//!
//! The two operations exposed to the HTTP layer.
//!
//! ```text
//! submit(raw)
//!      │
//!      ▼
//! validate_receipt ── Err ──► ProcessError::InvalidReceipt (nothing stored)
//!      │ Ok(Receipt)
//!      ▼
//! points_breakdown ──► total
//!      │
//!      ▼
//! ScoreStore::insert ──► ReceiptId
//!
//! get_points(text)
//!      │
//!      ▼
//! parse UUID ── Err ──► ProcessError::NotFound
//!      │
//!      ▼
//! ScoreStore::lookup ── None ──► ProcessError::NotFound
//! ```
//!
//! Lookups read the stored result only; nothing is re-validated or re-scored.

use receipt_core::{points_breakdown, validate_receipt, Points, RawReceipt};
use tracing::{debug, info};

use crate::error::{ProcessError, ProcessResult};
use crate::id::ReceiptId;
use crate::store::ScoreStore;

/// Validates, scores and stores receipts; serves stored points.
///
/// Cloning is cheap and clones share the same [`ScoreStore`].
#[derive(Debug, Clone, Default)]
pub struct ReceiptProcessor {
    store: ScoreStore,
}

impl ReceiptProcessor {
    /// Creates a processor backed by `store`.
    pub fn new(store: ScoreStore) -> Self {
        ReceiptProcessor { store }
    }

    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    /// Validates and scores a receipt, stores the points, returns the new id.
    ///
    /// All-or-nothing: on any validation failure nothing is stored.
    pub fn submit(&self, raw: &RawReceipt) -> ProcessResult<ReceiptId> {
        let receipt = validate_receipt(raw).map_err(|e| {
            debug!(field = e.field(), error = %e, "receipt rejected");
            ProcessError::from(e)
        })?;

        let breakdown = points_breakdown(&receipt);
        let points = breakdown.total();
        debug!(retailer = receipt.retailer(), ?breakdown, "receipt scored");

        let id = self.store.insert(points);
        info!(%id, points, "receipt processed");

        Ok(id)
    }

    /// Returns the points stored for the id given as text.
    ///
    /// Malformed id text is reported as [`ProcessError::NotFound`], the same
    /// as a well-formed id that was never issued.
    pub fn get_points(&self, id_text: &str) -> ProcessResult<Points> {
        let id: ReceiptId = id_text.parse().map_err(|_| {
            debug!(id = id_text, "malformed receipt id");
            ProcessError::NotFound
        })?;

        self.store.lookup(&id).ok_or_else(|| {
            debug!(%id, "no receipt stored for id");
            ProcessError::NotFound
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
