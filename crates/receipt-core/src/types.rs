//! # Domain Types
//!
//! Types used throughout receipt processing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │   Wire shape (unvalidated)            Validated                        │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │    RawReceipt       │            │      Receipt        │            │
//! │  │  ─────────────────  │  validate  │  ─────────────────  │            │
//! │  │  retailer: String   │ ─────────► │  retailer: String   │            │
//! │  │  purchaseDate: Str  │            │  date: NaiveDate    │            │
//! │  │  purchaseTime: Str  │            │  time: NaiveTime    │            │
//! │  │  items: [RawItem]   │            │  items: [Item]      │            │
//! │  │  total: String      │            │  total: Money       │            │
//! │  └─────────────────────┘            └─────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every raw field is text so validators see exactly what the client sent.
//! Amounts may arrive as JSON strings (`"6.49"`) or JSON numbers (`6.49`);
//! a number keeps its literal text, so `12.30` and `12.3` stay distinct.
//! A missing field deserializes to empty text (or an empty list) and fails
//! validation like any other malformed value.

use chrono::{NaiveDate, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::money::Money;

/// Reward points awarded for a receipt.
///
/// 64-bit: pathological receipts (many high-priced items) exceed `i32::MAX`.
pub type Points = u64;

// =============================================================================
// Raw Receipt (wire shape)
// =============================================================================

/// A line item exactly as submitted by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default)]
    pub short_description: String,

    /// Price text, expected as `digits.dd`.
    #[serde(default, deserialize_with = "amount_text")]
    pub price: String,
}

impl RawItem {
    /// Creates a raw item from description and price text.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        RawItem {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A receipt exactly as submitted by the client.
///
/// ## JSON Shape
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
///   "total": "6.49"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    #[serde(default)]
    pub retailer: String,

    #[serde(default)]
    pub purchase_date: String,

    #[serde(default)]
    pub purchase_time: String,

    #[serde(default)]
    pub items: Vec<RawItem>,

    #[serde(default, deserialize_with = "amount_text")]
    pub total: String,
}

/// Reads an amount given as a JSON string or number, keeping its text as
/// written. `null` reads as empty text.
fn amount_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected an amount as a string or number, found {other}"
        ))),
    }
}

// =============================================================================
// Validated Types
// =============================================================================

/// A validated line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    description: String,
    price: Money,
}

impl Item {
    /// Creates an item from an already-checked description and price.
    pub fn new(description: impl Into<String>, price: Money) -> Self {
        Item {
            description: description.into(),
            price,
        }
    }

    /// Description as submitted, untrimmed.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

/// A validated receipt, the input to scoring.
///
/// Has no identity of its own; it lives only long enough to be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    retailer: String,
    purchase_date: NaiveDate,
    purchase_time: NaiveTime,
    items: Vec<Item>,
    total: Money,
}

impl Receipt {
    /// Creates a receipt from typed values.
    ///
    /// This does not re-check the textual rules (retailer characters, amount
    /// shape); use [`crate::validate_receipt`] for client input.
    pub fn new(
        retailer: impl Into<String>,
        purchase_date: NaiveDate,
        purchase_time: NaiveTime,
        items: Vec<Item>,
        total: Money,
    ) -> Self {
        Receipt {
            retailer: retailer.into(),
            purchase_date,
            purchase_time,
            items,
            total,
        }
    }

    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_receipt_deserializes_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
            "total": "6.49"
        }"#;

        let raw: RawReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(raw.retailer, "Target");
        assert_eq!(raw.purchase_date, "2022-01-01");
        assert_eq!(raw.purchase_time, "13:01");
        assert_eq!(raw.items, vec![RawItem::new("Mountain Dew 12PK", "6.49")]);
        assert_eq!(raw.total, "6.49");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let raw: RawReceipt = serde_json::from_str(r#"{ "items": [{}] }"#).unwrap();
        assert!(raw.retailer.is_empty());
        assert!(raw.total.is_empty());
        assert_eq!(raw.items, vec![RawItem::default()]);
    }

    #[test]
    fn test_numeric_amounts_keep_literal_text() {
        let json = r#"{
            "items": [
                { "shortDescription": "Pepsi - 12-oz", "price": 1.25 },
                { "shortDescription": "Dasani", "price": 12.30 }
            ],
            "total": 6.49
        }"#;

        let raw: RawReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(raw.total, "6.49");
        assert_eq!(raw.items[0].price, "1.25");
        assert_eq!(raw.items[1].price, "12.30");

        let raw: RawReceipt = serde_json::from_str(r#"{ "total": 12.3 }"#).unwrap();
        assert_eq!(raw.total, "12.3");

        let raw: RawReceipt = serde_json::from_str(r#"{ "total": 1234 }"#).unwrap();
        assert_eq!(raw.total, "1234");

        let raw: RawReceipt = serde_json::from_str(r#"{ "total": null }"#).unwrap();
        assert!(raw.total.is_empty());
    }

    #[test]
    fn test_non_scalar_amount_is_rejected() {
        assert!(serde_json::from_str::<RawReceipt>(r#"{ "total": ["6.49"] }"#).is_err());
        assert!(serde_json::from_str::<RawReceipt>(r#"{ "total": true }"#).is_err());
    }

    #[test]
    fn test_receipt_accessors() {
        let date = NaiveDate::from_ymd_opt(2022, 3, 20).unwrap();
        let time = NaiveTime::from_hms_opt(14, 33, 0).unwrap();
        let receipt = Receipt::new(
            "M&M Corner Market",
            date,
            time,
            vec![Item::new("Gatorade", Money::from_cents(225))],
            Money::from_cents(225),
        );

        assert_eq!(receipt.retailer(), "M&M Corner Market");
        assert_eq!(receipt.purchase_date(), date);
        assert_eq!(receipt.purchase_time(), time);
        assert_eq!(receipt.items().len(), 1);
        assert_eq!(receipt.items()[0].description(), "Gatorade");
        assert_eq!(receipt.total().cents(), 225);
    }
}
