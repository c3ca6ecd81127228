//! # Validation Module
//!
//! Field validators that turn a [`RawReceipt`] into a [`Receipt`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP (apps/api)                                              │
//! │  └── JSON deserialization into RawReceipt (all fields are text)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Shape checks on the raw text (digits.dd, allowed characters)      │
//! │  └── Calendar checks (real dates, 24h times)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Receipt (typed, immutable) ──► points::calculate_points               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are checked on their text, not on a parsed number: `12.3` and
//! `12.345` are valid decimals but not valid receipt amounts.
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{validate_amount, validate_retailer};
//!
//! assert!(validate_retailer("M&M Corner Market").is_ok());
//! assert!(validate_retailer("M#M Corner Market").is_err());
//!
//! assert!(validate_amount("total", "6.49").is_ok());
//! assert!(validate_amount("total", "6.495").is_err());
//! ```

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Item, RawItem, RawReceipt, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const AMOUNT_FORMAT: &str = "must be digits, a decimal point, and exactly two digits";

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates every field of a raw receipt and builds the typed [`Receipt`].
///
/// Fields are checked in order (retailer, date, time, items, total) and the
/// first failure is returned. Nothing is partially built on failure.
///
/// ## Example
/// ```rust
/// use receipt_core::{validate_receipt, RawItem, RawReceipt};
///
/// let mut raw = RawReceipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     items: vec![RawItem::new("Mountain Dew 12PK", "6.49")],
///     total: "6.49".to_string(),
/// };
/// assert!(validate_receipt(&raw).is_ok());
///
/// raw.purchase_date = "2022-02-30".to_string();
/// assert!(validate_receipt(&raw).is_err());
/// ```
pub fn validate_receipt(raw: &RawReceipt) -> ValidationResult<Receipt> {
    validate_retailer(&raw.retailer)?;
    let purchase_date = validate_purchase_date(&raw.purchase_date)?;
    let purchase_time = validate_purchase_time(&raw.purchase_time)?;
    let items = validate_items(&raw.items)?;
    let total = validate_amount("total", &raw.total)?;

    Ok(Receipt::new(
        raw.retailer.clone(),
        purchase_date,
        purchase_time,
        items,
        total,
    ))
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a retailer name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Only word characters (letters, digits, underscore), whitespace,
///   hyphens, and ampersands
pub fn validate_retailer(retailer: &str) -> ValidationResult<()> {
    if retailer.trim().is_empty() {
        return Err(ValidationError::required("retailer"));
    }

    if !retailer.chars().all(is_retailer_char) {
        return Err(ValidationError::invalid_format(
            "retailer",
            "must contain only letters, digits, underscores, whitespace, '-' and '&'",
        ));
    }

    Ok(())
}

fn is_retailer_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace() || c == '-' || c == '&'
}

/// Validates and parses a purchase date (`YYYY-MM-DD`).
///
/// Impossible dates (month 13, February 30, February 29 outside a leap
/// year) are rejected by the calendar, not by a pattern.
pub fn validate_purchase_date(text: &str) -> ValidationResult<NaiveDate> {
    if text.trim().is_empty() {
        return Err(ValidationError::required("purchaseDate"));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| {
        ValidationError::invalid_format("purchaseDate", format!("not a calendar date: {e}"))
    })
}

/// Validates and parses a purchase time (`HH:MM`, or `HH:MM:SS`).
///
/// Hours run 0-23, minutes and seconds 0-59; `24:00` is not a valid time.
pub fn validate_purchase_time(text: &str) -> ValidationResult<NaiveTime> {
    if text.trim().is_empty() {
        return Err(ValidationError::required("purchaseTime"));
    }

    let time = NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .map_err(|e| {
            ValidationError::invalid_format("purchaseTime", format!("not a 24-hour time: {e}"))
        })?;

    // chrono parses `:60` as a leap second
    if time.nanosecond() >= 1_000_000_000 {
        return Err(ValidationError::invalid_format(
            "purchaseTime",
            "seconds must be 0-59",
        ));
    }

    Ok(time)
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a monetary amount's text and parses it to [`Money`].
///
/// `field` is only used to label the error.
pub fn validate_amount(field: &str, text: &str) -> ValidationResult<Money> {
    if text.is_empty() {
        return Err(ValidationError::required(field));
    }

    Money::parse_two_decimal(text)
        .ok_or_else(|| ValidationError::invalid_format(field, AMOUNT_FORMAT))
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the item list: at least one item, each item valid.
pub fn validate_items(items: &[RawItem]) -> ValidationResult<Vec<Item>> {
    if items.is_empty() {
        return Err(ValidationError::Empty {
            field: "items".to_string(),
        });
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect()
}

/// Validates a single item. `index` labels errors as `items[index].field`.
pub fn validate_item(index: usize, item: &RawItem) -> ValidationResult<Item> {
    if item.short_description.trim().is_empty() {
        return Err(ValidationError::required(format!(
            "items[{index}].shortDescription"
        )));
    }

    let price = validate_amount(&format!("items[{index}].price"), &item.price)?;

    Ok(Item::new(item.short_description.clone(), price))
}

// =============================================================================
// Unit Tests
// =============================================================================
