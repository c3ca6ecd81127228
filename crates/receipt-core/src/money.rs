//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.30 % 0.25 = 0.04999999999999999  ❌ WRONG!                         │
//! │    4.99 * 0.2  = 0.9980000000000001   (ceil still 1, by luck)          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    30 cents % 25 = 5                                                    │
//! │    ceil(499 / 500) = 1                                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total = Money::parse_two_decimal("35.35").unwrap();
//! assert_eq!(total.cents(), 3535);
//!
//! // Shapes other than digits.dd are rejected
//! assert!(Money::parse_two_decimal("12.3").is_none());
//! assert!(Money::parse_two_decimal("1234").is_none());
//! ```

use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// Receipt amounts are never negative once validated, but the type stays
/// signed so arithmetic on it reads like ordinary integer math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses the exact receipt amount shape: one or more ASCII digits, a
    /// decimal point, exactly two ASCII digits.
    ///
    /// Returns `None` for any other shape, and for amounts whose cent count
    /// does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::parse_two_decimal("0.00"), Some(Money::from_cents(0)));
    /// assert_eq!(Money::parse_two_decimal("6.49"), Some(Money::from_cents(649)));
    ///
    /// assert!(Money::parse_two_decimal("0").is_none());
    /// assert!(Money::parse_two_decimal("12.000").is_none());
    /// assert!(Money::parse_two_decimal("-1.00").is_none());
    /// ```
    pub fn parse_two_decimal(text: &str) -> Option<Self> {
        let (whole, fraction) = text.split_once('.')?;

        if whole.is_empty() || fraction.len() != 2 {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let dollars: i64 = whole.parse().ok()?;
        let cents: i64 = fraction.parse().ok()?;

        dollars.checked_mul(100)?.checked_add(cents).map(Money)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the amount has no cents, e.g. `$9.00`.
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Checks if the amount is an exact multiple of `step_cents`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert!(Money::from_cents(125).is_multiple_of(25));  // $1.25
    /// assert!(!Money::from_cents(30).is_multiple_of(25));  // $0.30
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step_cents: i64) -> bool {
        step_cents != 0 && self.0 % step_cents == 0
    }

    /// Scales the amount by `numerator / denominator` and rounds up to
    /// whole currency units.
    ///
    /// Computed entirely in integers: `ceil(cents * numerator / (denominator * 100))`.
    /// Widening to `i128` keeps the intermediate product from overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// // $12.25 × 0.2 = 2.45 → 3
    /// assert_eq!(Money::from_cents(1225).ceil_scaled(1, 5), 3);
    /// // $5.00 × 0.2 = 1.00 → 1 (exact, no bump)
    /// assert_eq!(Money::from_cents(500).ceil_scaled(1, 5), 1);
    /// ```
    pub fn ceil_scaled(&self, numerator: i64, denominator: i64) -> i128 {
        let n = self.0 as i128 * numerator as i128;
        let d = denominator as i128 * 100;

        let quotient = n / d;
        let rounds_up = n % d != 0 && ((n > 0) == (d > 0));
        if rounds_up {
            quotient + 1
        } else {
            quotient
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`, for logs.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
