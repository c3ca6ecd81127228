//! # Points Module
//!
//! The scoring engine: a pure function from [`Receipt`] to [`Points`].
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                                      Points                       │
//! │  ────────────────────────────────────────  ───────────────────────────  │
//! │  Alphanumeric chars in retailer name       +1 each                      │
//! │  Total is a round dollar amount            +50                          │
//! │  Total is a multiple of 0.25               +25                          │
//! │  Every two items                           +5                           │
//! │  Trimmed description length % 3 == 0       +ceil(price × 0.2) per item  │
//! │  Purchase day is odd                       +6                           │
//! │  Purchase time after 14:00, before 16:00   +10                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are independent, so the total is just their sum. All money math is
//! in integer cents.

use chrono::{Datelike, Timelike};

use crate::types::{Item, Points, Receipt};

const ROUND_DOLLAR_POINTS: Points = 50;
const QUARTER_MULTIPLE_POINTS: Points = 25;
const QUARTER_CENTS: i64 = 25;
const POINTS_PER_ITEM_PAIR: Points = 5;
const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;

/// Per-rule point contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer_name: Points,
    pub round_dollar: Points,
    pub quarter_multiple: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Sum of all rule contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> Points {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, Points::saturating_add)
    }
}

/// Calculates the points awarded for a receipt.
///
/// ## Example
/// ```rust
/// use chrono::{NaiveDate, NaiveTime};
/// use receipt_core::{calculate_points, Item, Money, Receipt};
///
/// let receipt = Receipt::new(
///     "M&M Corner Market",
///     NaiveDate::from_ymd_opt(2022, 3, 20).unwrap(),
///     NaiveTime::from_hms_opt(14, 33, 0).unwrap(),
///     vec![Item::new("Gatorade", Money::from_cents(225)); 4],
///     Money::from_cents(900),
/// );
///
/// assert_eq!(calculate_points(&receipt), 109);
/// ```
pub fn calculate_points(receipt: &Receipt) -> Points {
    points_breakdown(receipt).total()
}

/// Scores each rule separately.
pub fn points_breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = receipt.total();
    let time = receipt.purchase_time();

    PointsBreakdown {
        retailer_name: receipt
            .retailer()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .count() as Points,
        round_dollar: if total.is_whole_dollars() {
            ROUND_DOLLAR_POINTS
        } else {
            0
        },
        quarter_multiple: if total.is_multiple_of(QUARTER_CENTS) {
            QUARTER_MULTIPLE_POINTS
        } else {
            0
        },
        item_pairs: (receipt.items().len() / 2) as Points * POINTS_PER_ITEM_PAIR,
        item_descriptions: receipt
            .items()
            .iter()
            .map(description_points)
            .fold(0, Points::saturating_add),
        odd_day: if receipt.purchase_date().day() % 2 == 1 {
            ODD_DAY_POINTS
        } else {
            0
        },
        // 14:00 itself and 16:00 onwards don't count
        afternoon: if (time.hour() == 14 && time.minute() > 0) || time.hour() == 15 {
            AFTERNOON_POINTS
        } else {
            0
        },
    }
}

/// `ceil(price × 0.2)` when the trimmed description length is a positive
/// multiple of three, otherwise zero. Length counts `char`s.
fn description_points(item: &Item) -> Points {
    let length = item.description().trim().chars().count();
    if length == 0 || length % 3 != 0 {
        return 0;
    }

    let points = item.price().ceil_scaled(1, 5).max(0);
    Points::try_from(points).unwrap_or(Points::MAX)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn item(description: &str, cents: i64) -> Item {
        Item::new(description, Money::from_cents(cents))
    }

    /// Receipt that scores zero on every rule; tests vary one field at a time.
    struct ZeroReceipt {
        retailer: &'static str,
        purchase_date: NaiveDate,
        purchase_time: NaiveTime,
        items: Vec<Item>,
        total: Money,
    }

    impl ZeroReceipt {
        fn new() -> Self {
            ZeroReceipt {
                retailer: "&&&",
                purchase_date: date(2025, 2, 2),
                purchase_time: time(12, 30),
                items: vec![item("Item1", 150)],
                total: Money::from_cents(151),
            }
        }

        fn build(self) -> Receipt {
            Receipt::new(
                self.retailer,
                self.purchase_date,
                self.purchase_time,
                self.items,
                self.total,
            )
        }
    }

    #[test]
    fn test_zero_receipt_scores_zero() {
        let receipt = ZeroReceipt::new().build();
        assert_eq!(calculate_points(&receipt), 0);
        assert_eq!(points_breakdown(&receipt), PointsBreakdown::default());
    }

    #[test]
    fn test_retailer_name_counts_alphanumerics() {
        for (retailer, expected) in [
            ("M&M Corner Market", 14),
            ("Mountain Dew 12PK", 15),
            ("Retailer", 8),
        ] {
            let receipt = ZeroReceipt {
                retailer,
                ..ZeroReceipt::new()
            }
            .build();
            assert_eq!(calculate_points(&receipt), expected, "{retailer}");
        }
    }

    #[test]
    fn test_character_rules_count_unicode_scalars() {
        // Any Unicode letter or number counts, including `½` and `²`
        let receipt = ZeroReceipt {
            retailer: "Café ½²",
            ..ZeroReceipt::new()
        }
        .build();
        assert_eq!(points_breakdown(&receipt).retailer_name, 6);

        // Length is in chars: one emoji is one character
        assert_eq!(description_points(&item("🍕🍕🍕", 500)), 1);
        assert_eq!(description_points(&item("ab🍕", 500)), 1);
        assert_eq!(description_points(&item("🍕🍕", 500)), 0);
    }

    #[test]
    fn test_total_round_dollar_and_quarter() {
        let receipt = ZeroReceipt {
            total: Money::from_cents(110),
            ..ZeroReceipt::new()
        }
        .build();
        assert_eq!(calculate_points(&receipt), 0);

        // $1.00 is both a round dollar and a multiple of 0.25
        let receipt = ZeroReceipt {
            total: Money::from_cents(100),
            ..ZeroReceipt::new()
        }
        .build();
        assert_eq!(calculate_points(&receipt), 75);

        let receipt = ZeroReceipt {
            total: Money::from_cents(975),
            ..ZeroReceipt::new()
        }
        .build();
        assert_eq!(calculate_points(&receipt), 25);
    }

    #[test]
    fn test_total_that_is_inexact_in_binary() {
        // 0.30 % 0.25 is not zero
        let receipt = ZeroReceipt {
            total: Money::from_cents(30),
            ..ZeroReceipt::new()
        }
        .build();
        assert_eq!(calculate_points(&receipt), 0);
    }

    #[test]
    fn test_item_pairs() {
        for (count, expected) in [(1, 0), (2, 5), (3, 5), (4, 10)] {
            let receipt = ZeroReceipt {
                items: vec![item("Gatorade", 225); count],
                ..ZeroReceipt::new()
            }
            .build();
            assert_eq!(calculate_points(&receipt), expected, "{count} items");
        }
    }

    #[test]
    fn test_item_description_multiple_of_three() {
        let receipt = ZeroReceipt {
            items: vec![
                item("123", 100),    // +1
                item("123", 499),    // +1
                item("123", 501),    // +2
                item("1234", 500),   // 0, trimmed length 4
                item("12345 ", 500), // 0, trimmed length 5
            ],
            ..ZeroReceipt::new()
        }
        .build();

        let breakdown = points_breakdown(&receipt);
        assert_eq!(breakdown.item_descriptions, 4);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(calculate_points(&receipt), 14);
    }

    #[test]
    fn test_blank_description_scores_nothing() {
        assert_eq!(description_points(&item("   ", 10_000)), 0);
        assert_eq!(description_points(&item("", 10_000)), 0);
        assert_eq!(description_points(&item("  abc  ", 10_000)), 20);
    }

    #[test]
    fn test_odd_day() {
        for (day, expected) in [(1, 6), (2, 0)] {
            let receipt = ZeroReceipt {
                purchase_date: date(2025, 2, day),
                ..ZeroReceipt::new()
            }
            .build();
            assert_eq!(calculate_points(&receipt), expected, "day {day}");
        }
    }

    #[test]
    fn test_afternoon_window() {
        for (h, m, expected) in [(14, 0, 0), (14, 1, 10), (15, 59, 10), (16, 0, 0)] {
            let receipt = ZeroReceipt {
                purchase_time: time(h, m),
                ..ZeroReceipt::new()
            }
            .build();
            assert_eq!(calculate_points(&receipt), expected, "{h:02}:{m:02}");
        }

        // Seconds past 14:00 don't open the window
        let receipt = ZeroReceipt {
            purchase_time: NaiveTime::from_hms_opt(14, 0, 30).unwrap(),
            ..ZeroReceipt::new()
        }
        .build();
        assert_eq!(calculate_points(&receipt), 0);
    }

    #[test]
    fn test_target_receipt() {
        let receipt = Receipt::new(
            "Target",
            date(2022, 1, 1),
            time(13, 1),
            vec![
                item("Mountain Dew 12PK", 649),
                item("Emils Cheese Pizza", 1225),
                item("Knorr Creamy Chicken", 126),
                item("Doritos Nacho Cheese", 335),
                item("   Klarbrunn 12-PK 12 FL OZ  ", 1200),
            ],
            Money::from_cents(3535),
        );

        assert_eq!(
            points_breakdown(&receipt),
            PointsBreakdown {
                retailer_name: 6,
                round_dollar: 0,
                quarter_multiple: 0,
                item_pairs: 10,
                item_descriptions: 6,
                odd_day: 6,
                afternoon: 0,
            }
        );
        assert_eq!(calculate_points(&receipt), 28);
    }

    #[test]
    fn test_corner_market_receipt() {
        let receipt = Receipt::new(
            "M&M Corner Market",
            date(2022, 3, 20),
            time(14, 33),
            vec![item("Gatorade", 225); 4],
            Money::from_cents(900),
        );

        assert_eq!(calculate_points(&receipt), 109);
    }

    #[test]
    fn test_points_exceed_i32() {
        let receipt = Receipt::new(
            "Target",
            date(2022, 1, 1),
            time(13, 1),
            vec![item("Emils Cheese Pizza", 214_748_364_700); 6],
            Money::from_cents(3535),
        );

        let points = calculate_points(&receipt);
        assert!(points > i32::MAX as Points);
        // 6 × 429496730 + 6 (name) + 15 (pairs) + 6 (odd day)
        assert_eq!(points, 2_576_980_407);
    }

    #[test]
    fn test_deterministic() {
        let receipt = Receipt::new(
            "Target",
            date(2022, 1, 1),
            time(15, 1),
            vec![item("abc", 1999), item("de", 1)],
            Money::from_cents(2000),
        );
        assert_eq!(calculate_points(&receipt), calculate_points(&receipt.clone()));
    }

    #[test]
    fn test_breakdown_total_saturates() {
        let breakdown = PointsBreakdown {
            item_descriptions: Points::MAX,
            odd_day: 6,
            ..PointsBreakdown::default()
        };
        assert_eq!(breakdown.total(), Points::MAX);
    }
}
