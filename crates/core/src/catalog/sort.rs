//! Sort comparator selector.
//!
//! Maps a small fixed set of sort keys to total-order comparators. All
//! sorting goes through the standard library's stable `sort_by`, so records
//! with equal keys keep their Record Store order.

use core::cmp::Ordering;
use core::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Order, Product, User};

/// The sort options exposed by list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Preserve Record Store order. The only key where display order is
    /// not a computed order.
    #[default]
    Featured,
    /// Price ascending.
    PriceLow,
    /// Price descending.
    PriceHigh,
    /// Rating descending; records without a rating sort as 0.
    Rating,
    /// Creation time descending; records without a timestamp sort last.
    Newest,
}

impl SortKey {
    /// Every key, in display order. Used to populate sort dropdowns.
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
        Self::Newest,
    ];

    /// The URL/query parameter form of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }

    /// Parse a query parameter, falling back to `Featured` for anything
    /// unrecognized. Sort input is advisory, so this never fails.
    #[must_use]
    pub fn from_param(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            _ => Err(format!("unknown sort key: {s}")),
        }
    }
}

/// Access to the fields the sort keys compare on.
///
/// Implemented by every record type that flows through the pipeline.
pub trait SortRecord {
    /// The price compared by `price-low` / `price-high`.
    fn sort_price(&self) -> Decimal;

    /// The rating compared by `rating`. Missing ratings default to 0 so
    /// unrated records sink, they are never excluded.
    fn sort_rating(&self) -> f64 {
        0.0
    }

    /// The timestamp compared by `newest`.
    fn sort_created_at(&self) -> Option<DateTime<Utc>>;
}

impl SortRecord for Product {
    fn sort_price(&self) -> Decimal {
        self.price
    }

    fn sort_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    fn sort_created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl SortRecord for Order {
    fn sort_price(&self) -> Decimal {
        self.total
    }

    fn sort_created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

/// Users have no priced or dated fields, so every key behaves like
/// `Featured` and the list keeps its store order.
impl SortRecord for User {
    fn sort_price(&self) -> Decimal {
        Decimal::ZERO
    }

    fn sort_created_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// Sort records in place according to `key`, stably.
pub fn apply<T: SortRecord>(records: &mut [T], key: SortKey) {
    match key {
        SortKey::Featured => {}
        SortKey::PriceLow => records.sort_by(|a, b| a.sort_price().cmp(&b.sort_price())),
        SortKey::PriceHigh => records.sort_by(|a, b| b.sort_price().cmp(&a.sort_price())),
        SortKey::Rating => records.sort_by(|a, b| b.sort_rating().total_cmp(&a.sort_rating())),
        SortKey::Newest => records.sort_by(|a, b| newest_order(a, b)),
    }
}

/// Creation time descending; records without a timestamp sort last.
fn newest_order<T: SortRecord>(a: &T, b: &T) -> Ordering {
    match (a.sort_created_at(), b.sort_created_at()) {
        (Some(lhs), Some(rhs)) => rhs.cmp(&lhs),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Rec {
        label: &'static str,
        price: Decimal,
        rating: Option<f64>,
        created_at: Option<DateTime<Utc>>,
    }

    impl SortRecord for Rec {
        fn sort_price(&self) -> Decimal {
            self.price
        }

        fn sort_rating(&self) -> f64 {
            self.rating.unwrap_or(0.0)
        }

        fn sort_created_at(&self) -> Option<DateTime<Utc>> {
            self.created_at
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 12, 0, 0).unwrap()
    }

    fn recs() -> Vec<Rec> {
        vec![
            Rec {
                label: "a",
                price: Decimal::from(50),
                rating: Some(4.0),
                created_at: Some(day(2)),
            },
            Rec {
                label: "b",
                price: Decimal::from(150),
                rating: None,
                created_at: None,
            },
            Rec {
                label: "c",
                price: Decimal::from(50),
                rating: Some(4.0),
                created_at: Some(day(9)),
            },
        ]
    }

    fn labels(recs: &[Rec]) -> Vec<&'static str> {
        recs.iter().map(|r| r.label).collect()
    }

    #[test]
    fn test_featured_preserves_input_order() {
        let mut recs = recs();
        apply(&mut recs, SortKey::Featured);
        assert_eq!(labels(&recs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_price_sorts_are_stable_for_ties() {
        let mut ascending = recs();
        apply(&mut ascending, SortKey::PriceLow);
        // a and c tie on price; their relative order is preserved.
        assert_eq!(labels(&ascending), vec!["a", "c", "b"]);

        let mut descending = recs();
        apply(&mut descending, SortKey::PriceHigh);
        assert_eq!(labels(&descending), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rating_descends_with_missing_as_zero() {
        let mut recs = recs();
        apply(&mut recs, SortKey::Rating);
        assert_eq!(labels(&recs), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_newest_descends_with_missing_last() {
        let mut recs = recs();
        apply(&mut recs, SortKey::Newest);
        assert_eq!(labels(&recs), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_from_param_falls_back_to_featured() {
        assert_eq!(SortKey::from_param("price-low"), SortKey::PriceLow);
        assert_eq!(SortKey::from_param("best-sellers"), SortKey::Featured);
        assert_eq!(SortKey::from_param(""), SortKey::Featured);
    }

    #[test]
    fn test_as_str_round_trips() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_param(key.as_str()), key);
        }
    }
}
