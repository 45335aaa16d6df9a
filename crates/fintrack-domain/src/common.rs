//! Entry direction and timestamp helpers shared by the domain types.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Milliseconds in one UTC calendar day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Direction of money movement. Only the sign of the stored amount encodes it.
pub enum EntryKind {
    Earning,
    Spent,
}

impl EntryKind {
    /// Resolves the form label (`earning` / `spent`), ignoring case and padding.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "earning" => Some(EntryKind::Earning),
            "spent" => Some(EntryKind::Spent),
            _ => None,
        }
    }

    /// Classifies a signed amount. Zero has no direction.
    pub fn of(amount: Decimal) -> Option<Self> {
        if amount.is_sign_positive() && !amount.is_zero() {
            Some(EntryKind::Earning)
        } else if amount.is_sign_negative() && !amount.is_zero() {
            Some(EntryKind::Spent)
        } else {
            None
        }
    }

    /// Applies this direction to a non-negative magnitude.
    pub fn apply(self, magnitude: Decimal) -> Decimal {
        match self {
            EntryKind::Earning => magnitude.abs(),
            EntryKind::Spent => -magnitude.abs(),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Earning => "earning",
            EntryKind::Spent => "spent",
        };
        f.write_str(label)
    }
}

/// Converts a millisecond timestamp into a UTC instant, if representable.
pub fn timestamp_to_datetime(timestamp: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(timestamp)
}

/// Returns the `(year, month)` pair of a millisecond timestamp, month in `1..=12`.
pub fn year_month_of(timestamp: i64) -> Option<(i32, u32)> {
    timestamp_to_datetime(timestamp).map(|instant| (instant.year(), instant.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_kind_parses_form_labels() {
        assert_eq!(EntryKind::from_label(" Earning "), Some(EntryKind::Earning));
        assert_eq!(EntryKind::from_label("SPENT"), Some(EntryKind::Spent));
        assert_eq!(EntryKind::from_label("refund"), None);
    }

    #[test]
    fn entry_kind_classifies_by_sign() {
        assert_eq!(EntryKind::of(Decimal::from(12)), Some(EntryKind::Earning));
        assert_eq!(EntryKind::of(Decimal::from(-12)), Some(EntryKind::Spent));
        assert_eq!(EntryKind::of(Decimal::ZERO), None);
    }

    #[test]
    fn apply_preserves_magnitude() {
        let magnitude = Decimal::new(123_45, 2);
        assert_eq!(EntryKind::Earning.apply(magnitude), magnitude);
        assert_eq!(EntryKind::Spent.apply(magnitude), -magnitude);
        assert_eq!(EntryKind::Spent.apply(-magnitude), -magnitude);
    }

    #[test]
    fn year_month_of_epoch_is_january_1970() {
        assert_eq!(year_month_of(0), Some((1970, 1)));
        assert_eq!(year_month_of(i64::MAX), None);
    }
}
