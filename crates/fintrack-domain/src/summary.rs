//! Aggregated views derived from the transaction list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Three-letter month abbreviations, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// All-time balance plus the income and expense of the current calendar month.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionTotals {
    pub balance: Decimal,
    /// Non-negative.
    pub monthly_income: Decimal,
    /// Non-negative magnitude.
    pub monthly_expense: Decimal,
}

impl TransactionTotals {
    pub fn monthly_net(&self) -> Decimal {
        self.monthly_income - self.monthly_expense
    }
}

/// Income and expense of a single calendar month.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MonthBucket {
    pub month_label: &'static str,
    pub income: Decimal,
    pub expense: Decimal,
}

impl MonthBucket {
    pub fn empty(month_label: &'static str) -> Self {
        Self {
            month_label,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        }
    }

    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero()
    }
}

/// Twelve month buckets (January..December) of a single calendar year.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthlySeries {
    pub year: i32,
    buckets: [MonthBucket; 12],
}

impl MonthlySeries {
    /// Zero-filled series for `year`.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            buckets: MONTH_LABELS.map(MonthBucket::empty),
        }
    }

    pub fn buckets(&self) -> &[MonthBucket; 12] {
        &self.buckets
    }

    /// Bucket for `month` in `1..=12`.
    pub fn bucket(&self, month: u32) -> Option<&MonthBucket> {
        month
            .checked_sub(1)
            .and_then(|idx| self.buckets.get(idx as usize))
    }

    pub fn bucket_mut(&mut self, month: u32) -> Option<&mut MonthBucket> {
        month
            .checked_sub(1)
            .and_then(|idx| self.buckets.get_mut(idx as usize))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthBucket> {
        self.buckets.iter()
    }

    pub fn total_income(&self) -> Decimal {
        self.buckets
            .iter()
            .fold(Decimal::ZERO, |total, bucket| total.saturating_add(bucket.income))
    }

    pub fn total_expense(&self) -> Decimal {
        self.buckets
            .iter()
            .fold(Decimal::ZERO, |total, bucket| total.saturating_add(bucket.expense))
    }
}

impl<'a> IntoIterator for &'a MonthlySeries {
    type Item = &'a MonthBucket;
    type IntoIter = std::slice::Iter<'a, MonthBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
