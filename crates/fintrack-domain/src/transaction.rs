//! Domain model for income and expense entries.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Display label given to entries created through the add-transaction form.
pub const USER_ENTRY_LABEL: &str = "User Entry";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    /// Effective instant in milliseconds since the Unix epoch (UTC). Not unique.
    pub timestamp: i64,
    pub description: String,
    #[serde(default = "Transaction::default_label")]
    pub label: String,
    /// Positive for income, negative for expense.
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(timestamp: i64, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            description: description.into(),
            label: Self::default_label(),
            amount,
        }
    }

    pub fn default_label() -> String {
        USER_ENTRY_LABEL.into()
    }

    pub fn kind(&self) -> Option<EntryKind> {
        EntryKind::of(self.amount)
    }

    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        timestamp_to_datetime(self.timestamp)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.occurred_at().map(|instant| instant.date_naive())
    }

    /// Calendar `(year, month)` of the effective instant, month in `1..=12`.
    pub fn year_month(&self) -> Option<(i32, u32)> {
        year_month_of(self.timestamp)
    }
}
