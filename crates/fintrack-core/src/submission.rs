//! Validation of the add-transaction form.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use fintrack_domain::{EntryKind, Transaction};

use crate::{error::CoreResult, stamp::derive_timestamp, CoreError};

/// Raw field values as entered in the add-transaction form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    /// `earning` or `spent`.
    pub kind: String,
    /// ISO-8601 calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Positive decimal magnitude.
    pub amount: String,
    pub description: String,
}

impl TransactionForm {
    pub fn new(
        kind: impl Into<String>,
        date: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            date: date.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Checks every field and builds the transaction it describes, stamped
    /// relative to `created_at`.
    pub fn validate(&self, created_at: DateTime<Utc>) -> CoreResult<Transaction> {
        let kind = parse_kind(&self.kind)?;
        let date = parse_date(&self.date)?;
        let magnitude = parse_amount(&self.amount)?;
        let description = self.description.trim();
        if description.is_empty() {
            return Err(CoreError::EmptyDescription);
        }
        let timestamp = derive_timestamp(date, created_at)?;
        Ok(Transaction::new(timestamp, description, kind.apply(magnitude)))
    }
}

pub fn parse_kind(input: &str) -> CoreResult<EntryKind> {
    EntryKind::from_label(input).ok_or_else(|| CoreError::UnknownKind(input.trim().to_string()))
}

pub fn parse_date(input: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(format!("`{}` (use YYYY-MM-DD)", input.trim())))
}

/// Largest magnitude a single entry may carry: one quadrillion.
///
/// Keeps every sum over realistic session sizes far inside the `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x3_8D7E, 0, false, 0);

/// Parses a strictly positive decimal magnitude no larger than [`MAX_AMOUNT`].
pub fn parse_amount(input: &str) -> CoreResult<Decimal> {
    let raw = input.trim();
    let amount = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| CoreError::InvalidAmount(format!("`{raw}` is not a number")))?;
    if amount <= Decimal::ZERO {
        return Err(CoreError::InvalidAmount(format!(
            "`{raw}` must be greater than zero"
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(CoreError::InvalidAmount(format!(
            "`{raw}` exceeds the maximum of {MAX_AMOUNT}"
        )));
    }
    Ok(amount)
}
