use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use fintrack_domain::timestamp_to_datetime;

/// Number of decimals shown for amounts unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 2;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: Decimal) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Rounds half away from zero to `precision` decimals and prefixes `symbol`.
/// Negative amounts keep their sign before the symbol.
pub fn format_amount(amount: Decimal, symbol: &str, precision: u32) -> String {
    let rounded = amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.prec$}", rounded.abs(), prec = precision as usize);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{digits}")
    } else {
        format!("{symbol}{digits}")
    }
}

/// Transaction-list style: `+` for income, bare magnitude for expense.
pub fn format_signed_amount(amount: Decimal, symbol: &str, precision: u32) -> String {
    let magnitude = format_amount(amount.abs(), symbol, precision);
    if amount > Decimal::ZERO {
        format!("+{magnitude}")
    } else {
        magnitude
    }
}

/// `Oct 20, 2025` style date for a millisecond timestamp.
pub fn format_table_date(timestamp: i64) -> String {
    timestamp_to_datetime(timestamp)
        .map(|instant| instant.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}
