use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use fintrack_config::Config;
use fintrack_core::{format_amount, format_signed_amount, CurrencyFormatter, DateFormatter};
use rust_decimal::Decimal;

/// Lightweight formatter implementations backed by the active CLI configuration.
#[derive(Clone)]
pub struct CliFormatters {
    config: Arc<RwLock<Config>>,
}

impl CliFormatters {
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self { config }
    }

    /// Transaction-list style amount: `+` for income, magnitude only for expense.
    pub fn format_signed(&self, amount: Decimal) -> String {
        let config = self.config.read().expect("config formatter lock poisoned");
        format_signed_amount(amount, &config.currency_symbol, config.currency_precision)
    }
}

impl CurrencyFormatter for CliFormatters {
    fn format_amount(&self, amount: Decimal) -> String {
        let config = self.config.read().expect("config formatter lock poisoned");
        format_amount(amount, &config.currency_symbol, config.currency_precision)
    }
}

impl DateFormatter for CliFormatters {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%b %d, %Y").to_string()
    }
}
