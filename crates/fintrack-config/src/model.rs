use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "currency_symbol",
    "currency_precision",
    "ui_color_enabled",
];

const MAX_PRECISION: u32 = 6;

/// Stores user-configurable display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_currency_precision")]
    pub currency_precision: u32,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            currency_precision: Self::default_currency_precision(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_currency_precision() -> u32 {
        2
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Updates a single field from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "currency_symbol" => self.currency_symbol = value.trim().to_string(),
            "currency_precision" => {
                let precision: u32 = value.trim().parse().map_err(|_| invalid())?;
                if precision > MAX_PRECISION {
                    return Err(invalid());
                }
                self.currency_precision = precision;
            }
            "ui_color_enabled" => {
                self.ui_color_enabled = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => return Err(invalid()),
                };
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// `(key, value)` pairs in [`CONFIG_KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("currency_precision", self.currency_precision.to_string()),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
        ]
    }
}
