//! Price estimates and their display form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency the bundled model predicts in.
pub const DEFAULT_CURRENCY: &str = "SGD";

/// A point estimate of a flat's resale price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// Predicted price
    pub amount: f64,
    /// ISO currency code
    pub currency: String,
}

impl PriceEstimate {
    /// Create an estimate.
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Create an estimate in [`DEFAULT_CURRENCY`].
    pub fn sgd(amount: f64) -> Self {
        Self::new(amount, DEFAULT_CURRENCY)
    }
}

/// `SGD 512,345.68`
impl fmt::Display for PriceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, format_amount(self.amount))
    }
}

/// Format an amount with thousands separators and two decimals.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}
