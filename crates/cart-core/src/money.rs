//! Money type for representing monetary values.
//!
//! Amounts are summed unrounded; formatting to two decimal places happens
//! once, at display time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    EUR,
    USD,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "EUR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "€").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "\u{20ac}",
            Currency::USD => "$",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// The amount is kept exactly as summed and rounded to cents only when
/// formatted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in currency units.
    pub amount: f64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    ///
    /// ```
    /// use cart_core::money::{Money, Currency};
    /// let price = Money::new(12.5, Currency::EUR);
    /// assert_eq!(price.display(), "12.50 EUR");
    /// ```
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    /// Format with two decimals and a trailing currency code (e.g., "21.00 EUR").
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), self.currency.code())
    }

    /// Format as a two-decimal amount without currency (e.g., "21.00").
    pub fn display_amount(&self) -> String {
        // `{:.2}` keeps the sign of -0.0
        let amount = if self.amount == 0.0 { 0.0 } else { self.amount };
        format!("{:.2}", amount)
    }

    /// Try to add another Money value, returning None on currency mismatch.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(self.amount + other.amount, self.currency))
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, factor: u32) -> Money {
        Money::new(self.amount * f64::from(factor), self.currency)
    }

    /// Sum an iterator of Money values, skipping values in another currency.
    pub fn sum(iter: impl Iterator<Item = Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc.try_add(&m).unwrap_or(acc))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
