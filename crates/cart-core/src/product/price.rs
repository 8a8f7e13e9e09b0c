//! Price text parsing.

use crate::error::CartError;
use crate::money::Currency;

/// Parse a price as it appears on the page.
///
/// A trailing currency code or symbol is stripped (a leading symbol too), and
/// a comma decimal separator becomes a dot. The result must be finite and
/// non-negative.
///
/// ```
/// use cart_core::{parse_price, Currency};
/// assert_eq!(parse_price("12,50 EUR", Currency::EUR).unwrap(), 12.5);
/// ```
pub fn parse_price(text: &str, currency: Currency) -> Result<f64, CartError> {
    let mut s = text.trim();
    for marker in [currency.code(), currency.symbol()] {
        if let Some(rest) = s.strip_suffix(marker) {
            s = rest.trim_end();
        }
    }
    if let Some(rest) = s.strip_prefix(currency.symbol()) {
        s = rest.trim_start();
    }

    let normalized = s.replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(CartError::InvalidPrice(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_decimal_with_code() {
        assert_eq!(parse_price("12,50 EUR", Currency::EUR).unwrap(), 12.5);
    }

    #[test]
    fn test_dot_decimal_with_code() {
        assert_eq!(parse_price("7.00 EUR", Currency::EUR).unwrap(), 7.0);
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_price("19.99", Currency::EUR).unwrap(), 19.99);
        assert_eq!(parse_price("0", Currency::EUR).unwrap(), 0.0);
    }

    #[test]
    fn test_symbol_markers() {
        assert_eq!(parse_price("9,90 \u{20ac}", Currency::EUR).unwrap(), 9.9);
        assert_eq!(parse_price("\u{20ac}9.90", Currency::EUR).unwrap(), 9.9);
        assert_eq!(parse_price("$4.25", Currency::USD).unwrap(), 4.25);
    }

    #[test]
    fn test_code_glued_to_number() {
        assert_eq!(parse_price("15EUR", Currency::EUR).unwrap(), 15.0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_price("", Currency::EUR).is_err());
        assert!(parse_price("EUR", Currency::EUR).is_err());
        assert!(parse_price("free", Currency::EUR).is_err());
        assert!(parse_price("NaN", Currency::EUR).is_err());
        assert!(parse_price("inf EUR", Currency::EUR).is_err());
        assert!(parse_price("-3,00 EUR", Currency::EUR).is_err());
    }

    #[test]
    fn test_error_carries_original_text() {
        let err = parse_price(" abc EUR ", Currency::EUR).unwrap_err();
        assert_eq!(err, CartError::InvalidPrice(" abc EUR ".to_string()));
    }
}
