//! Money calculation utilities using rust_decimal for precision
//!
//! Prices arrive as text (button data) or JSON numbers and are kept as
//! `Decimal`. Rounding to two places happens only when formatting for display.

use rust_decimal::prelude::*;
use thiserror::Error;

/// Display precision for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Maximum accepted unit price
const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("price must be a finite number, got {0}")]
    NotFinite(String),

    #[error("price must be non-negative, got {0}")]
    Negative(String),

    #[error("price exceeds maximum allowed (1000000), got {0}")]
    TooLarge(String),
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

#[inline]
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a price coming from the UI
///
/// Reads the leading number of the text (`"12abc"` is 12) the way the menu
/// buttons always have; blank or non-numeric text counts as 0. Values that
/// parse but are unusable are rejected, including ones too large for
/// `Decimal` to hold.
pub fn parse_price(raw: &str) -> Result<Decimal, PriceError> {
    let raw = raw.trim().trim_start_matches('$');
    let number = numeric_prefix(raw);
    if number.is_empty() {
        let word = raw.trim_start_matches(['+', '-']).to_ascii_lowercase();
        if word.starts_with("inf") || word.starts_with("nan") {
            return Err(PriceError::NotFinite(raw.to_string()));
        }
        return Ok(Decimal::ZERO);
    }

    if let Ok(value) = Decimal::from_str(number) {
        return validate_price(value);
    }

    // Exponent form, or more digits than Decimal holds
    let f: f64 = number
        .parse()
        .map_err(|_| PriceError::NotFinite(number.to_string()))?;
    if !f.is_finite() {
        return Err(PriceError::NotFinite(number.to_string()));
    }
    if f < 0.0 {
        return Err(PriceError::Negative(number.to_string()));
    }
    if f > MAX_PRICE.to_f64().unwrap_or(f64::MAX) {
        return Err(PriceError::TooLarge(number.to_string()));
    }
    validate_price(to_decimal(f))
}

/// Longest leading `[+-]digits[.digits][e[+-]digits]` run, or `""`
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    &text[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Validate a unit price before it enters the cart
pub fn validate_price(value: Decimal) -> Result<Decimal, PriceError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PriceError::Negative(value.to_string()));
    }
    if value > MAX_PRICE {
        return Err(PriceError::TooLarge(value.to_string()));
    }
    Ok(value)
}

/// `$12.50`
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", round_money(value))
}

/// `12.50` (no currency sign)
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}
