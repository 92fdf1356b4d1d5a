//! Value unit conversion.
//!
//! All amounts are `U256` integers in wei internally; conversion to and from
//! human-scaled decimal strings happens only at presentation boundaries.

use alloy::primitives::U256;
use rust_decimal::Decimal;

use crate::error::{AppError, Result};

/// Named denominations of the chain's value unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// The smallest unit; all internal arithmetic uses it.
    Wei,
    Kwei,
    Mwei,
    Gwei,
    Szabo,
    Finney,
    /// 10^18 wei.
    Ether,
}

impl Unit {
    /// Decimal places between this unit and wei.
    pub fn decimals(self) -> u8 {
        match self {
            Unit::Wei => 0,
            Unit::Kwei => 3,
            Unit::Mwei => 6,
            Unit::Gwei => 9,
            Unit::Szabo => 12,
            Unit::Finney => 15,
            Unit::Ether => 18,
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "wei" => Ok(Unit::Wei),
            "kwei" => Ok(Unit::Kwei),
            "mwei" => Ok(Unit::Mwei),
            "gwei" => Ok(Unit::Gwei),
            "szabo" => Ok(Unit::Szabo),
            "finney" => Ok(Unit::Finney),
            "ether" => Ok(Unit::Ether),
            _ => Err(AppError::Parse(format!("Unknown unit: {}", s))),
        }
    }
}

/// Convert a decimal amount in `unit` to wei.
pub fn to_wei(amount: &str, unit: Unit) -> Result<U256> {
    parse_units(amount, unit.decimals())
}

/// Render a wei value as a decimal amount in `unit`.
pub fn from_wei(value: U256, unit: Unit) -> String {
    format_units(value, unit.decimals())
}

/// Format a U256 value with decimals to a human-readable string.
///
/// Lossless: trailing zeros are trimmed but no digit is ever rounded away.
pub fn format_units(value: U256, decimals: u8) -> String {
    // Handle zero case explicitly
    if value == U256::ZERO {
        return "0".to_string();
    }

    let value_str = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return value_str;
    }

    let len = value_str.len();
    if len <= decimals {
        // Value is less than 1, pad with zeros
        let zeros = decimals - len;
        let decimal_part = value_str.trim_end_matches('0');
        if decimal_part.is_empty() {
            "0".to_string()
        } else {
            format!("0.{}{}", "0".repeat(zeros), decimal_part)
        }
    } else {
        // Split into integer and decimal parts
        let (integer, decimal) = value_str.split_at(len - decimals);
        let decimal = decimal.trim_end_matches('0');
        if decimal.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, decimal)
        }
    }
}

/// Parse a non-negative decimal numeral into a U256 scaled by `decimals`.
///
/// Excess fractional digits are truncated to the scale; missing ones are
/// padded. Fails with [`AppError::InvalidAmount`] on anything that is not a
/// plain non-negative decimal numeral.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256> {
    let amount = amount.trim();

    if amount.is_empty() {
        return Err(AppError::InvalidAmount("amount cannot be empty".to_string()));
    }

    if amount.starts_with('-') {
        return Err(AppError::InvalidAmount("amount cannot be negative".to_string()));
    }

    // U256 parsing would also accept 0x-prefixed hex; only plain decimal
    // numerals are valid amounts.
    if !amount.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(AppError::InvalidAmount(format!("{amount}: not a decimal numeral")));
    }

    let decimals = decimals as usize;
    let parts: Vec<&str> = amount.split('.').collect();

    match parts.len() {
        1 => {
            // No decimal point
            let value = parts[0]
                .parse::<U256>()
                .map_err(|e| AppError::InvalidAmount(format!("{amount}: {e}")))?;
            let multiplier = U256::from(10).pow(U256::from(decimals));
            Ok(value * multiplier)
        }
        2 => {
            let integer = parts[0];
            let mut fraction = parts[1].to_string();

            // Pad or truncate fraction to match decimals
            if fraction.len() > decimals {
                fraction.truncate(decimals);
            } else {
                fraction.push_str(&"0".repeat(decimals - fraction.len()));
            }

            let integer_value = if integer.is_empty() {
                U256::ZERO
            } else {
                integer
                    .parse::<U256>()
                    .map_err(|e| AppError::InvalidAmount(format!("{amount}: {e}")))?
            };

            let fraction_value = if fraction.is_empty() {
                U256::ZERO
            } else {
                fraction
                    .parse::<U256>()
                    .map_err(|e| AppError::InvalidAmount(format!("{amount}: {e}")))?
            };

            let multiplier = U256::from(10).pow(U256::from(decimals));
            Ok(integer_value * multiplier + fraction_value)
        }
        _ => Err(AppError::InvalidAmount(format!("{amount}: too many decimal points"))),
    }
}

/// Convert U256 to Decimal with proper scaling, for display-side math only.
pub fn u256_to_decimal(value: U256, decimals: u8) -> Decimal {
    let formatted = format_units(value, decimals);
    formatted.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}
