//! Conversion between display amounts and base units.
//!
//! Prices arrive from the gateway as display strings ("0.05") together with
//! the currency's declared decimal precision; all arithmetic happens on
//! integer base units so quantities never touch floating point.

use thiserror::Error;

/// Errors from [`parse_units`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitsError {
    #[error("empty amount")]
    Empty,
    #[error("invalid character in amount: {0}")]
    InvalidDigit(char),
    #[error("too many decimal places (max {0})")]
    TooManyDecimals(u8),
    #[error("amount does not fit in 128-bit base units")]
    Overflow,
}

/// Parse a display amount into base units.
///
/// `"0.05"` with 18 decimals parses to `50_000_000_000_000_000`. Only plain
/// unsigned decimal notation is accepted; a fractional part longer than
/// `decimals` is rejected rather than silently rounded.
pub fn parse_units(display: &str, decimals: u8) -> Result<u128, UnitsError> {
    let display = display.trim();
    if display.is_empty() {
        return Err(UnitsError::Empty);
    }

    let (int_part, frac_part) = match display.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (display, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(UnitsError::Empty);
    }
    if let Some(bad) = int_part
        .chars()
        .chain(frac_part.chars())
        .find(|c| !c.is_ascii_digit())
    {
        return Err(UnitsError::InvalidDigit(bad));
    }
    if frac_part.len() > decimals as usize {
        return Err(UnitsError::TooManyDecimals(decimals));
    }

    let scale = 10u128
        .checked_pow(decimals as u32)
        .ok_or(UnitsError::Overflow)?;
    let int_value: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| UnitsError::Overflow)?
    };
    let frac_value: u128 = if frac_part.is_empty() {
        0
    } else {
        let padding = 10u128
            .checked_pow((decimals as usize - frac_part.len()) as u32)
            .ok_or(UnitsError::Overflow)?;
        let digits: u128 = frac_part.parse().map_err(|_| UnitsError::Overflow)?;
        digits.checked_mul(padding).ok_or(UnitsError::Overflow)?
    };

    int_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or(UnitsError::Overflow)
}

/// Format base units back into a display amount.
///
/// Trailing fractional zeros are trimmed: `150_000_000_000_000_000` with 18
/// decimals formats as `"0.15"`, a whole amount as just the integer part.
pub fn format_units(amount: u128, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }
    let scale = match 10u128.checked_pow(decimals as u32) {
        Some(scale) => scale,
        // Precision beyond u128 range; show raw base units rather than lie
        None => return amount.to_string(),
    };

    let whole = amount / scale;
    let frac = amount % scale;
    if frac == 0 {
        return whole.to_string();
    }

    let frac_digits = format!("{:0width$}", frac, width = decimals as usize);
    format!("{}.{}", whole, frac_digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_price_with_18_decimals() {
        assert_eq!(parse_units("0.05", 18), Ok(50_000_000_000_000_000));
        assert_eq!(parse_units("1", 18), Ok(1_000_000_000_000_000_000));
        assert_eq!(parse_units("0", 18), Ok(0));
    }

    #[test]
    fn test_parse_with_9_decimals() {
        assert_eq!(parse_units("1.5", 9), Ok(1_500_000_000));
        assert_eq!(parse_units("0.000000001", 9), Ok(1));
    }

    #[test]
    fn test_parse_zero_decimals() {
        assert_eq!(parse_units("42", 0), Ok(42));
        assert_eq!(parse_units("1.5", 0), Err(UnitsError::TooManyDecimals(0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_units("", 18), Err(UnitsError::Empty));
        assert_eq!(parse_units(".", 18), Err(UnitsError::Empty));
        assert_eq!(parse_units("abc", 18), Err(UnitsError::InvalidDigit('a')));
        assert_eq!(parse_units("-1", 18), Err(UnitsError::InvalidDigit('-')));
        assert_eq!(parse_units("1.2.3", 18), Err(UnitsError::InvalidDigit('.')));
    }

    #[test]
    fn test_parse_rejects_excess_precision() {
        assert_eq!(parse_units("0.123", 2), Err(UnitsError::TooManyDecimals(2)));
    }

    #[test]
    fn test_parse_overflow() {
        // 2^128 is ~3.4e38; forty 9s does not fit
        let huge = "9".repeat(40);
        assert_eq!(parse_units(&huge, 0), Err(UnitsError::Overflow));
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(format_units(150_000_000_000_000_000, 18), "0.15");
        assert_eq!(format_units(1_500_000_000, 9), "1.5");
    }

    #[test]
    fn test_format_whole_amounts() {
        assert_eq!(format_units(1_000_000_000_000_000_000, 18), "1");
        assert_eq!(format_units(0, 18), "0");
        assert_eq!(format_units(42, 0), "42");
    }

    #[test]
    fn test_price_scales_with_quantity() {
        // quantity 3 at unit price 0.05, 18 decimals
        let unit = parse_units("0.05", 18).unwrap();
        assert_eq!(format_units(unit * 3, 18), "0.15");
    }
}
