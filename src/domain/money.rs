use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of fractional digits kept for a monetary amount.
pub const MONEY_SCALE: u32 = 2;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("not a plain decimal number")]
    InvalidFormat,
    #[error(transparent)]
    Decimal(#[from] rust_decimal::Error),
    #[error("value cannot be represented with 2 fractional digits")]
    ScaleOverflow,
}

/// A fixed-precision monetary value.
///
/// Wraps `rust_decimal::Decimal` so amounts coming off the wire never pass
/// through floating point. Every value carries exactly [`MONEY_SCALE`]
/// fractional digits; parsed values are rounded half-to-even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::from_parts(0, 0, 0, false, MONEY_SCALE));

    /// Rounds `value` to [`MONEY_SCALE`] digits. Fails when the integer part
    /// leaves no room for the fractional digits.
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        let mut value =
            value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven);
        value.rescale(MONEY_SCALE);
        if value.scale() != MONEY_SCALE {
            return Err(MoneyError::ScaleOverflow);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses a plain decimal string such as `"19.99"` or `"1.5e2"`.
    /// Whitespace, digit separators and locale-specific forms are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = match plain_decimal_exponent(s) {
            None => return Err(MoneyError::InvalidFormat),
            Some(false) => Decimal::from_str(s)?,
            Some(true) => Decimal::from_scientific(s)?,
        };
        Self::new(value)
    }
}

/// Checks `s` against `[+-]?digits[.digits]([eE][+-]?digits)?`.
///
/// Returns `None` when the shape does not match, otherwise whether an
/// exponent is present.
fn plain_decimal_exponent(s: &str) -> Option<bool> {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    if !all_digits(integer) || !all_digits(fraction) {
        return None;
    }
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if digits.is_empty() || !all_digits(digits) {
            return None;
        }
    }
    Some(exponent.is_some())
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_exact_decimal() {
        let money: Money = "19.99".parse().unwrap();
        assert_eq!(money.value(), dec!(19.99));
        assert_eq!(money.to_string(), "19.99");
    }

    #[test]
    fn test_parse_pads_to_scale() {
        let money: Money = "42.5".parse().unwrap();
        assert_eq!(money.value(), dec!(42.50));
        assert_eq!(money.to_string(), "42.50");
        assert_eq!("0".parse::<Money>().unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_parse_rounds_half_to_even() {
        assert_eq!("0.125".parse::<Money>().unwrap().value(), dec!(0.12));
        assert_eq!("0.135".parse::<Money>().unwrap().value(), dec!(0.14));
    }

    #[test]
    fn test_parse_scientific() {
        let money: Money = "1.5e2".parse().unwrap();
        assert_eq!(money.value(), dec!(150));
        assert_eq!(money.to_string(), "150.00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("1e".parse::<Money>().is_err());
        assert!("12,50".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_rejects_digit_separators() {
        assert!(matches!(
            "1_000.00".parse::<Money>(),
            Err(MoneyError::InvalidFormat)
        ));
        assert!(matches!(
            "1_9.9_9".parse::<Money>(),
            Err(MoneyError::InvalidFormat)
        ));
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        assert!(" 19.99".parse::<Money>().is_err());
        assert!("19.99 ".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_rejects_values_without_room_for_cents() {
        assert!(matches!(
            "7922816251426433759354395033.5".parse::<Money>(),
            Err(MoneyError::ScaleOverflow)
        ));
        assert!(matches!(
            "79228162514264337593543950335".parse::<Money>(),
            Err(MoneyError::ScaleOverflow)
        ));
    }

    #[test]
    fn test_largest_amount_keeps_scale() {
        let money: Money = "792281625142643375935439503.35".parse().unwrap();
        assert_eq!(money.value().scale(), MONEY_SCALE);
    }

    #[test]
    fn test_zero_has_money_scale() {
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::default().to_string(), "0.00");
        assert_eq!(Money::ZERO.value(), Decimal::ZERO);
    }
}
