//! Session-scoped discount percentage.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::Money;

/// Errors produced when coercing raw input into a [`DiscountPercent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscountError {
    /// The input could not be parsed as a decimal number.
    #[error("not a valid percentage: {0:?}")]
    Invalid(String),
}

/// A discount percentage applied uniformly to a cost total.
///
/// Values of 0-100 are expected but not enforced; the value is coerced to a
/// decimal and applied as-is. Lives only in the session, never in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountPercent(Decimal);

impl DiscountPercent {
    /// No discount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a discount from a decimal percentage.
    #[must_use]
    pub const fn new(percent: Decimal) -> Self {
        Self(percent)
    }

    /// Coerce a raw form value into a percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::Invalid`] when the input is not a decimal
    /// number. Out-of-range values are accepted.
    pub fn parse(raw: &str) -> Result<Self, DiscountError> {
        Decimal::from_str(raw.trim())
            .map(Self)
            .map_err(|_| DiscountError::Invalid(raw.to_owned()))
    }

    /// Get the underlying percentage value.
    #[must_use]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Whether no discount is applied.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Apply the discount to a total: `total * (1 - percent / 100)`.
    #[must_use]
    pub fn apply(&self, total: Money) -> Money {
        let factor = Decimal::ONE - self.0 / Decimal::ONE_HUNDRED;
        Money::new(total.amount() * factor)
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn money(raw: &str) -> Money {
        Money::parse(raw).unwrap()
    }

    #[test]
    fn parse_accepts_integers_and_decimals() {
        assert_eq!(
            DiscountPercent::parse("10").unwrap().percent(),
            Decimal::from(10)
        );
        assert_eq!(
            DiscountPercent::parse(" 2.5 ").unwrap().percent(),
            Decimal::from_str("2.5").unwrap()
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            DiscountPercent::parse("ten percent"),
            Err(DiscountError::Invalid(_))
        ));
    }

    #[test]
    fn parse_accepts_out_of_range() {
        // 0-100 is expected, not enforced
        assert!(DiscountPercent::parse("150").is_ok());
        assert!(DiscountPercent::parse("-5").is_ok());
    }

    #[test]
    fn apply_ten_percent() {
        let discount = DiscountPercent::parse("10").unwrap();
        assert_eq!(discount.apply(money("19.99")), money("17.99"));
    }

    #[test]
    fn apply_zero_keeps_total() {
        assert_eq!(DiscountPercent::ZERO.apply(money("42.00")), money("42.00"));
    }

    #[test]
    fn apply_full_discount_is_zero() {
        let discount = DiscountPercent::parse("100").unwrap();
        assert_eq!(discount.apply(money("19.99")), Money::ZERO);
    }

    #[test]
    fn apply_rounds_to_currency_precision() {
        // 33.33% of 10.00 leaves 6.667, rounded to 6.67
        let discount = DiscountPercent::parse("33.33").unwrap();
        assert_eq!(discount.apply(money("10.00")), money("6.67"));
    }
}
