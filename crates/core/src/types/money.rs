//! Fixed-point money representation using decimal arithmetic.
//!
//! Costs are stored and summed as [`rust_decimal::Decimal`] values rounded to
//! two decimal places. Binary floating point is never used for currency, so
//! repeated reads, writes, and sums cannot accumulate rounding drift.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of decimal places carried by every money value.
const SCALE: u32 = 2;

/// Errors produced when coercing raw input into a [`Money`] value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The input could not be parsed as a decimal number.
    #[error("not a valid amount: {0:?}")]
    Invalid(String),

    /// The input parsed, but the amount is negative.
    #[error("amount must not be negative: {0}")]
    Negative(Decimal),
}

/// A non-drifting currency amount with two decimal places.
///
/// Construction always normalizes to two decimal places using
/// away-from-zero midpoint rounding (standard currency rounding).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a money value from a decimal, rounding to two decimal places.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Coerce a raw form value into a non-negative money amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Invalid`] when the input is not a decimal number
    /// and [`MoneyError::Negative`] when it parses below zero.
    pub fn parse(raw: &str) -> Result<Self, MoneyError> {
        let amount = Decimal::from_str(raw.trim())
            .map_err(|_| MoneyError::Invalid(raw.to_owned()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self::new(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(feature = "postgres")]
impl ::sqlx::Type<::sqlx::Postgres> for Money {
    fn type_info() -> ::sqlx::postgres::PgTypeInfo {
        <Decimal as ::sqlx::Type<::sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for Money {
    fn decode(
        value: ::sqlx::postgres::PgValueRef<'r>,
    ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
        let amount = <Decimal as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
        Ok(Self::new(amount))
    }
}

#[cfg(feature = "postgres")]
impl ::sqlx::Encode<'_, ::sqlx::Postgres> for Money {
    fn encode_by_ref(
        &self,
        buf: &mut ::sqlx::postgres::PgArgumentBuffer,
    ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
        <Decimal as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_amount() {
        let money = Money::parse("19.99").unwrap();
        assert_eq!(money.to_string(), "19.99");
    }

    #[test]
    fn parse_trims_whitespace() {
        let money = Money::parse("  5 ").unwrap();
        assert_eq!(money.amount(), Decimal::from(5));
    }

    #[test]
    fn parse_rounds_to_two_places() {
        let money = Money::parse("10.005").unwrap();
        assert_eq!(money.to_string(), "10.01");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Money::parse("nineteen"),
            Err(MoneyError::Invalid(_))
        ));
        assert!(matches!(Money::parse(""), Err(MoneyError::Invalid(_))));
    }

    #[test]
    fn parse_rejects_negative() {
        assert!(matches!(
            Money::parse("-0.01"),
            Err(MoneyError::Negative(_))
        ));
    }

    #[test]
    fn parse_accepts_zero() {
        assert_eq!(Money::parse("0").unwrap(), Money::ZERO);
        assert_eq!(Money::parse("-0").unwrap(), Money::ZERO);
    }

    #[test]
    fn sum_is_exact() {
        // 0.1 + 0.2 drifts under binary floats, never under Decimal
        let total: Money = ["0.10", "0.20", "0.30"]
            .iter()
            .map(|raw| Money::parse(raw).unwrap())
            .sum();
        assert_eq!(total, Money::parse("0.60").unwrap());
    }

    #[test]
    fn serde_round_trips_through_json() {
        let money = Money::parse("19.99").unwrap();
        let json = serde_json::to_string(&money).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
    }
}
