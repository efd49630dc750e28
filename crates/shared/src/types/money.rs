//! Money kernel: whole-đồng amounts and decimal rates.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Both types wrap `rust_decimal::Decimal` for arbitrary precision.
//!
//! Rounding policy:
//! - Every monetary output is a whole đồng (the currency has no subunit)
//! - Ties round away from zero (round-half-up)
//! - Intermediate products and sums stay as raw `Decimal` and are rounded once,
//!   at the end, through [`Money::round`]

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing money kernel values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Money amounts must be whole đồng.
    #[error("Money amount must be a whole number of dong, got {0}")]
    Fractional(Decimal),

    /// Rates cannot be negative.
    #[error("Rate cannot be negative, got {0}")]
    NegativeRate(Decimal),
}

/// A monetary amount in Vietnamese đồng.
///
/// The wrapped value is always integral. Values are produced either from
/// whole-đồng inputs or by rounding a raw `Decimal` result with
/// [`Money::round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero đồng.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a whole number of đồng.
    #[must_use]
    pub fn from_dong(dong: i64) -> Self {
        Self(Decimal::new(dong, 0))
    }

    /// Rounds a raw decimal result to whole đồng, ties away from zero.
    ///
    /// This is the single terminal rounding step of every calculation.
    #[must_use]
    pub fn round(value: Decimal) -> Self {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            Self::ZERO
        } else {
            Self(rounded)
        }
    }

    /// Returns the amount as a raw decimal for further exact arithmetic.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the amount floored at zero.
    #[must_use]
    pub fn clamp_zero(self) -> Self {
        self.max(Self::ZERO)
    }

    /// Applies a rate without rounding.
    ///
    /// The result is a raw decimal; callers round it once they are done.
    #[must_use]
    pub fn times(self, rate: Rate) -> Decimal {
        self.0 * rate.fraction()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.fract().is_zero() {
            Ok(Self::round(value))
        } else {
            Err(MoneyError::Fractional(value))
        }
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

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::round(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::round(-self.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self::round(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.abs().trunc().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.is_negative() {
            write!(f, "-{grouped} ₫")
        } else {
            write!(f, "{grouped} ₫")
        }
    }
}

/// A non-negative decimal rate expressed as a fraction (`0.08` is 8%).
///
/// Used for contribution rates, tax rates, overtime multipliers and
/// deduction ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rate(Decimal);

impl Rate {
    /// The zero rate.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The identity rate (100%).
    pub const ONE: Self = Self(Decimal::ONE);

    /// Creates a rate from a fraction.
    pub fn new(fraction: Decimal) -> Result<Self, MoneyError> {
        if fraction.is_sign_negative() && !fraction.is_zero() {
            return Err(MoneyError::NegativeRate(fraction));
        }
        Ok(Self(fraction))
    }

    /// Creates a rate from a percentage (`8` becomes `0.08`).
    pub fn from_percent(percent: Decimal) -> Result<Self, MoneyError> {
        Self::new(percent / Decimal::ONE_HUNDRED)
    }

    /// Returns the rate as a fraction.
    #[must_use]
    pub const fn fraction(self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage.
    #[must_use]
    pub fn as_percent(self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rate> for Decimal {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}

impl Add for Rate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}
