//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for exact fixed-point calculations without
//! floating-point drift. All groups share a single implicit currency.
//!
//! An amount keeps whatever precision it was created with. Ledger arithmetic
//! converts it to whole minor units (cents) with [`Money::to_minor`] and
//! works on integers from there, so group totals stay exact.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount
///
/// Money wraps a `Decimal` and never rounds implicitly. Snapshots serialize
/// it as a decimal string so no precision is lost on restore.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Number of decimal places used for display and reporting
    pub const DECIMAL_PLACES: u32 = 2;

    /// The zero amount
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Magnitude at or below which a balance counts as settled
    pub const TOLERANCE: Money = Money(dec!(0.01));

    /// Creates a new Money value
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates Money from an integer amount in minor units (cents)
    pub fn from_minor(minor_units: impl Into<Decimal>) -> Self {
        Self(minor_units.into() / Decimal::ONE_HUNDRED)
    }

    /// Converts to whole minor units, rounding to currency precision first
    pub fn to_minor(&self) -> Result<i64, MoneyError> {
        self.round_to_currency()
            .0
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|minor| minor.to_i64())
            .ok_or(MoneyError::Overflow)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns true if the magnitude is within [`Money::TOLERANCE`]
    pub fn is_settled(&self) -> bool {
        self.abs() <= Self::TOLERANCE
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds to currency precision (two decimal places)
    pub fn round_to_currency(&self) -> Self {
        Self(self.0.round_dp(Self::DECIMAL_PLACES))
    }

    /// Checked addition that reports overflow instead of panicking
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.0
            .checked_div(divisor)
            .map(Self)
            .ok_or(MoneyError::Overflow)
    }

    /// Returns one of `parts` equal shares of this amount, unrounded
    pub fn share(&self, parts: usize) -> Result<Self, MoneyError> {
        self.divide(Decimal::from(parts))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.dp$}",
            self.round_to_currency().0,
            dp = Self::DECIMAL_PLACES as usize
        )
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
