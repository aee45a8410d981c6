//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common groups and amounts.
//! These fixtures are consistent and predictable for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::Money;
use domain_split::{Expense, Participant};
use rust_decimal_macros::dec;

use crate::builders::ExpenseBuilder;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A round amount that splits evenly two ways
    pub fn hundred() -> Money {
        Money::new(dec!(100.00))
    }

    /// An amount that splits evenly three ways
    pub fn ninety() -> Money {
        Money::new(dec!(90.00))
    }

    /// An amount that does not split evenly three ways
    pub fn ten() -> Money {
        Money::new(dec!(10.00))
    }

    /// One cent, the settled tolerance
    pub fn one_cent() -> Money {
        Money::from_minor(1)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard recording timestamp (Mar 1, 2024)
    pub fn recorded_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }
}

/// Fixture for whole groups
pub struct GroupFixtures;

impl GroupFixtures {
    /// Builds participants from names
    pub fn participants(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|n| Participant::new(*n)).collect()
    }

    /// Two people, one shared 100 bill paid by A
    pub fn pair() -> (Vec<Participant>, Vec<Expense>) {
        let expenses = vec![ExpenseBuilder::new()
            .with_amount(MoneyFixtures::hundred())
            .paid_by("A")
            .split_among(&["A", "B"])
            .build()];
        (Self::participants(&["A", "B"]), expenses)
    }

    /// Three people, one 90 bill paid by A split three ways
    pub fn trio() -> (Vec<Participant>, Vec<Expense>) {
        let expenses = vec![ExpenseBuilder::new()
            .with_amount(MoneyFixtures::ninety())
            .paid_by("A")
            .split_among(&["A", "B", "C"])
            .build()];
        (Self::participants(&["A", "B", "C"]), expenses)
    }

    /// Two expenses between A and B that cancel exactly
    pub fn cancelling_pair() -> (Vec<Participant>, Vec<Expense>) {
        let expenses = vec![
            ExpenseBuilder::new()
                .with_description("X")
                .with_amount(Money::new(dec!(20)))
                .paid_by("A")
                .split_among(&["A", "B"])
                .build(),
            ExpenseBuilder::new()
                .with_description("Y")
                .with_amount(Money::new(dec!(20)))
                .paid_by("B")
                .split_among(&["A", "B"])
                .build(),
        ];
        (Self::participants(&["A", "B"]), expenses)
    }

    /// A weekend trip with four people and mixed splits
    pub fn weekend_trip() -> (Vec<Participant>, Vec<Expense>) {
        let people = ["Ana", "Ben", "Cy", "Dee"];
        let expenses = vec![
            ExpenseBuilder::new()
                .with_description("Cabin")
                .with_amount(Money::new(dec!(400)))
                .paid_by("Ana")
                .split_among(&people)
                .build(),
            ExpenseBuilder::new()
                .with_description("Groceries")
                .with_amount(Money::new(dec!(85.50)))
                .paid_by("Ben")
                .split_among(&people)
                .build(),
            ExpenseBuilder::new()
                .with_description("Fuel")
                .with_amount(Money::new(dec!(60)))
                .paid_by("Cy")
                .split_among(&["Ana", "Cy"])
                .build(),
            ExpenseBuilder::new()
                .with_description("Boat rental")
                .with_amount(Money::new(dec!(100)))
                .paid_by("Dee")
                .split_among(&["Ben", "Cy", "Dee"])
                .build(),
        ];
        (Self::participants(&people), expenses)
    }
}
