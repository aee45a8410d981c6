//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random groups and balances
//! that satisfy the engine's preconditions.

use domain_split::{Balances, Expense, Participant};
use proptest::prelude::*;

use crate::builders::ExpenseBuilder;

/// Names used by generated groups
pub const ROSTER: [&str; 6] = ["Ana", "Ben", "Cy", "Dee", "Eli", "Fay"];

/// Picks the members selected by a non-zero bit mask
fn members(mask: u32, n: usize) -> Vec<&'static str> {
    ROSTER[..n]
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, name)| *name)
        .collect()
}

fn participants(n: usize) -> Vec<Participant> {
    ROSTER[..n].iter().map(|n| Participant::new(*n)).collect()
}

/// Strategy for generating positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..10_000_000i64
}

/// Strategy for a group of 1 to 6 participants with up to 30 expenses
///
/// Amounts are arbitrary cents, so splits frequently leave leftover cents.
pub fn group_strategy() -> impl Strategy<Value = (Vec<Participant>, Vec<Expense>)> {
    (1usize..=ROSTER.len()).prop_flat_map(|n| {
        let expense = (positive_amount_minor_strategy(), 0..n, 1u32..(1u32 << n)).prop_map(
            move |(cents, payer, mask)| {
                ExpenseBuilder::new()
                    .with_minor(cents)
                    .paid_by(ROSTER[payer])
                    .split_among(&members(mask, n))
                    .build()
            },
        );
        (Just(participants(n)), prop::collection::vec(expense, 0..30))
    })
}

/// Strategy for a balance table in arbitrary cents that sums to zero
pub fn balances_strategy() -> impl Strategy<Value = Balances> {
    prop::collection::vec(-1_000_000i64..1_000_000i64, 1..ROSTER.len()).prop_map(|values| {
        let last = -values.iter().sum::<i64>();
        values
            .into_iter()
            .chain(std::iter::once(last))
            .enumerate()
            .map(|(i, cents)| (ROSTER[i], cents))
            .collect()
    })
}
