//! Net balance computation
//!
//! Folds a list of expenses into each participant's signed net balance.
//! Positive balances are owed money, negative balances owe money.
//!
//! # Ordering
//!
//! Balances iterate in a stable order: registered participants first, in
//! registration order, then any name that only appears in expenses, in the
//! order it is first seen (payer before splitters, expenses in input order).
//! The settlement planner pairs debtors and creditors in this order.
//!
//! # Invariants
//!
//! - Balances are held in whole minor units (cents), so arithmetic is exact
//! - Every expense contributes exactly once
//! - The balances always sum to exactly zero

use indexmap::IndexMap;
use tracing::{debug, warn};

use core_kernel::{Money, MoneyError};
use crate::error::SplitError;
use crate::expense::Expense;
use crate::participant::Participant;

/// Ordered mapping from participant name to net balance in minor units
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balances(IndexMap<String, i64>);

impl Balances {
    /// Creates an empty balance table
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the balance for a name, if present
    pub fn get(&self, name: &str) -> Option<Money> {
        self.minor(name).map(Money::from_minor)
    }

    /// Returns the balance for a name in minor units, if present
    pub fn minor(&self, name: &str) -> Option<i64> {
        self.0.get(name).copied()
    }

    /// Iterates names and balances in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.iter_minor().map(|(name, cents)| (name, Money::from_minor(cents)))
    }

    /// Iterates names and balances in minor units, in order
    pub fn iter_minor(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(name, cents)| (name.as_str(), *cents))
    }

    /// Number of names in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every balance in minor units
    pub fn total_minor(&self) -> i128 {
        self.0.values().map(|&cents| i128::from(cents)).sum()
    }

    /// Number of balances that are not exactly zero
    pub fn nonzero_count(&self) -> usize {
        self.0.values().filter(|&&cents| cents != 0).count()
    }

    /// Returns true if every balance is within tolerance of zero
    pub fn is_settled(&self) -> bool {
        self.iter().all(|(_, balance)| balance.is_settled())
    }

    /// Adds `delta` cents to a name's balance, inserting it at the end if absent
    ///
    /// # Errors
    ///
    /// `MoneyError::Overflow` if the balance would leave the `i64` range. The
    /// table is left unchanged in that case.
    pub fn adjust(&mut self, name: &str, delta: i64) -> Result<(), MoneyError> {
        match self.0.get_mut(name) {
            Some(balance) => {
                *balance = balance.checked_add(delta).ok_or(MoneyError::Overflow)?;
            }
            None => {
                self.0.insert(name.to_string(), delta);
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, i64)> for Balances {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, i64)> for Balances {
    fn from_iter<I: IntoIterator<Item = (&'a str, i64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, cents)| (name.to_string(), cents))
            .collect()
    }
}

/// Balance calculation service
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes net balances for the given participants and expenses
    ///
    /// See [`compute_balances`].
    pub fn calculate(
        &self,
        participants: &[Participant],
        expenses: &[Expense],
    ) -> Result<Balances, SplitError> {
        compute_balances(participants, expenses)
    }
}

/// Computes every participant's net balance
///
/// Each expense credits its payer with the full amount in cents and debits
/// every splitter with their share from [`Expense::shares`]. Names referenced
/// by an expense but missing from `participants` are included with a zero
/// start so no money is dropped.
///
/// # Arguments
///
/// * `participants` - Registered participants, in registration order
/// * `expenses` - Expenses to fold, in any order
///
/// # Errors
///
/// Fails fast on the first expense with an empty split or a non-positive
/// amount, and with `MoneyError::Overflow` if a balance leaves the `i64`
/// range. No partial result is returned.
///
/// # Example
///
/// ```rust
/// use core_kernel::Money;
/// use domain_split::{compute_balances, Expense, NewExpense, Participant};
/// use rust_decimal_macros::dec;
///
/// let participants = vec![Participant::new("A"), Participant::new("B")];
/// let expense = Expense::record(NewExpense::new("Dinner", Money::new(dec!(100)), "A", ["A", "B"]));
///
/// let balances = compute_balances(&participants, &[expense]).unwrap();
/// assert_eq!(balances.get("A"), Some(Money::new(dec!(50))));
/// assert_eq!(balances.get("B"), Some(Money::new(dec!(-50))));
/// ```
pub fn compute_balances(
    participants: &[Participant],
    expenses: &[Expense],
) -> Result<Balances, SplitError> {
    let mut balances: Balances = participants
        .iter()
        .map(|p| (p.name(), 0))
        .collect();
    let registered = balances.len();

    for expense in expenses {
        let shares = expense.shares()?;

        balances.adjust(&expense.paid_by, expense.amount.to_minor()?)?;
        for (name, share) in shares {
            balances.adjust(name, -share)?;
        }
    }

    if balances.len() > registered {
        let orphaned: Vec<&str> = balances.iter().skip(registered).map(|(name, _)| name).collect();
        warn!(?orphaned, "Expenses reference unregistered participants");
    }

    debug!(
        participants = balances.len(),
        expenses = expenses.len(),
        total_minor = balances.total_minor(),
        "Computed balances"
    );

    Ok(balances)
}
