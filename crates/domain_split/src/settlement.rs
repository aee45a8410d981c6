//! Settlement planning
//!
//! Turns a balance table into a short list of pairwise transfers that
//! brings every balance to zero.
//!
//! # Algorithm
//!
//! Greedy two-cursor matching over debtors and creditors, both kept in
//! balance-table order (never sorted by amount). Each step moves the smaller
//! of the two outstanding amounts, then advances whichever cursor has reached
//! zero. Balances are whole cents, so nothing smaller than a cent exists to
//! absorb and every nonzero balance takes part.
//!
//! Because pairing follows table order, different orderings of the same
//! balances can produce different (equally short) plans. Only the zeroed
//! end state is guaranteed, and the table order makes the output
//! deterministic.
//!
//! # Guarantees
//!
//! - Applying the plan brings every balance to exactly zero
//! - Every amount is strictly positive and a whole number of cents
//! - Nobody pays themselves
//! - At most `debtors + creditors - 1` transfers

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Money, MoneyError};
use crate::balance::{compute_balances, Balances};
use crate::error::SplitError;
use crate::expense::Expense;
use crate::participant::Participant;

/// A transfer from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Who pays
    pub from: String,
    /// Who receives
    pub to: String,
    /// Amount at currency precision
    pub amount: Money,
}

/// Outstanding magnitude in cents for one side of the matching
#[derive(Debug)]
struct Outstanding<'a> {
    person: &'a str,
    cents: u64,
}

/// Settlement planning service
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Plans settlements for a balance table
    ///
    /// See [`plan_settlements`].
    pub fn plan(&self, balances: &Balances) -> Vec<Settlement> {
        plan_settlements(balances)
    }
}

/// Plans the transfers that settle `balances`
///
/// # Example
///
/// ```rust
/// use core_kernel::Money;
/// use domain_split::{plan_settlements, Balances};
/// use rust_decimal_macros::dec;
///
/// let balances: Balances = [("A", 6000), ("B", -3000), ("C", -3000)].into_iter().collect();
///
/// let plan = plan_settlements(&balances);
/// assert_eq!(plan.len(), 2);
/// assert_eq!((plan[0].from.as_str(), plan[0].to.as_str()), ("B", "A"));
/// assert_eq!(plan[1].amount, Money::new(dec!(30)));
/// ```
pub fn plan_settlements(balances: &Balances) -> Vec<Settlement> {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for (person, cents) in balances.iter_minor() {
        let outstanding = Outstanding { person, cents: cents.unsigned_abs() };
        if cents < 0 {
            debtors.push(outstanding);
        } else if cents > 0 {
            creditors.push(outstanding);
        }
    }

    if debtors.is_empty() || creditors.is_empty() {
        debug!("Balances already settled");
        return Vec::new();
    }

    let mut settlements = Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];

        let settle = debtor.cents.min(creditor.cents);

        settlements.push(Settlement {
            from: debtor.person.to_string(),
            to: creditor.person.to_string(),
            amount: Money::from_minor(settle),
        });

        debtor.cents -= settle;
        creditor.cents -= settle;

        if debtor.cents == 0 {
            i += 1;
        }
        if creditor.cents == 0 {
            j += 1;
        }
    }

    debug!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        transfers = settlements.len(),
        "Planned settlements"
    );

    settlements
}

/// Applies settlements to a balance table
///
/// The payer's balance rises by the amount and the receiver's falls by it.
/// Names missing from the table are appended.
///
/// # Errors
///
/// `MoneyError::Overflow` if an amount or an adjusted balance has no `i64`
/// minor unit representation.
pub fn apply_settlements(
    balances: &Balances,
    settlements: &[Settlement],
) -> Result<Balances, SplitError> {
    let mut adjusted = balances.clone();
    for settlement in settlements {
        let cents = settlement.amount.to_minor()?;
        adjusted.adjust(&settlement.from, cents)?;
        adjusted.adjust(&settlement.to, cents.checked_neg().ok_or(MoneyError::Overflow)?)?;
    }
    Ok(adjusted)
}

/// Balances together with the plan that settles them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    pub balances: Balances,
    pub settlements: Vec<Settlement>,
}

impl BalanceReport {
    /// Runs balance computation followed by settlement planning
    pub fn compute(
        participants: &[Participant],
        expenses: &[Expense],
    ) -> Result<Self, SplitError> {
        let balances = compute_balances(participants, expenses)?;
        let settlements = plan_settlements(&balances);
        Ok(Self { balances, settlements })
    }
}
