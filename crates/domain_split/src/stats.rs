//! Expense statistics

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use core_kernel::{ExpenseId, Money, MoneyError};
use crate::error::SplitError;
use crate::expense::Expense;
use crate::participant::Participant;

/// How much a participant paid, how much they owe, and the difference
///
/// `paid` and `owes` are counted in whole cents with the same allocation
/// the balance engine uses, so `balance` always matches the balance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub paid: Money,
    pub owes: Money,
    pub balance: Money,
}

/// Summary of a group's spending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: Money,
    pub average: Money,
    pub highest: Option<ExpenseId>,
    pub by_payer: IndexMap<String, Money>,
    pub participants: IndexMap<String, ParticipantStats>,
}

/// Sum of all expense amounts
pub fn total_expenses(expenses: &[Expense]) -> Result<Money, MoneyError> {
    expenses
        .iter()
        .try_fold(Money::ZERO, |total, e| total.checked_add(&e.amount))
}

/// Mean expense amount, zero when there are no expenses
pub fn average_expense(expenses: &[Expense]) -> Result<Money, SplitError> {
    if expenses.is_empty() {
        return Ok(Money::ZERO);
    }
    Ok(total_expenses(expenses)?.share(expenses.len())?)
}

/// The largest expense; the earliest one wins a tie
pub fn highest_expense(expenses: &[Expense]) -> Option<&Expense> {
    expenses
        .iter()
        .reduce(|max, e| if e.amount > max.amount { e } else { max })
}

/// Total paid per payer, in first-seen order
pub fn expenses_by_payer(expenses: &[Expense]) -> Result<IndexMap<String, Money>, MoneyError> {
    let mut by_payer: IndexMap<String, Money> = IndexMap::new();
    for expense in expenses {
        let paid = by_payer.entry(expense.paid_by.clone()).or_default();
        *paid = paid.checked_add(&expense.amount)?;
    }
    Ok(by_payer)
}

/// Paid, owed and net amount for each registered participant
pub fn participant_stats(
    participants: &[Participant],
    expenses: &[Expense],
) -> Result<IndexMap<String, ParticipantStats>, SplitError> {
    let mut stats = IndexMap::with_capacity(participants.len());

    for participant in participants {
        let name = participant.name();
        let mut paid: i64 = 0;
        let mut owes: i64 = 0;

        for expense in expenses.iter().filter(|e| e.involves(name)) {
            if expense.paid_by == name {
                paid = paid.checked_add(expense.amount.to_minor()?).ok_or(MoneyError::Overflow)?;
            }
            for (_, share) in expense.shares()?.into_iter().filter(|(n, _)| *n == name) {
                owes = owes.checked_add(share).ok_or(MoneyError::Overflow)?;
            }
        }
        let balance = paid.checked_sub(owes).ok_or(MoneyError::Overflow)?;

        stats.insert(
            name.to_string(),
            ParticipantStats {
                paid: Money::from_minor(paid),
                owes: Money::from_minor(owes),
                balance: Money::from_minor(balance),
            },
        );
    }

    Ok(stats)
}

/// Builds the full summary for a group
pub fn summarize(
    participants: &[Participant],
    expenses: &[Expense],
) -> Result<ExpenseSummary, SplitError> {
    Ok(ExpenseSummary {
        count: expenses.len(),
        total: total_expenses(expenses)?,
        average: average_expense(expenses)?,
        highest: highest_expense(expenses).map(|e| e.id),
        by_payer: expenses_by_payer(expenses)?,
        participants: participant_stats(participants, expenses)?,
    })
}
