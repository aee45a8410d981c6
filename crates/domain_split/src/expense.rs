//! Shared expenses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ExpenseId, Money};
use crate::error::SplitError;

/// A logged expense, split equally among `split_among`
///
/// Expenses are immutable once recorded. The payer does not have to be
/// one of the people splitting the cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Identifier assigned at creation
    pub id: ExpenseId,
    /// What the money was spent on
    pub description: String,
    /// Total amount paid
    pub amount: Money,
    /// Name of the participant who paid
    pub paid_by: String,
    /// Names of the participants sharing the cost
    pub split_among: Vec<String>,
    /// When the expense was recorded
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Records a new expense, assigning a fresh id and the current time
    ///
    /// The request is expected to have passed
    /// [`validate_new_expense`](crate::validation::validate_new_expense).
    pub fn record(new: NewExpense) -> Self {
        Self {
            id: ExpenseId::new(),
            description: new.description,
            amount: new.amount,
            paid_by: new.paid_by,
            split_among: new.split_among,
            date: Utc::now(),
        }
    }

    /// Checks the preconditions the balance engine relies on
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if the amount is zero or negative
    /// - `EmptySplit` if nobody shares the cost
    pub fn check(&self) -> Result<(), SplitError> {
        if !self.amount.is_positive() {
            return Err(SplitError::NonPositiveAmount {
                id: self.id,
                amount: self.amount,
            });
        }
        if self.split_among.is_empty() {
            return Err(SplitError::EmptySplit(self.id));
        }
        Ok(())
    }

    /// Returns each splitter's share in minor units, aligned with `split_among`
    ///
    /// The amount is split into whole cents. The first `cents % n` splitters
    /// each carry one extra cent, so the shares always add up to the amount.
    ///
    /// # Errors
    ///
    /// Fails on the same preconditions as [`Expense::check`], or with
    /// `MoneyError::Overflow` if the amount has no minor unit representation.
    pub fn shares(&self) -> Result<Vec<(&str, i64)>, SplitError> {
        self.check()?;
        let cents = self.amount.to_minor()?;
        let parts = self.split_among.len() as i64;
        let (base, leftover) = (cents / parts, cents % parts);

        Ok(self
            .split_among
            .iter()
            .zip(0..)
            .map(|(name, position)| {
                let extra = i64::from(position < leftover);
                (name.as_str(), base + extra)
            })
            .collect())
    }

    /// Returns true if `name` paid for or shares this expense
    pub fn involves(&self, name: &str) -> bool {
        self.paid_by == name || self.split_among.iter().any(|n| n == name)
    }
}

/// Request to log an expense, before validation and id assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub paid_by: String,
    pub split_among: Vec<String>,
}

impl NewExpense {
    /// Creates a new expense request
    pub fn new<I, S>(
        description: impl Into<String>,
        amount: Money,
        paid_by: impl Into<String>,
        split_among: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: description.into(),
            amount,
            paid_by: paid_by.into(),
            split_among: split_among.into_iter().map(Into::into).collect(),
        }
    }
}
