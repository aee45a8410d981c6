//! Expense splitting domain errors

use core_kernel::{ExpenseId, Money, MoneyError};
use thiserror::Error;

/// Errors that can occur in the expense splitting domain
#[derive(Debug, Error)]
pub enum SplitError {
    /// An expense reached the balance engine without anyone to split among
    #[error("Expense {0} has nobody to split among")]
    EmptySplit(ExpenseId),

    /// An expense reached the balance engine with a zero or negative amount
    #[error("Expense {id} has non-positive amount {amount}")]
    NonPositiveAmount { id: ExpenseId, amount: Money },

    /// Input rejected by validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// A participant with the same name (ignoring case) already exists
    #[error("Participant already exists: {0}")]
    DuplicateParticipant(String),

    /// Participant not registered
    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    /// Expense not found
    #[error("Expense not found: {0}")]
    ExpenseNotFound(ExpenseId),

    /// Arithmetic failure
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Snapshot could not be written or restored
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl SplitError {
    /// Creates a Validation error with a message
    pub fn validation(message: impl Into<String>) -> Self {
        SplitError::Validation(message.into())
    }

    /// Returns true for errors caused by caller input rather than state
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SplitError::EmptySplit(_)
                | SplitError::NonPositiveAmount { .. }
                | SplitError::Validation(_)
                | SplitError::DuplicateParticipant(_)
        )
    }
}
