//! Record store port
//!
//! The balance engine only needs a read view of participants and expenses.
//! `ExpenseRepository` adds the mutations the application layer performs so
//! that any store (in-memory, file-backed, database) can sit behind it.
//!
//! ```rust,ignore
//! fn balances(repo: &impl ExpenseRepository) -> Result<BalanceReport, SplitError> {
//!     repo.report()
//! }
//! ```

use core_kernel::ExpenseId;
use crate::error::SplitError;
use crate::expense::{Expense, NewExpense};
use crate::participant::Participant;
use crate::settlement::BalanceReport;
use crate::stats::{summarize, ExpenseSummary};

/// Storage operations for participants and expenses
pub trait ExpenseRepository {
    /// Registered participants, in registration order
    fn participants(&self) -> &[Participant];

    /// Recorded expenses, in recording order
    fn expenses(&self) -> &[Expense];

    /// Validates and registers a participant
    fn add_participant(&mut self, name: &str) -> Result<&Participant, SplitError>;

    /// Removes a participant by exact name; their expenses are kept
    fn remove_participant(&mut self, name: &str) -> Result<Participant, SplitError>;

    /// Validates and records an expense
    fn add_expense(&mut self, new: NewExpense) -> Result<&Expense, SplitError>;

    /// Deletes an expense by id
    fn delete_expense(&mut self, id: ExpenseId) -> Result<Expense, SplitError>;

    /// Removes every expense, returning how many were removed
    fn clear_expenses(&mut self) -> usize;

    /// Computes balances and settlements for the current snapshot
    fn report(&self) -> Result<BalanceReport, SplitError> {
        BalanceReport::compute(self.participants(), self.expenses())
    }

    /// Computes spending statistics for the current snapshot
    fn summary(&self) -> Result<ExpenseSummary, SplitError> {
        summarize(self.participants(), self.expenses())
    }
}
