//! In-memory expense book
//!
//! `ExpenseBook` is an explicit store object owned by its caller. It has a
//! plain lifecycle: construct, mutate, read, and optionally snapshot to JSON
//! and restore later.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use core_kernel::ExpenseId;
use crate::error::SplitError;
use crate::expense::{Expense, NewExpense};
use crate::participant::Participant;
use crate::ports::ExpenseRepository;
use crate::validation::{validate_new_expense, validate_participant_name};

/// A group's participants and expenses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBook {
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    /// Creates an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Returns true if `name` is registered (exact match)
    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name() == name)
    }

    /// Serializes the book to a JSON snapshot
    pub fn to_json(&self) -> Result<String, SplitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restores a book from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self, SplitError> {
        let book: ExpenseBook = serde_json::from_str(json)?;
        info!(
            participants = book.participants.len(),
            expenses = book.expenses.len(),
            "Restored expense book"
        );
        Ok(book)
    }
}

impl ExpenseRepository for ExpenseBook {
    fn participants(&self) -> &[Participant] {
        &self.participants
    }

    fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    fn add_participant(&mut self, name: &str) -> Result<&Participant, SplitError> {
        let name = validate_participant_name(name)?;

        if self.participants.iter().any(|p| p.matches_ignore_case(&name)) {
            warn!(%name, "Duplicate participant");
            return Err(SplitError::DuplicateParticipant(name));
        }

        info!(%name, "Participant added");
        self.participants.push(Participant::new(name));
        Ok(&self.participants[self.participants.len() - 1])
    }

    fn remove_participant(&mut self, name: &str) -> Result<Participant, SplitError> {
        let index = self
            .participants
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| SplitError::ParticipantNotFound(name.to_string()))?;

        let removed = self.participants.remove(index);
        let orphaned = self.expenses.iter().filter(|e| e.involves(name)).count();
        info!(%name, orphaned_expenses = orphaned, "Participant removed");
        Ok(removed)
    }

    fn add_expense(&mut self, new: NewExpense) -> Result<&Expense, SplitError> {
        let expense = Expense::record(validate_new_expense(new)?);

        info!(
            id = %expense.id,
            amount = %expense.amount,
            paid_by = %expense.paid_by,
            splitters = expense.split_among.len(),
            "Expense added"
        );
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    fn delete_expense(&mut self, id: ExpenseId) -> Result<Expense, SplitError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(SplitError::ExpenseNotFound(id))?;

        info!(%id, "Expense deleted");
        Ok(self.expenses.remove(index))
    }

    fn clear_expenses(&mut self) -> usize {
        let removed = self.expenses.len();
        self.expenses.clear();
        info!(removed, "Expenses cleared");
        removed
    }
}
