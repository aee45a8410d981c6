//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, Utc};
use core_kernel::{ExpenseId, Money};
use domain_split::{Expense, ExpenseBook, ExpenseRepository, NewExpense};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for constructing test expenses
///
/// `build` bypasses validation so tests can also construct records the
/// engine must reject.
pub struct ExpenseBuilder {
    id: ExpenseId,
    description: String,
    amount: Money,
    paid_by: String,
    split_among: Vec<String>,
    date: DateTime<Utc>,
}

impl Default for ExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ExpenseId::new(),
            description: "Dinner".to_string(),
            amount: MoneyFixtures::hundred(),
            paid_by: "A".to_string(),
            split_among: vec!["A".to_string(), "B".to_string()],
            date: TemporalFixtures::recorded_at(),
        }
    }

    /// Sets the expense ID
    pub fn with_id(mut self, id: ExpenseId) -> Self {
        self.id = id;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the amount from minor units (cents)
    pub fn with_minor(mut self, cents: i64) -> Self {
        self.amount = Money::from_minor(cents);
        self
    }

    /// Sets the payer
    pub fn paid_by(mut self, name: impl Into<String>) -> Self {
        self.paid_by = name.into();
        self
    }

    /// Sets the people splitting the cost
    pub fn split_among(mut self, names: &[&str]) -> Self {
        self.split_among = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Sets the recording date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds the expense record
    pub fn build(self) -> Expense {
        Expense {
            id: self.id,
            description: self.description,
            amount: self.amount,
            paid_by: self.paid_by,
            split_among: self.split_among,
            date: self.date,
        }
    }

    /// Builds an unvalidated request instead of a record
    pub fn build_request(self) -> NewExpense {
        NewExpense {
            description: self.description,
            amount: self.amount,
            paid_by: self.paid_by,
            split_among: self.split_among,
        }
    }
}

/// Builder for a populated expense book
#[derive(Default)]
pub struct TestBookBuilder {
    participants: Vec<String>,
    expenses: Vec<NewExpense>,
}

impl TestBookBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds participants by name
    pub fn with_participants(mut self, names: &[&str]) -> Self {
        self.participants.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Adds an expense request
    pub fn with_expense(mut self, expense: NewExpense) -> Self {
        self.expenses.push(expense);
        self
    }

    /// Builds the book through the repository API
    ///
    /// # Panics
    ///
    /// Panics if any participant or expense fails validation
    pub fn build(self) -> ExpenseBook {
        let mut book = ExpenseBook::new();
        for name in &self.participants {
            book.add_participant(name)
                .unwrap_or_else(|e| panic!("Failed to add participant {name}: {e}"));
        }
        for expense in self.expenses {
            book.add_expense(expense)
                .unwrap_or_else(|e| panic!("Failed to add expense: {e}"));
        }
        book
    }
}
