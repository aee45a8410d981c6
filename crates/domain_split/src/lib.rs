//! Expense Splitting Domain
//!
//! This crate implements the balance and settlement engine for groups that
//! share costs, along with the records it consumes.
//!
//! # Key Concepts
//!
//! - **Participant**: a group member, keyed by display name
//! - **Expense**: an amount paid by one participant and split equally among a
//!   set of participants
//! - **Balance**: a participant's signed net position; positive means they
//!   are owed money
//! - **Settlement**: a transfer from a debtor to a creditor
//!
//! # Pipeline
//!
//! ```text
//! participants + expenses ──► compute_balances ──► plan_settlements
//!                                  (Balances)        (Vec<Settlement>)
//! ```
//!
//! Both steps are pure functions of their inputs. Balances are whole cents,
//! so applying the planned transfers brings every balance to exactly zero.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::Money;
//! use domain_split::{ExpenseBook, ExpenseRepository, NewExpense};
//! use rust_decimal_macros::dec;
//!
//! let mut book = ExpenseBook::new();
//! book.add_participant("Ana").unwrap();
//! book.add_participant("Ben").unwrap();
//! book.add_expense(NewExpense::new("Hotel", Money::new(dec!(100)), "Ana", ["Ana", "Ben"])).unwrap();
//!
//! let report = book.report().unwrap();
//! assert_eq!(report.settlements.len(), 1);
//! assert_eq!(report.settlements[0].from, "Ben");
//! ```

pub mod participant;
pub mod expense;
pub mod validation;
pub mod balance;
pub mod settlement;
pub mod stats;
pub mod ports;
pub mod book;
pub mod error;

pub use participant::Participant;
pub use expense::{Expense, NewExpense};
pub use balance::{compute_balances, BalanceCalculator, Balances};
pub use settlement::{apply_settlements, plan_settlements, BalanceReport, Settlement, SettlementPlanner};
pub use stats::{summarize, ExpenseSummary, ParticipantStats};
pub use ports::ExpenseRepository;
pub use book::ExpenseBook;
pub use error::SplitError;
