//! Core Kernel - Foundational types shared by the expense splitter crates
//!
//! This crate provides the fundamental building blocks used across the workspace:
//! - Money with exact fixed-point decimal arithmetic
//! - Strongly-typed expense identifiers
//! - Common error types

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, MoneyError};
pub use identifiers::ExpenseId;
pub use error::CoreError;
