//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! expense splitter test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built groups and amounts
//! - `builders`: Builder patterns for expenses and books
//! - `assertions`: Assertion helpers for balances and settlement plans
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
