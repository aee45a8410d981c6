//! Request and response data transfer objects

pub mod amount;
pub mod participant;
pub mod expense;
pub mod balance;

pub use amount::Amount;
