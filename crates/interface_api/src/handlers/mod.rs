//! Request handlers

pub mod health;
pub mod participants;
pub mod expenses;
pub mod balances;
