//! Input validation rules
//!
//! These rules run before anything reaches the store, so the balance engine
//! only ever sees well-formed records.
//!
//! # Participant names
//! - Sanitized (trimmed, `<` and `>` removed)
//! - Between 2 and 50 characters
//!
//! # New expenses
//! - Description required, at most 100 characters after sanitizing
//! - Amount positive and no more than 1,000,000
//! - Payer required
//! - At least one person to split between; repeated names collapse

use rust_decimal_macros::dec;
use tracing::warn;

use core_kernel::Money;
use crate::error::SplitError;
use crate::expense::NewExpense;

/// Longest input kept by [`sanitize_input`]
pub const MAX_INPUT_CHARS: usize = 200;
/// Shortest accepted participant name
pub const MIN_NAME_CHARS: usize = 2;
/// Longest accepted participant name
pub const MAX_NAME_CHARS: usize = 50;
/// Longest accepted expense description
pub const MAX_DESCRIPTION_CHARS: usize = 100;
/// Largest accepted expense amount
pub const MAX_EXPENSE_AMOUNT: Money = Money::new(dec!(1000000));

/// Trims input, strips angle brackets and caps the length
pub fn sanitize_input(input: &str) -> String {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .take(MAX_INPUT_CHARS)
        .collect();
    cleaned.trim().to_string()
}

/// Validates and sanitizes a participant name
///
/// # Returns
///
/// The sanitized name to register
///
/// # Errors
///
/// Returns `Validation` if the name is empty, too short or too long
pub fn validate_participant_name(raw: &str) -> Result<String, SplitError> {
    let name = sanitize_input(raw);
    let len = name.chars().count();

    let problem = if len == 0 {
        Some("Name cannot be empty")
    } else if len < MIN_NAME_CHARS {
        Some("Name must be at least 2 characters")
    } else if len > MAX_NAME_CHARS {
        Some("Name must be at most 50 characters")
    } else {
        None
    };

    match problem {
        Some(message) => {
            warn!(name = %raw, reason = message, "Rejected participant name");
            Err(SplitError::validation(message))
        }
        None => Ok(name),
    }
}

/// Validates and normalizes a new expense request
///
/// The description is sanitized, the amount is rounded to whole cents, names
/// are trimmed, and repeated or blank splitter names are dropped keeping
/// first occurrence order.
///
/// # Errors
///
/// Returns `Validation` describing the first rule the request breaks
pub fn validate_new_expense(new: NewExpense) -> Result<NewExpense, SplitError> {
    let description = sanitize_input(&new.description);
    let amount = new.amount.round_to_currency();
    let paid_by = new.paid_by.trim().to_string();

    let mut split_among: Vec<String> = Vec::with_capacity(new.split_among.len());
    for name in &new.split_among {
        let name = name.trim();
        if !name.is_empty() && !split_among.iter().any(|n| n == name) {
            split_among.push(name.to_string());
        }
    }

    let problem = if description.is_empty() {
        Some("Description is required")
    } else if description.chars().count() > MAX_DESCRIPTION_CHARS {
        Some("Description must be at most 100 characters")
    } else if !amount.is_positive() {
        Some("Amount must be a positive number")
    } else if amount > MAX_EXPENSE_AMOUNT {
        Some("Amount is too large")
    } else if paid_by.is_empty() {
        Some("Payer is required")
    } else if split_among.is_empty() {
        Some("Must select at least one person to split between")
    } else {
        None
    };

    if let Some(message) = problem {
        warn!(description = %new.description, reason = message, "Rejected expense");
        return Err(SplitError::validation(message));
    }

    Ok(NewExpense {
        description,
        amount,
        paid_by,
        split_among,
    })
}
