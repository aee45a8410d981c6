//! Expense DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_split::{Expense, NewExpense};

use super::Amount;

/// Body of `POST /api/expenses`
///
/// Missing fields fall back to empty values so validation reports them.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub description: String,
    pub amount: Money,
    pub paid_by: String,
    pub split_among: Vec<String>,
}

impl From<CreateExpenseRequest> for NewExpense {
    fn from(request: CreateExpenseRequest) -> Self {
        NewExpense {
            description: request.description,
            amount: request.amount,
            paid_by: request.paid_by,
            split_among: request.split_among,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub id: String,
    pub description: String,
    pub amount: Amount,
    pub paid_by: String,
    pub split_among: Vec<String>,
    pub date: DateTime<Utc>,
}

impl From<&Expense> for ExpenseResponse {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_string(),
            description: expense.description.clone(),
            amount: expense.amount.into(),
            paid_by: expense.paid_by.clone(),
            split_among: expense.split_among.clone(),
            date: expense.date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExpenseCreatedResponse {
    pub expense: ExpenseResponse,
}

#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub expenses: Vec<ExpenseResponse>,
    pub participants: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
