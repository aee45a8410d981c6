//! Expense handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use core_kernel::ExpenseId;
use domain_split::ExpenseRepository;

use crate::{AppState, error::ApiError};
use crate::dto::expense::*;
use crate::dto::participant::ParticipantsResponse;

/// Returns every expense and participant
pub async fn get_data(State(state): State<AppState>) -> Json<DataResponse> {
    let book = state.book.read().await;

    Json(DataResponse {
        expenses: book.expenses().iter().map(ExpenseResponse::from).collect(),
        participants: ParticipantsResponse::from(book.participants()).participants,
    })
}

/// Records a new expense
pub async fn add_expense(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Result<Json<ExpenseCreatedResponse>, ApiError> {
    let Json(request) = payload?;

    let mut book = state.book.write().await;
    let expense = book.add_expense(request.into())?;

    Ok(Json(ExpenseCreatedResponse {
        expense: ExpenseResponse::from(expense),
    }))
}

/// Deletes an expense by ID
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id: ExpenseId = id.parse()?;

    state.book.write().await.delete_expense(id)?;

    Ok(Json(SuccessResponse::ok()))
}

/// Deletes every expense, keeping participants
pub async fn clear_expenses(State(state): State<AppState>) -> Json<SuccessResponse> {
    state.book.write().await.clear_expenses();
    Json(SuccessResponse::ok())
}
