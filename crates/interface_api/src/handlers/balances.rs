//! Balance and statistics handlers

use axum::{extract::State, Json};

use domain_split::ExpenseRepository;

use crate::{AppState, error::ApiError};
use crate::dto::balance::*;

/// Computes balances and the settlement plan
pub async fn get_balances(
    State(state): State<AppState>,
) -> Result<Json<BalancesResponse>, ApiError> {
    let report = state.book.read().await.report()?;
    Ok(Json(BalancesResponse::from(&report)))
}

/// Summarizes the group's spending
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let summary = state.book.read().await.summary()?;
    Ok(Json(StatsResponse::from(&summary)))
}
