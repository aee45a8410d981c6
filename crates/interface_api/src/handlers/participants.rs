//! Participant handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use domain_split::ExpenseRepository;

use crate::{AppState, error::ApiError};
use crate::dto::participant::*;

/// Registers a participant
pub async fn add_participant(
    State(state): State<AppState>,
    payload: Result<Json<AddParticipantRequest>, JsonRejection>,
) -> Result<Json<ParticipantsResponse>, ApiError> {
    let Json(request) = payload?;

    let mut book = state.book.write().await;
    book.add_participant(&request.name)?;

    Ok(Json(ParticipantsResponse::from(book.participants())))
}

/// Removes a participant by exact name
///
/// Their expenses stay, so their balance row remains until those expenses
/// are deleted.
pub async fn remove_participant(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ParticipantsResponse>, ApiError> {
    let mut book = state.book.write().await;
    book.remove_participant(&name)?;

    Ok(Json(ParticipantsResponse::from(book.participants())))
}
