//! Voter handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::VoterId;
use domain_voter::Voter;

use crate::dto::voter::{CreateVoterRequest, DeleteAllResponse, UpdateVoterRequest, VoterResponse};
use crate::{error::ApiError, AppState};

/// Registers a new voter under the path id
pub async fn create_voter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CreateVoterRequest>,
) -> Result<StatusCode, ApiError> {
    let voter = Voter::new(VoterId::new(id), request.name, request.email);
    state.create.create_voter(voter).await?;
    Ok(StatusCode::CREATED)
}

/// Returns one voter with the full history map
pub async fn get_voter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VoterResponse>, ApiError> {
    let voter = state.read.read_voter(VoterId::new(id)).await?;
    Ok(Json(voter.into()))
}

/// Lists every voter
pub async fn list_voters(
    State(state): State<AppState>,
) -> Result<Json<Vec<VoterResponse>>, ApiError> {
    let voters = state.read.read_all_voter().await?;
    Ok(Json(voters.into_iter().map(VoterResponse::from).collect()))
}

/// Replaces a voter's name and email
pub async fn update_voter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateVoterRequest>,
) -> Result<StatusCode, ApiError> {
    let voter = Voter::new(VoterId::new(id), request.name, request.email);
    state.update.update_voter(voter).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Removes a voter and its history
pub async fn delete_voter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.delete.delete_voter(VoterId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Removes every voter
pub async fn delete_all_voters(
    State(state): State<AppState>,
) -> Result<Json<DeleteAllResponse>, ApiError> {
    let deleted = state.delete.delete_all_voters().await?;
    Ok(Json(DeleteAllResponse { deleted }))
}
