//! History entry handlers
//!
//! History is a sub-resource of its voter: every path carries the owning
//! voter id, and the poll id comes from the path rather than the body.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use core_kernel::{PollId, VoterId};
use domain_voter::VoterHistory;

use crate::dto::history::{HistoryResponse, VoteRequest};
use crate::{error::ApiError, AppState};

fn entry_from(poll_id: i64, request: VoteRequest) -> VoterHistory {
    VoterHistory::new(
        PollId::new(poll_id),
        request.vote_id,
        request.vote_date.unwrap_or_else(Utc::now),
    )
}

/// Records a poll participation for a voter
pub async fn create_history(
    State(state): State<AppState>,
    Path((voter_id, poll_id)): Path<(i64, i64)>,
    Json(request): Json<VoteRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .create
        .create_voter_history(VoterId::new(voter_id), entry_from(poll_id, request))
        .await?;
    Ok(StatusCode::CREATED)
}

/// Returns one history entry
pub async fn get_history(
    State(state): State<AppState>,
    Path((voter_id, poll_id)): Path<(i64, i64)>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let entry = state
        .read
        .read_voter_history(VoterId::new(voter_id), PollId::new(poll_id))
        .await?;
    Ok(Json(entry.into()))
}

/// Lists all history entries of a voter, in unspecified order
pub async fn list_history(
    State(state): State<AppState>,
    Path(voter_id): Path<i64>,
) -> Result<Json<Vec<HistoryResponse>>, ApiError> {
    let entries = state
        .read
        .read_all_voter_history(VoterId::new(voter_id))
        .await?;
    Ok(Json(entries.into_iter().map(HistoryResponse::from).collect()))
}

/// Replaces an existing history entry
pub async fn update_history(
    State(state): State<AppState>,
    Path((voter_id, poll_id)): Path<(i64, i64)>,
    Json(request): Json<VoteRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .update
        .update_voter_history(VoterId::new(voter_id), entry_from(poll_id, request))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Removes one history entry
pub async fn delete_history(
    State(state): State<AppState>,
    Path((voter_id, poll_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    state
        .delete
        .delete_voter_history(VoterId::new(voter_id), PollId::new(poll_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
