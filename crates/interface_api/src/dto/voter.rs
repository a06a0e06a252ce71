//! Voter DTOs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use domain_voter::Voter;

use crate::dto::history::HistoryResponse;

/// Body of a create voter request; the id comes from the path
#[derive(Debug, Deserialize)]
pub struct CreateVoterRequest {
    pub name: String,
    pub email: String,
}

/// Body of an update voter request; stored history is preserved
#[derive(Debug, Deserialize)]
pub struct UpdateVoterRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct VoterResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// History re-keyed by poll id; always present, possibly empty
    pub history: HashMap<i64, HistoryResponse>,
}

impl From<Voter> for VoterResponse {
    fn from(voter: Voter) -> Self {
        let history = voter
            .history
            .into_values()
            .map(|entry| (entry.poll_id.get(), HistoryResponse::from(entry)))
            .collect();

        Self {
            id: voter.id.get(),
            name: voter.name,
            email: voter.email,
            history,
        }
    }
}

/// Result of a bulk delete
#[derive(Debug, Serialize)]
pub struct DeleteAllResponse {
    pub deleted: u64,
}
