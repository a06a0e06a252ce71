//! History entry DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domain_voter::VoterHistory;

/// Body of a create/update history request; the poll id comes from the path
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub vote_id: i64,
    /// Defaults to the time the request is handled when omitted
    pub vote_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub poll_id: i64,
    pub vote_id: i64,
    pub vote_date: DateTime<Utc>,
}

impl From<VoterHistory> for HistoryResponse {
    fn from(entry: VoterHistory) -> Self {
        Self {
            poll_id: entry.poll_id.get(),
            vote_id: entry.vote_id,
            vote_date: entry.vote_date,
        }
    }
}
