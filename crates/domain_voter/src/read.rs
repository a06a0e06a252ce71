//! Read adapter
//!
//! Projects stored voters into domain-shaped results. Reads never mutate the
//! store; the history map comes back materialized (possibly empty), and
//! per-voter history sequences carry no ordering guarantee because the map
//! itself is unordered.

use std::sync::Arc;

use core_kernel::{AdapterError, PollId, VoterId};

use crate::ports::ReadRepository;
use crate::validation::require_valid_voter_id;
use crate::voter::{Voter, VoterHistory};

/// Domain adapter for the read capability
#[derive(Clone)]
pub struct ReadAdapter {
    repository: Arc<dyn ReadRepository>,
}

impl ReadAdapter {
    pub fn new(repository: Arc<dyn ReadRepository>) -> Self {
        Self { repository }
    }

    /// Returns one voter with the full history map
    pub async fn read_voter(&self, id: VoterId) -> Result<Voter, AdapterError> {
        require_valid_voter_id(id)?;
        self.repository.get_item(id).await
    }

    /// Returns a single history entry of a voter
    ///
    /// # Errors
    ///
    /// `NotFound` when the voter is absent, or when the voter exists but has
    /// no entry for the poll.
    pub async fn read_voter_history(
        &self,
        voter_id: VoterId,
        poll_id: PollId,
    ) -> Result<VoterHistory, AdapterError> {
        let owner = self.repository.get_item(voter_id).await?;
        owner
            .history
            .get(&poll_id)
            .cloned()
            .ok_or_else(|| AdapterError::not_found("voter history", poll_id))
    }

    /// Returns every stored voter; an empty store yields an empty sequence,
    /// never an error
    pub async fn read_all_voter(&self) -> Result<Vec<Voter>, AdapterError> {
        self.repository.get_all_items().await
    }

    /// Returns all history entries of one voter, in unspecified order
    pub async fn read_all_voter_history(
        &self,
        voter_id: VoterId,
    ) -> Result<Vec<VoterHistory>, AdapterError> {
        let owner = self.repository.get_item(voter_id).await?;
        Ok(owner.history_entries())
    }
}
