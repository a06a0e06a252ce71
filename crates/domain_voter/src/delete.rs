//! Delete adapter
//!
//! Removal of single voters, single history entries, and the whole voter
//! namespace. History removal is the same fetch-modify-put sequence as the
//! create side; bulk deletion is one store-level batch call with no per-key
//! outcome reporting.

use std::sync::Arc;

use tracing::{debug, info};

use core_kernel::{AdapterError, PollId, VoterId};

use crate::ports::DeleteRepository;
use crate::validation::{require_valid_poll_id, require_valid_voter_id};

/// Domain adapter for the delete capability
#[derive(Clone)]
pub struct DeleteAdapter {
    repository: Arc<dyn DeleteRepository>,
}

impl DeleteAdapter {
    pub fn new(repository: Arc<dyn DeleteRepository>) -> Self {
        Self { repository }
    }

    /// Removes a voter and its embedded history
    pub async fn delete_voter(&self, id: VoterId) -> Result<(), AdapterError> {
        require_valid_voter_id(id)?;
        debug!(voter_id = %id, "deleting voter");
        self.repository.delete_item(id).await
    }

    /// Removes one history entry of a voter
    ///
    /// # Errors
    ///
    /// `NotFound` when the voter is absent or has no entry for the poll;
    /// deleting the same entry twice fails the second call and is a no-op.
    pub async fn delete_voter_history(
        &self,
        voter_id: VoterId,
        poll_id: PollId,
    ) -> Result<(), AdapterError> {
        require_valid_voter_id(voter_id)?;
        require_valid_poll_id(poll_id)?;

        let mut owner = self.repository.get_item(voter_id).await?;
        if owner.history.remove(&poll_id).is_none() {
            return Err(AdapterError::not_found("voter history", poll_id));
        }

        debug!(voter_id = %voter_id, poll_id = %poll_id, "removing history entry");
        self.repository.update_item(&owner).await
    }

    /// Removes every voter, returning the number deleted
    pub async fn delete_all_voters(&self) -> Result<u64, AdapterError> {
        let deleted = self.repository.delete_all().await?;
        info!(deleted, "deleted all voters");
        Ok(deleted)
    }
}
