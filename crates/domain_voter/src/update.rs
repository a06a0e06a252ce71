//! Update adapter
//!
//! Whole-value replacement of a voter's own fields, and in-place replacement
//! of individual history entries. Both paths fetch the stored aggregate
//! first: `update_voter` so the existing history survives the replacement,
//! `update_voter_history` because the entry lives inside the owner.

use std::sync::Arc;

use tracing::debug;

use core_kernel::{AdapterError, VoterId};

use crate::ports::UpdateRepository;
use crate::validation::{require_non_blank, require_valid_poll_id, require_valid_voter_id};
use crate::voter::{Voter, VoterHistory};

/// Domain adapter for the update capability
#[derive(Clone)]
pub struct UpdateAdapter {
    repository: Arc<dyn UpdateRepository>,
}

impl UpdateAdapter {
    pub fn new(repository: Arc<dyn UpdateRepository>) -> Self {
        Self { repository }
    }

    /// Replaces a voter's name and email, preserving the stored history
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on a failed precondition, `NotFound` when the voter
    /// does not exist, `Conflict` when a concurrent write lands between the
    /// fetch and the write-back.
    pub async fn update_voter(&self, voter: Voter) -> Result<(), AdapterError> {
        require_valid_voter_id(voter.id)?;
        require_non_blank("name", &voter.name)?;
        require_non_blank("email", &voter.email)?;

        let mut stored = self.repository.get_item(voter.id).await?;
        stored.name = voter.name;
        stored.email = voter.email;

        debug!(voter_id = %stored.id, "updating voter");
        self.repository.update_item(&stored).await
    }

    /// Replaces an existing history entry of a voter
    ///
    /// Unlike the create path, the poll id must already be present; updating
    /// an absent entry fails with `NotFound`.
    pub async fn update_voter_history(
        &self,
        voter_id: VoterId,
        entry: VoterHistory,
    ) -> Result<(), AdapterError> {
        require_valid_voter_id(voter_id)?;
        require_valid_poll_id(entry.poll_id)?;

        let mut owner = self.repository.get_item(voter_id).await?;
        if !owner.has_voted_in(entry.poll_id) {
            return Err(AdapterError::not_found("voter history", entry.poll_id));
        }

        debug!(voter_id = %voter_id, poll_id = %entry.poll_id, "updating history entry");
        owner.history.insert(entry.poll_id, entry);
        self.repository.update_item(&owner).await
    }
}
