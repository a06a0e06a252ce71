//! Create adapter
//!
//! Owns the creation capability for voters and their history entries. A new
//! voter always starts with an empty history; a new history entry is inserted
//! into its owner with a fetch-modify-put sequence, since the store has no
//! sub-document writes. The repository's version token turns a concurrent
//! interleaving of that sequence into a `Conflict` instead of a lost update.

use std::sync::Arc;

use tracing::debug;

use core_kernel::{AdapterError, VoterId};

use crate::ports::CreateRepository;
use crate::validation::{require_non_blank, require_valid_poll_id, require_valid_voter_id};
use crate::voter::{Voter, VoterHistory};

/// Domain adapter for the create capability
#[derive(Clone)]
pub struct CreateAdapter {
    repository: Arc<dyn CreateRepository>,
}

impl CreateAdapter {
    pub fn new(repository: Arc<dyn CreateRepository>) -> Self {
        Self { repository }
    }

    /// Registers a new voter
    ///
    /// Validates that the id is positive and that name and email are
    /// non-blank after trimming; on any violation the call fails with
    /// `InvalidArgument` and nothing is written. The stored voter starts with
    /// an empty history regardless of what the caller put in the aggregate.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on a failed precondition, `AlreadyExists` when the
    /// id is already taken, `Store` when the backing store fails.
    pub async fn create_voter(&self, voter: Voter) -> Result<(), AdapterError> {
        require_valid_voter_id(voter.id)?;
        require_non_blank("name", &voter.name)?;
        require_non_blank("email", &voter.email)?;

        let stored = Voter::new(voter.id, voter.name, voter.email);
        debug!(voter_id = %stored.id, "creating voter");
        self.repository.add_item(&stored).await
    }

    /// Records a poll participation for an existing voter
    ///
    /// The owning voter must exist - no history may exist without its voter,
    /// so an absent owner propagates as `NotFound`. A create must not
    /// silently overwrite: an entry already present under the same poll id
    /// fails with `AlreadyExists` and leaves the original intact.
    pub async fn create_voter_history(
        &self,
        voter_id: VoterId,
        entry: VoterHistory,
    ) -> Result<(), AdapterError> {
        require_valid_voter_id(voter_id)?;
        require_valid_poll_id(entry.poll_id)?;

        let mut owner = self.repository.get_item(voter_id).await?;
        if owner.has_voted_in(entry.poll_id) {
            return Err(AdapterError::already_exists("voter history", entry.poll_id));
        }

        debug!(voter_id = %voter_id, poll_id = %entry.poll_id, "adding history entry");
        owner.history.insert(entry.poll_id, entry);
        self.repository.update_item(&owner).await
    }
}
