//! The Voter aggregate and its embedded history entries
//!
//! A voter and its per-poll history are one aggregate: history entries are
//! never stored on their own, they live in a map inside the owning voter,
//! keyed by poll id. The map is always materialized - an empty map and "no
//! history yet" are the same thing, callers never observe an absent container.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use core_kernel::{PollId, VoterId};

/// One poll-participation record, owned by exactly one voter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoterHistory {
    /// Poll this entry belongs to; matches the key under which it is stored
    /// in the owner's history map
    pub poll_id: PollId,
    /// Which option was chosen
    pub vote_id: i64,
    /// When the vote was cast
    pub vote_date: DateTime<Utc>,
}

impl VoterHistory {
    pub fn new(poll_id: PollId, vote_id: i64, vote_date: DateTime<Utc>) -> Self {
        Self {
            poll_id,
            vote_id,
            vote_date,
        }
    }
}

/// The aggregate root: a registered voter with identity, contact fields,
/// and the per-poll voting history
///
/// `version` is the optimistic-concurrency token. It is owned by the
/// repository: a freshly constructed voter carries 0, every successful write
/// bumps it, and an update whose token no longer matches the stored record
/// fails with `Conflict` instead of silently losing a concurrent change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voter {
    pub id: VoterId,
    pub name: String,
    pub email: String,
    pub version: u64,
    pub history: HashMap<PollId, VoterHistory>,
}

impl Voter {
    /// Creates a voter with no history yet
    pub fn new(id: VoterId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            version: 0,
            history: HashMap::new(),
        }
    }

    /// Returns true if the voter already has an entry for the given poll
    pub fn has_voted_in(&self, poll_id: PollId) -> bool {
        self.history.contains_key(&poll_id)
    }

    /// Returns the history entries as a sequence, in unspecified order
    pub fn history_entries(&self) -> Vec<VoterHistory> {
        self.history.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(poll: i64) -> VoterHistory {
        VoterHistory::new(PollId::new(poll), 2, Utc::now())
    }

    #[test]
    fn test_new_voter_has_empty_history() {
        let voter = Voter::new(VoterId::new(1), "Ada", "ada@x.com");
        assert!(voter.history.is_empty());
        assert_eq!(voter.version, 0);
        assert!(!voter.has_voted_in(PollId::new(10)));
    }

    #[test]
    fn test_history_entries_returns_all() {
        let mut voter = Voter::new(VoterId::new(1), "Ada", "ada@x.com");
        voter.history.insert(PollId::new(10), entry(10));
        voter.history.insert(PollId::new(11), entry(11));

        let entries = voter.history_entries();
        assert_eq!(entries.len(), 2);
        assert!(voter.has_voted_in(PollId::new(11)));
    }
}
