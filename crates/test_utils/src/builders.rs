//! Test data builders
//!
//! Builders with sensible defaults so tests only spell out the fields they
//! care about.

use chrono::{DateTime, TimeZone, Utc};

use core_kernel::{PollId, VoterId};
use domain_voter::{Voter, VoterHistory};

/// Fixed timestamp used by default for vote dates
pub fn default_vote_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 5, 9, 30, 0).unwrap()
}

/// Builder for voter test data
pub struct VoterBuilder {
    id: VoterId,
    name: String,
    email: String,
}

impl Default for VoterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VoterBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: VoterId::new(1),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = VoterId::new(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn build(self) -> Voter {
        Voter::new(self.id, self.name, self.email)
    }
}

/// Builder for history entry test data
pub struct HistoryBuilder {
    poll_id: PollId,
    vote_id: i64,
    vote_date: DateTime<Utc>,
}

impl Default for HistoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            poll_id: PollId::new(10),
            vote_id: 2,
            vote_date: default_vote_date(),
        }
    }

    pub fn with_poll_id(mut self, poll_id: i64) -> Self {
        self.poll_id = PollId::new(poll_id);
        self
    }

    pub fn with_vote_id(mut self, vote_id: i64) -> Self {
        self.vote_id = vote_id;
        self
    }

    pub fn with_vote_date(mut self, vote_date: DateTime<Utc>) -> Self {
        self.vote_date = vote_date;
        self
    }

    pub fn build(self) -> VoterHistory {
        VoterHistory::new(self.poll_id, self.vote_id, self.vote_date)
    }
}
