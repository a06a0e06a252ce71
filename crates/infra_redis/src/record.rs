//! Serialized record shapes
//!
//! The repository is the sole owner of how a voter looks on the wire: one
//! JSON document per voter, history serialized as a map keyed by poll id.
//! Both `history` and `version` default when absent, so a record written
//! before either field existed deserializes to an empty map and version 0
//! instead of failing - the null-vs-empty ambiguity stops here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{PollId, VoterId};
use domain_voter::{Voter, VoterHistory};

/// One poll-participation entry as stored inside its owner's record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub poll_id: i64,
    pub vote_id: i64,
    pub vote_date: DateTime<Utc>,
}

/// The stored form of a voter, body of the `voter:<id>` key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoterRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub history: HashMap<i64, HistoryRecord>,
}

impl VoterRecord {
    /// Builds the stored shape from a domain voter, stamping the version the
    /// repository decided on for this write
    pub fn from_domain(voter: &Voter, version: u64) -> Self {
        let history = voter
            .history
            .values()
            .map(|entry| {
                (
                    entry.poll_id.get(),
                    HistoryRecord {
                        poll_id: entry.poll_id.get(),
                        vote_id: entry.vote_id,
                        vote_date: entry.vote_date,
                    },
                )
            })
            .collect();

        Self {
            id: voter.id.get(),
            name: voter.name.clone(),
            email: voter.email.clone(),
            version,
            history,
        }
    }

    /// Projects the stored shape back into the domain, re-keying history by
    /// poll id; the map is always materialized
    pub fn into_domain(self) -> Voter {
        let history = self
            .history
            .into_values()
            .map(|entry| {
                (
                    PollId::new(entry.poll_id),
                    VoterHistory::new(PollId::new(entry.poll_id), entry.vote_id, entry.vote_date),
                )
            })
            .collect();

        Voter {
            id: VoterId::new(self.id),
            name: self.name,
            email: self.email,
            version: self.version,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_fields() {
        let mut voter = Voter::new(VoterId::new(1), "Ada", "ada@x.com");
        voter.history.insert(
            PollId::new(10),
            VoterHistory::new(PollId::new(10), 2, Utc::now()),
        );

        let record = VoterRecord::from_domain(&voter, 3);
        let json = serde_json::to_string(&record).unwrap();
        let back = serde_json::from_str::<VoterRecord>(&json).unwrap().into_domain();

        assert_eq!(back.id, voter.id);
        assert_eq!(back.name, voter.name);
        assert_eq!(back.email, voter.email);
        assert_eq!(back.version, 3);
        assert_eq!(back.history, voter.history);
    }

    #[test]
    fn test_missing_history_and_version_default() {
        let record: VoterRecord =
            serde_json::from_str(r#"{"id":7,"name":"Ada","email":"ada@x.com"}"#).unwrap();
        let voter = record.into_domain();
        assert!(voter.history.is_empty());
        assert_eq!(voter.version, 0);
    }

    #[test]
    fn test_history_serialized_keyed_by_poll_id() {
        let mut voter = Voter::new(VoterId::new(1), "Ada", "ada@x.com");
        voter.history.insert(
            PollId::new(10),
            VoterHistory::new(PollId::new(10), 2, Utc::now()),
        );

        let json = serde_json::to_value(VoterRecord::from_domain(&voter, 1)).unwrap();
        assert!(json["history"]["10"].is_object());
        assert_eq!(json["history"]["10"]["vote_id"], 2);
    }
}
