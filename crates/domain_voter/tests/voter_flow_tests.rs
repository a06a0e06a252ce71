//! End-to-end flow across all four adapters

use std::sync::Arc;

use core_kernel::{PollId, VoterId};
use domain_voter::{CreateAdapter, DeleteAdapter, ReadAdapter, Voter, VoterHistory};
use test_utils::{default_vote_date, InMemoryRepository};

#[tokio::test]
async fn test_full_voter_lifecycle() {
    let repository = Arc::new(InMemoryRepository::new());
    let create = CreateAdapter::new(repository.clone());
    let read = ReadAdapter::new(repository.clone());
    let delete = DeleteAdapter::new(repository.clone());

    let vote_date = default_vote_date();

    create
        .create_voter(Voter::new(VoterId::new(1), "Ada", "ada@x.com"))
        .await
        .unwrap();

    create
        .create_voter_history(
            VoterId::new(1),
            VoterHistory::new(PollId::new(10), 2, vote_date),
        )
        .await
        .unwrap();

    let voter = read.read_voter(VoterId::new(1)).await.unwrap();
    assert_eq!(voter.history.len(), 1);
    let entry = &voter.history[&PollId::new(10)];
    assert_eq!(entry.poll_id, PollId::new(10));
    assert_eq!(entry.vote_id, 2);
    assert_eq!(entry.vote_date, vote_date);

    delete
        .delete_voter_history(VoterId::new(1), PollId::new(10))
        .await
        .unwrap();

    let entries = read.read_all_voter_history(VoterId::new(1)).await.unwrap();
    assert!(entries.is_empty());
}
