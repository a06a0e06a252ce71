//! Read adapter tests against the in-memory repository

use std::collections::HashSet;
use std::sync::Arc;

use core_kernel::{PollId, VoterId};
use domain_voter::{CreateAdapter, ReadAdapter};
use test_utils::{HistoryBuilder, InMemoryRepository, VoterBuilder};

fn setup() -> (CreateAdapter, ReadAdapter, Arc<InMemoryRepository>) {
    let repository = Arc::new(InMemoryRepository::new());
    (
        CreateAdapter::new(repository.clone()),
        ReadAdapter::new(repository.clone()),
        repository,
    )
}

#[tokio::test]
async fn test_read_rejects_non_positive_id() {
    let (_, read, _) = setup();
    assert!(read.read_voter(VoterId::new(0)).await.unwrap_err().is_invalid_argument());
    assert!(read.read_voter(VoterId::new(-1)).await.unwrap_err().is_invalid_argument());
}

#[tokio::test]
async fn test_read_missing_voter_is_not_found() {
    let (_, read, _) = setup();
    assert!(read.read_voter(VoterId::new(5)).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_read_all_on_empty_store_returns_empty_sequence() {
    let (_, read, _) = setup();
    let voters = read.read_all_voter().await.unwrap();
    assert!(voters.is_empty());
}

#[tokio::test]
async fn test_read_all_returns_every_voter() {
    let (create, read, _) = setup();
    for id in [1, 2, 3] {
        create
            .create_voter(VoterBuilder::new().with_id(id).build())
            .await
            .unwrap();
    }

    let ids: HashSet<i64> = read
        .read_all_voter()
        .await
        .unwrap()
        .iter()
        .map(|v| v.id.get())
        .collect();
    assert_eq!(ids, HashSet::from([1, 2, 3]));
}

#[tokio::test]
async fn test_read_history_for_absent_poll_is_not_found() {
    let (create, read, _) = setup();
    create.create_voter(VoterBuilder::new().build()).await.unwrap();

    let error = read
        .read_voter_history(VoterId::new(1), PollId::new(10))
        .await
        .unwrap_err();
    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_read_all_history_returns_every_entry() {
    let (create, read, _) = setup();
    create.create_voter(VoterBuilder::new().build()).await.unwrap();
    for poll in [10, 11, 12] {
        create
            .create_voter_history(VoterId::new(1), HistoryBuilder::new().with_poll_id(poll).build())
            .await
            .unwrap();
    }

    // The history map is unordered by design; compare contents, not order.
    let polls: HashSet<i64> = read
        .read_all_voter_history(VoterId::new(1))
        .await
        .unwrap()
        .iter()
        .map(|h| h.poll_id.get())
        .collect();
    assert_eq!(polls, HashSet::from([10, 11, 12]));
}

#[tokio::test]
async fn test_read_all_aborts_on_first_fetch_failure() {
    let (create, read, repository) = setup();
    create.create_voter(VoterBuilder::new().with_id(1).build()).await.unwrap();
    create.create_voter(VoterBuilder::new().with_id(2).build()).await.unwrap();

    repository.poison(VoterId::new(2));

    let error = read.read_all_voter().await.unwrap_err();
    assert!(error.is_store_failure());
}
