//! Update adapter tests against the in-memory repository

use std::sync::Arc;

use core_kernel::{AdapterError, PollId, VoterId};
use domain_voter::ports::UpdateRepository;
use domain_voter::{CreateAdapter, ReadAdapter, UpdateAdapter, Voter};
use test_utils::{HistoryBuilder, InMemoryRepository, VoterBuilder};

fn setup() -> (
    CreateAdapter,
    ReadAdapter,
    UpdateAdapter,
    Arc<InMemoryRepository>,
) {
    let repository = Arc::new(InMemoryRepository::new());
    (
        CreateAdapter::new(repository.clone()),
        ReadAdapter::new(repository.clone()),
        UpdateAdapter::new(repository.clone()),
        repository,
    )
}

#[tokio::test]
async fn test_update_replaces_fields_and_preserves_history() {
    let (create, read, update, _) = setup();
    create.create_voter(VoterBuilder::new().build()).await.unwrap();
    create
        .create_voter_history(VoterId::new(1), HistoryBuilder::new().build())
        .await
        .unwrap();

    let replacement = Voter::new(VoterId::new(1), "Ada King", "countess@example.com");
    update.update_voter(replacement).await.unwrap();

    let voter = read.read_voter(VoterId::new(1)).await.unwrap();
    assert_eq!(voter.name, "Ada King");
    assert_eq!(voter.email, "countess@example.com");
    assert!(voter.has_voted_in(PollId::new(10)));
}

#[tokio::test]
async fn test_update_missing_voter_is_not_found() {
    let (_, _, update, _) = setup();

    let error = update
        .update_voter(VoterBuilder::new().with_id(9).build())
        .await
        .unwrap_err();
    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_update_rejects_blank_fields() {
    let (create, _, update, _) = setup();
    create.create_voter(VoterBuilder::new().build()).await.unwrap();

    let error = update
        .update_voter(VoterBuilder::new().with_name("  ").build())
        .await
        .unwrap_err();
    assert!(error.is_invalid_argument());
}

#[tokio::test]
async fn test_update_history_replaces_existing_entry() {
    let (create, read, update, _) = setup();
    create.create_voter(VoterBuilder::new().build()).await.unwrap();
    create
        .create_voter_history(VoterId::new(1), HistoryBuilder::new().with_vote_id(2).build())
        .await
        .unwrap();

    update
        .update_voter_history(VoterId::new(1), HistoryBuilder::new().with_vote_id(5).build())
        .await
        .unwrap();

    let entry = read
        .read_voter_history(VoterId::new(1), PollId::new(10))
        .await
        .unwrap();
    assert_eq!(entry.vote_id, 5);
}

#[tokio::test]
async fn test_update_history_requires_existing_entry() {
    let (create, _, update, _) = setup();
    create.create_voter(VoterBuilder::new().build()).await.unwrap();

    let error = update
        .update_voter_history(VoterId::new(1), HistoryBuilder::new().with_poll_id(77).build())
        .await
        .unwrap_err();
    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_stale_version_token_is_rejected_as_conflict() {
    let (create, read, update, repository) = setup();
    create.create_voter(VoterBuilder::new().build()).await.unwrap();

    // First fetch carries version 1; a later update bumps the stored record.
    let stale = read.read_voter(VoterId::new(1)).await.unwrap();
    update
        .update_voter(Voter::new(VoterId::new(1), "Ada King", "ada@example.com"))
        .await
        .unwrap();

    let error = UpdateRepository::update_item(repository.as_ref(), &stale)
        .await
        .unwrap_err();
    assert!(matches!(error, AdapterError::Conflict { .. }));

    // The interleaved write survived.
    let voter = read.read_voter(VoterId::new(1)).await.unwrap();
    assert_eq!(voter.name, "Ada King");
}
