//! Capability ports consumed by the domain adapters
//!
//! Each CRUD adapter depends on its own trait carrying exactly the repository
//! operations that adapter needs - the smallest interface per consumer. The
//! Redis repository in `infra_redis` implements all four; a test double only
//! has to implement the one the test exercises (the in-memory repository in
//! `test_utils` implements all four as well).
//!
//! All operations deal in domain-shaped [`Voter`] values. The serialized
//! record layout is owned entirely by the repository side; nothing here knows
//! how a voter looks on the wire.
//!
//! # Consistency contract
//!
//! The backing store is single-key atomic with no multi-key transactions, so
//! "check precondition, then act" is enforced by the repository:
//!
//! - `add_item` fails with `AlreadyExists` when the key is present
//! - `update_item` fails with `NotFound` when the key is absent, and with
//!   `Conflict` when the stored version token no longer matches the one the
//!   caller fetched (lost-update detection for fetch-modify-put sequences)
//! - `get_all_items` is all-or-nothing: the first per-key fetch failure
//!   aborts the whole call, partial collections are never returned

use async_trait::async_trait;

use core_kernel::{AdapterError, VoterId};

use crate::voter::Voter;

/// Repository operations the Create adapter needs: insert a new voter, and
/// fetch-then-write-back an owner when adding a history entry
#[async_trait]
pub trait CreateRepository: Send + Sync {
    /// Inserts a voter; fails with `AlreadyExists` if the id is taken
    async fn add_item(&self, voter: &Voter) -> Result<(), AdapterError>;

    /// Returns the full stored voter, history included
    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError>;

    /// Writes back a whole voter; fails with `NotFound` if absent and with
    /// `Conflict` if the version token is stale
    async fn update_item(&self, voter: &Voter) -> Result<(), AdapterError>;
}

/// Repository operations the Read adapter needs
#[async_trait]
pub trait ReadRepository: Send + Sync {
    /// Returns the full stored voter, history included
    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError>;

    /// Returns every stored voter; aborts on the first per-key fetch failure
    async fn get_all_items(&self) -> Result<Vec<Voter>, AdapterError>;
}

/// Repository operations the Update adapter needs
#[async_trait]
pub trait UpdateRepository: Send + Sync {
    /// Returns the full stored voter, history included
    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError>;

    /// Writes back a whole voter; fails with `NotFound` if absent and with
    /// `Conflict` if the version token is stale
    async fn update_item(&self, voter: &Voter) -> Result<(), AdapterError>;
}

/// Repository operations the Delete adapter needs: removing a single voter,
/// removing one history entry (fetch-then-write-back), and bulk deletion
#[async_trait]
pub trait DeleteRepository: Send + Sync {
    /// Returns the full stored voter, history included
    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError>;

    /// Writes back a whole voter; fails with `NotFound` if absent and with
    /// `Conflict` if the version token is stale
    async fn update_item(&self, voter: &Voter) -> Result<(), AdapterError>;

    /// Removes a voter; fails with `NotFound` if absent
    async fn delete_item(&self, id: VoterId) -> Result<(), AdapterError>;

    /// Removes every voter in one batch, returning the number deleted.
    /// All-or-nothing: a batch failure reports the store error with no
    /// per-key outcome.
    async fn delete_all(&self) -> Result<u64, AdapterError>;
}
