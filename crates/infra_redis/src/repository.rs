//! Repository adapter over the voter store
//!
//! Bridges domain-shaped calls to raw store operations, supplying the
//! semantics Redis does not have: the native write is an unconditional
//! upsert, so insert-only and update-only are distinguished by an existence
//! check before the write. Each check-then-act sequence runs under the
//! per-key mutex, and every write-back compares the caller's version token
//! against the stored one, so a fetch-modify-put interleaved with a
//! concurrent writer surfaces as `Conflict` rather than a silent lost update.

use async_trait::async_trait;
use tracing::{debug, instrument};

use core_kernel::{AdapterError, VoterId};
use domain_voter::ports::{
    CreateRepository, DeleteRepository, ReadRepository, UpdateRepository,
};
use domain_voter::Voter;

use crate::error::StoreError;
use crate::lock::KeyedMutex;
use crate::record::VoterRecord;
use crate::store::RedisStore;

const VOTER: &str = "voter";

/// Redis-backed implementation of the four capability ports
///
/// Stateless per call apart from the shared store connection and the lock
/// table; safe to clone into every concurrent request.
pub struct VoterRepository {
    store: RedisStore,
    locks: KeyedMutex,
}

impl VoterRepository {
    /// Creates a repository over a connected store
    pub fn new(store: RedisStore) -> Self {
        Self {
            store,
            locks: KeyedMutex::default(),
        }
    }

    /// Inserts a voter that must not exist yet
    ///
    /// The existence check and the upsert are two round trips; the per-key
    /// mutex keeps them from interleaving with another writer in this
    /// process. The stored record starts at version 1.
    #[instrument(skip_all, fields(voter_id = %voter.id))]
    pub async fn add_item(&self, voter: &Voter) -> Result<(), AdapterError> {
        let _guard = self.locks.acquire(voter.id.get()).await;

        if self.store.exists(voter.id.get()).await? {
            return Err(AdapterError::already_exists(VOTER, voter.id));
        }

        debug!("inserting voter record");
        self.put(voter, 1).await
    }

    /// Replaces a voter that must already exist
    ///
    /// Fails with `Conflict` when the stored version differs from the token
    /// the caller fetched, which means another write landed in between.
    #[instrument(skip_all, fields(voter_id = %voter.id))]
    pub async fn update_item(&self, voter: &Voter) -> Result<(), AdapterError> {
        let _guard = self.locks.acquire(voter.id.get()).await;

        let stored = self.fetch(voter.id).await?;
        if stored.version != voter.version {
            return Err(AdapterError::conflict(format!(
                "voter {} was modified concurrently (stored version {}, caller version {})",
                voter.id, stored.version, voter.version
            )));
        }

        debug!(version = stored.version + 1, "writing voter record");
        self.put(voter, stored.version + 1).await
    }

    /// Returns the full stored voter including its history map
    pub async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError> {
        self.fetch(id).await
    }

    /// Returns every voter in the namespace
    ///
    /// All-or-nothing: any single fetch or decode failure aborts the whole
    /// call with that error, a partial collection is never returned.
    pub async fn get_all_items(&self) -> Result<Vec<Voter>, AdapterError> {
        let keys = self.store.scan_keys().await?;

        let mut voters = Vec::with_capacity(keys.len());
        for key in keys {
            let body = self.store.get_raw(&key).await?.ok_or_else(|| {
                AdapterError::store(format!("key '{key}' vanished during enumeration"))
            })?;
            voters.push(decode(&key, &body)?);
        }
        Ok(voters)
    }

    /// Removes a voter that must exist
    #[instrument(skip(self), fields(voter_id = %id))]
    pub async fn delete_item(&self, id: VoterId) -> Result<(), AdapterError> {
        let _guard = self.locks.acquire(id.get()).await;

        if !self.store.delete(id.get()).await? {
            return Err(AdapterError::not_found(VOTER, id));
        }
        debug!("deleted voter record");
        Ok(())
    }

    /// Removes every voter in one store-level batch call
    ///
    /// No per-key outcome: a batch failure reports the store error as a
    /// whole. Returns the number of records removed.
    pub async fn delete_all_voters(&self) -> Result<u64, AdapterError> {
        let keys = self.store.scan_keys().await?;
        let deleted = self.store.delete_keys(&keys).await?;
        debug!(deleted, "deleted voter namespace");
        Ok(deleted)
    }

    async fn fetch(&self, id: VoterId) -> Result<Voter, AdapterError> {
        let key = self.store.key_for(id.get());
        let body = self
            .store
            .get_raw(&key)
            .await?
            .ok_or_else(|| AdapterError::not_found(VOTER, id))?;
        decode(&key, &body)
    }

    async fn put(&self, voter: &Voter, version: u64) -> Result<(), AdapterError> {
        let record = VoterRecord::from_domain(voter, version);
        let body = serde_json::to_string(&record).map_err(|source| StoreError::Serialize {
            key: self.store.key_for(voter.id.get()),
            source,
        })?;
        self.store.set(voter.id.get(), &body).await?;
        Ok(())
    }
}

fn decode(key: &str, body: &str) -> Result<Voter, AdapterError> {
    let record: VoterRecord =
        serde_json::from_str(body).map_err(|source| StoreError::MalformedRecord {
            key: key.to_string(),
            source,
        })?;
    Ok(record.into_domain())
}

#[async_trait]
impl CreateRepository for VoterRepository {
    async fn add_item(&self, voter: &Voter) -> Result<(), AdapterError> {
        VoterRepository::add_item(self, voter).await
    }

    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError> {
        VoterRepository::get_item(self, id).await
    }

    async fn update_item(&self, voter: &Voter) -> Result<(), AdapterError> {
        VoterRepository::update_item(self, voter).await
    }
}

#[async_trait]
impl ReadRepository for VoterRepository {
    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError> {
        VoterRepository::get_item(self, id).await
    }

    async fn get_all_items(&self) -> Result<Vec<Voter>, AdapterError> {
        VoterRepository::get_all_items(self).await
    }
}

#[async_trait]
impl UpdateRepository for VoterRepository {
    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError> {
        VoterRepository::get_item(self, id).await
    }

    async fn update_item(&self, voter: &Voter) -> Result<(), AdapterError> {
        VoterRepository::update_item(self, voter).await
    }
}

#[async_trait]
impl DeleteRepository for VoterRepository {
    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError> {
        VoterRepository::get_item(self, id).await
    }

    async fn update_item(&self, voter: &Voter) -> Result<(), AdapterError> {
        VoterRepository::update_item(self, voter).await
    }

    async fn delete_item(&self, id: VoterId) -> Result<(), AdapterError> {
        VoterRepository::delete_item(self, id).await
    }

    async fn delete_all(&self) -> Result<u64, AdapterError> {
        VoterRepository::delete_all_voters(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_malformed_body() {
        let error = decode("voter:3", "{truncated").unwrap_err();
        assert!(error.is_store_failure());
        assert!(error.to_string().contains("voter:3"));
    }

    #[test]
    fn test_decode_materializes_missing_history() {
        let voter = decode("voter:3", r#"{"id":3,"name":"Ada","email":"a@x"}"#).unwrap();
        assert!(voter.history.is_empty());
        assert_eq!(voter.version, 0);
    }
}
