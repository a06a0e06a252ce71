//! In-memory repository for tests
//!
//! A fake store substituted for the Redis repository through the capability
//! port traits (the adapters take the port by injection, never a concrete
//! store). It reproduces the repository contract exactly: existence-checked
//! insert and update, the version token compared on write-back, all-or-
//! nothing enumeration, and batch deletion with a count.
//!
//! Per-id failure injection via [`InMemoryRepository::poison`] makes any
//! fetch touching that id fail with a store error, which is how tests
//! exercise the abort-on-first-error contract of `get_all_items`.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use core_kernel::{AdapterError, VoterId};
use domain_voter::ports::{
    CreateRepository, DeleteRepository, ReadRepository, UpdateRepository,
};
use domain_voter::Voter;

const VOTER: &str = "voter";

/// In-memory implementation of all four capability ports
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    items: Mutex<HashMap<i64, Voter>>,
    poisoned: Mutex<HashSet<i64>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent fetch of this id fail with a store error
    pub fn poison(&self, id: VoterId) {
        self.poisoned.lock().unwrap().insert(id.get());
    }

    /// Returns true if a record exists under the id
    pub fn contains(&self, id: VoterId) -> bool {
        self.items.lock().unwrap().contains_key(&id.get())
    }

    /// Number of stored voters
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_poisoned(&self, id: i64) -> Result<(), AdapterError> {
        if self.poisoned.lock().unwrap().contains(&id) {
            return Err(AdapterError::store(format!(
                "injected failure fetching voter {id}"
            )));
        }
        Ok(())
    }

    fn fetch(&self, id: VoterId) -> Result<Voter, AdapterError> {
        self.check_poisoned(id.get())?;
        self.items
            .lock()
            .unwrap()
            .get(&id.get())
            .cloned()
            .ok_or_else(|| AdapterError::not_found(VOTER, id))
    }
}

#[async_trait]
impl CreateRepository for InMemoryRepository {
    async fn add_item(&self, voter: &Voter) -> Result<(), AdapterError> {
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&voter.id.get()) {
            return Err(AdapterError::already_exists(VOTER, voter.id));
        }
        let mut stored = voter.clone();
        stored.version = 1;
        items.insert(voter.id.get(), stored);
        Ok(())
    }

    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError> {
        self.fetch(id)
    }

    async fn update_item(&self, voter: &Voter) -> Result<(), AdapterError> {
        let stored_version = self.fetch(voter.id)?.version;
        if stored_version != voter.version {
            return Err(AdapterError::conflict(format!(
                "voter {} was modified concurrently (stored version {}, caller version {})",
                voter.id, stored_version, voter.version
            )));
        }
        let mut stored = voter.clone();
        stored.version = stored_version + 1;
        self.items.lock().unwrap().insert(voter.id.get(), stored);
        Ok(())
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError> {
        self.fetch(id)
    }

    async fn get_all_items(&self) -> Result<Vec<Voter>, AdapterError> {
        let ids: Vec<i64> = self.items.lock().unwrap().keys().copied().collect();
        let mut voters = Vec::with_capacity(ids.len());
        for id in ids {
            voters.push(self.fetch(VoterId::new(id))?);
        }
        Ok(voters)
    }
}

#[async_trait]
impl UpdateRepository for InMemoryRepository {
    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError> {
        self.fetch(id)
    }

    async fn update_item(&self, voter: &Voter) -> Result<(), AdapterError> {
        CreateRepository::update_item(self, voter).await
    }
}

#[async_trait]
impl DeleteRepository for InMemoryRepository {
    async fn get_item(&self, id: VoterId) -> Result<Voter, AdapterError> {
        self.fetch(id)
    }

    async fn update_item(&self, voter: &Voter) -> Result<(), AdapterError> {
        CreateRepository::update_item(self, voter).await
    }

    async fn delete_item(&self, id: VoterId) -> Result<(), AdapterError> {
        self.items
            .lock()
            .unwrap()
            .remove(&id.get())
            .map(|_| ())
            .ok_or_else(|| AdapterError::not_found(VOTER, id))
    }

    async fn delete_all(&self) -> Result<u64, AdapterError> {
        let mut items = self.items.lock().unwrap();
        let deleted = items.len() as u64;
        items.clear();
        Ok(deleted)
    }
}
