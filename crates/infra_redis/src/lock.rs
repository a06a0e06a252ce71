//! Key-scoped mutual exclusion for check-then-act sequences
//!
//! Redis gives this application single-key atomicity only, so every
//! "check precondition, then write" in the repository runs under an
//! in-process async mutex scoped to the voter id. This process is the only
//! writer of the `voter:` namespace; a multi-process deployment would need
//! WATCH/MULTI or a store-side lock instead.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// A table of per-key async mutexes
///
/// Entries are created on first use and never pruned; the table grows with
/// the number of distinct voter ids seen by this process.
#[derive(Debug, Default)]
pub(crate) struct KeyedMutex {
    entries: Mutex<HashMap<i64, Arc<AsyncMutex<()>>>>,
}

impl KeyedMutex {
    /// Acquires the mutex for one key, waiting if another task holds it
    pub(crate) async fn acquire(&self, key: i64) -> OwnedMutexGuard<()> {
        let entry = {
            let mut entries = self.entries.lock().expect("lock table poisoned");
            entries
                .entry(key)
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        entry.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_same_key_excludes() {
        let locks = KeyedMutex::default();
        let guard = locks.acquire(1).await;

        let entry = locks
            .entries
            .lock()
            .unwrap()
            .get(&1)
            .cloned()
            .expect("entry for key 1");
        assert!(entry.try_lock().is_err());

        drop(guard);
        assert!(entry.try_lock().is_ok());
    }

    #[tokio::test]
    async fn test_different_keys_are_independent() {
        let locks = KeyedMutex::default();
        let _one = locks.acquire(1).await;
        let _two = locks.acquire(2).await;
    }
}
