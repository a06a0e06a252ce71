//! Redis Infrastructure Layer
//!
//! This crate owns everything store-shaped: the single Redis connection, the
//! `voter:` key namespace, the serialized record layout, and the repository
//! adapter that enforces the existence semantics Redis itself does not
//! provide (its native write is an unconditional upsert).
//!
//! # Architecture
//!
//! [`RedisStore`] is the thin key-value seam: get/set/delete/exists plus a
//! full-prefix key scan, one round trip each, no transactions.
//! [`VoterRepository`] sits on top and implements the four capability port
//! traits from `domain_voter`, adding check-then-act preconditions, record
//! (de)serialization, key-scoped mutual exclusion, and the optimistic version
//! token compared on every write-back.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_redis::{RedisConfig, RedisStore, VoterRepository};
//!
//! let store = RedisStore::connect(&RedisConfig::from_env()).await?;
//! let repository = VoterRepository::new(store);
//! ```

pub mod error;
mod lock;
pub mod record;
pub mod repository;
pub mod store;

pub use error::StoreError;
pub use repository::VoterRepository;
pub use store::{RedisConfig, RedisStore, DEFAULT_REDIS_URL, VOTER_KEY_PREFIX};
