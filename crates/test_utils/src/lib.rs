//! Test Utilities Crate
//!
//! Shared test infrastructure for the voter system test suite.
//!
//! # Modules
//!
//! - `memory`: In-memory repository implementing all four capability ports,
//!   with the same existence and version semantics as the Redis repository,
//!   plus per-id failure injection
//! - `builders`: Builder patterns for voter and history test data

pub mod builders;
pub mod memory;

pub use builders::{default_vote_date, HistoryBuilder, VoterBuilder};
pub use memory::InMemoryRepository;
