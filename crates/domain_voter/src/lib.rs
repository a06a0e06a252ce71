//! Voter Domain
//!
//! This crate holds the domain side of the voter system: the `Voter`
//! aggregate with its embedded per-poll history, the narrow capability port
//! traits each CRUD adapter consumes, and the four adapters themselves.
//!
//! # Architecture
//!
//! Each CRUD capability (create, read, update, delete) is an independent
//! adapter. An adapter validates domain preconditions, then delegates to the
//! repository through the smallest port trait that covers its needs - it never
//! sees the other adapters or the concrete store. The repository contract is
//! defined in [`ports`]; the Redis implementation lives in `infra_redis`, and
//! tests substitute the in-memory implementation from `test_utils`.
//!
//! ```rust,ignore
//! use domain_voter::{CreateAdapter, Voter};
//! use core_kernel::VoterId;
//! use std::sync::Arc;
//!
//! let create = CreateAdapter::new(repository);
//! create.create_voter(Voter::new(VoterId::new(1), "Ada", "ada@x.com")).await?;
//! ```

pub mod create;
pub mod delete;
pub mod ports;
pub mod read;
pub mod update;
pub mod validation;
pub mod voter;

pub use create::CreateAdapter;
pub use delete::DeleteAdapter;
pub use ports::{CreateRepository, DeleteRepository, ReadRepository, UpdateRepository};
pub use read::ReadAdapter;
pub use update::UpdateAdapter;
pub use voter::{Voter, VoterHistory};
