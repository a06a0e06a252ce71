//! Core Kernel - Foundational types for the voter system
//!
//! This crate provides the building blocks shared by every layer:
//! - Strongly-typed integer identifiers for voters and polls
//! - The error taxonomy that all ports and adapters report

pub mod error;
pub mod identifiers;

pub use error::AdapterError;
pub use identifiers::{PollId, VoterId};
