//! Strongly-typed identifiers for domain entities
//!
//! Voter and poll identifiers are positive integers on the wire and in the
//! store. Newtype wrappers prevent accidental mixing of the two; the wrappers
//! serialize transparently, so a `VoterId` is just a number in JSON and a
//! `PollId` works as a JSON object key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $entity:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw integer identifier
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Identifiers are positive by contract; zero and negative values
            /// are rejected at the adapter boundary with `InvalidArgument`
            pub const fn is_valid(self) -> bool {
                self.0 > 0
            }

            /// Entity name used in error messages
            pub const fn entity() -> &'static str {
                $entity
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(VoterId, "voter");
define_id!(PollId, "poll");

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_validity() {
        assert!(VoterId::new(1).is_valid());
        assert!(!VoterId::new(0).is_valid());
        assert!(!PollId::new(-3).is_valid());
    }

    #[test]
    fn test_display_and_parse() {
        let id = VoterId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<VoterId>().unwrap(), id);
        assert!("nope".parse::<PollId>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&VoterId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: VoterId = serde_json::from_str("7").unwrap();
        assert_eq!(back, VoterId::new(7));
    }

    #[test]
    fn test_poll_id_as_map_key() {
        let mut map = HashMap::new();
        map.insert(PollId::new(10), "ballot".to_string());
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"10":"ballot"}"#);
        let back: HashMap<PollId, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&PollId::new(10)).map(String::as_str), Some("ballot"));
    }
}
