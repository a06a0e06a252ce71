//! Domain precondition checks shared by the adapters
//!
//! Validation failures never reach the store; the adapters reject the call
//! with `InvalidArgument` before any repository round trip.

use core_kernel::{AdapterError, PollId, VoterId};

/// Rejects non-positive voter identifiers
pub fn require_valid_voter_id(id: VoterId) -> Result<(), AdapterError> {
    if !id.is_valid() {
        return Err(AdapterError::invalid_field(
            format!("voter id must be positive, got {id}"),
            "id",
        ));
    }
    Ok(())
}

/// Rejects non-positive poll identifiers
pub fn require_valid_poll_id(id: PollId) -> Result<(), AdapterError> {
    if !id.is_valid() {
        return Err(AdapterError::invalid_field(
            format!("poll id must be positive, got {id}"),
            "poll_id",
        ));
    }
    Ok(())
}

/// Rejects values that are empty after trimming; whitespace-only counts as blank
pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), AdapterError> {
    if value.trim().is_empty() {
        return Err(AdapterError::invalid_field(
            format!("voter {field} cannot be blank"),
            field,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_voter_id_bounds() {
        assert!(require_valid_voter_id(VoterId::new(1)).is_ok());
        assert!(require_valid_voter_id(VoterId::new(0)).is_err());
        assert!(require_valid_voter_id(VoterId::new(-7)).is_err());
    }

    #[test]
    fn test_poll_id_bounds() {
        assert!(require_valid_poll_id(PollId::new(10)).is_ok());
        assert!(require_valid_poll_id(PollId::new(0)).is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let error = require_non_blank("name", "   \t").unwrap_err();
        assert!(error.is_invalid_argument());
        assert!(require_non_blank("name", "Ada").is_ok());
    }

    proptest! {
        #[test]
        fn prop_whitespace_only_is_always_blank(value in r"[ \t\r\n]{0,32}") {
            prop_assert!(require_non_blank("email", &value).is_err());
        }

        #[test]
        fn prop_any_visible_character_passes(
            pad in r"[ \t]{0,8}",
            core in "[a-zA-Z0-9@.]{1,24}",
        ) {
            let value = format!("{pad}{core}{pad}");
            prop_assert!(require_non_blank("email", &value).is_ok());
        }
    }
}
