//! Validation helpers for voting inputs
//!
//! Checks here run before any storage is touched, so a rejected call leaves
//! no trace.

use soroban_sdk::String;

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_PAGE_SIZE, MAX_PROPOSALS};
use crate::errors::VotingError;

/// Validate a proposal description
///
/// # Returns
/// `Err(VotingError::DescriptionTooLong)` above `MAX_DESCRIPTION_LEN` bytes,
/// `Err(VotingError::EmptyDescription)` if nothing is left after trimming
/// whitespace, `Ok(())` otherwise
pub fn validate_description(description: &String) -> Result<(), VotingError> {
    let len = description.len();
    if len > MAX_DESCRIPTION_LEN {
        return Err(VotingError::DescriptionTooLong);
    }

    let mut buf = [0u8; MAX_DESCRIPTION_LEN as usize];
    let bytes = &mut buf[..len as usize];
    description.copy_into_slice(bytes);

    // Non-UTF-8 input has no whitespace interpretation; treat it as content.
    match core::str::from_utf8(bytes) {
        Ok(text) if text.trim().is_empty() => Err(VotingError::EmptyDescription),
        _ => Ok(()),
    }
}

/// Validate that one more proposal fits alongside `count` stored ones
pub fn validate_proposal_capacity(count: u32) -> Result<(), VotingError> {
    if count >= MAX_PROPOSALS {
        return Err(VotingError::TooManyProposals);
    }
    Ok(())
}

/// Validate a pagination limit
pub fn validate_page_limit(limit: u32) -> Result<(), VotingError> {
    if limit == 0 || limit > MAX_PAGE_SIZE {
        return Err(VotingError::LimitExceeded);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn description_with_text_is_accepted() {
        let env = Env::default();
        let description = String::from_str(&env, "Proposal X");
        assert_eq!(validate_description(&description), Ok(()));
    }

    #[test]
    fn surrounding_whitespace_is_allowed() {
        let env = Env::default();
        let description = String::from_str(&env, "  padded  \n");
        assert_eq!(validate_description(&description), Ok(()));
    }

    #[test]
    fn empty_and_blank_descriptions_are_rejected() {
        let env = Env::default();
        for raw in ["", " ", "\t\n  ", "\u{a0}\u{2003}"] {
            let description = String::from_str(&env, raw);
            assert_eq!(
                validate_description(&description),
                Err(VotingError::EmptyDescription)
            );
        }
    }

    #[test]
    fn description_length_is_capped() {
        let env = Env::default();
        let at_cap = [b'a'; MAX_DESCRIPTION_LEN as usize];
        let over_cap = [b'a'; MAX_DESCRIPTION_LEN as usize + 1];

        let ok = String::from_bytes(&env, &at_cap);
        let too_long = String::from_bytes(&env, &over_cap);

        assert_eq!(validate_description(&ok), Ok(()));
        assert_eq!(
            validate_description(&too_long),
            Err(VotingError::DescriptionTooLong)
        );
    }

    #[test]
    fn proposal_capacity_stops_at_cap() {
        assert_eq!(validate_proposal_capacity(0), Ok(()));
        assert_eq!(validate_proposal_capacity(MAX_PROPOSALS - 1), Ok(()));
        assert_eq!(
            validate_proposal_capacity(MAX_PROPOSALS),
            Err(VotingError::TooManyProposals)
        );
    }

    #[test]
    fn page_limit_bounds() {
        assert_eq!(validate_page_limit(0), Err(VotingError::LimitExceeded));
        assert_eq!(validate_page_limit(1), Ok(()));
        assert_eq!(validate_page_limit(MAX_PAGE_SIZE), Ok(()));
        assert_eq!(
            validate_page_limit(MAX_PAGE_SIZE + 1),
            Err(VotingError::LimitExceeded)
        );
    }
}
