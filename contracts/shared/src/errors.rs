//! Error types for the voting workflow
//!
//! Every entry point reports failures through `VotingError`. Codes are stable
//! and grouped by category so that off-chain callers can match on them.

use soroban_sdk::contracterror;

/// Failure kinds reported by the voting workflow
///
/// Error ranges:
/// - 1-9: Setup errors
/// - 10-19: Access control errors
/// - 20-29: Workflow errors
/// - 30-39: Voter errors
/// - 40-59: Proposal errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    // ===== Setup Errors (1-9) =====
    /// Admin or workflow status missing from storage
    NotInitialized = 1,

    // ===== Access Control Errors (10-19) =====
    /// Caller is not the admin for an admin-only operation
    NotAuthorized = 10,

    /// Caller is not a registered voter
    NotWhitelisted = 11,

    // ===== Workflow Errors (20-29) =====
    /// Operation is not legal in the current workflow status
    PhaseViolation = 20,

    /// Winner requested before votes were tallied
    TallyNotDone = 21,

    // ===== Voter Errors (30-39) =====
    /// Address is already on the whitelist
    AlreadyRegistered = 30,

    /// Voter has already cast their vote
    AlreadyVoted = 31,

    // ===== Proposal Errors (40-59) =====
    /// Description is empty or whitespace only
    EmptyDescription = 40,

    /// Description exceeds `MAX_DESCRIPTION_LEN`
    DescriptionTooLong = 41,

    /// No proposal with the requested id
    ProposalNotFound = 42,

    /// Proposal storage reached `MAX_PROPOSALS`
    TooManyProposals = 43,

    /// Page limit is zero or above `MAX_PAGE_SIZE`
    LimitExceeded = 44,
}
