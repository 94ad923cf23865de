//! Workflow status shared by the voting contract and its clients
//!
//! The status only ever moves to its immediate successor. Legal moves are
//! listed in one place, `WorkflowStatus::next`, rather than derived from the
//! numeric discriminants.

use soroban_sdk::contracttype;

use crate::errors::VotingError;

/// Phase of the voting process
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum WorkflowStatus {
    /// Admin whitelists voters (initial)
    RegisteringVoters = 0,
    /// Registered voters submit proposals
    ProposalsRegistrationStarted = 1,
    /// Proposal submission closed, voting not yet open
    ProposalsRegistrationEnded = 2,
    /// Registered voters cast one vote each
    VotingSessionStarted = 3,
    /// Voting closed, awaiting tally
    VotingSessionEnded = 4,
    /// Winner stored (terminal)
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// The only status this one may advance to, `None` when terminal.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }

    /// Validate a move from `self` to `target`.
    ///
    /// # Returns
    /// `Ok(target)` if `target` is the immediate successor,
    /// `Err(VotingError::PhaseViolation)` otherwise
    pub fn advance_to(self, target: WorkflowStatus) -> Result<WorkflowStatus, VotingError> {
        match self.next() {
            Some(next) if next == target => Ok(target),
            _ => Err(VotingError::PhaseViolation),
        }
    }

    /// Require the current status to be `expected`.
    pub fn require(self, expected: WorkflowStatus) -> Result<(), VotingError> {
        if self != expected {
            return Err(VotingError::PhaseViolation);
        }
        Ok(())
    }
}
