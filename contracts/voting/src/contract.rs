use shared::constants::GENESIS_PROPOSAL_ID;
use shared::{
    validate_description, validate_page_limit, validate_proposal_capacity, VotingError,
    WorkflowStatus,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use crate::{
    events, storage,
    types::{Proposal, Voter},
};

/// Phase-gated voting workflow.
///
/// The admin whitelists voters, opens and closes the proposal and voting
/// windows, then tallies. Whitelisted voters submit proposals and cast one
/// vote each. Every entry point validates caller and phase before writing.
#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Bind the admin at deployment and open voter registration.
    ///
    /// Runs exactly once, as part of the deploy transaction, so no other
    /// caller can claim the admin role in between.
    pub fn __constructor(env: Env, admin: Address) {
        authorization::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);

        log!(&env, "voting deployed", admin);
    }

    /// Hand the admin role to another address. Allowed in any phase.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), VotingError> {
        caller.require_auth();
        let previous = authorization::transfer_admin(&env, &caller, &new_admin)?;

        events::admin_transferred(&env, &previous, &new_admin);
        log!(&env, "admin transferred", previous, new_admin);
        Ok(())
    }

    // ── Voters ───────────────────────────────────────────────────────────────

    /// Whitelist `voter`. Admin only, during `RegisteringVoters`.
    pub fn register_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        authorization::verify_and_require_admin(&env, &caller)?;
        Self::current_status(&env)?.require(WorkflowStatus::RegisteringVoters)?;

        if storage::get_voter(&env, &voter).map_or(false, |v| v.is_registered) {
            return Err(VotingError::AlreadyRegistered);
        }

        storage::save_voter(&env, &voter, &Voter::registered());

        events::voter_registered(&env, &voter);
        log!(&env, "voter registered", voter);
        Ok(())
    }

    /// Read the record of `voter`. The caller must be whitelisted; an address
    /// that was never registered yields `Voter::unregistered()`.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        Self::require_voter(&env, &caller)?;
        Ok(storage::get_voter(&env, &voter).unwrap_or_else(Voter::unregistered))
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Open proposal registration and create the genesis proposal (id 0).
    pub fn start_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        let previous = Self::begin_transition(
            &env,
            &caller,
            WorkflowStatus::ProposalsRegistrationStarted,
        )?;

        let genesis_id = storage::push_proposal(&env, String::from_str(&env, ""));
        debug_assert_eq!(genesis_id, GENESIS_PROPOSAL_ID);

        Self::commit_transition(&env, previous, WorkflowStatus::ProposalsRegistrationStarted);
        Ok(())
    }

    /// Submit a proposal and return its id.
    ///
    /// Checks run in this order: whitelist, phase, description, capacity.
    pub fn add_proposal(env: Env, caller: Address, description: String) -> Result<u32, VotingError> {
        Self::require_voter(&env, &caller)?;
        Self::current_status(&env)?.require(WorkflowStatus::ProposalsRegistrationStarted)?;
        validate_description(&description)?;
        validate_proposal_capacity(storage::get_proposal_count(&env))?;

        let proposal_id = storage::push_proposal(&env, description);

        events::proposal_registered(&env, proposal_id, &caller);
        log!(&env, "proposal registered", proposal_id, caller);
        Ok(proposal_id)
    }

    pub fn get_proposal(env: Env, caller: Address, proposal_id: u32) -> Result<Proposal, VotingError> {
        Self::require_voter(&env, &caller)?;
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)
    }

    /// List up to `limit` proposals starting at `from_id`, ascending.
    /// At most `MAX_PAGE_SIZE` per call to stay within the instruction budget.
    pub fn get_proposals(
        env: Env,
        caller: Address,
        from_id: u32,
        limit: u32,
    ) -> Result<Vec<Proposal>, VotingError> {
        Self::require_voter(&env, &caller)?;
        validate_page_limit(limit)?;

        let end = from_id
            .saturating_add(limit)
            .min(storage::get_proposal_count(&env));
        let mut proposals = Vec::new(&env);
        for proposal_id in from_id..end {
            if let Some(proposal) = storage::get_proposal(&env, proposal_id) {
                proposals.push_back(proposal);
            }
        }
        Ok(proposals)
    }

    /// Number of stored proposals, genesis included.
    pub fn get_proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    pub fn end_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::advance(&env, &caller, WorkflowStatus::ProposalsRegistrationEnded)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::advance(&env, &caller, WorkflowStatus::VotingSessionStarted)
    }

    /// Cast the caller's single vote for `proposal_id`.
    pub fn cast_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        let mut voter = Self::require_voter(&env, &caller)?;
        Self::current_status(&env)?.require(WorkflowStatus::VotingSessionStarted)?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }
        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        proposal.vote_count += 1;
        storage::save_voter(&env, &caller, &voter);
        storage::save_proposal(&env, &proposal);

        events::vote_cast(&env, &caller, proposal_id);
        log!(&env, "vote cast", caller, proposal_id);
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::advance(&env, &caller, WorkflowStatus::VotingSessionEnded)
    }

    // ── Tally ────────────────────────────────────────────────────────────────

    /// Store the proposal with the most votes and close the workflow.
    /// Ties go to the lowest id. Returns the winning id.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, VotingError> {
        let previous = Self::begin_transition(&env, &caller, WorkflowStatus::VotesTallied)?;

        let winning_id = Self::leading_proposal(&env);
        storage::set_winning_proposal_id(&env, winning_id);

        log!(&env, "votes tallied", winning_id);
        Self::commit_transition(&env, previous, WorkflowStatus::VotesTallied);
        Ok(winning_id)
    }

    pub fn get_winner(env: Env) -> Result<Proposal, VotingError> {
        let winning_id = Self::get_winning_proposal_id(env.clone())?;
        storage::get_proposal(&env, winning_id).ok_or(VotingError::ProposalNotFound)
    }

    pub fn get_winning_proposal_id(env: Env) -> Result<u32, VotingError> {
        if Self::current_status(&env)? != WorkflowStatus::VotesTallied {
            return Err(VotingError::TallyNotDone);
        }
        storage::get_winning_proposal_id(&env).ok_or(VotingError::TallyNotDone)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        authorization::get_admin(&env).ok_or(VotingError::NotInitialized)
    }

    pub fn get_workflow_status(env: Env) -> Result<WorkflowStatus, VotingError> {
        Self::current_status(&env)
    }
}

impl VotingContract {
    fn current_status(env: &Env) -> Result<WorkflowStatus, VotingError> {
        storage::get_status(env).ok_or(VotingError::NotInitialized)
    }

    /// Verify the caller and require them to be whitelisted.
    fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
        caller.require_auth();
        storage::get_voter(env, caller)
            .filter(|voter| voter.is_registered)
            .ok_or(VotingError::NotWhitelisted)
    }

    /// Admin check, then phase check. Returns the status being left.
    fn begin_transition(
        env: &Env,
        caller: &Address,
        target: WorkflowStatus,
    ) -> Result<WorkflowStatus, VotingError> {
        authorization::verify_and_require_admin(env, caller)?;
        let previous = Self::current_status(env)?;
        previous.advance_to(target)?;
        Ok(previous)
    }

    fn commit_transition(env: &Env, previous: WorkflowStatus, next: WorkflowStatus) {
        storage::set_status(env, next);
        events::phase_changed(env, previous, next);
        log!(env, "workflow status changed", previous, next);
    }

    fn advance(env: &Env, caller: &Address, target: WorkflowStatus) -> Result<(), VotingError> {
        let previous = Self::begin_transition(env, caller, target)?;
        Self::commit_transition(env, previous, target);
        Ok(())
    }

    /// Linear scan in ascending id order; the leader changes only on a
    /// strictly greater count.
    fn leading_proposal(env: &Env) -> u32 {
        let mut winning_id = GENESIS_PROPOSAL_ID;
        let mut winning_count = 0u32;

        for proposal_id in 0..storage::get_proposal_count(env) {
            if let Some(proposal) = storage::get_proposal(env, proposal_id) {
                if proposal.vote_count > winning_count {
                    winning_id = proposal_id;
                    winning_count = proposal.vote_count;
                }
            }
        }
        winning_id
    }
}
