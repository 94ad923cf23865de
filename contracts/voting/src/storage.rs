use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::WorkflowStatus;
use soroban_sdk::{Address, Env, String};

use crate::types::{DataKey, Proposal, Voter};

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Workflow Status ──────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> Option<WorkflowStatus> {
    env.storage().instance().get(&DataKey::Status)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
    bump_instance(env);
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, address: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(address.clone()))
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Store a new proposal under the next sequential id and return that id.
pub fn push_proposal(env: &Env, description: String) -> u32 {
    let id = get_proposal_count(env);
    save_proposal(
        env,
        &Proposal {
            id,
            description,
            vote_count: 0,
        },
    );
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(id + 1));
    bump_instance(env);
    id
}

// ── Tally ────────────────────────────────────────────────────────────────────

pub fn get_winning_proposal_id(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::WinningProposalId)
}

pub fn set_winning_proposal_id(env: &Env, proposal_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposalId, &proposal_id);
    bump_instance(env);
}
