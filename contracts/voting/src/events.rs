//! Notifications published on every successful state change.

// `publish` is deprecated in favour of `#[contractevent]` types; the topic
// layout here is the published wire format and stays as is.
#![allow(deprecated)]

use shared::WorkflowStatus;
use soroban_sdk::{symbol_short, Address, Env};

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("voter_reg"), voter.clone()), ());
}

pub fn proposal_registered(env: &Env, proposal_id: u32, proposer: &Address) {
    env.events()
        .publish((symbol_short!("prop_reg"), proposal_id), proposer.clone());
}

pub fn vote_cast(env: &Env, voter: &Address, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("vote_cast"), voter.clone()), proposal_id);
}

pub fn phase_changed(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events()
        .publish((symbol_short!("phase"),), (previous, new));
}

pub fn admin_transferred(env: &Env, previous: &Address, new: &Address) {
    env.events().publish(
        (symbol_short!("adm_xfer"),),
        (previous.clone(), new.clone()),
    );
}
