use soroban_sdk::{contracttype, Address, String};

/// Whitelist entry for a participant
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    /// Set once the admin registers the address
    pub is_registered: bool,
    /// Set once the voter casts their vote
    pub has_voted: bool,
    /// Meaningful only when `has_voted` is true
    pub voted_proposal_id: u32,
}

impl Voter {
    /// A freshly whitelisted voter
    pub fn registered() -> Self {
        Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }

    /// The record reported for an address the admin never registered
    pub fn unregistered() -> Self {
        Voter {
            is_registered: false,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }
}

/// A submitted proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Sequential id in submission order, 0 is the genesis placeholder
    pub id: u32,
    pub description: String,
    pub vote_count: u32,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Status,
    ProposalCount,
    WinningProposalId,
    Voter(Address),
    Proposal(u32),
}
