#![no_std]

mod contract;
mod events;
mod storage;
mod types;

pub use contract::{VotingContract, VotingContractClient};
pub use shared::{VotingError, WorkflowStatus};
pub use types::{Proposal, Voter};
