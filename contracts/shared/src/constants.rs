//! Configuration constants for the voting workflow
//!
//! Limits bound the work a single invocation can do inside the host
//! instruction budget; TTL values keep ledger entries alive between phases.

// ===== Proposal Constants =====

/// Id of the placeholder proposal created when proposal registration opens
pub const GENESIS_PROPOSAL_ID: u32 = 0;

/// Maximum number of stored proposals, genesis included
pub const MAX_PROPOSALS: u32 = 1_000;

/// Maximum description length in bytes
pub const MAX_DESCRIPTION_LEN: u32 = 1_024;

/// Maximum page size for proposal listing
pub const MAX_PAGE_SIZE: u32 = 100;

// ===== Ledger TTL Constants =====
// At ~5s per ledger a day is 17,280 ledgers.

/// Ledgers per day
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage (admin, status, counters) is extended to one week
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;

/// Instance storage is re-extended once less than six days remain
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Voter and proposal records are extended to thirty days
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Records are re-extended once less than twenty-nine days remain
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
