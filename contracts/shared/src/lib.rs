#![no_std]
//! # Shared Voting Library
//!
//! Types, errors, constants, and validation helpers used by the voting
//! workflow contract and its authorization layer.
//!
//! ## Modules
//!
//! - `errors` - The `VotingError` taxonomy reported by every entry point
//! - `types` - `WorkflowStatus` and its transition table
//! - `constants` - Limits and storage TTL configuration
//! - `validation` - Reusable input checks (descriptions, page limits)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::VotingError;
//! use shared::types::WorkflowStatus;
//! use shared::validation::validate_description;
//! use shared::constants::MAX_PROPOSALS;
//! ```

pub mod constants;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use errors::VotingError;
pub use types::WorkflowStatus;
pub use validation::{validate_description, validate_page_limit, validate_proposal_capacity};
