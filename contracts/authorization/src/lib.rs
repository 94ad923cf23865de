//! Ownership control for the voting workflow
//!
//! A single admin address owns the contract. This module stores it, answers
//! "is this caller the admin", and hands ownership over on request.
//!
//! Identity is verified by the host (`Address::require_auth`); the checks here
//! only compare an already-verified caller against the stored admin.

#![no_std]

use shared::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use shared::VotingError;
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for ownership data
#[contracttype]
#[derive(Clone)]
pub enum RoleKey {
    /// Contract-level admin address
    ContractAdmin,
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    Unauthorized,
    NotInitialized,
}

impl From<AuthError> for VotingError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => VotingError::NotAuthorized,
            AuthError::NotInitialized => VotingError::NotInitialized,
        }
    }
}

/// Store the admin address (deployment and transfers)
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&RoleKey::ContractAdmin, admin);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Get the contract admin address
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RoleKey::ContractAdmin)
}

/// Require that `address` is the admin
///
/// # Returns
/// The admin address, `AuthError::NotInitialized` if no admin is stored,
/// `AuthError::Unauthorized` if `address` is someone else
pub fn require_admin(env: &Env, address: &Address) -> Result<Address, AuthError> {
    let admin = get_admin(env).ok_or(AuthError::NotInitialized)?;
    if admin != *address {
        return Err(AuthError::Unauthorized);
    }
    Ok(admin)
}

/// Verify the caller's identity, then require admin privileges.
/// Use this at the top of every admin-only entry point.
pub fn verify_and_require_admin(env: &Env, caller: &Address) -> Result<Address, AuthError> {
    caller.require_auth();
    require_admin(env, caller)
}

/// Hand ownership to `new_admin`. Returns the previous admin.
pub fn transfer_admin(
    env: &Env,
    caller: &Address,
    new_admin: &Address,
) -> Result<Address, AuthError> {
    let previous = require_admin(env, caller)?;
    set_admin(env, new_admin);
    Ok(previous)
}
