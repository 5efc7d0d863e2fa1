//! Authorization gate: the owner singleton and the writer allow-list.
//!
//! The owner is always a permitted writer whether or not it is listed.
//! Listing is managed by the owner alone.

use crate::{events, storage, ContractError};
use soroban_sdk::{Address, Env};

/// Soroban has no zero address. The contract's own address plays that role:
/// no external party can ever sign as it.
pub fn is_null_address(env: &Env, address: &Address) -> bool {
    *address == env.current_contract_address()
}

/// Returns the current owner, failing unless `caller` is that owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, ContractError> {
    let owner = storage::owner(env).ok_or(ContractError::NotInitialized)?;
    if *caller != owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(owner)
}

/// Owner or allow-list member.
pub fn is_authorized(env: &Env, user: &Address) -> bool {
    match storage::owner(env) {
        Some(owner) if owner == *user => true,
        _ => storage::is_listed(env, user),
    }
}

/// Gate for every record write.
pub fn require_writer(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if !storage::is_initialized(env) {
        return Err(ContractError::NotInitialized);
    }
    if !is_authorized(env, caller) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Gate for private reads of `owner`'s records: the record owner itself or
/// the contract owner. Allow-list membership grants nothing here.
pub fn require_reader(env: &Env, caller: &Address, owner: &Address) -> Result<(), ContractError> {
    let contract_owner = storage::owner(env).ok_or(ContractError::NotInitialized)?;
    if caller != owner && *caller != contract_owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn authorize(env: &Env, caller: &Address, patient: &Address) -> Result<(), ContractError> {
    require_owner(env, caller)?;
    if is_null_address(env, patient) {
        return Err(ContractError::InvalidArgument);
    }

    storage::set_listed(env, patient, true);
    events::publish_authorization_changed(env, patient.clone(), true);

    Ok(())
}

pub fn deauthorize(env: &Env, caller: &Address, patient: &Address) -> Result<(), ContractError> {
    require_owner(env, caller)?;

    storage::set_listed(env, patient, false);
    events::publish_authorization_changed(env, patient.clone(), false);

    Ok(())
}

pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), ContractError> {
    let previous_owner = require_owner(env, caller)?;
    if is_null_address(env, new_owner) {
        return Err(ContractError::InvalidArgument);
    }

    storage::set_owner(env, new_owner);
    events::publish_ownership_transferred(env, previous_owner, new_owner.clone());

    Ok(())
}

pub fn set_registry(env: &Env, caller: &Address, registry: &Address) -> Result<(), ContractError> {
    require_owner(env, caller)?;

    storage::set_registry(env, registry);
    events::publish_registry_set(env, registry.clone());

    Ok(())
}
