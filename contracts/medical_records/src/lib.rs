#![no_std]

pub mod access;
pub mod errors;
pub mod events;
pub mod records;
pub mod storage;

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Vec};

pub use errors::{
    create_error_context, report_error, ContractError, ErrorCategory, ErrorContext,
    ErrorSeverity,
};

/// A single stored artifact: an encrypted-payload reference plus its tags.
///
/// The payload itself never reaches the ledger. `encrypted_data_hash` points
/// at ciphertext held off-chain and `metadata` is an opaque blob the
/// contract stores without parsing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalRecord {
    pub record_id: String,
    pub encrypted_data_hash: String,
    pub record_type: String,
    /// Ledger time at creation. Not refreshed by updates.
    pub timestamp: u64,
    pub uploaded_by: Address,
    pub is_active: bool,
    pub metadata: String,
}

#[contract]
pub struct MedicalRecordsContract;

#[contractimpl]
impl MedicalRecordsContract {
    /// Initialize the contract with its owner and an optional linked
    /// patient registry.
    pub fn initialize(
        env: Env,
        owner: Address,
        registry: Option<Address>,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        if storage::is_initialized(&env) {
            return Err(report_error(
                &env,
                ContractError::AlreadyInitialized,
                Some(owner),
                "initialize",
            ));
        }

        storage::set_owner(&env, &owner);
        if let Some(registry) = &registry {
            storage::set_registry(&env, registry);
        }
        storage::set_initialized(&env);

        events::publish_initialized(&env, owner, registry);

        Ok(())
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    /// Get the owner address
    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        storage::owner(&env).ok_or(ContractError::NotInitialized)
    }

    /// Get the linked registry, if one was set. Informational only.
    pub fn get_registry(env: Env) -> Option<Address> {
        storage::registry(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ======================== Authorization ========================

    /// Adds `patient` to the writer allow-list. Owner only.
    pub fn authorize(env: Env, caller: Address, patient: Address) -> Result<(), ContractError> {
        caller.require_auth();
        access::authorize(&env, &caller, &patient)
            .map_err(|e| report_error(&env, e, Some(caller), "authorize"))
    }

    /// Removes `patient` from the writer allow-list. Owner only.
    pub fn deauthorize(env: Env, caller: Address, patient: Address) -> Result<(), ContractError> {
        caller.require_auth();
        access::deauthorize(&env, &caller, &patient)
            .map_err(|e| report_error(&env, e, Some(caller), "deauthorize"))
    }

    /// Hands ownership to `new_owner`. The caller loses owner privileges
    /// as soon as this returns.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        access::transfer_ownership(&env, &caller, &new_owner)
            .map_err(|e| report_error(&env, e, Some(caller), "transfer_ownership"))
    }

    /// Re-points the informational registry link. Owner only.
    pub fn set_registry(env: Env, caller: Address, registry: Address) -> Result<(), ContractError> {
        caller.require_auth();
        access::set_registry(&env, &caller, &registry)
            .map_err(|e| report_error(&env, e, Some(caller), "set_registry"))
    }

    pub fn is_authorized(env: Env, user: Address) -> bool {
        access::is_authorized(&env, &user)
    }

    pub fn am_i_authorized(env: Env, caller: Address) -> bool {
        caller.require_auth();
        access::is_authorized(&env, &caller)
    }

    // ======================== Record lifecycle ========================

    /// Appends a record to the caller's sequence and returns its index.
    pub fn add_record(
        env: Env,
        caller: Address,
        record_id: String,
        data_hash: String,
        record_type: String,
        metadata: String,
    ) -> Result<u32, ContractError> {
        caller.require_auth();
        records::add_record(&env, &caller, record_id, data_hash, record_type, metadata)
            .map_err(|e| report_error(&env, e, Some(caller), "add_record"))
    }

    /// Replaces the data reference and metadata of an active record.
    pub fn update_record(
        env: Env,
        caller: Address,
        index: u32,
        data_hash: String,
        metadata: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        records::update_record(&env, &caller, index, data_hash, metadata)
            .map_err(|e| report_error(&env, e, Some(caller), "update_record"))
    }

    /// Soft-deletes a record. There is no way back to active.
    pub fn deactivate_record(env: Env, caller: Address, index: u32) -> Result<(), ContractError> {
        caller.require_auth();
        records::deactivate_record(&env, &caller, index)
            .map_err(|e| report_error(&env, e, Some(caller), "deactivate_record"))
    }

    /// Reads one record, active or not. Only the record owner or the
    /// contract owner may read.
    pub fn get_record(
        env: Env,
        caller: Address,
        owner: Address,
        index: u32,
    ) -> Result<MedicalRecord, ContractError> {
        caller.require_auth();
        records::get_record(&env, &caller, &owner, index)
            .map_err(|e| report_error(&env, e, Some(caller), "get_record"))
    }

    /// Ids of the owner's active records, in creation order.
    pub fn get_record_ids(
        env: Env,
        caller: Address,
        owner: Address,
    ) -> Result<Vec<String>, ContractError> {
        caller.require_auth();
        records::get_record_ids(&env, &caller, &owner)
            .map_err(|e| report_error(&env, e, Some(caller), "get_record_ids"))
    }

    pub fn get_record_count(env: Env, owner: Address) -> u32 {
        storage::record_count(&env, &owner)
    }

    pub fn get_total_records(env: Env) -> u64 {
        storage::total_records(&env)
    }

    /// Whether `record_id` has ever been used under any address.
    pub fn record_exists(env: Env, record_id: String) -> bool {
        storage::is_record_id_used(&env, &record_id)
    }

    /// Classification and user-facing message for an error code.
    pub fn get_error_info(env: Env, code: u32) -> Option<ErrorContext> {
        ContractError::from_code(code).map(|error| create_error_context(&env, error, None, None))
    }
}




#[cfg(test)]
mod test_records;
