//! Record lifecycle: add, update, deactivate and the private reads.
//!
//! Every write checks initialization and the writer gate first, then its own
//! arguments and record state. Nothing is written until all checks pass.

use crate::{access, events, storage, ContractError, MedicalRecord};
use ledger_common::validation;
use soroban_sdk::{log, Address, Env, String, Vec};

/// Loads the caller's record at `index` or fails with `OutOfRange`.
fn load_own(env: &Env, owner: &Address, index: u32) -> Result<MedicalRecord, ContractError> {
    if index >= storage::record_count(env, owner) {
        return Err(ContractError::OutOfRange);
    }
    storage::load_record(env, owner, index).ok_or(ContractError::OutOfRange)
}

pub fn add_record(
    env: &Env,
    caller: &Address,
    record_id: String,
    data_hash: String,
    record_type: String,
    metadata: String,
) -> Result<u32, ContractError> {
    access::require_writer(env, caller)?;

    validation::validate_record_id(&record_id)?;
    validation::validate_data_hash(&data_hash)?;
    validation::validate_record_type(&record_type)?;
    validation::validate_metadata(&metadata)?;

    if storage::is_record_id_used(env, &record_id) {
        return Err(ContractError::AlreadyExists);
    }

    let timestamp = env.ledger().timestamp();
    let record = MedicalRecord {
        record_id: record_id.clone(),
        encrypted_data_hash: data_hash,
        record_type: record_type.clone(),
        timestamp,
        uploaded_by: caller.clone(),
        is_active: true,
        metadata,
    };

    let index = storage::append_record(env, caller, &record);
    storage::mark_record_id_used(env, &record_id);
    storage::increment_total(env);

    log!(env, "record added", caller.clone(), index);
    events::publish_record_added(
        env,
        caller.clone(),
        record_id,
        record_type,
        timestamp,
        caller.clone(),
    );

    Ok(index)
}

pub fn update_record(
    env: &Env,
    caller: &Address,
    index: u32,
    data_hash: String,
    metadata: String,
) -> Result<(), ContractError> {
    access::require_writer(env, caller)?;

    let mut record = load_own(env, caller, index)?;
    if !record.is_active {
        return Err(ContractError::InvalidState);
    }

    validation::validate_data_hash(&data_hash)?;
    validation::validate_metadata(&metadata)?;

    // Creation time stays; the event carries the update time.
    record.encrypted_data_hash = data_hash;
    record.metadata = metadata;
    storage::save_record(env, caller, index, &record);

    events::publish_record_updated(env, caller.clone(), index, record.record_id);

    Ok(())
}

pub fn deactivate_record(env: &Env, caller: &Address, index: u32) -> Result<(), ContractError> {
    access::require_writer(env, caller)?;

    let mut record = load_own(env, caller, index)?;
    if !record.is_active {
        return Err(ContractError::InvalidState);
    }

    record.is_active = false;
    storage::save_record(env, caller, index, &record);

    log!(env, "record deactivated", caller.clone(), index);
    events::publish_record_deactivated(env, caller.clone(), index, record.record_id);

    Ok(())
}

pub fn get_record(
    env: &Env,
    caller: &Address,
    owner: &Address,
    index: u32,
) -> Result<MedicalRecord, ContractError> {
    access::require_reader(env, caller, owner)?;
    load_own(env, owner, index)
}

pub fn get_record_ids(
    env: &Env,
    caller: &Address,
    owner: &Address,
) -> Result<Vec<String>, ContractError> {
    access::require_reader(env, caller, owner)?;

    let mut ids = Vec::new(env);
    for index in 0..storage::record_count(env, owner) {
        if let Some(record) = storage::load_record(env, owner, index) {
            if record.is_active {
                ids.push_back(record.record_id);
            }
        }
    }

    Ok(ids)
}
