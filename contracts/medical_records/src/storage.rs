//! Ledger storage: the owner singleton, the writer allow-list entries, the
//! per-owner append-only record sequences and the global record-id index.
//!
//! Singleton state lives in instance storage. Records, counts, ids and
//! allow-list entries live in persistent storage and are bumped on write.
//! Nothing here checks permissions; callers in `access` and `records` do.

use crate::MedicalRecord;
use ledger_common::ttl;
use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

const OWNER: Symbol = symbol_short!("OWNER");
const INITIALIZED: Symbol = symbol_short!("INIT");
const REGISTRY: Symbol = symbol_short!("REGISTRY");
const TOTAL_RECORDS: Symbol = symbol_short!("TOT_REC");

const RECORD: Symbol = symbol_short!("REC");
const RECORD_COUNT: Symbol = symbol_short!("REC_CNT");
const RECORD_ID: Symbol = symbol_short!("REC_ID");
const AUTHORIZED: Symbol = symbol_short!("AUTH");

fn record_key(owner: &Address, index: u32) -> (Symbol, Address, u32) {
    (RECORD, owner.clone(), index)
}

fn record_count_key(owner: &Address) -> (Symbol, Address) {
    (RECORD_COUNT, owner.clone())
}

fn record_id_key(record_id: &String) -> (Symbol, String) {
    (RECORD_ID, record_id.clone())
}

fn authorized_key(user: &Address) -> (Symbol, Address) {
    (AUTHORIZED, user.clone())
}

// -----------------------------------------------------------------------
// Singleton state
// -----------------------------------------------------------------------

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&INITIALIZED, &true);
    ttl::extend_instance(env);
}

pub fn owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
    ttl::extend_instance(env);
}

pub fn registry(env: &Env) -> Option<Address> {
    env.storage().instance().get(&REGISTRY)
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&REGISTRY, registry);
    ttl::extend_instance(env);
}

pub fn total_records(env: &Env) -> u64 {
    env.storage().instance().get(&TOTAL_RECORDS).unwrap_or(0)
}

pub fn increment_total(env: &Env) -> u64 {
    let total = total_records(env).saturating_add(1);
    env.storage().instance().set(&TOTAL_RECORDS, &total);
    ttl::extend_instance(env);
    total
}

// -----------------------------------------------------------------------
// Writer allow-list
// -----------------------------------------------------------------------

pub fn is_listed(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&authorized_key(user))
        .unwrap_or(false)
}

pub fn set_listed(env: &Env, user: &Address, listed: bool) {
    let key = authorized_key(user);
    if listed {
        env.storage().persistent().set(&key, &true);
        ttl::extend_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// -----------------------------------------------------------------------
// Record sequences
// -----------------------------------------------------------------------

pub fn record_count(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&record_count_key(owner))
        .unwrap_or(0)
}

pub fn load_record(env: &Env, owner: &Address, index: u32) -> Option<MedicalRecord> {
    env.storage().persistent().get(&record_key(owner, index))
}

/// Overwrites the record at an existing index.
pub fn save_record(env: &Env, owner: &Address, index: u32, record: &MedicalRecord) {
    let key = record_key(owner, index);
    env.storage().persistent().set(&key, record);
    ttl::extend_persistent(env, &key);
}

/// Stores `record` at index `count` and bumps the count by one.
/// Returns the new record's index.
pub fn append_record(env: &Env, owner: &Address, record: &MedicalRecord) -> u32 {
    let index = record_count(env, owner);
    save_record(env, owner, index, record);

    let count_key = record_count_key(owner);
    env.storage()
        .persistent()
        .set(&count_key, &index.saturating_add(1));
    ttl::extend_persistent(env, &count_key);

    index
}

// -----------------------------------------------------------------------
// Global record-id index
// -----------------------------------------------------------------------

pub fn is_record_id_used(env: &Env, record_id: &String) -> bool {
    env.storage().persistent().has(&record_id_key(record_id))
}

pub fn mark_record_id_used(env: &Env, record_id: &String) {
    let key = record_id_key(record_id);
    env.storage().persistent().set(&key, &true);
    ttl::extend_persistent(env, &key);
}
