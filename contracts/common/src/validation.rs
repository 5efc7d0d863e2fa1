//! Bounds checks for caller-supplied strings.
//!
//! Identifiers and data references must be present; tags and metadata are
//! free-form and may be empty, but every field is capped so a single record
//! cannot bloat a storage entry.

use crate::CommonError;
use soroban_sdk::String;

pub const MAX_RECORD_ID_LEN: u32 = 64;
pub const MAX_DATA_HASH_LEN: u32 = 256;
pub const MAX_RECORD_TYPE_LEN: u32 = 64;
pub const MAX_METADATA_LEN: u32 = 4096;

fn validate_required(value: &String, max_len: u32) -> Result<(), CommonError> {
    let len = value.len();
    if len == 0 || len > max_len {
        return Err(CommonError::InvalidInput);
    }
    Ok(())
}

fn validate_optional(value: &String, max_len: u32) -> Result<(), CommonError> {
    if value.len() > max_len {
        return Err(CommonError::InvalidInput);
    }
    Ok(())
}

/// Record ids are required and globally unique.
pub fn validate_record_id(record_id: &String) -> Result<(), CommonError> {
    validate_required(record_id, MAX_RECORD_ID_LEN)
}

/// The encrypted-data reference (hash or IPFS CID) is required.
pub fn validate_data_hash(data_hash: &String) -> Result<(), CommonError> {
    validate_required(data_hash, MAX_DATA_HASH_LEN)
}

pub fn validate_record_type(record_type: &String) -> Result<(), CommonError> {
    validate_optional(record_type, MAX_RECORD_TYPE_LEN)
}

pub fn validate_metadata(metadata: &String) -> Result<(), CommonError> {
    validate_optional(metadata, MAX_METADATA_LEN)
}
