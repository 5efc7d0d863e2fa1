#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]

use crate::{ContractError, MedicalRecordsContract, MedicalRecordsContractClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec, Address, Env, String};

struct Fixture {
    env: Env,
    client: MedicalRecordsContractClient<'static>,
    owner: Address,
    patient: Address,
}

fn setup() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &None);

    let patient = Address::generate(&env);
    client.authorize(&owner, &patient);

    Fixture {
        env,
        client,
        owner,
        patient,
    }
}

impl Fixture {
    fn s(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    fn add(&self, caller: &Address, id: &str) -> u32 {
        self.client.add_record(
            caller,
            &self.s(id),
            &self.s("0xabc"),
            &self.s("lab"),
            &self.s("{\"mime\":\"application/pdf\"}"),
        )
    }

    fn try_add(&self, caller: &Address, id: &str, hash: &str) -> ContractError {
        self.client
            .try_add_record(caller, &self.s(id), &self.s(hash), &self.s("lab"), &self.s(""))
            .unwrap_err()
            .unwrap()
    }
}

#[test]
fn test_indices_follow_count() {
    let f = setup();

    for expected in 0..5u32 {
        let id = ["a", "b", "c", "d", "e"][expected as usize];
        assert_eq!(f.add(&f.patient, id), expected);
        assert_eq!(f.client.get_record_count(&f.patient), expected + 1);
    }
    assert_eq!(f.client.get_total_records(), 5);
}

#[test]
fn test_empty_id_or_hash_rejected() {
    let f = setup();

    assert_eq!(
        f.try_add(&f.patient, "", "0xabc"),
        ContractError::InvalidArgument
    );
    assert_eq!(
        f.try_add(&f.patient, "REC-1", ""),
        ContractError::InvalidArgument
    );
    assert_eq!(f.client.get_record_count(&f.patient), 0);
    assert!(!f.client.record_exists(&f.s("REC-1")));
}

#[test]
fn test_duplicate_id_rejected_across_owners() {
    let f = setup();
    let other = Address::generate(&f.env);
    f.client.authorize(&f.owner, &other);

    f.add(&f.patient, "REC-1");

    assert_eq!(
        f.try_add(&f.patient, "REC-1", "0xdef"),
        ContractError::AlreadyExists
    );
    assert_eq!(
        f.try_add(&other, "REC-1", "0xdef"),
        ContractError::AlreadyExists
    );
    assert_eq!(f.client.get_record_count(&other), 0);
    assert_eq!(f.client.get_total_records(), 1);

    // A fresh id is fine for any writer.
    assert_eq!(f.add(&other, "REC-2"), 0);
}

#[test]
fn test_deactivated_id_stays_reserved() {
    let f = setup();

    f.add(&f.patient, "REC-1");
    f.client.deactivate_record(&f.patient, &0);

    assert_eq!(
        f.try_add(&f.patient, "REC-1", "0xabc"),
        ContractError::AlreadyExists
    );
}

#[test]
fn test_update_replaces_hash_and_metadata_only() {
    let f = setup();

    f.env.ledger().set_timestamp(1_000);
    f.add(&f.patient, "REC-1");

    f.env.ledger().set_timestamp(2_000);
    f.client.update_record(&f.patient, &0, &f.s("0xnew"), &f.s("{\"v\":2}"));

    let record = f.client.get_record(&f.patient, &f.patient, &0);
    assert_eq!(record.encrypted_data_hash, f.s("0xnew"));
    assert_eq!(record.metadata, f.s("{\"v\":2}"));
    assert_eq!(record.record_id, f.s("REC-1"));
    assert_eq!(record.record_type, f.s("lab"));
    assert_eq!(record.uploaded_by, f.patient);
    assert_eq!(record.timestamp, 1_000);
    assert!(record.is_active);
}

#[test]
fn test_update_errors() {
    let f = setup();
    f.add(&f.patient, "REC-1");

    let res = f
        .client
        .try_update_record(&f.patient, &1, &f.s("0xnew"), &f.s(""));
    assert_eq!(res.unwrap_err().unwrap(), ContractError::OutOfRange);

    let res = f.client.try_update_record(&f.patient, &0, &f.s(""), &f.s(""));
    assert_eq!(res.unwrap_err().unwrap(), ContractError::InvalidArgument);

    f.client.deactivate_record(&f.patient, &0);
    let res = f
        .client
        .try_update_record(&f.patient, &0, &f.s("0xnew"), &f.s("changed"));
    assert_eq!(res.unwrap_err().unwrap(), ContractError::InvalidState);

    let record = f.client.get_record(&f.patient, &f.patient, &0);
    assert_eq!(record.encrypted_data_hash, f.s("0xabc"));
    assert_eq!(record.metadata, f.s("{\"mime\":\"application/pdf\"}"));
}

#[test]
fn test_update_targets_caller_sequence_only() {
    let f = setup();
    let other = Address::generate(&f.env);
    f.client.authorize(&f.owner, &other);

    f.add(&f.patient, "REC-1");

    // `other` has no records, so index 0 is out of range for them.
    let res = f
        .client
        .try_update_record(&other, &0, &f.s("0xevil"), &f.s(""));
    assert_eq!(res.unwrap_err().unwrap(), ContractError::OutOfRange);
    let res = f.client.try_deactivate_record(&other, &0);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::OutOfRange);

    let record = f.client.get_record(&f.patient, &f.patient, &0);
    assert_eq!(record.encrypted_data_hash, f.s("0xabc"));
    assert!(record.is_active);
}

#[test]
fn test_deactivate_twice_fails() {
    let f = setup();
    f.add(&f.patient, "REC-1");

    f.client.deactivate_record(&f.patient, &0);
    let res = f.client.try_deactivate_record(&f.patient, &0);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::InvalidState);

    let record = f.client.get_record(&f.patient, &f.patient, &0);
    assert!(!record.is_active);
    assert_eq!(f.client.get_record_count(&f.patient), 1);
}

#[test]
fn test_deactivate_out_of_range() {
    let f = setup();

    let res = f.client.try_deactivate_record(&f.patient, &0);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::OutOfRange);
}

#[test]
fn test_record_ids_skip_inactive_in_order() {
    let f = setup();

    f.add(&f.patient, "r1");
    f.add(&f.patient, "r2");
    f.add(&f.patient, "r3");
    f.client.deactivate_record(&f.patient, &1);

    assert_eq!(
        f.client.get_record_ids(&f.patient, &f.patient),
        vec![&f.env, f.s("r1"), f.s("r3")]
    );
    assert_eq!(f.client.get_record_count(&f.patient), 3);

    // Inactive records are still readable by index.
    let record = f.client.get_record(&f.patient, &f.patient, &1);
    assert_eq!(record.record_id, f.s("r2"));
    assert!(!record.is_active);
}

#[test]
fn test_get_record_out_of_range() {
    let f = setup();

    let res = f.client.try_get_record(&f.patient, &f.patient, &0);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::OutOfRange);
}

#[test]
fn test_empty_owner_has_no_ids() {
    let f = setup();

    assert_eq!(f.client.get_record_ids(&f.patient, &f.patient).len(), 0);
}
