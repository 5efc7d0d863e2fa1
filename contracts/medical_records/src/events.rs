use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub registry: Option<Address>,
    pub timestamp: u64,
}

/// Event published when a record is appended to an owner's sequence.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAddedEvent {
    pub owner: Address,
    pub record_id: String,
    pub record_type: String,
    pub timestamp: u64,
    pub uploaded_by: Address,
}

/// Event published when a record's data reference and metadata are replaced.
/// `timestamp` is the time of the update; the record keeps its creation time.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordUpdatedEvent {
    pub owner: Address,
    pub index: u32,
    pub record_id: String,
    pub timestamp: u64,
}

/// Event published when a record is soft-deleted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordDeactivatedEvent {
    pub owner: Address,
    pub index: u32,
    pub record_id: String,
    pub timestamp: u64,
}

/// Event published when an address joins or leaves the writer allow-list.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizationChangedEvent {
    pub patient: Address,
    pub authorized: bool,
    pub timestamp: u64,
}

/// Event published when ownership moves to a new address.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrySetEvent {
    pub registry: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, owner: Address, registry: Option<Address>) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        owner,
        registry,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a new record is added.
/// Off-chain mirrors key on (owner, record_id) to confirm their copy.
pub fn publish_record_added(
    env: &Env,
    owner: Address,
    record_id: String,
    record_type: String,
    timestamp: u64,
    uploaded_by: Address,
) {
    let topics = (symbol_short!("REC_ADD"), owner.clone());
    let data = RecordAddedEvent {
        owner,
        record_id,
        record_type,
        timestamp,
        uploaded_by,
    };
    env.events().publish(topics, data);
}

pub fn publish_record_updated(env: &Env, owner: Address, index: u32, record_id: String) {
    let topics = (symbol_short!("REC_UPD"), owner.clone());
    let data = RecordUpdatedEvent {
        owner,
        index,
        record_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_record_deactivated(env: &Env, owner: Address, index: u32, record_id: String) {
    let topics = (symbol_short!("REC_DEACT"), owner.clone());
    let data = RecordDeactivatedEvent {
        owner,
        index,
        record_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes `PAT_AUTH` or `PAT_DAUTH` depending on the new membership state.
pub fn publish_authorization_changed(env: &Env, patient: Address, authorized: bool) {
    let tag = if authorized {
        symbol_short!("PAT_AUTH")
    } else {
        symbol_short!("PAT_DAUTH")
    };
    let topics = (tag, patient.clone());
    let data = AuthorizationChangedEvent {
        patient,
        authorized,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    let topics = (
        symbol_short!("OWN_XFER"),
        previous_owner.clone(),
        new_owner.clone(),
    );
    let data = OwnershipTransferredEvent {
        previous_owner,
        new_owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_registry_set(env: &Env, registry: Address) {
    let topics = (symbol_short!("REG_SET"),);
    let data = RegistrySetEvent {
        registry,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
