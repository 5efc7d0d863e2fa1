use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers closed per day at a ~5s close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Entries are bumped once their remaining TTL drops below this.
pub const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;

/// Target TTL after a bump.
pub const TTL_EXTEND_TO: u32 = 60 * DAY_IN_LEDGERS;

/// Extends the time-to-live (TTL) of a persistent storage entry.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the time-to-live (TTL) for instance storage.
/// Instance storage TTL applies to all keys in the instance storage.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
