use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

const DAY_IN_LEDGERS: u32 = 17_280;
// Listings are kept as a permanent record, so keep them well clear of archival.
const LISTING_TTL_THRESHOLD: u32 = 90 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;

fn extend_instance(env: &Env) {
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD.min(max_ttl), max_ttl);
}

fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl::<K>(key, LISTING_TTL_THRESHOLD.min(max_ttl), max_ttl);
}

// PERSISTENT STORAGE
pub fn store_persistent<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, val);
    extend_persistent(env, key);
}

pub fn get_persistent<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().persistent().get(key)
}

// INSTANCE STORAGE
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    extend_instance(env);
}

pub fn get_data<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}

pub fn has_data<K>(env: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    env.storage().instance().has(key)
}
