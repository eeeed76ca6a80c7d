use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

// Roughly one day of ledgers at 5s close time.
const DAY_IN_LEDGERS: u32 = 17_280;
const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;

fn extend_instance(env: &Env) {
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD.min(max_ttl), max_ttl);
}

fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl::<K>(key, TTL_THRESHOLD.min(max_ttl), max_ttl);
}

// PERSISTENT STORAGE (per token records)
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

pub fn remove_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage().persistent().remove(key)
}

pub fn has_persistent<K>(env: &Env, key: &K) -> bool
where
    K: IntoVal<Env, Val>,
{
    env.storage().persistent().has(key)
}

// INSTANCE STORAGE (config and counters)
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
