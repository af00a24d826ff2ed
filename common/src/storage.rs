//! Thin wrappers over instance and persistent storage.
//!
//! Every write also bumps the entry's TTL to the network maximum, so a live
//! contract never has its configuration or listings archived under it.

use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

/// Roughly a week of ledgers at five seconds per ledger.
const TTL_SLACK: u32 = 60 * 60 * 24 / 5 * 7;

/// `(threshold, extend_to)` for `extend_ttl`: entries are only touched once
/// they drop a week below the maximum.
fn ttl_window(env: &Env) -> (u32, u32) {
    let max_ttl: u32 = env.storage().max_ttl();
    (max_ttl.saturating_sub(TTL_SLACK), max_ttl)
}

// PERSISTENT STORAGE
pub fn store_persistent<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    let (threshold, extend_to) = ttl_window(env);
    let persistent = env.storage().persistent();
    persistent.set(key, val);
    persistent.extend_ttl(key, threshold, extend_to);
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

// INSTANCE STORAGE
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    let (threshold, extend_to) = ttl_window(env);
    let instance = env.storage().instance();
    instance.set(key, val);
    instance.extend_ttl(threshold, extend_to);
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

pub fn remove_data<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage().instance().remove(key)
}
