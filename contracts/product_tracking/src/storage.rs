//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the registry:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key          | Type  | Description                          |
//! |--------------|-------|--------------------------------------|
//! | `AdminCount` | `u32` | Number of actors holding `Role::Admin` |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                 | Type            | Description                        |
//! |---------------------|-----------------|------------------------------------|
//! | `Roles(addr)`       | `u32`           | Role bitmask of an actor           |
//! | `ProdConfig(id)`    | `ProductConfig` | Immutable product configuration    |
//! | `ProdState(id)`     | `ProductState`  | Current status and last update     |
//! | `HistLen(id)`       | `u32`           | Number of history entries          |
//! | `HistEntry(id, n)`  | `HistoryEntry`  | n-th accepted status transition    |
//! | `Alert(id)`         | `bool`          | Stale-custody alert flag           |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! History is an index-addressed arena: appending writes `HistEntry(id, len)`
//! and then bumps `HistLen(id)`. Existing entries are never rewritten, so an
//! append costs two writes regardless of how long the history already is.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{HistoryEntry, Product, ProductConfig, ProductState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Count of Admin role holders (Instance).
    AdminCount,
    /// Role bitmask keyed by actor (Persistent).
    Roles(Address),
    /// Immutable product configuration keyed by ID (Persistent).
    ProdConfig(u64),
    /// Mutable product state keyed by ID (Persistent).
    ProdState(u64),
    /// History length keyed by product ID (Persistent).
    HistLen(u64),
    /// History slot keyed by product ID and append index (Persistent).
    HistEntry(u64, u32),
    /// Alert flag keyed by product ID (Persistent).
    Alert(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn admin_count(env: &Env) -> u32 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::AdminCount)
        .unwrap_or(0)
}

pub fn set_admin_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::AdminCount, &count);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Read a persistent entry, bumping its TTL when present.
fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn write_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

// ── Roles ────────────────────────────────────────────────────────────

/// Role bitmask for `actor`; `0` when the actor was never granted anything.
pub fn get_roles(env: &Env, actor: &Address) -> u32 {
    read_persistent(env, &DataKey::Roles(actor.clone())).unwrap_or(0)
}

pub fn set_roles(env: &Env, actor: &Address, mask: u32) {
    let key = DataKey::Roles(actor.clone());
    if mask == 0 {
        env.storage().persistent().remove(&key);
    } else {
        write_persistent(env, &key, &mask);
    }
}

// ── Products ─────────────────────────────────────────────────────────

pub fn has_product(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::ProdConfig(id))
}

/// Save both the immutable config and the initial state for a new product.
pub fn save_product(env: &Env, config: &ProductConfig, state: &ProductState) {
    write_persistent(env, &DataKey::ProdConfig(config.id), config);
    write_persistent(env, &DataKey::ProdState(config.id), state);
}

pub fn load_product_config(env: &Env, id: u64) -> Option<ProductConfig> {
    read_persistent(env, &DataKey::ProdConfig(id))
}

pub fn load_product_state(env: &Env, id: u64) -> Option<ProductState> {
    read_persistent(env, &DataKey::ProdState(id))
}

pub fn save_product_state(env: &Env, id: u64, state: &ProductState) {
    write_persistent(env, &DataKey::ProdState(id), state);
}

/// Load the full `Product` by combining config, state and alert flag.
pub fn load_product(env: &Env, id: u64) -> Option<Product> {
    let config = load_product_config(env, id)?;
    let state = load_product_state(env, id)?;
    Some(Product {
        id: config.id,
        name: config.name,
        qr_hash: config.qr_hash,
        origin: config.origin,
        status: state.status,
        last_update: state.last_update,
        alert: get_alert(env, id),
    })
}

// ── History ──────────────────────────────────────────────────────────

pub fn history_len(env: &Env, id: u64) -> u32 {
    read_persistent(env, &DataKey::HistLen(id)).unwrap_or(0)
}

/// Append `entry` after the last recorded slot and return the new length.
pub fn append_history(env: &Env, id: u64, entry: &HistoryEntry) -> u32 {
    let len = history_len(env, id);
    write_persistent(env, &DataKey::HistEntry(id, len), entry);
    write_persistent(env, &DataKey::HistLen(id), &(len + 1));
    len + 1
}

/// Collect the entries in `[start, end)` in append order.
pub fn load_history_range(env: &Env, id: u64, start: u32, end: u32) -> Vec<HistoryEntry> {
    let mut entries = Vec::new(env);
    for index in start..end {
        if let Some(entry) = read_persistent(env, &DataKey::HistEntry(id, index)) {
            entries.push_back(entry);
        }
    }
    entries
}

// ── Alerts ───────────────────────────────────────────────────────────

/// Alert flag for `id`; `false` for ids that were never flagged.
pub fn get_alert(env: &Env, id: u64) -> bool {
    read_persistent(env, &DataKey::Alert(id)).unwrap_or(false)
}

pub fn set_alert(env: &Env, id: u64, flag: bool) {
    write_persistent(env, &DataKey::Alert(id), &flag);
}
