//! # Events
//!
//! Every accepted mutation publishes one contract event. Topics are
//! `(symbol, key)` where `key` is the product id for product events and the
//! affected actor for role events; the data payload is one of the structs
//! below. The off-chain indexer keys on the leading symbol.
//!
//! | Topic       | Key        | Data                 |
//! |-------------|------------|----------------------|
//! | `register`  | product id | [`ProductRegistered`] |
//! | `status`    | product id | [`StatusUpdated`]     |
//! | `alert`     | product id | [`AlertRaised`]       |
//! | `alert_rst` | product id | [`AlertReset`]        |
//! | `role_set`  | actor      | [`RoleChanged`]       |
//! | `role_del`  | actor      | [`RoleChanged`]       |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::rbac::Role;
use crate::types::HistoryEntry;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRegistered {
    pub product_id: u64,
    pub origin: Address,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusUpdated {
    pub product_id: u64,
    pub actor: Address,
    pub status: String,
    pub temperature: i32,
    pub latitude: i64,
    pub longitude: i64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AlertRaised {
    pub product_id: u64,
    pub previous_update: u64,
    pub current_update: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AlertReset {
    pub product_id: u64,
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChanged {
    pub actor: Address,
    pub role: Role,
    pub admin: Address,
}

pub fn emit_product_registered(env: &Env, product_id: u64, origin: Address, name: String) {
    env.events().publish(
        (symbol_short!("register"), product_id),
        ProductRegistered {
            product_id,
            origin,
            name,
        },
    );
}

pub fn emit_status_updated(env: &Env, product_id: u64, actor: Address, entry: &HistoryEntry) {
    env.events().publish(
        (symbol_short!("status"), product_id),
        StatusUpdated {
            product_id,
            actor,
            status: entry.status.clone(),
            temperature: entry.temperature,
            latitude: entry.latitude,
            longitude: entry.longitude,
            timestamp: entry.timestamp,
        },
    );
}

pub fn emit_alert_raised(env: &Env, product_id: u64, previous_update: u64, current_update: u64) {
    env.events().publish(
        (symbol_short!("alert"), product_id),
        AlertRaised {
            product_id,
            previous_update,
            current_update,
        },
    );
}

pub fn emit_alert_reset(env: &Env, product_id: u64, admin: Address) {
    env.events().publish(
        (symbol_short!("alert_rst"), product_id),
        AlertReset { product_id, admin },
    );
}

pub fn emit_role_granted(env: &Env, actor: Address, role: Role, admin: Address) {
    env.events().publish(
        (symbol_short!("role_set"), actor.clone()),
        RoleChanged { actor, role, admin },
    );
}

pub fn emit_role_revoked(env: &Env, actor: Address, role: Role, admin: Address) {
    env.events().publish(
        (symbol_short!("role_del"), actor.clone()),
        RoleChanged { actor, role, admin },
    );
}
