//! # Product Tracking Contract
//!
//! A tamper-evident custody registry that follows a physical product from its
//! manufacturer through transporters to a retailer. It exposes the single
//! Soroban contract `ProductTracking`:
//!
//! | Phase        | Entry Point(s)                                                   |
//! |--------------|------------------------------------------------------------------|
//! | Bootstrap    | `__constructor` (deployer becomes the first Admin)               |
//! | Role admin   | `grant_role`, `revoke_role`, `grant_manufacturer_role`, `grant_transporter_role`, `grant_retailer_role` |
//! | Registration | [`ProductTracking::register_product`]                            |
//! | Custody      | [`ProductTracking::update_status`]                               |
//! | Alerts       | `alerts`, `reset_alert`, `alert_threshold`                       |
//! | Queries      | `get_product_details`, `get_product_history`, `get_history_page`, `get_history_len`, `verify_product_qr`, `has_role`, `roles_of`, `admin_count` |
//!
//! ## Architecture
//!
//! Authorization is delegated to [`rbac`], storage access to [`storage`] and
//! stale-custody detection to [`alerts`]. Every fallible entry point returns
//! `Result<_, Error>` and checks all of its preconditions before the first
//! storage write, so a rejected call leaves no partial state.
//!
//! Reads are public and need no role.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env, String, Vec};

pub mod alerts;
pub mod events;
pub mod rbac;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_rbac;

pub use alerts::ALERT_THRESHOLD_SECS;
pub use rbac::Role;
pub use types::{HistoryEntry, Product, ProductConfig, ProductState, INITIAL_STATUS};

/// Largest page `get_history_page` returns in one call.
pub const MAX_HISTORY_PAGE: u32 = 50;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is missing the role the operation requires.
    Unauthorized = 1,
    /// Caller holds neither `Transporter` nor `Retailer`; not authorized to update status.
    StatusUpdateUnauthorized = 2,
    /// Product id was never registered.
    NotFound = 3,
    /// Product id is already registered.
    DuplicateProduct = 4,
    /// Revoking Admin would leave the registry without an Admin.
    LastAdmin = 5,
    /// History page requested with a zero limit.
    InvalidPage = 6,
}

impl Error {
    /// `true` for every role-based denial, whatever the operation context.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized | Error::StatusUpdateUnauthorized)
    }
}

#[contract]
pub struct ProductTracking;

#[contractimpl]
impl ProductTracking {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Deploy the registry with `admin` as its first Admin.
    pub fn __constructor(env: Env, admin: Address) {
        rbac::init_admin(&env, &admin);
    }

    // ─────────────────────────────────────────────────────────
    // Role management
    // ─────────────────────────────────────────────────────────

    /// Grant `role` to `actor`. `caller` must hold `Admin`.
    pub fn grant_role(env: Env, caller: Address, actor: Address, role: Role) -> Result<(), Error> {
        caller.require_auth();
        rbac::grant_role(&env, &caller, &actor, role)
    }

    /// Revoke `role` from `actor`. `caller` must hold `Admin`.
    ///
    /// Fails with `Error::LastAdmin` if it would remove the only Admin.
    pub fn revoke_role(env: Env, caller: Address, actor: Address, role: Role) -> Result<(), Error> {
        caller.require_auth();
        rbac::revoke_role(&env, &caller, &actor, role)
    }

    pub fn grant_manufacturer_role(env: Env, caller: Address, actor: Address) -> Result<(), Error> {
        Self::grant_role(env, caller, actor, Role::Manufacturer)
    }

    pub fn grant_transporter_role(env: Env, caller: Address, actor: Address) -> Result<(), Error> {
        Self::grant_role(env, caller, actor, Role::Transporter)
    }

    pub fn grant_retailer_role(env: Env, caller: Address, actor: Address) -> Result<(), Error> {
        Self::grant_role(env, caller, actor, Role::Retailer)
    }

    /// Return `true` if `actor` holds `role`.
    pub fn has_role(env: Env, actor: Address, role: Role) -> bool {
        rbac::has_role(&env, &actor, role)
    }

    /// Return every role held by `actor`.
    pub fn roles_of(env: Env, actor: Address) -> Vec<Role> {
        rbac::roles_of(&env, &actor)
    }

    pub fn admin_count(env: Env) -> u32 {
        storage::admin_count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Product registry
    // ─────────────────────────────────────────────────────────

    /// Register product `id`. `caller` must hold `Manufacturer` and becomes
    /// the product's origin.
    ///
    /// The product starts in [`INITIAL_STATUS`] with its last update set to
    /// the current ledger time. No history entry is written; history begins
    /// with the first `update_status`.
    pub fn register_product(
        env: Env,
        caller: Address,
        id: u64,
        name: String,
        qr_hash: BytesN<32>,
    ) -> Result<Product, Error> {
        caller.require_auth();
        rbac::require_manufacturer(&env, &caller)?;

        if storage::has_product(&env, id) {
            return Err(Error::DuplicateProduct);
        }

        let config = ProductConfig {
            id,
            name: name.clone(),
            qr_hash: qr_hash.clone(),
            origin: caller.clone(),
        };
        let state = ProductState {
            status: String::from_str(&env, INITIAL_STATUS),
            last_update: env.ledger().timestamp(),
        };
        storage::save_product(&env, &config, &state);

        events::emit_product_registered(&env, id, caller.clone(), name.clone());

        Ok(Product {
            id,
            name,
            qr_hash,
            origin: caller,
            status: state.status,
            last_update: state.last_update,
            alert: false,
        })
    }

    /// Return a snapshot of product `id`.
    pub fn get_product_details(env: Env, id: u64) -> Result<Product, Error> {
        storage::load_product(&env, id).ok_or(Error::NotFound)
    }

    /// Compare `candidate` byte-for-byte against the registered QR hash.
    pub fn verify_product_qr(env: Env, id: u64, candidate: BytesN<32>) -> Result<bool, Error> {
        let config = storage::load_product_config(&env, id).ok_or(Error::NotFound)?;
        Ok(config.qr_hash == candidate)
    }

    // ─────────────────────────────────────────────────────────
    // Custody transitions
    // ─────────────────────────────────────────────────────────

    /// Record a custody transition for product `id`.
    ///
    /// `caller` must hold `Transporter` or `Retailer`. The entry is appended
    /// to the product's history, the snapshot takes the new status and the
    /// current ledger time, and the alert monitor compares that time against
    /// the previous update.
    pub fn update_status(
        env: Env,
        caller: Address,
        id: u64,
        status: String,
        temperature: i32,
        latitude: i64,
        longitude: i64,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut state = storage::load_product_state(&env, id).ok_or(Error::NotFound)?;
        rbac::require_can_update_status(&env, &caller)?;

        let previous = state.last_update;
        let now = env.ledger().timestamp();

        let entry = HistoryEntry {
            status: status.clone(),
            temperature,
            latitude,
            longitude,
            timestamp: now,
        };
        storage::append_history(&env, id, &entry);

        state.status = status;
        state.last_update = now;
        storage::save_product_state(&env, id, &state);

        events::emit_status_updated(&env, id, caller, &entry);
        alerts::evaluate(&env, id, previous, now);
        Ok(())
    }

    /// Return every history entry of product `id` in append order.
    pub fn get_product_history(env: Env, id: u64) -> Result<Vec<HistoryEntry>, Error> {
        if !storage::has_product(&env, id) {
            return Err(Error::NotFound);
        }
        let len = storage::history_len(&env, id);
        Ok(storage::load_history_range(&env, id, 0, len))
    }

    /// Return at most `limit` entries of product `id` starting at `offset`.
    ///
    /// `limit` is capped at [`MAX_HISTORY_PAGE`]; an offset past the end
    /// yields an empty page.
    pub fn get_history_page(
        env: Env,
        id: u64,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<HistoryEntry>, Error> {
        if !storage::has_product(&env, id) {
            return Err(Error::NotFound);
        }
        if limit == 0 {
            return Err(Error::InvalidPage);
        }
        let len = storage::history_len(&env, id);
        let start = offset.min(len);
        let end = start.saturating_add(limit.min(MAX_HISTORY_PAGE)).min(len);
        Ok(storage::load_history_range(&env, id, start, end))
    }

    pub fn get_history_len(env: Env, id: u64) -> Result<u32, Error> {
        if !storage::has_product(&env, id) {
            return Err(Error::NotFound);
        }
        Ok(storage::history_len(&env, id))
    }

    // ─────────────────────────────────────────────────────────
    // Alerts
    // ─────────────────────────────────────────────────────────

    /// Current stale-custody flag for `id`; `false` for unknown ids.
    pub fn alerts(env: Env, id: u64) -> bool {
        alerts::is_alerted(&env, id)
    }

    /// Clear the alert for `id`. `caller` must hold `Admin`.
    ///
    /// Succeeds for ids that were never registered or never alerted; the flag
    /// simply reads `false` afterwards.
    pub fn reset_alert(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        alerts::reset(&env, id);
        events::emit_alert_reset(&env, id, caller);
        Ok(())
    }

    pub fn alert_threshold(_env: Env) -> u64 {
        ALERT_THRESHOLD_SECS
    }
}
