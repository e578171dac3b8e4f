//! # Role-Based Access Control
//!
//! Every actor owns a set of zero or more [`Role`]s, stored as a `u32`
//! bitmask under `DataKey::Roles(actor)`. Authorization is a pure capability
//! check consulted at the top of each mutating entry point:
//!
//! | Operation                       | Required role             |
//! |---------------------------------|---------------------------|
//! | `grant_role` / `revoke_role`    | `Admin`                   |
//! | `register_product`              | `Manufacturer`            |
//! | `update_status`                 | `Transporter` or `Retailer` |
//! | `reset_alert`                   | `Admin`                   |
//!
//! ## Last-admin guard
//!
//! The deploying identity is the first Admin. Revoking `Admin` from an actor
//! is refused with `Error::LastAdmin` when it would leave no Admin at all,
//! so the registry can never be locked out of role management.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::{events, storage, Error};

/// A named capability grantable to an actor.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    Manufacturer,
    Transporter,
    Retailer,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::Manufacturer,
        Role::Transporter,
        Role::Retailer,
    ];

    fn mask(self) -> u32 {
        match self {
            Role::Admin => 1 << 0,
            Role::Manufacturer => 1 << 1,
            Role::Transporter => 1 << 2,
            Role::Retailer => 1 << 3,
        }
    }
}

// ── Queries ──────────────────────────────────────────────────────────

/// Return `true` if `actor` holds `role`.
pub fn has_role(env: &Env, actor: &Address, role: Role) -> bool {
    storage::get_roles(env, actor) & role.mask() != 0
}

/// Every role held by `actor`, in declaration order.
pub fn roles_of(env: &Env, actor: &Address) -> Vec<Role> {
    let mask = storage::get_roles(env, actor);
    let mut roles = Vec::new(env);
    for role in Role::ALL {
        if mask & role.mask() != 0 {
            roles.push_back(role);
        }
    }
    roles
}

// ── Guards ───────────────────────────────────────────────────────────

pub fn require_role(env: &Env, actor: &Address, role: Role) -> Result<(), Error> {
    if has_role(env, actor, role) {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}

pub fn require_admin(env: &Env, actor: &Address) -> Result<(), Error> {
    require_role(env, actor, Role::Admin)
}

pub fn require_manufacturer(env: &Env, actor: &Address) -> Result<(), Error> {
    require_role(env, actor, Role::Manufacturer)
}

/// Transporters and retailers may record custody transitions. Holding
/// `Manufacturer` alone is not enough.
pub fn require_can_update_status(env: &Env, actor: &Address) -> Result<(), Error> {
    let mask = storage::get_roles(env, actor);
    if mask & (Role::Transporter.mask() | Role::Retailer.mask()) != 0 {
        Ok(())
    } else {
        Err(Error::StatusUpdateUnauthorized)
    }
}

// ── Mutations ────────────────────────────────────────────────────────

/// Make `admin` the first Admin. Only called from the constructor.
pub fn init_admin(env: &Env, admin: &Address) {
    storage::set_roles(env, admin, Role::Admin.mask());
    storage::set_admin_count(env, 1);
}

/// Grant `role` to `actor`. Granting a role the actor already holds is a
/// no-op and emits nothing.
pub fn grant_role(env: &Env, caller: &Address, actor: &Address, role: Role) -> Result<(), Error> {
    require_admin(env, caller)?;

    let mask = storage::get_roles(env, actor);
    if mask & role.mask() != 0 {
        return Ok(());
    }

    storage::set_roles(env, actor, mask | role.mask());
    if role == Role::Admin {
        storage::set_admin_count(env, storage::admin_count(env) + 1);
    }
    events::emit_role_granted(env, actor.clone(), role, caller.clone());
    Ok(())
}

/// Revoke `role` from `actor`. Revoking a role the actor does not hold is a
/// no-op and emits nothing.
pub fn revoke_role(env: &Env, caller: &Address, actor: &Address, role: Role) -> Result<(), Error> {
    require_admin(env, caller)?;

    let mask = storage::get_roles(env, actor);
    if mask & role.mask() == 0 {
        return Ok(());
    }

    if role == Role::Admin {
        let admins = storage::admin_count(env);
        if admins <= 1 {
            return Err(Error::LastAdmin);
        }
        storage::set_admin_count(env, admins - 1);
    }
    storage::set_roles(env, actor, mask & !role.mask());
    events::emit_role_revoked(env, actor.clone(), role, caller.clone());
    Ok(())
}
