//! # Types
//!
//! Shared data structures used across all modules of the registry.
//!
//! ## Config / State split
//!
//! A `Product` is internally stored as two separate ledger entries:
//!
//! - [`ProductConfig`] — written once at registration; never mutated.
//! - [`ProductState`] — rewritten on every accepted status update.
//!
//! The alert flag lives in its own entry owned by the alert monitor.
//! The public API exposes the reconstructed [`Product`] snapshot.
//!
//! ## Status as a free-form label
//!
//! Unlike a closed enum, the custody status is whatever label the transporter
//! or retailer records (`"In Transit"`, `"Delivered"`, ...). The only fixed
//! label is [`INITIAL_STATUS`], assigned at registration:
//!
//! ```text
//! Created ──► label ──► label ──► ...
//! ```

use soroban_sdk::{contracttype, Address, BytesN, String};

/// Status label assigned by `register_product`.
pub const INITIAL_STATUS: &str = "Created";

/// Immutable product configuration, written once at registration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductConfig {
    pub id: u64,
    pub name: String,
    pub qr_hash: BytesN<32>,
    pub origin: Address,
}

/// Mutable product state, updated on every accepted transition.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductState {
    pub status: String,
    pub last_update: u64,
}

/// Full snapshot of a registered product.
///
/// Returned by value; reconstructed from `ProductConfig`, `ProductState`
/// and the alert flag.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    /// Caller-supplied identifier, unique for the lifetime of the registry.
    pub id: u64,
    pub name: String,
    /// Digest printed on the product's QR code.
    pub qr_hash: BytesN<32>,
    /// Manufacturer that registered the product.
    pub origin: Address,
    /// Most recently recorded custody status.
    pub status: String,
    /// Ledger timestamp of registration or of the last accepted update.
    pub last_update: u64,
    /// Stale-custody alert flag.
    pub alert: bool,
}

/// One accepted status transition together with its sensor readings.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HistoryEntry {
    pub status: String,
    /// Degrees Celsius.
    pub temperature: i32,
    pub latitude: i64,
    pub longitude: i64,
    pub timestamp: u64,
}
