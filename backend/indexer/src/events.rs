//! Canonical event types emitted by the product tracking contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/product_tracking/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the registry contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A manufacturer registered a product (`register` topic).
    ProductRegistered,
    /// A transporter or retailer recorded a custody transition (`status` topic).
    StatusUpdated,
    /// A transition arrived after a stale gap (`alert` topic).
    AlertRaised,
    /// An admin cleared a product's alert (`alert_rst` topic).
    AlertReset,
    /// A role was granted (`role_set` topic).
    RoleSet,
    /// A role was revoked (`role_del` topic).
    RoleDel,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "register" => Self::ProductRegistered,
            "status" => Self::StatusUpdated,
            "alert" => Self::AlertRaised,
            "alert_rst" => Self::AlertReset,
            "role_set" => Self::RoleSet,
            "role_del" => Self::RoleDel,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductRegistered => "product_registered",
            Self::StatusUpdated => "status_updated",
            Self::AlertRaised => "alert_raised",
            Self::AlertReset => "alert_reset",
            Self::RoleSet => "role_set",
            Self::RoleDel => "role_del",
            Self::Unknown => "unknown",
        }
    }

    /// Role events are keyed by actor address rather than product id.
    pub fn is_role_event(&self) -> bool {
        matches!(self, Self::RoleSet | Self::RoleDel)
    }
}

/// A fully decoded registry event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEvent {
    /// RPC-assigned unique event id; the dedupe key.
    pub event_id: String,
    pub event_type: String,
    pub product_id: Option<String>,
    pub actor: Option<String>,
    /// Status label for `status_updated`, role name for role events.
    pub status: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub product_id: Option<String>,
    pub actor: Option<String>,
    pub status: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

/// A product whose most recent alert has not been reset yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OpenAlert {
    pub product_id: String,
    pub ledger: i64,
    pub timestamp: i64,
}
