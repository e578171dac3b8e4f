//! # Alert Monitor
//!
//! Derives a per-product stale-custody flag from the time elapsed between two
//! consecutive recorded transitions.
//!
//! The flag has exactly two writers:
//!
//! - [`evaluate`], called by `update_status`, which may only raise it.
//! - [`reset`], called by `reset_alert`, which may only clear it.
//!
//! A short gap after a long one never clears a raised flag; only an Admin can.

use soroban_sdk::Env;

use crate::{events, storage};

/// Maximum tolerated gap between two recorded transitions: 3 days.
///
/// Fixed at compile time. Making it configurable would mean moving it into
/// instance storage behind an Admin-only setter.
pub const ALERT_THRESHOLD_SECS: u64 = 3 * 24 * 60 * 60;

/// Raise the alert for `id` when `current - previous` exceeds the threshold.
///
/// Returns `true` when the gap was stale. A gap at or below the threshold
/// leaves the flag untouched.
pub fn evaluate(env: &Env, id: u64, previous: u64, current: u64) -> bool {
    if current.saturating_sub(previous) <= ALERT_THRESHOLD_SECS {
        return false;
    }
    storage::set_alert(env, id, true);
    events::emit_alert_raised(env, id, previous, current);
    true
}

/// Current flag for `id`; unknown ids read as `false`.
pub fn is_alerted(env: &Env, id: u64) -> bool {
    storage::get_alert(env, id)
}

/// Clear the flag for `id` unconditionally.
pub fn reset(env: &Env, id: u64) {
    storage::set_alert(env, id, false);
}
