#![allow(dead_code)]

extern crate std;

use soroban_sdk::Vec;

use crate::types::{HistoryEntry, Product};

/// INV-1: History timestamps never decrease in append order.
pub fn assert_history_monotonic(history: &Vec<HistoryEntry>) {
    let mut previous: Option<u64> = None;
    for (index, entry) in history.iter().enumerate() {
        if let Some(prev) = previous {
            assert!(
                entry.timestamp >= prev,
                "INV-1 violated: entry {} has timestamp {} before {}",
                index,
                entry.timestamp,
                prev
            );
        }
        previous = Some(entry.timestamp);
    }
}

/// INV-2: Fields fixed at registration (id, name, qr_hash, origin) never change.
pub fn assert_product_immutable_fields(original: &Product, current: &Product) {
    assert_eq!(original.id, current.id, "INV-2 violated: product id changed");
    assert_eq!(
        original.name, current.name,
        "INV-2 violated: product name changed"
    );
    assert_eq!(
        original.qr_hash, current.qr_hash,
        "INV-2 violated: product qr_hash changed"
    );
    assert_eq!(
        original.origin, current.origin,
        "INV-2 violated: product origin changed"
    );
}

/// INV-3: The snapshot mirrors the newest history entry, if there is one.
pub fn assert_snapshot_matches_history(product: &Product, history: &Vec<HistoryEntry>) {
    if let Some(last) = history.last() {
        assert_eq!(
            product.status, last.status,
            "INV-3 violated: product {} status differs from last history entry",
            product.id
        );
        assert_eq!(
            product.last_update, last.timestamp,
            "INV-3 violated: product {} last_update differs from last history entry",
            product.id
        );
    }
}

/// INV-4: A product's last update is never earlier than any recorded entry.
pub fn assert_last_update_not_behind(product: &Product, history: &Vec<HistoryEntry>) {
    for entry in history.iter() {
        assert!(
            product.last_update >= entry.timestamp,
            "INV-4 violated: product {} last_update {} behind entry at {}",
            product.id,
            product.last_update,
            entry.timestamp
        );
    }
}

/// Run every invariant that only needs the current snapshot and history.
pub fn assert_all_product_invariants(product: &Product, history: &Vec<HistoryEntry>) {
    assert_history_monotonic(history);
    assert_snapshot_matches_history(product, history);
    assert_last_update_not_behind(product, history);
}
