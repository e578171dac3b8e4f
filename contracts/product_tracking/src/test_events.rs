extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Events, Ledger},
    vec, IntoVal, TryIntoVal,
};

use crate::events::{AlertRaised, AlertReset, ProductRegistered, RoleChanged, StatusUpdated};
use crate::test::{qr_hash, register, setup, text};
use crate::{Role, ALERT_THRESHOLD_SECS};

#[test]
fn test_product_registered_event() {
    let (env, client, actors) = setup();
    client.register_product(
        &actors.manufacturer,
        &1,
        &text(&env, "Product 1"),
        &qr_hash(&env, "QR_HASH_1"),
    );

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("register").into_val(&env),
        1u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProductRegistered = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProductRegistered {
            product_id: 1,
            origin: actors.manufacturer.clone(),
            name: text(&env, "Product 1"),
        }
    );
}

#[test]
fn test_status_updated_event() {
    let (env, client, actors) = setup();
    register(&env, &client, &actors, 2);
    env.ledger().set_timestamp(4_242);
    client.update_status(
        &actors.transporter,
        &2,
        &text(&env, "In Transit"),
        &25,
        &12_345,
        &67_890,
    );

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("status").into_val(&env),
        2u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: StatusUpdated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        StatusUpdated {
            product_id: 2,
            actor: actors.transporter.clone(),
            status: text(&env, "In Transit"),
            temperature: 25,
            latitude: 12_345,
            longitude: 67_890,
            timestamp: 4_242,
        }
    );
}

#[test]
fn test_alert_raised_event_follows_status_event() {
    let (env, client, actors) = setup();
    env.ledger().set_timestamp(1_000);
    register(&env, &client, &actors, 6);

    let stale = 1_000 + ALERT_THRESHOLD_SECS + 1;
    env.ledger().set_timestamp(stale);
    client.update_status(&actors.retailer, &6, &text(&env, "Delivered"), &20, &0, &0);

    let all_events = env.events().all();
    assert!(all_events.len() >= 2);

    let status_event = all_events.get(all_events.len() - 2).unwrap();
    let expected_status_topics = vec![
        &env,
        symbol_short!("status").into_val(&env),
        6u64.into_val(&env),
    ];
    assert_eq!(status_event.1, expected_status_topics);

    let last_event = all_events.last().unwrap();
    let expected_topics = vec![
        &env,
        symbol_short!("alert").into_val(&env),
        6u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: AlertRaised = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        AlertRaised {
            product_id: 6,
            previous_update: 1_000,
            current_update: stale,
        }
    );
}

#[test]
fn test_no_alert_event_on_short_gap() {
    let (env, client, actors) = setup();
    register(&env, &client, &actors, 3);
    client.update_status(&actors.transporter, &3, &text(&env, "In Transit"), &20, &0, &0);

    let last_event = env.events().all().last().unwrap();
    let expected_topics = vec![
        &env,
        symbol_short!("status").into_val(&env),
        3u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
}

#[test]
fn test_alert_reset_event() {
    let (env, client, actors) = setup();
    client.reset_alert(&actors.admin, &7);

    let last_event = env.events().all().last().unwrap();
    let expected_topics = vec![
        &env,
        symbol_short!("alert_rst").into_val(&env),
        7u64.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: AlertReset = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        AlertReset {
            product_id: 7,
            admin: actors.admin.clone(),
        }
    );
}

#[test]
fn test_role_events() {
    let (env, client, actors) = setup();
    client.grant_role(&actors.admin, &actors.other, &Role::Retailer);

    let last_event = env.events().all().last().unwrap();
    let expected_topics = vec![
        &env,
        symbol_short!("role_set").into_val(&env),
        actors.other.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: RoleChanged = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RoleChanged {
            actor: actors.other.clone(),
            role: Role::Retailer,
            admin: actors.admin.clone(),
        }
    );

    client.revoke_role(&actors.admin, &actors.other, &Role::Retailer);

    let last_event = env.events().all().last().unwrap();
    let expected_topics = vec![
        &env,
        symbol_short!("role_del").into_val(&env),
        actors.other.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
}
