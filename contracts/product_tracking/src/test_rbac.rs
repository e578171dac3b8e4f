extern crate std;

use soroban_sdk::{testutils::Address as _, vec, Address};

use crate::test::{qr_hash, setup, text};
use crate::{Error, Role};

#[test]
fn test_deployer_is_admin() {
    let (_env, client, actors) = setup();
    assert!(client.has_role(&actors.admin, &Role::Admin));
    assert_eq!(client.admin_count(), 1);
    assert!(!client.has_role(&actors.manufacturer, &Role::Admin));
}

#[test]
fn test_convenience_grants() {
    let (env, client, actors) = setup();
    assert_eq!(
        client.roles_of(&actors.manufacturer),
        vec![&env, Role::Manufacturer]
    );
    assert_eq!(
        client.roles_of(&actors.transporter),
        vec![&env, Role::Transporter]
    );
    assert_eq!(client.roles_of(&actors.retailer), vec![&env, Role::Retailer]);
    assert_eq!(client.roles_of(&actors.other).len(), 0);
}

#[test]
fn test_actor_can_hold_several_roles() {
    let (env, client, actors) = setup();
    client.grant_role(&actors.admin, &actors.manufacturer, &Role::Transporter);

    assert_eq!(
        client.roles_of(&actors.manufacturer),
        vec![&env, Role::Manufacturer, Role::Transporter]
    );

    client.register_product(&actors.manufacturer, &1, &text(&env, "P"), &qr_hash(&env, "QR"));
    client.update_status(&actors.manufacturer, &1, &text(&env, "Shipped"), &20, &0, &0);
    assert_eq!(client.get_product_history(&1).len(), 1);
}

#[test]
fn test_grant_is_idempotent() {
    let (_env, client, actors) = setup();
    client.grant_role(&actors.admin, &actors.other, &Role::Admin);
    client.grant_role(&actors.admin, &actors.other, &Role::Admin);
    assert_eq!(client.admin_count(), 2);
}

#[test]
fn test_non_admin_cannot_manage_roles() {
    let (_env, client, actors) = setup();
    for caller in [&actors.manufacturer, &actors.transporter, &actors.retailer, &actors.other] {
        assert_eq!(
            client.try_grant_role(caller, &actors.other, &Role::Manufacturer),
            Err(Ok(Error::Unauthorized))
        );
        assert_eq!(
            client.try_grant_retailer_role(caller, &actors.other),
            Err(Ok(Error::Unauthorized))
        );
        assert_eq!(
            client.try_revoke_role(caller, &actors.manufacturer, &Role::Manufacturer),
            Err(Ok(Error::Unauthorized))
        );
    }
    assert!(!client.has_role(&actors.other, &Role::Manufacturer));
    assert!(client.has_role(&actors.manufacturer, &Role::Manufacturer));
}

#[test]
fn test_revoked_manufacturer_cannot_register() {
    let (env, client, actors) = setup();
    client.revoke_role(&actors.admin, &actors.manufacturer, &Role::Manufacturer);

    assert!(!client.has_role(&actors.manufacturer, &Role::Manufacturer));
    assert_eq!(
        client.try_register_product(
            &actors.manufacturer,
            &1,
            &text(&env, "P"),
            &qr_hash(&env, "QR")
        ),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_revoking_unheld_role_is_noop() {
    let (_env, client, actors) = setup();
    client.revoke_role(&actors.admin, &actors.other, &Role::Retailer);
    assert_eq!(client.roles_of(&actors.other).len(), 0);
}

#[test]
fn test_last_admin_cannot_be_revoked() {
    let (_env, client, actors) = setup();
    assert_eq!(
        client.try_revoke_role(&actors.admin, &actors.admin, &Role::Admin),
        Err(Ok(Error::LastAdmin))
    );
    assert!(client.has_role(&actors.admin, &Role::Admin));
    assert_eq!(client.admin_count(), 1);
}

#[test]
fn test_admin_handover() {
    let (env, client, actors) = setup();
    let successor = Address::generate(&env);
    client.grant_role(&actors.admin, &successor, &Role::Admin);
    assert_eq!(client.admin_count(), 2);

    client.revoke_role(&successor, &actors.admin, &Role::Admin);
    assert_eq!(client.admin_count(), 1);
    assert!(!client.has_role(&actors.admin, &Role::Admin));
    assert_eq!(
        client.try_grant_manufacturer_role(&actors.admin, &actors.other),
        Err(Ok(Error::Unauthorized))
    );

    assert_eq!(
        client.try_revoke_role(&successor, &successor, &Role::Admin),
        Err(Ok(Error::LastAdmin))
    );
}

#[test]
fn test_unauthorized_errors_share_a_class() {
    assert!(Error::Unauthorized.is_unauthorized());
    assert!(Error::StatusUpdateUnauthorized.is_unauthorized());
    assert!(!Error::NotFound.is_unauthorized());
    assert!(!Error::DuplicateProduct.is_unauthorized());
    assert!(!Error::LastAdmin.is_unauthorized());
}
