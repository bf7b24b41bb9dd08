//! Organization bootstrap end to end: the deployment sequence, the address
//! book it produces, and the trust gate dependent subsystems run against it.

#![cfg(test)]

use dao_core::prelude::*;
use dao_runtime::{bootstrap, OrgConfig, TrustError, TrustGate};
use dao_types::subsystems;

#[test]
fn bootstrap_produces_a_complete_address_book() {
    let org = bootstrap(&OrgConfig::default()).unwrap();

    assert_eq!(org.summary.contracts.len(), subsystems::DEPLOY_ORDER.len());
    for name in subsystems::DEPLOY_ORDER {
        let registered = org.core.get_contract(name);
        assert!(!registered.is_zero());
        assert_eq!(org.summary.contracts[name], registered);
        assert!(org.core.is_authorized_contract(registered));
    }

    // The deployer stays the sole admin after bootstrap.
    assert!(org.core.has_role(admin_role(), org.deployer));
}

#[test]
fn bootstrap_records_follow_deploy_order() {
    let org = bootstrap(&OrgConfig::default()).unwrap();

    let records = org.core.log_records();
    assert_eq!(records.len(), subsystems::DEPLOY_ORDER.len());
    for (record, expected) in records.iter().zip(subsystems::DEPLOY_ORDER) {
        assert_eq!(record.actor, org.deployer);
        match &record.event {
            dao_bus::ChangeEvent::ContractUpdated { name, address } => {
                assert_eq!(name, expected);
                assert_eq!(*address, org.summary.contracts[expected]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

#[test]
fn summary_serializes_for_operators() {
    let org = bootstrap(&OrgConfig::default()).unwrap();

    let json = serde_json::to_value(&org.summary).unwrap();
    assert!(json["contracts"].get(subsystems::DAO_GOVERNOR).is_some());
    assert!(json["contracts"].get(subsystems::MISSION_FACTORY).is_some());
    assert!(json.get("token").is_some());
}

#[test]
fn trust_gate_tracks_the_live_registry() {
    let org = bootstrap(&OrgConfig::default()).unwrap();
    let gate = TrustGate::new(org.core.clone());

    let treasury = org.core.get_contract(subsystems::DAO_TREASURY);
    assert!(gate.require(treasury).is_ok());

    let stranger = Address::new([0x66; 20]);
    assert_eq!(
        gate.require(stranger),
        Err(TrustError::UntrustedCaller { caller: stranger })
    );

    // A subsystem installed after bootstrap is trusted immediately.
    let late = Address::new([0x77; 20]);
    org.core
        .update_contract(org.deployer, "OracleBridge", late)
        .unwrap();
    assert!(gate.allows(late));
}

#[test]
fn admin_can_rotate_a_subsystem_after_bootstrap() {
    let org = bootstrap(&OrgConfig::default()).unwrap();
    let original = org.core.get_contract(subsystems::MISSION_FACTORY);

    let replacement = Address::new([0x99; 20]);
    org.core
        .update_contract(org.deployer, subsystems::MISSION_FACTORY, replacement)
        .unwrap();

    assert_eq!(org.core.get_contract(subsystems::MISSION_FACTORY), replacement);
    assert!(org.core.is_authorized_contract(original));
    assert!(org.core.is_authorized_contract(replacement));
    assert!(org.core.check_invariants().is_empty());
}
