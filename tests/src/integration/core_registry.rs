//! Registry contract end to end, exercised through the inbound port the way
//! a dependent subsystem or administrator would.

#![cfg(test)]

use dao_core::prelude::*;
use dao_types::params;

fn addr(byte: u8) -> Address {
    Address::new([byte; 20])
}

fn deployer() -> Address {
    addr(0xda)
}

fn setup() -> CoreService {
    create_test_core(deployer()).0
}

#[test]
fn deployer_holds_admin_role_from_construction() {
    let core = setup();
    assert!(core.has_role(admin_role(), deployer()));
    assert!(!core.has_role(admin_role(), addr(1)));
}

#[test]
fn default_parameters_are_observable_immediately() {
    let core = setup();

    assert_eq!(
        core.get_system_parameter(params::MINIMUM_STAKE),
        U256::from(1000u64) * U256::exp10(18)
    );
    assert_eq!(
        core.get_system_parameter(params::VOTING_PERIOD),
        U256::from(7 * 24 * 60 * 60u64)
    );
}

#[test]
fn admin_updates_contract_and_address_becomes_trusted() {
    let core = setup();

    core.update_contract(deployer(), "TestContract", addr(1)).unwrap();

    assert_eq!(core.get_contract("TestContract"), addr(1));
    assert!(core.is_authorized_contract(addr(1)));
}

#[test]
fn admin_sets_and_reads_parameters() {
    let core = setup();

    core.set_system_parameter(deployer(), "testParam", U256::from(12_345u64))
        .unwrap();
    assert_eq!(core.get_system_parameter("testParam"), U256::from(12_345u64));
}

#[test]
fn non_admin_set_parameter_is_rejected_and_state_kept() {
    let core = setup();
    let stranger = addr(0x66);

    let result = core.set_system_parameter(stranger, params::VOTING_PERIOD, U256::from(1u64));

    assert!(matches!(result, Err(CoreError::Unauthorized { .. })));
    assert_eq!(
        core.get_system_parameter(params::VOTING_PERIOD),
        U256::from(604_800u64)
    );
    assert_eq!(core.log_len(), 0);
}

#[test]
fn treasury_then_agent_registry_scenario() {
    let core = setup();
    let treasury = addr(0xab);
    let agents = addr(0xde);

    core.update_contract(deployer(), "Treasury", treasury).unwrap();
    core.update_contract(deployer(), "AgentRegistry", agents).unwrap();

    assert_eq!(core.get_contract("Treasury"), treasury);
    assert_eq!(core.get_contract("AgentRegistry"), agents);
    assert!(core.is_authorized_contract(treasury));
    assert!(core.is_authorized_contract(agents));

    // Exactly two ContractUpdated records, in call order.
    let records = core.log_records();
    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .zip(["Treasury", "AgentRegistry"])
        .all(|(record, expected)| matches!(
            &record.event,
            dao_bus::ChangeEvent::ContractUpdated { name, .. } if name == expected
        )));
}

#[test]
fn reassigned_name_keeps_old_address_authorized() {
    let core = setup();

    core.update_contract(deployer(), "DAOGovernor", addr(1)).unwrap();
    core.update_contract(deployer(), "DAOGovernor", addr(2)).unwrap();

    assert_eq!(core.get_contract("DAOGovernor"), addr(2));
    // Monotonic authorization: deauthorization is deliberately absent.
    assert!(core.is_authorized_contract(addr(1)));
    assert!(core.is_authorized_contract(addr(2)));
    assert!(core.check_invariants().is_empty());
}

#[test]
fn unknown_keys_read_as_zero_defaults() {
    let core = setup();

    assert_eq!(core.get_contract("nonexistent"), Address::ZERO);
    assert_eq!(core.get_system_parameter("nonexistent"), U256::zero());
    assert!(!core.is_authorized_contract(addr(0x77)));
}

#[test]
fn role_lifecycle_through_the_port() {
    let core = setup();
    let operator = addr(2);

    core.grant_role(deployer(), admin_role(), operator).unwrap();
    assert!(core.has_role(admin_role(), operator));

    // The new admin can administer...
    core.set_system_parameter(operator, "quorumBps", U256::from(4000u64))
        .unwrap();

    // ...until revoked.
    core.revoke_role(deployer(), admin_role(), operator).unwrap();
    assert!(!core.has_role(admin_role(), operator));
    let result = core.set_system_parameter(operator, "quorumBps", U256::from(1u64));
    assert!(matches!(result, Err(CoreError::Unauthorized { .. })));
}

#[test]
fn every_accepted_mutation_has_exactly_one_record() {
    let core = setup();

    core.grant_role(deployer(), admin_role(), addr(2)).unwrap();
    core.update_contract(deployer(), "DAOTreasury", addr(3)).unwrap();
    core.set_system_parameter(deployer(), "x", U256::from(9u64)).unwrap();
    core.revoke_role(deployer(), admin_role(), addr(2)).unwrap();

    let records = core.log_records();
    assert_eq!(records.len(), 4);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.sequence, i as u64);
        assert_eq!(record.actor, deployer());
    }
    assert_eq!(core.stats().mutations_applied, 4);
    assert_eq!(core.stats().rejected_mutations, 0);
}
