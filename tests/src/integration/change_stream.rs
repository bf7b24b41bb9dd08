//! Notifier delivery across the core/bus seam: commit-order delivery,
//! filtering, lag recovery through log replay.

#![cfg(test)]

use dao_bus::{ChangeEvent, ChangeFilter, ChangeKind};
use dao_core::prelude::*;
use std::time::Duration;
use tokio::time::timeout;
use tokio_stream::StreamExt;

fn addr(byte: u8) -> Address {
    Address::new([byte; 20])
}

fn deployer() -> Address {
    addr(0xda)
}

#[tokio::test]
async fn subscriber_sees_mutations_in_commit_order() {
    let (core, bus) = create_test_core(deployer());
    let mut sub = bus.subscribe(ChangeFilter::all());

    core.update_contract(deployer(), "DAOGovernor", addr(1)).unwrap();
    core.set_system_parameter(deployer(), "quorumBps", U256::from(4000u64))
        .unwrap();
    core.grant_role(deployer(), admin_role(), addr(2)).unwrap();

    for expected in 0..3u64 {
        let record = timeout(Duration::from_millis(100), sub.recv())
            .await
            .expect("timeout")
            .expect("record");
        assert_eq!(record.sequence, expected);
    }
}

#[tokio::test]
async fn kind_filter_sees_only_matching_records() {
    let (core, bus) = create_test_core(deployer());
    let mut sub = bus.subscribe(ChangeFilter::kinds(vec![ChangeKind::SystemParameterChanged]));

    core.update_contract(deployer(), "DAOTreasury", addr(1)).unwrap();
    core.set_system_parameter(deployer(), "votingDelay", U256::from(60u64))
        .unwrap();
    core.update_contract(deployer(), "AgentRegistry", addr(2)).unwrap();

    let record = timeout(Duration::from_millis(100), sub.recv())
        .await
        .expect("timeout")
        .expect("record");

    assert_eq!(record.sequence, 1);
    assert!(matches!(
        record.event,
        ChangeEvent::SystemParameterChanged { .. }
    ));
}

#[tokio::test]
async fn rejected_mutations_never_reach_subscribers() {
    let (core, bus) = create_test_core(deployer());
    let mut sub = bus.subscribe(ChangeFilter::all());

    let _ = core.update_contract(addr(0x66), "DAOTreasury", addr(1));
    core.update_contract(deployer(), "DAOTreasury", addr(2)).unwrap();

    // The only delivered record is the accepted mutation.
    let record = timeout(Duration::from_millis(100), sub.recv())
        .await
        .expect("timeout")
        .expect("record");
    assert_eq!(record.sequence, 0);
    assert_eq!(
        record.event,
        ChangeEvent::ContractUpdated {
            name: "DAOTreasury".into(),
            address: addr(2),
        }
    );
    assert!(matches!(sub.try_recv(), Ok(None)));
}

#[tokio::test]
async fn lagged_consumer_recovers_from_the_log() {
    // Tiny channel so the slow consumer lags.
    let bus = std::sync::Arc::new(dao_bus::InMemoryChangeBus::with_capacity(4));
    let core = CoreService::new(deployer(), bus.clone());
    let mut sub = bus.subscribe(ChangeFilter::all());

    for i in 0..32u8 {
        core.set_system_parameter(deployer(), &format!("p{i}"), U256::from(u64::from(i)))
            .unwrap();
    }

    // The live stream skipped ahead.
    let live = timeout(Duration::from_millis(100), sub.recv())
        .await
        .expect("timeout")
        .expect("record");
    assert!(live.sequence > 0);

    // Everything missed is replayable from the log, gap-free.
    let replayed = core.log_since(0);
    assert_eq!(replayed.len(), 32);
    for (i, record) in replayed.iter().enumerate() {
        assert_eq!(record.sequence, i as u64);
    }
}

#[tokio::test]
async fn change_stream_works_with_combinators() {
    let (core, bus) = create_test_core(deployer());
    let stream = bus.change_stream(ChangeFilter::kinds(vec![ChangeKind::ContractUpdated]));

    core.update_contract(deployer(), "DAOGovernor", addr(1)).unwrap();
    core.update_contract(deployer(), "DAOTreasury", addr(2)).unwrap();

    let names: Vec<String> = stream
        .take(2)
        .map(|record| match record.event {
            ChangeEvent::ContractUpdated { name, .. } => name,
            other => panic!("unexpected event: {other:?}"),
        })
        .collect()
        .await;

    assert_eq!(names, vec!["DAOGovernor", "DAOTreasury"]);
}

#[test]
fn records_serialize_with_the_fixed_payload_shape() {
    let (core, _bus) = create_test_core(deployer());
    core.update_contract(deployer(), "DAOTreasury", addr(0xab)).unwrap();

    let record = &core.log_records()[0];
    let json = serde_json::to_value(record).unwrap();

    // Off-chain listeners key off these exact names.
    assert_eq!(json["event"]["kind"], "ContractUpdated");
    assert_eq!(json["event"]["name"], "DAOTreasury");
    assert!(json["event"]["address"].is_array() || json["event"]["address"].is_string());
    assert_eq!(json["sequence"], 0);
}
