//! # Organization Bootstrap
//!
//! Stands up the organization: core registry first, then the governed
//! subsystems registered in deploy order. The registry only consumes the
//! final addresses; how each subsystem comes to exist is its own concern
//! (here, addresses are derived deterministically from the deployer).

use crate::config::OrgConfig;
use dao_bus::InMemoryChangeBus;
use dao_core::prelude::{CoreRegistryApi, CoreService};
use dao_types::{subsystems, Address, CoreError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// A bootstrapped organization.
///
/// The core registry and its change bus are the shared infrastructure;
/// everything else holds read references into the core.
pub struct Organization {
    /// The core registry.
    pub core: Arc<CoreService>,
    /// The change bus the core publishes to.
    pub bus: Arc<InMemoryChangeBus>,
    /// The admin identity that performed the bootstrap.
    pub deployer: Address,
    /// What was deployed where.
    pub summary: DeploymentSummary,
}

/// Deployment summary, in the shape operators expect to see logged.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentSummary {
    /// The deploying identity.
    pub deployer: Address,
    /// Governance token address (not a registry entry; the token is not a
    /// trusted mutator of anything).
    pub token: Address,
    /// Name → address of every registered subsystem.
    pub contracts: BTreeMap<String, Address>,
}

/// Bootstrap the organization.
///
/// Mirrors the canonical deployment order: token and core first, then
/// governor, treasury, agent registry, and mission factory, each registered
/// in the core as it comes up.
///
/// # Errors
///
/// Propagates `CoreError::Unauthorized` — impossible in practice since the
/// bootstrap runs as the deployer, which construction just made admin.
pub fn bootstrap(config: &OrgConfig) -> Result<Organization, CoreError> {
    info!("Deploying DAO Multi-Agent Organization");
    info!(deployer = %config.deployer, "Deploying with account");

    let bus = Arc::new(InMemoryChangeBus::with_capacity(config.bus_capacity));
    let core = Arc::new(CoreService::new(config.deployer, bus.clone()));

    let token = Address::derive(config.deployer, &config.token_symbol);
    info!(
        token = %token,
        name = %config.token_name,
        supply = %config.initial_supply,
        "Token deployed"
    );

    let mut contracts = BTreeMap::new();
    for name in subsystems::DEPLOY_ORDER {
        let address = Address::derive(config.deployer, name);
        core.update_contract(config.deployer, name, address)?;
        info!(name = name, address = %address, "Subsystem registered");
        contracts.insert(name.to_string(), address);
    }

    let summary = DeploymentSummary {
        deployer: config.deployer,
        token,
        contracts,
    };
    info!("Deployment completed successfully");

    Ok(Organization {
        core,
        bus,
        deployer: config.deployer,
        summary,
    })
}
