//! # Core Registry Service
//!
//! Owns the registry's shared mutable state and enforces the contract:
//! authorize first, then apply the mutation, append its change record, and
//! publish — all under one write lock, so no concurrent reader ever observes
//! a half-applied mutation and delivery order equals commit order.
//!
//! Reads take the read lock only and never block one another.

use crate::domain::invariants::{check_all_invariants, InvariantViolation};
use crate::domain::params::ParameterStore;
use crate::domain::registry::ComponentRegistry;
use crate::domain::roles::RoleManager;
use crate::ports::inbound::CoreRegistryApi;

use dao_bus::{ChangeEvent, ChangeLog, ChangePublisher, ChangeRecord, InMemoryChangeBus};
use dao_types::{admin_role, Address, CoreError, RoleId, U256};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Counters for the core registry service.
#[derive(Debug, Default, Clone)]
pub struct CoreStats {
    /// Mutations accepted and committed.
    pub mutations_applied: u64,
    /// Mutations rejected by the admin gate.
    pub rejected_mutations: u64,
}

/// The registry's state: three stores plus the change log, guarded together.
///
/// Keeping the log inside the same lock as the stores is what makes
/// INVARIANT-2 hold: a mutation and its record commit in one critical
/// section or not at all.
struct CoreState {
    roles: RoleManager,
    params: ParameterStore,
    registry: ComponentRegistry,
    log: ChangeLog,
}

/// The core registry service.
///
/// Constructed once per organization and passed by reference to all
/// callers; there is no ambient singleton. At construction the deployer
/// holds the admin role and the default parameters are seeded, before any
/// external caller can observe the instance. Construction-time seeding
/// precedes observability and is therefore not logged; the change log
/// records administrative mutations only.
pub struct CoreService {
    state: RwLock<CoreState>,
    notifier: Arc<dyn ChangePublisher>,
    stats: RwLock<CoreStats>,
}

impl CoreService {
    /// Create a new core registry with `deployer` as the sole admin.
    pub fn new(deployer: Address, notifier: Arc<dyn ChangePublisher>) -> Self {
        info!(deployer = %deployer, "Core registry constructed");
        Self {
            state: RwLock::new(CoreState {
                roles: RoleManager::with_deployer(deployer),
                params: ParameterStore::seeded(),
                registry: ComponentRegistry::new(),
                log: ChangeLog::new(),
            }),
            notifier,
            stats: RwLock::new(CoreStats::default()),
        }
    }

    /// Get current service counters.
    pub fn stats(&self) -> CoreStats {
        self.stats.read().clone()
    }

    /// Number of committed change records.
    pub fn log_len(&self) -> usize {
        self.state.read().log.len()
    }

    /// Committed records with `sequence >= from`, for consumer replay.
    pub fn log_since(&self, from: u64) -> Vec<ChangeRecord> {
        self.state.read().log.since(from).to_vec()
    }

    /// All committed records in commit order.
    pub fn log_records(&self) -> Vec<ChangeRecord> {
        self.state.read().log.records().to_vec()
    }

    /// Run the domain invariant checks against the current state.
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        let state = self.state.read();
        check_all_invariants(&state.roles, &state.registry)
    }

    /// Admin gate: runs first in every mutating operation.
    ///
    /// On rejection the state is untouched and no record is appended.
    fn authorize(&self, state: &CoreState, caller: Address) -> Result<(), CoreError> {
        let role = admin_role();
        if state.roles.has_role(role, caller) {
            Ok(())
        } else {
            warn!(caller = %caller, "Mutation rejected: caller lacks admin role");
            self.stats.write().rejected_mutations += 1;
            Err(CoreError::Unauthorized { caller, role })
        }
    }

    /// Commit an accepted mutation's record and publish it.
    fn commit(&self, state: &mut CoreState, actor: Address, event: ChangeEvent) {
        let record = state.log.append(actor, event);
        self.notifier.publish(record);
        self.stats.write().mutations_applied += 1;
    }
}

impl CoreRegistryApi for CoreService {
    fn grant_role(
        &self,
        caller: Address,
        role: RoleId,
        account: Address,
    ) -> Result<(), CoreError> {
        let mut state = self.state.write();
        self.authorize(&state, caller)?;

        let changed = state.roles.grant(role, account);
        debug!(?role, account = %account, changed, "Role granted");

        self.commit(&mut state, caller, ChangeEvent::RoleGranted { role, account });
        Ok(())
    }

    fn revoke_role(
        &self,
        caller: Address,
        role: RoleId,
        account: Address,
    ) -> Result<(), CoreError> {
        let mut state = self.state.write();
        self.authorize(&state, caller)?;

        let changed = state.roles.revoke(role, account);
        debug!(?role, account = %account, changed, "Role revoked");

        if role == admin_role() && state.roles.member_count(role) == 0 {
            // Permitted by the mechanism; the registry is now frozen.
            warn!("Admin role member set is empty: no authorized mutator remains");
        }

        self.commit(&mut state, caller, ChangeEvent::RoleRevoked { role, account });
        Ok(())
    }

    fn has_role(&self, role: RoleId, account: Address) -> bool {
        self.state.read().roles.has_role(role, account)
    }

    fn update_contract(
        &self,
        caller: Address,
        name: &str,
        address: Address,
    ) -> Result<(), CoreError> {
        let mut state = self.state.write();
        self.authorize(&state, caller)?;

        state.registry.update(name, address);
        info!(name = name, address = %address, "Registry entry updated");

        self.commit(
            &mut state,
            caller,
            ChangeEvent::ContractUpdated {
                name: name.to_string(),
                address,
            },
        );
        Ok(())
    }

    fn get_contract(&self, name: &str) -> Address {
        self.state.read().registry.get(name)
    }

    fn is_authorized_contract(&self, address: Address) -> bool {
        self.state.read().registry.is_authorized(address)
    }

    fn set_system_parameter(
        &self,
        caller: Address,
        name: &str,
        value: U256,
    ) -> Result<(), CoreError> {
        let mut state = self.state.write();
        self.authorize(&state, caller)?;

        state.params.set(name, value);
        debug!(name = name, value = %value, "System parameter set");

        self.commit(
            &mut state,
            caller,
            ChangeEvent::SystemParameterChanged {
                name: name.to_string(),
                value,
            },
        );
        Ok(())
    }

    fn get_system_parameter(&self, name: &str) -> U256 {
        self.state.read().params.get(name)
    }
}

/// Create a core registry on a fresh in-memory bus (for testing).
#[must_use]
pub fn create_test_core(deployer: Address) -> (CoreService, Arc<InMemoryChangeBus>) {
    let bus = Arc::new(InMemoryChangeBus::new());
    let core = CoreService::new(deployer, bus.clone());
    (core, bus)
}

// =============================================================================
// TESTS
// =============================================================================
