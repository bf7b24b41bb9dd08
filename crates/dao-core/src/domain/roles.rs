//! # Role Manager
//!
//! Role → member-set assignments. Gates all mutating operations of the
//! registry: the service checks membership here before touching any store.

use dao_types::{admin_role, Address, RoleId};
use std::collections::{HashMap, HashSet};

/// Role membership state.
///
/// Grant and revoke are idempotent on state; the service emits a change
/// record per call regardless of whether membership actually changed.
#[derive(Debug, Default)]
pub struct RoleManager {
    members: HashMap<RoleId, HashSet<Address>>,
}

impl RoleManager {
    /// Create an empty role manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a role manager with `deployer` holding the admin role.
    ///
    /// This is the construction-time state of the registry: the deploying
    /// identity is the sole admin until it grants the role onward.
    #[must_use]
    pub fn with_deployer(deployer: Address) -> Self {
        let mut manager = Self::new();
        manager.grant(admin_role(), deployer);
        manager
    }

    /// Add `account` to `role`'s member set.
    ///
    /// Returns true if membership actually changed.
    pub fn grant(&mut self, role: RoleId, account: Address) -> bool {
        self.members.entry(role).or_default().insert(account)
    }

    /// Remove `account` from `role`'s member set.
    ///
    /// Silently succeeds if the account was never a member. Returns true if
    /// membership actually changed. Removing the last member of the admin
    /// role is permitted by the mechanism.
    pub fn revoke(&mut self, role: RoleId, account: Address) -> bool {
        self.members
            .get_mut(&role)
            .is_some_and(|set| set.remove(&account))
    }

    /// Check whether `account` holds `role`. Never fails.
    #[must_use]
    pub fn has_role(&self, role: RoleId, account: Address) -> bool {
        self.members
            .get(&role)
            .is_some_and(|set| set.contains(&account))
    }

    /// Number of members currently holding `role`.
    #[must_use]
    pub fn member_count(&self, role: RoleId) -> usize {
        self.members.get(&role).map_or(0, HashSet::len)
    }
}
