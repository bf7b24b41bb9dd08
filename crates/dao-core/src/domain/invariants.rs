//! # Domain Invariants
//!
//! Checks over the registry's state. INVARIANT-3 must always hold;
//! ADMIN-POPULATED is advisory — the mechanism permits revoking the last
//! admin, so the check exists for operators and tests rather than as an
//! enforcement point.

use crate::domain::registry::ComponentRegistry;
use crate::domain::roles::RoleManager;
use dao_types::{admin_role, Address};

/// INVARIANT-3: Monotonic authorization.
///
/// Every address currently installed under a name must be in the authorized
/// set. (The converse does not hold: reassigned addresses stay authorized.)
#[must_use]
pub fn check_authorized_superset_invariant(registry: &ComponentRegistry) -> bool {
    registry
        .entries()
        .all(|(_, address)| registry.is_authorized(address))
}

/// ADMIN-POPULATED: at least one account holds the admin role.
///
/// The mechanism does not enforce this; an empty admin set leaves the
/// registry with no authorized mutator for the rest of its lifetime.
#[must_use]
pub fn check_admin_role_populated(roles: &RoleManager) -> bool {
    roles.member_count(admin_role()) > 0
}

/// A detected invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// An installed address is missing from the authorized set.
    UnauthorizedInstalledAddress {
        /// The registry name whose address is not authorized.
        name: String,
        /// The offending address.
        address: Address,
    },
    /// No account holds the admin role; the registry is frozen.
    AdminRoleEmpty,
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(
    roles: &RoleManager,
    registry: &ComponentRegistry,
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (name, address) in registry.entries() {
        if !registry.is_authorized(address) {
            violations.push(InvariantViolation::UnauthorizedInstalledAddress {
                name: name.to_string(),
                address,
            });
        }
    }

    if !check_admin_role_populated(roles) {
        violations.push(InvariantViolation::AdminRoleEmpty);
    }

    violations
}
