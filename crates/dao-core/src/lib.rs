//! # DAO Core - Organization Registry Subsystem
//!
//! The coordination point of the Agent-DAO organization: a permissioned,
//! single-owner-of-truth store that maps logical subsystem names to
//! addresses, tracks which addresses are trusted subsystems, and holds the
//! named numeric system parameters. Every other subsystem resolves its peers
//! and checks authorization here before performing privileged actions.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Admin gate: only admin-role members mutate state | `service.rs` - `authorize()` runs first in every mutation |
//! | INVARIANT-2 | Atomic commit: mutation and its change record commit together or not at all | `service.rs` - apply + append + publish under one write lock |
//! | INVARIANT-3 | Monotonic authorization: installed addresses never leave the authorized set | `domain/registry.rs` - no removal operation exists |
//! | INVARIANT-4 | Monotonic log: one record per accepted mutation, strictly increasing sequence | `dao-bus::ChangeLog::append` |
//!
//! ## Deliberately Permissive
//!
//! - Revoking the last admin is allowed; `domain/invariants.rs` exposes the
//!   check but the service does not enforce it.
//! - Unknown-name reads return zero defaults, never errors.
//!
//! ## Usage Example
//!
//! ```ignore
//! use dao_core::prelude::*;
//!
//! let core = CoreService::new(deployer, bus.clone());
//!
//! core.update_contract(deployer, "DAOTreasury", treasury_addr)?;
//! assert_eq!(core.get_contract("DAOTreasury"), treasury_addr);
//! assert!(core.is_authorized_contract(treasury_addr));
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain stores
    pub use crate::domain::params::ParameterStore;
    pub use crate::domain::registry::ComponentRegistry;
    pub use crate::domain::roles::RoleManager;

    // Invariants
    pub use crate::domain::invariants::{check_all_invariants, InvariantViolation};

    // Ports
    pub use crate::ports::inbound::CoreRegistryApi;

    // Errors
    pub use crate::errors::CoreError;

    // Service
    pub use crate::service::{create_test_core, CoreService, CoreStats};

    // Shared types
    pub use dao_types::{admin_role, Address, RoleId, U256};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Core Registry";

// =============================================================================
// TESTS
// =============================================================================
