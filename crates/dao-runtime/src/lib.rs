//! # Agent-DAO Organization Runtime
//!
//! Bootstraps the multi-contract organization around the core registry:
//! derives the subsystem addresses, constructs the registry with the
//! deployer as admin, and registers each governed subsystem in deploy order.
//! Dependent subsystems never mutate the registry; they resolve peers and
//! check trust through it (see [`trust::TrustGate`]).
//!
//! ## Bootstrap Sequence
//!
//! 1. Load configuration (from env)
//! 2. Construct the core registry (deployer = sole admin, params seeded)
//! 3. Derive addresses for the token and the four governed subsystems
//! 4. Register DAOGovernor, DAOTreasury, AgentRegistry, MissionFactory
//! 5. Log the deployment summary

pub mod bootstrap;
pub mod config;
pub mod trust;

pub use bootstrap::{bootstrap, DeploymentSummary, Organization};
pub use config::OrgConfig;
pub use trust::{TrustError, TrustGate};
