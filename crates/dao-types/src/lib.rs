//! # DAO Types Crate
//!
//! This crate contains the value types shared across the Agent-DAO
//! subsystems: account/contract addresses, role identifiers, and the core
//! error taxonomy.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Value semantics**: Addresses and role ids are small `Copy` types
//!   defined by their bytes, not by identity.
//! - **Pre-authenticated callers**: Mutating operations carry the caller's
//!   `Address` as established by the surrounding transport; no signature
//!   material crosses these types.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;

// Re-export U256 so downstream crates share one arithmetic type for
// parameter values and stake amounts.
pub use primitive_types::U256;
