//! # Domain Entities
//!
//! Immutable value types for the Agent-DAO system. These represent concepts
//! that are defined by their value, not identity.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte account or contract address.
///
/// The zero address doubles as the "unknown" result for registry lookups.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Derives a deterministic address from a deployer and a label.
    ///
    /// Stands in for the chain's deployment address: Keccak-256 of
    /// `deployer || label`, truncated to the low 20 bytes.
    #[must_use]
    pub fn derive(deployer: Address, label: &str) -> Self {
        let mut hasher = Keccak256::new();
        hasher.update(deployer.0);
        hasher.update(label.as_bytes());
        let digest = hasher.finalize();
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[12..32]);
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

// =============================================================================
// ROLE ID (32 bytes)
// =============================================================================

/// A 32-byte role identifier, derived as the Keccak-256 hash of the
/// human-readable role name.
///
/// Deriving ids from names keeps the scheme open-ended: finer-grained roles
/// can be added without coordinating a numbering space. The core system uses
/// a single distinguished role, [`admin_role`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(pub [u8; 32]);

impl RoleId {
    /// Derives a role id from its human-readable name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let digest = Keccak256::digest(name.as_bytes());
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")
    }
}

/// Name of the distinguished admin role.
pub const ADMIN_ROLE_NAME: &str = "ADMIN_ROLE";

/// The admin role: the single permission group authorized to mutate the
/// core registry. Granted to the deployer at construction.
#[must_use]
pub fn admin_role() -> RoleId {
    RoleId::from_name(ADMIN_ROLE_NAME)
}

// =============================================================================
// WELL-KNOWN SUBSYSTEM NAMES
// =============================================================================

/// Logical names the organization registers in the core registry.
///
/// Names are case-sensitive registry keys; dependent subsystems resolve
/// their peers with these exact strings.
pub mod subsystems {
    /// Governance contract (proposal/vote lifecycle).
    pub const DAO_GOVERNOR: &str = "DAOGovernor";
    /// Treasury contract (fund custody and disbursement).
    pub const DAO_TREASURY: &str = "DAOTreasury";
    /// Agent registry contract (agent identity and staking).
    pub const AGENT_REGISTRY: &str = "AgentRegistry";
    /// Mission factory contract (mission instantiation).
    pub const MISSION_FACTORY: &str = "MissionFactory";

    /// Registration order used at bootstrap.
    pub const DEPLOY_ORDER: [&str; 4] =
        [DAO_GOVERNOR, DAO_TREASURY, AGENT_REGISTRY, MISSION_FACTORY];
}

/// Well-known system parameter names seeded at construction.
pub mod params {
    /// Minimum stake required of an agent, in 10^-18 token units.
    pub const MINIMUM_STAKE: &str = "minimumStake";
    /// Voting period in seconds.
    pub const VOTING_PERIOD: &str = "votingPeriod";
}

// =============================================================================
// TESTS
// =============================================================================
