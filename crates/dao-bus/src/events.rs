//! # Change Events
//!
//! Defines the record types that flow through the change bus. The payload
//! field names are part of the compatibility surface: dependent subsystems
//! and off-chain indexers key off them exactly.

use dao_types::{Address, RoleId, U256};
use serde::{Deserialize, Serialize};

/// An accepted mutation of the core registry.
///
/// One variant per mutating operation. The payload shapes are fixed:
/// `(name, address)` for contract updates, `(name, value)` for parameter
/// changes, `(role, account)` for role membership changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ChangeEvent {
    /// A subsystem name was pointed at an address (and the address joined
    /// the authorized set).
    ContractUpdated {
        /// Logical subsystem name.
        name: String,
        /// The address now registered under `name`.
        address: Address,
    },

    /// A system parameter was created or overwritten.
    SystemParameterChanged {
        /// Parameter name.
        name: String,
        /// The new value.
        value: U256,
    },

    /// An account was granted a role (emitted even if already a member).
    RoleGranted {
        /// The role that was granted.
        role: RoleId,
        /// The account that received it.
        account: Address,
    },

    /// An account had a role revoked (emitted even if it was never a member).
    RoleRevoked {
        /// The role that was revoked.
        role: RoleId,
        /// The account it was revoked from.
        account: Address,
    },
}

impl ChangeEvent {
    /// Get the kind of this event (for filtering).
    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::ContractUpdated { .. } => ChangeKind::ContractUpdated,
            Self::SystemParameterChanged { .. } => ChangeKind::SystemParameterChanged,
            Self::RoleGranted { .. } => ChangeKind::RoleGranted,
            Self::RoleRevoked { .. } => ChangeKind::RoleRevoked,
        }
    }
}

/// A committed change: the event plus its commit metadata.
///
/// Immutable once created. Sequence numbers start at 0 and increase by one
/// per accepted mutation; ordering is the commit order of mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Position in the change log (commit order).
    pub sequence: u64,
    /// The authenticated caller that performed the mutation.
    pub actor: Address,
    /// What changed.
    pub event: ChangeEvent,
}

/// Event kinds for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Registry entry updates.
    ContractUpdated,
    /// Parameter store writes.
    SystemParameterChanged,
    /// Role membership additions.
    RoleGranted,
    /// Role membership removals.
    RoleRevoked,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific change records.
#[derive(Debug, Clone, Default)]
pub struct ChangeFilter {
    /// Kinds to include. Empty means all kinds.
    pub kinds: Vec<ChangeKind>,
    /// Actors to include. Empty means all actors.
    pub actors: Vec<Address>,
}

impl ChangeFilter {
    /// Create a filter that accepts all records.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific event kinds.
    #[must_use]
    pub fn kinds(kinds: Vec<ChangeKind>) -> Self {
        Self {
            kinds,
            actors: Vec::new(),
        }
    }

    /// Create a filter for records committed by specific actors.
    #[must_use]
    pub fn from_actors(actors: Vec<Address>) -> Self {
        Self {
            kinds: Vec::new(),
            actors,
        }
    }

    /// Check if a record matches this filter.
    #[must_use]
    pub fn matches(&self, record: &ChangeRecord) -> bool {
        let kind_match = self.kinds.is_empty()
            || self.kinds.contains(&ChangeKind::All)
            || self.kinds.contains(&record.event.kind());

        let actor_match = self.actors.is_empty() || self.actors.contains(&record.actor);

        kind_match && actor_match
    }
}
