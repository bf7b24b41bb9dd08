//! # Component Registry
//!
//! Name → address map plus the derived authorized-address set. This is the
//! primary lookup service every dependent subsystem calls to resolve peers
//! and check trust.

use dao_types::Address;
use std::collections::{HashMap, HashSet};

/// The registry of deployed subsystem addresses.
///
/// Authorization is monotonic: every address ever installed under a name
/// joins the authorized set and never leaves it, even when the name is later
/// reassigned. There is deliberately no `remove`/`deauthorize` operation;
/// authorization is a one-way trust bootstrap for the lifetime of the
/// instance.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    contracts: HashMap<String, Address>,
    authorized: HashSet<Address>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point `name` at `address` and authorize the address.
    ///
    /// Idempotent on state: re-installing an existing pair changes nothing;
    /// installing an already-authorized address under a new name only
    /// updates the name mapping.
    pub fn update(&mut self, name: &str, address: Address) {
        self.contracts.insert(name.to_string(), address);
        self.authorized.insert(address);
    }

    /// Resolve a subsystem name. Returns the zero address for unknown names.
    #[must_use]
    pub fn get(&self, name: &str) -> Address {
        self.contracts.get(name).copied().unwrap_or(Address::ZERO)
    }

    /// Trust gate: true iff `address` was ever installed under some name.
    #[must_use]
    pub fn is_authorized(&self, address: Address) -> bool {
        self.authorized.contains(&address)
    }

    /// Names currently registered, with their addresses.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Address)> {
        self.contracts.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// True if no name has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// The addresses currently trusted, in no particular order.
    pub fn authorized_addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.authorized.iter().copied()
    }
}
