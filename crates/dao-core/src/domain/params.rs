//! # Parameter Store
//!
//! Named numeric configuration values shared across subsystems.

use dao_types::{params, U256};
use std::collections::HashMap;

/// Name → value map of system parameters.
///
/// Two parameters are seeded at construction, before any external caller can
/// observe the store: `minimumStake` (1000 tokens in 10^-18 units) and
/// `votingPeriod` (604800 seconds, 7 days).
#[derive(Debug, Default)]
pub struct ParameterStore {
    values: HashMap<String, U256>,
}

impl ParameterStore {
    /// Create an empty parameter store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the construction-time defaults seeded.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.set(params::MINIMUM_STAKE, U256::from(1000u64) * U256::exp10(18));
        store.set(params::VOTING_PERIOD, U256::from(7 * 24 * 60 * 60u64));
        store
    }

    /// Overwrite or create a parameter. No validation beyond the type.
    pub fn set(&mut self, name: &str, value: U256) {
        self.values.insert(name.to_string(), value);
    }

    /// Read a parameter.
    ///
    /// Returns zero for unknown names. An explicitly-set zero is
    /// indistinguishable from an unset parameter; callers that care must
    /// track which names they seeded out-of-band.
    #[must_use]
    pub fn get(&self, name: &str) -> U256 {
        self.values.get(name).copied().unwrap_or_else(U256::zero)
    }

    /// Number of parameters that have been set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no parameter has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
