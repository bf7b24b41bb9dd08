//! # Trust Gate
//!
//! The read-side pattern every dependent subsystem follows: before honoring
//! a privileged cross-subsystem request (a treasury transfer, a mission
//! spawn), confirm the caller is an authorized subsystem in the core
//! registry. Dependent subsystems never cache this; they resolve at call
//! time so a reassigned peer takes effect immediately.

use dao_core::prelude::{CoreRegistryApi, CoreService};
use dao_types::Address;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors from trust checks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrustError {
    /// The caller is not an authorized subsystem.
    #[error("untrusted caller: {caller:?} is not an authorized subsystem")]
    UntrustedCaller {
        /// The rejected caller.
        caller: Address,
    },
}

/// Authorization check a dependent subsystem performs before honoring a
/// cross-subsystem call.
pub struct TrustGate {
    core: Arc<CoreService>,
}

impl TrustGate {
    /// Create a gate over the given core registry.
    #[must_use]
    pub fn new(core: Arc<CoreService>) -> Self {
        Self { core }
    }

    /// Check whether `caller` is an authorized subsystem.
    #[must_use]
    pub fn allows(&self, caller: Address) -> bool {
        self.core.is_authorized_contract(caller)
    }

    /// Require that `caller` is an authorized subsystem.
    ///
    /// # Errors
    ///
    /// `TrustError::UntrustedCaller` if the caller was never installed in
    /// the registry.
    pub fn require(&self, caller: Address) -> Result<(), TrustError> {
        if self.allows(caller) {
            Ok(())
        } else {
            warn!(caller = %caller, "Cross-subsystem call rejected: untrusted caller");
            Err(TrustError::UntrustedCaller { caller })
        }
    }
}
