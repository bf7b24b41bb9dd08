//! # Error Types
//!
//! Defines error types used across subsystems.
//!
//! Unknown-key reads are deliberately not errors anywhere in the system:
//! `get_contract` returns the zero address and `get_system_parameter`
//! returns zero for names that were never set.

use crate::entities::{Address, RoleId};
use thiserror::Error;

/// Errors from core registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A mutating operation was invoked by a caller lacking the required
    /// role. The state and the change log are left untouched.
    #[error("unauthorized: caller {caller:?} does not hold role {role:?}")]
    Unauthorized {
        /// The caller that was rejected.
        caller: Address,
        /// The role the operation requires.
        role: RoleId,
    },
}
