//! # Inbound Port
//!
//! Protocol-agnostic surface of the core registry. A deployment may expose
//! this as local calls, an RPC service, or anything else; the semantics are
//! fixed here.

use dao_types::{Address, CoreError, RoleId, U256};

/// The operation table of the core registry.
///
/// Mutating operations carry the authenticated `caller` identity, used
/// solely for the admin-role check; reads are open to any caller and never
/// fail. All methods are synchronous in-memory operations — there is no
/// suspension or cancellation contract beyond the caller's own lifecycle.
pub trait CoreRegistryApi: Send + Sync {
    /// Grant `role` to `account`. Caller must hold the admin role.
    ///
    /// Idempotent on state; emits a `RoleGranted` record per call either way.
    ///
    /// # Errors
    ///
    /// `CoreError::Unauthorized` if the caller lacks the admin role.
    fn grant_role(&self, caller: Address, role: RoleId, account: Address)
        -> Result<(), CoreError>;

    /// Revoke `role` from `account`. Caller must hold the admin role.
    ///
    /// Silently succeeds if the account was never a member, still emitting a
    /// `RoleRevoked` record. Revoking the last admin is permitted.
    ///
    /// # Errors
    ///
    /// `CoreError::Unauthorized` if the caller lacks the admin role.
    fn revoke_role(
        &self,
        caller: Address,
        role: RoleId,
        account: Address,
    ) -> Result<(), CoreError>;

    /// Check whether `account` holds `role`. Read-only, never fails.
    fn has_role(&self, role: RoleId, account: Address) -> bool;

    /// Point `name` at `address` and add the address to the authorized set.
    /// Caller must hold the admin role. Emits a `ContractUpdated` record.
    ///
    /// # Errors
    ///
    /// `CoreError::Unauthorized` if the caller lacks the admin role.
    fn update_contract(
        &self,
        caller: Address,
        name: &str,
        address: Address,
    ) -> Result<(), CoreError>;

    /// Resolve a subsystem name. Returns the zero address for unknown names.
    fn get_contract(&self, name: &str) -> Address;

    /// Trust gate: true iff `address` was ever installed via
    /// `update_contract`.
    fn is_authorized_contract(&self, address: Address) -> bool;

    /// Overwrite or create a system parameter. Caller must hold the admin
    /// role. Emits a `SystemParameterChanged` record.
    ///
    /// # Errors
    ///
    /// `CoreError::Unauthorized` if the caller lacks the admin role.
    fn set_system_parameter(
        &self,
        caller: Address,
        name: &str,
        value: U256,
    ) -> Result<(), CoreError>;

    /// Read a system parameter. Returns zero for unknown names.
    fn get_system_parameter(&self, name: &str) -> U256;
}
