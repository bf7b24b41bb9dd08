//! Cross-crate integration scenarios.

pub mod change_stream;
pub mod core_registry;
pub mod org_bootstrap;
