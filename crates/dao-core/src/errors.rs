//! # Error Types
//!
//! The registry's error surface is deliberately small: the only failure a
//! caller can see is an authorization rejection. Unknown-name reads return
//! zero defaults instead of erroring, and callers own their retry policy —
//! nothing is retried internally.

pub use dao_types::CoreError;
