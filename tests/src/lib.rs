//! # Agent-DAO Test Suite
//!
//! Unified test crate for cross-crate scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── core_registry.rs   # Registry contract end to end
//!     ├── change_stream.rs   # Notifier delivery, filtering, replay
//!     └── org_bootstrap.rs   # Organization bootstrap + trust gate
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p dao-tests
//!
//! # By category
//! cargo test -p dao-tests integration::core_registry
//! cargo test -p dao-tests integration::change_stream
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
