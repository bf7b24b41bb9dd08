//! # Domain Layer
//!
//! Pure state types for the three stores the registry owns. No locking, no
//! logging, no authorization here; the service layer composes these under a
//! single lock and gates every mutation.

pub mod invariants;
pub mod params;
pub mod registry;
pub mod roles;
