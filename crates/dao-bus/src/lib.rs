//! # DAO Bus - Change Log and Notification Stream
//!
//! The observable audit trail of the core registry. Every accepted mutation
//! of the registry appends exactly one [`ChangeRecord`] to the append-only
//! [`ChangeLog`] and publishes it to subscribers, atomically with the
//! mutation itself.
//!
//! ## Delivery Contract
//!
//! - Records carry a monotonically increasing sequence number assigned at
//!   commit time; publish order equals commit order.
//! - Live delivery is at-least-once: a lagged subscriber skips ahead and can
//!   re-read missed records from the log via [`ChangeLog::since`].
//! - Consumers must therefore be idempotent with respect to duplicate
//!   delivery, keyed on the sequence number.
//!
//! ```text
//! ┌──────────────┐                      ┌──────────────┐
//! │  Core (admin │    append+publish    │  Dependent   │
//! │  mutation)   │ ──────┐              │  subsystem   │
//! └──────────────┘       │              └──────────────┘
//!                        ▼                      ↑
//!                  ┌──────────────┐            │
//!                  │  Change Bus  │ ───────────┘
//!                  └──────────────┘  subscribe()
//! ```

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod log;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{ChangeEvent, ChangeFilter, ChangeKind, ChangeRecord};
pub use log::ChangeLog;
pub use publisher::{ChangePublisher, InMemoryChangeBus};
pub use subscriber::{ChangeStream, Subscription, SubscriptionError};

/// Maximum records to buffer per subscriber before lag kicks in.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
