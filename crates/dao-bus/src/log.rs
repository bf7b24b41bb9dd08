//! # Change Log
//!
//! Append-only record of accepted mutations. The log is the durable side of
//! the notifier: live subscribers that lag behind the broadcast channel can
//! re-read what they missed from here, keyed on the sequence number.

use crate::events::{ChangeEvent, ChangeRecord};
use dao_types::Address;

/// Append-only, monotonically sequenced record of accepted mutations.
///
/// Records are never modified or deleted; the log lives as long as the
/// registry instance that owns it.
#[derive(Debug, Default)]
pub struct ChangeLog {
    records: Vec<ChangeRecord>,
}

impl ChangeLog {
    /// Create an empty change log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, assigning it the next sequence number.
    ///
    /// Returns a clone of the committed record for publication.
    pub fn append(&mut self, actor: Address, event: ChangeEvent) -> ChangeRecord {
        let record = ChangeRecord {
            sequence: self.records.len() as u64,
            actor,
            event,
        };
        self.records.push(record.clone());
        record
    }

    /// The sequence number the next accepted mutation will receive.
    #[must_use]
    pub fn next_sequence(&self) -> u64 {
        self.records.len() as u64
    }

    /// Number of committed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no mutation has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All committed records, in commit order.
    #[must_use]
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Records with `sequence >= from`, in commit order.
    ///
    /// Replay API for consumers recovering from a lagged subscription.
    #[must_use]
    pub fn since(&self, from: u64) -> &[ChangeRecord] {
        let start = usize::try_from(from).unwrap_or(self.records.len());
        self.records.get(start.min(self.records.len())..).unwrap_or(&[])
    }
}
