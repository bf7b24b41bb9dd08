//! # Change Publisher
//!
//! Defines the publishing side of the change bus.

use crate::events::{ChangeFilter, ChangeRecord};
use crate::subscriber::{ChangeStream, Subscription};
use crate::DEFAULT_CHANNEL_CAPACITY;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Trait for publishing committed change records to subscribers.
///
/// Publication is synchronous on purpose: the core registry publishes while
/// still holding its state lock so that delivery order equals commit order.
pub trait ChangePublisher: Send + Sync {
    /// Publish a committed record to all live subscribers.
    ///
    /// # Returns
    ///
    /// The number of active subscribers that received the record.
    fn publish(&self, record: ChangeRecord) -> usize;

    /// Get the total number of records published.
    fn records_published(&self) -> u64;
}

/// In-memory implementation of the change bus.
///
/// Uses `tokio::sync::broadcast` for multi-producer, multi-consumer
/// semantics. Suitable for single-process operation; a distributed
/// deployment would back this with an external log.
pub struct InMemoryChangeBus {
    /// Broadcast sender for records.
    sender: broadcast::Sender<ChangeRecord>,

    /// Active subscription count by filter key.
    subscriptions: Arc<RwLock<HashMap<String, usize>>>,

    /// Total records published.
    records_published: AtomicU64,

    /// Channel capacity.
    capacity: usize,
}

impl InMemoryChangeBus {
    /// Create a new in-memory change bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new in-memory change bus with specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            subscriptions: Arc::new(RwLock::new(HashMap::new())),
            records_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Subscribe to records matching a filter.
    ///
    /// Returns a `Subscription` handle that can be used to receive records.
    #[must_use]
    pub fn subscribe(&self, filter: ChangeFilter) -> Subscription {
        let receiver = self.sender.subscribe();
        let filter_key = format!("{:?}", filter.kinds);

        // Track subscription
        {
            if let Ok(mut subs) = self.subscriptions.write() {
                *subs.entry(filter_key.clone()).or_insert(0) += 1;
            }
        }

        debug!(kinds = ?filter.kinds, "New subscription created");

        Subscription::new(receiver, filter, self.subscriptions.clone(), filter_key)
    }

    /// Get a stream of records matching a filter.
    ///
    /// This is a convenience method that returns a `ChangeStream`.
    #[must_use]
    pub fn change_stream(&self, filter: ChangeFilter) -> ChangeStream {
        ChangeStream::new(self.subscribe(filter))
    }

    /// Get the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Get the channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangePublisher for InMemoryChangeBus {
    fn publish(&self, record: ChangeRecord) -> usize {
        let sequence = record.sequence;
        let kind = record.event.kind();

        // Always increment counter (publication was attempted)
        self.records_published.fetch_add(1, Ordering::Relaxed);

        match self.sender.send(record) {
            Ok(receiver_count) => {
                debug!(
                    sequence = sequence,
                    kind = ?kind,
                    receivers = receiver_count,
                    "Change record published"
                );
                receiver_count
            }
            Err(e) => {
                // No live receivers; the record stays readable in the log
                warn!(
                    sequence = sequence,
                    kind = ?kind,
                    error = %e,
                    "Change record had no live receivers"
                );
                0
            }
        }
    }

    fn records_published(&self) -> u64 {
        self.records_published.load(Ordering::Relaxed)
    }
}
