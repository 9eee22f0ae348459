//! Event outbox (C10): an append-only sink for published domain events.
//!
//! `spec.md` §4.10 requires ordering per aggregate id but leaves the
//! persistence mechanism unfixed and delivery "at-least-once, out-of-band".
//! `InMemoryEventOutbox` satisfies the ordering requirement trivially (a
//! single append-ordered log, naturally ordered per aggregate since nothing
//! ever reorders or removes records) and marks records delivered once a
//! downstream subscriber acknowledges them; a durable adapter (a table with
//! a `delivered` column, per §6's persisted-state layout) can implement the
//! same trait without callers changing.

use async_trait::async_trait;
use kernel::{ApiError, DomainEvent, EventEnvelope, EventHandler};
use std::sync::Mutex;

#[derive(Debug, Clone, serde::Serialize)]
pub struct OutboxRecord {
    pub aggregate_type: &'static str,
    pub aggregate_id: Option<String>,
    pub event_type: &'static str,
    pub payload: serde_json::Value,
    pub occurred_at: chrono::DateTime<chrono::Utc>,
    pub delivered: bool,
}

#[async_trait]
pub trait EventOutbox: Send + Sync {
    async fn append(&self, record: OutboxRecord) -> Result<(), ApiError>;

    /// Records for one aggregate id, in commit order.
    async fn records_for_aggregate(&self, aggregate_id: &str) -> Vec<OutboxRecord>;

    async fn mark_all_delivered(&self) -> usize;
}

/// Append-only in-process outbox, ordered by insertion (commit order).
#[derive(Default)]
pub struct InMemoryEventOutbox {
    records: Mutex<Vec<OutboxRecord>>,
}

impl InMemoryEventOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<OutboxRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventOutbox for InMemoryEventOutbox {
    async fn append(&self, record: OutboxRecord) -> Result<(), ApiError> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }

    async fn records_for_aggregate(&self, aggregate_id: &str) -> Vec<OutboxRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.aggregate_id.as_deref() == Some(aggregate_id))
            .cloned()
            .collect()
    }

    async fn mark_all_delivered(&self) -> usize {
        let mut records = self.records.lock().unwrap();
        let mut count = 0;
        for r in records.iter_mut() {
            if !r.delivered {
                r.delivered = true;
                count += 1;
            }
        }
        count
    }
}

/// Bridges the kernel event bus to an `EventOutbox`: subscribe one of these
/// per concrete event type `E` and every published `E` is recorded.
pub struct OutboxRecorder<E: DomainEvent> {
    aggregate_type: &'static str,
    outbox: std::sync::Arc<dyn EventOutbox>,
    _marker: std::marker::PhantomData<E>,
}

impl<E: DomainEvent> OutboxRecorder<E> {
    pub fn new(aggregate_type: &'static str, outbox: std::sync::Arc<dyn EventOutbox>) -> Self {
        Self { aggregate_type, outbox, _marker: std::marker::PhantomData }
    }
}

#[async_trait]
impl<E: DomainEvent + serde::Serialize> EventHandler<E> for OutboxRecorder<E> {
    fn name(&self) -> &'static str {
        "outbox_recorder"
    }

    async fn handle(&self, envelope: EventEnvelope<E>) -> anyhow::Result<()> {
        let record = OutboxRecord {
            aggregate_type: self.aggregate_type,
            aggregate_id: envelope.event.aggregate_id(),
            event_type: envelope.event.event_type(),
            payload: serde_json::to_value(&envelope.event)?,
            occurred_at: envelope.occurred_at,
            delivered: false,
        };
        self.outbox
            .append(record)
            .await
            .map_err(|e| anyhow::anyhow!("outbox append failed: {}", e.message))
    }
}
