//! Domain event / event bus contracts.
//!
//! The policy mutation, model-config and token services never talk to a
//! concrete message broker; they publish through this trait. The event
//! outbox (`cqrs::outbox`) is one subscriber among possibly several
//! (login-log writer, operation-log writer) — this crate only defines the
//! contract, never the downstream consumers (`spec.md` §1 keeps those out
//! of scope).

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;
use std::sync::Arc;
use uuid::Uuid;

/// Marker for a publishable domain event. Implementors name their wire type
/// tag via `event_type`; the bus uses `std::any::TypeId` internally to route
/// by Rust type, independent of the string tag.
pub trait DomainEvent: Debug + Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    fn event_type(&self) -> &'static str;

    /// The aggregate id this event is ordered against (`spec.md` §4.10: "for
    /// a given user or policy-rule id, events appear in the outbox in the
    /// order their producing commands committed"). Default: no ordering key.
    fn aggregate_id(&self) -> Option<String> {
        None
    }
}

/// An event wrapped with bus-assigned metadata.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct EventEnvelope<E: DomainEvent> {
    pub event_id: Uuid,
    pub occurred_at: chrono::DateTime<chrono::Utc>,
    pub event: E,
}

impl<E: DomainEvent> EventEnvelope<E> {
    pub fn new(event: E) -> Self {
        Self { event_id: Uuid::new_v4(), occurred_at: chrono::Utc::now(), event }
    }
}

/// The publish half of the bus. Kept separate from `EventBus` (subscribe
/// half) so publishers (handlers) need not depend on subscription machinery.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish<E: DomainEvent>(&self, event: E) -> anyhow::Result<()>;

    async fn publish_with_envelope<E: DomainEvent>(&self, envelope: EventEnvelope<E>) -> anyhow::Result<()>;
}

/// A handler subscribed to one event type.
#[async_trait]
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    fn name(&self) -> &'static str;

    /// Filter hook; defaults to accepting every event of this type.
    fn should_handle(&self, _envelope: &EventEnvelope<E>) -> bool {
        true
    }

    async fn handle(&self, envelope: EventEnvelope<E>) -> anyhow::Result<()>;
}

/// A live subscription handle returned by `EventBus::subscribe`.
pub trait Subscription: Send + Sync {
    fn id(&self) -> &str;
    fn event_type(&self) -> &'static str;
    fn handler_name(&self) -> &'static str;
    fn cancel(&self);
    fn is_active(&self) -> bool;
}

/// The subscribe half of the bus.
#[async_trait]
pub trait EventBus: EventPublisher {
    async fn subscribe<E, H>(&self, handler: Arc<H>) -> anyhow::Result<Arc<dyn Subscription>>
    where
        E: DomainEvent,
        H: EventHandler<E> + 'static;

    fn subscription_count(&self) -> usize;
    fn handler_count(&self) -> usize;
}
