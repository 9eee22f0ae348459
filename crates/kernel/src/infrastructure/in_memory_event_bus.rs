//! In-memory event bus implementation using tokio broadcast channels.
//!
//! Suitable for a monolithic deployment, development, and tests. For a
//! distributed deployment, swap in a message-broker adapter behind the same
//! `EventBus`/`EventPublisher` ports; nothing upstream needs to change.

use crate::application::ports::{DomainEvent, EventBus, EventEnvelope, EventHandler, EventPublisher, Subscription};
use async_trait::async_trait;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

struct TypedChannel {
    sender: broadcast::Sender<Vec<u8>>,
}

/// Each event type gets its own broadcast channel; handlers subscribe to a
/// specific event type and are driven by a spawned task per subscription.
pub struct InMemoryEventBus {
    channels: RwLock<HashMap<TypeId, TypedChannel>>,
    subscription_count: Arc<std::sync::atomic::AtomicUsize>,
    channel_capacity: usize,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        info!("creating InMemoryEventBus with capacity {}", capacity);
        Self {
            channels: RwLock::new(HashMap::new()),
            subscription_count: Arc::new(std::sync::atomic::AtomicUsize::new(0)),
            channel_capacity: capacity,
        }
    }

    fn get_or_create_channel<E: DomainEvent>(&self) -> broadcast::Sender<Vec<u8>> {
        let type_id = TypeId::of::<E>();

        {
            let channels = self.channels.read().unwrap();
            if let Some(channel) = channels.get(&type_id) {
                return channel.sender.clone();
            }
        }

        let mut channels = self.channels.write().unwrap();
        if let Some(channel) = channels.get(&type_id) {
            return channel.sender.clone();
        }

        let (tx, _rx) = broadcast::channel::<Vec<u8>>(self.channel_capacity);
        debug!(event_type = std::any::type_name::<E>(), "created new broadcast channel");
        channels.insert(type_id, TypedChannel { sender: tx.clone() });
        tx
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish<E: DomainEvent>(&self, event: E) -> anyhow::Result<()> {
        self.publish_with_envelope(EventEnvelope::new(event)).await
    }

    async fn publish_with_envelope<E: DomainEvent>(&self, envelope: EventEnvelope<E>) -> anyhow::Result<()> {
        let event_type = envelope.event.event_type();
        let aggregate_id = envelope.event.aggregate_id();

        debug!(event_type, event_id = %envelope.event_id, aggregate_id = ?aggregate_id, "publishing event");

        let bytes = bincode::serialize(&envelope)
            .map_err(|e| anyhow::anyhow!("failed to serialize event envelope: {e}"))?;

        let sender = self.get_or_create_channel::<E>();
        let receivers = sender.receiver_count();
        if receivers == 0 {
            debug!(event_type, "no subscribers for event type, event will be dropped");
        }
        // Errors only when there are no receivers, which is fine.
        let _ = sender.send(bytes);
        Ok(())
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn subscribe<E, H>(&self, handler: Arc<H>) -> anyhow::Result<Arc<dyn Subscription>>
    where
        E: DomainEvent,
        H: EventHandler<E> + 'static,
    {
        let sender = self.get_or_create_channel::<E>();
        let mut receiver = sender.subscribe();
        let handler_name = handler.name();
        let event_type_name = std::any::type_name::<E>();

        info!(handler = handler_name, event_type = event_type_name, "subscribing handler");

        let (cancel_tx, mut cancel_rx) = tokio::sync::oneshot::channel::<()>();
        let subscription_id = format!("{handler_name}-{}", Uuid::new_v4());
        let is_active = Arc::new(std::sync::atomic::AtomicBool::new(true));
        let is_active_clone = is_active.clone();

        self.subscription_count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let sub_count_clone = self.subscription_count.clone();

        let task: JoinHandle<()> = tokio::spawn(async move {
            let mut processed = 0u64;
            let mut errors = 0u64;
            let mut lagged = 0u64;

            loop {
                tokio::select! {
                    biased;

                    _ = &mut cancel_rx => {
                        info!(handler = handler_name, processed, errors, lagged, "subscription cancelled");
                        break;
                    }

                    msg = receiver.recv() => {
                        match msg {
                            Ok(bytes) => match bincode::deserialize::<EventEnvelope<E>>(&bytes) {
                                Ok(envelope) => {
                                    if !handler.should_handle(&envelope) {
                                        continue;
                                    }
                                    match handler.handle(envelope.clone()).await {
                                        Ok(()) => processed += 1,
                                        Err(e) => {
                                            errors += 1;
                                            error!(handler = handler_name, event_id = %envelope.event_id, error = %e, "handler failed");
                                        }
                                    }
                                }
                                Err(e) => {
                                    errors += 1;
                                    error!(handler = handler_name, error = %e, "failed to deserialize event envelope");
                                }
                            },
                            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                                lagged += skipped;
                                warn!(handler = handler_name, skipped, "handler lagged, events skipped");
                            }
                            Err(broadcast::error::RecvError::Closed) => {
                                info!(handler = handler_name, "event channel closed");
                                break;
                            }
                        }
                    }
                }
            }

            is_active_clone.store(false, std::sync::atomic::Ordering::Relaxed);
            sub_count_clone.fetch_sub(1, std::sync::atomic::Ordering::Relaxed);
        });

        Ok(Arc::new(InMemorySubscription {
            id: subscription_id,
            event_type: event_type_name,
            handler_name,
            cancel_tx: tokio::sync::Mutex::new(Some(cancel_tx)),
            is_active,
            _task: task,
        }) as Arc<dyn Subscription>)
    }

    fn subscription_count(&self) -> usize {
        self.subscription_count.load(std::sync::atomic::Ordering::Relaxed)
    }

    fn handler_count(&self) -> usize {
        self.subscription_count()
    }
}

use uuid::Uuid;

struct InMemorySubscription {
    id: String,
    event_type: &'static str,
    handler_name: &'static str,
    cancel_tx: tokio::sync::Mutex<Option<tokio::sync::oneshot::Sender<()>>>,
    is_active: Arc<std::sync::atomic::AtomicBool>,
    _task: JoinHandle<()>,
}

impl Subscription for InMemorySubscription {
    fn id(&self) -> &str {
        &self.id
    }

    fn event_type(&self) -> &'static str {
        self.event_type
    }

    fn handler_name(&self) -> &'static str {
        self.handler_name
    }

    fn cancel(&self) {
        info!(subscription_id = self.id, handler = self.handler_name, "cancelling subscription");
        if let Ok(mut guard) = self.cancel_tx.try_lock() {
            if let Some(tx) = guard.take() {
                let _ = tx.send(());
            }
        }
        self.is_active.store(false, std::sync::atomic::Ordering::Relaxed);
    }

    fn is_active(&self) -> bool {
        self.is_active.load(std::sync::atomic::Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    struct TestEvent {
        message: String,
    }

    impl DomainEvent for TestEvent {
        fn event_type(&self) -> &'static str {
            "test.event"
        }
    }

    struct TestHandler {
        name: &'static str,
        counter: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl EventHandler<TestEvent> for TestHandler {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn handle(&self, envelope: EventEnvelope<TestEvent>) -> anyhow::Result<()> {
            self.counter.fetch_add(1, Ordering::SeqCst);
            let _ = envelope.event.message;
            Ok(())
        }
    }

    #[tokio::test]
    async fn publish_and_subscribe() {
        let bus = InMemoryEventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let handler = Arc::new(TestHandler { name: "h1", counter: counter.clone() });

        let _sub = bus.subscribe::<TestEvent, _>(handler).await.unwrap();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        bus.publish(TestEvent { message: "hello".into() }).await.unwrap();
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancelled_subscription_stops_receiving() {
        let bus = InMemoryEventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let handler = Arc::new(TestHandler { name: "cancellable", counter: counter.clone() });

        let sub = bus.subscribe::<TestEvent, _>(handler).await.unwrap();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        sub.cancel();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        bus.publish(TestEvent { message: "after cancel".into() }).await.unwrap();
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(!sub.is_active());
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_ok() {
        let bus = InMemoryEventBus::new();
        let result = bus.publish(TestEvent { message: "no one listening".into() }).await;
        assert!(result.is_ok());
    }
}
