//! Application ports for the shared kernel: the event bus contract that
//! backs the CQRS skeleton's event outbox (C9/C10), and the enforcer
//! reload coordinator contract (C6) every mutation use case depends on.
pub mod event_bus;
pub mod reload_coordinator;

pub use event_bus::{DomainEvent, EventBus, EventEnvelope, EventHandler, EventPublisher, Subscription};
pub use reload_coordinator::{NoopReloadCoordinator, ReloadCoordinator};
