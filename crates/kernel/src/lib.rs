//! Shared kernel for the IAM policy administration core.
//!
//! This crate holds only the truly cross-cutting pieces every bounded context
//! depends on: the error taxonomy exposed at the system boundary, the
//! `Principal` produced from a validated token, small value-object ids, and
//! the domain-event / event-bus contracts used to wire the CQRS dispatch
//! skeleton to the event outbox.
//!
//! Principles (unchanged from the pre-refactor shared kernel this crate is
//! descended from):
//! - No feature-specific business logic.
//! - Only stable types and abstractions.
//! - No dependency on any bounded-context crate (`policies`, `enforcer`,
//!   `principal`, `cqrs`) — those depend on this, never the reverse.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ports::{
    DomainEvent, EventBus, EventEnvelope, EventHandler, EventPublisher, NoopReloadCoordinator,
    ReloadCoordinator, Subscription,
};
pub use domain::error::{ApiError, ErrorKind};
pub use domain::ids::{ModelVersionId, RelationId, RuleId};
pub use domain::pagination::{PageRequest, PageResult, DEFAULT_PAGE_CURRENT, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use domain::principal::Principal;
pub use infrastructure::InMemoryEventBus;
