//! CQRS dispatch skeleton (C9) and event outbox (C10).
//!
//! This crate is deliberately business-agnostic: it defines the `Command`/
//! `Query` marker traits, the `CommandHandler`/`QueryHandler` contracts, the
//! type-indexed bus registries that dispatch to them, and the outbox sink
//! that records published domain events. The concrete command/query DTOs and
//! the handlers that implement them live in `policies`, `enforcer` and
//! `principal`; the composition root (`iam-policy-core`) registers each
//! handler with the bus at startup.
//!
//! This replaces the teacher's decorator-based handler auto-registration
//! (`spec.md` / design notes item 1): handlers are explicit, constructor-
//! injected, and a missing registration is caught by `CommandBus::ensure_registered`
//! at startup rather than surfacing as a runtime surprise.

pub mod bus;
pub mod outbox;

pub use bus::{Command, CommandBus, CommandHandler, Query, QueryBus, QueryHandler};
pub use outbox::{EventOutbox, InMemoryEventOutbox, OutboxRecord, OutboxRecorder};
