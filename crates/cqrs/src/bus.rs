//! Type-indexed command and query bus.
//!
//! Dispatch is synchronous from the caller's perspective (`spec.md` §4.9):
//! `dispatch` awaits the registered handler and returns its result directly,
//! there is no fire-and-forget queueing here — that is what the event outbox
//! is for.

use async_trait::async_trait;
use kernel::ApiError;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Marker for a command DTO. `Output` is the handler's success value.
pub trait Command: Send + Sync + 'static {
    type Output: Send + 'static;
}

/// Marker for a query DTO.
pub trait Query: Send + Sync + 'static {
    type Output: Send + 'static;
}

#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    async fn execute(&self, command: C) -> Result<C::Output, ApiError>;
}

#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    async fn execute(&self, query: Q) -> Result<Q::Output, ApiError>;
}

/// Registry mapping a command's `TypeId` to its (type-erased) handler.
///
/// A command type may only have one registered handler; registering a
/// second handler for the same type replaces the first, matching the
/// "one handler per command type" shape of `spec.md` §4.9.
#[derive(Default)]
pub struct CommandBus {
    handlers: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
    registered_names: RwLock<HashMap<TypeId, &'static str>>,
}

impl CommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C, H>(&self, handler: Arc<H>)
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let erased: Arc<dyn CommandHandler<C>> = handler;
        self.handlers.write().unwrap().insert(TypeId::of::<C>(), Box::new(erased));
        self.registered_names.write().unwrap().insert(TypeId::of::<C>(), std::any::type_name::<C>());
    }

    /// Startup-time check: panics (a deliberate "programming error", per
    /// `spec.md` §4.9) if no handler was registered for `C`. Call this for
    /// every command the composition root is supposed to wire, so a missing
    /// registration is a boot failure, not a later runtime surprise.
    pub fn ensure_registered<C: Command>(&self) {
        let present = self.handlers.read().unwrap().contains_key(&TypeId::of::<C>());
        assert!(present, "no command handler registered for {}", std::any::type_name::<C>());
    }

    pub async fn dispatch<C: Command>(&self, command: C) -> Result<C::Output, ApiError> {
        let handler = {
            let handlers = self.handlers.read().unwrap();
            handlers
                .get(&TypeId::of::<C>())
                .and_then(|h| h.downcast_ref::<Arc<dyn CommandHandler<C>>>())
                .cloned()
        };

        match handler {
            Some(h) => h.execute(command).await,
            None => Err(ApiError::internal(format!(
                "no command handler registered for {}",
                std::any::type_name::<C>()
            ))),
        }
    }
}

/// Registry mapping a query's `TypeId` to its (type-erased) handler.
#[derive(Default)]
pub struct QueryBus {
    handlers: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl QueryBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<Q, H>(&self, handler: Arc<H>)
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let erased: Arc<dyn QueryHandler<Q>> = handler;
        self.handlers.write().unwrap().insert(TypeId::of::<Q>(), Box::new(erased));
    }

    pub fn ensure_registered<Q: Query>(&self) {
        let present = self.handlers.read().unwrap().contains_key(&TypeId::of::<Q>());
        assert!(present, "no query handler registered for {}", std::any::type_name::<Q>());
    }

    pub async fn dispatch<Q: Query>(&self, query: Q) -> Result<Q::Output, ApiError> {
        let handler = {
            let handlers = self.handlers.read().unwrap();
            handlers
                .get(&TypeId::of::<Q>())
                .and_then(|h| h.downcast_ref::<Arc<dyn QueryHandler<Q>>>())
                .cloned()
        };

        match handler {
            Some(h) => h.execute(query).await,
            None => Err(ApiError::internal(format!(
                "no query handler registered for {}",
                std::any::type_name::<Q>()
            ))),
        }
    }
}
