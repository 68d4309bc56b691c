// Command and query buses. Each message type maps to exactly one handler
// instance; the tables are populated by explicit register calls at startup
// (see `crate::context`) and never change afterwards, so dispatch needs no
// locking. Results and failures pass through unchanged: no retries, no
// transformation.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::{DomainError, DomainResult};

/// An intent to change state, dispatched to exactly one handler.
pub trait Command: Send + 'static {
    type Result: Send + 'static;
}

/// A request to read state, dispatched to exactly one handler.
pub trait Query: Send + 'static {
    type Result: Send + 'static;
}

#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    async fn execute(&self, command: C) -> DomainResult<C::Result>;
}

#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    async fn execute(&self, query: Q) -> DomainResult<Q::Result>;
}

#[derive(Default)]
pub struct CommandBus {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl CommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C, H>(&mut self, handler: H)
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let handler: Arc<dyn CommandHandler<C>> = Arc::new(handler);
        self.handlers.insert(TypeId::of::<C>(), Box::new(handler));
    }

    pub async fn dispatch<C: Command>(&self, command: C) -> DomainResult<C::Result> {
        let handler = self
            .handlers
            .get(&TypeId::of::<C>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn CommandHandler<C>>>())
            .ok_or(DomainError::Unregistered(type_name::<C>()))?;
        handler.execute(command).await
    }
}

#[derive(Default)]
pub struct QueryBus {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl QueryBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<Q, H>(&mut self, handler: H)
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let handler: Arc<dyn QueryHandler<Q>> = Arc::new(handler);
        self.handlers.insert(TypeId::of::<Q>(), Box::new(handler));
    }

    pub async fn dispatch<Q: Query>(&self, query: Q) -> DomainResult<Q::Result> {
        let handler = self
            .handlers
            .get(&TypeId::of::<Q>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn QueryHandler<Q>>>())
            .ok_or(DomainError::Unregistered(type_name::<Q>()))?;
        handler.execute(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping(u32);

    impl Command for Ping {
        type Result = u32;
    }

    struct PingHandler;

    #[async_trait]
    impl CommandHandler<Ping> for PingHandler {
        async fn execute(&self, command: Ping) -> DomainResult<u32> {
            Ok(command.0 + 1)
        }
    }

    struct Unwired;

    impl Query for Unwired {
        type Result = ();
    }

    #[tokio::test]
    async fn dispatch_routes_to_the_registered_handler() {
        let mut bus = CommandBus::new();
        bus.register::<Ping, _>(PingHandler);
        assert_eq!(bus.dispatch(Ping(41)).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn dispatching_an_unregistered_type_fails_fast() {
        let bus = QueryBus::new();
        let err = bus.dispatch(Unwired).await.unwrap_err();
        assert!(matches!(err, DomainError::Unregistered(_)));
    }

    #[tokio::test]
    async fn failures_propagate_unchanged() {
        struct Reject;
        impl Command for Reject {
            type Result = ();
        }
        struct RejectHandler;
        #[async_trait]
        impl CommandHandler<Reject> for RejectHandler {
            async fn execute(&self, _command: Reject) -> DomainResult<()> {
                Err(DomainError::forbidden("nope"))
            }
        }

        let mut bus = CommandBus::new();
        bus.register::<Reject, _>(RejectHandler);
        assert_eq!(
            bus.dispatch(Reject).await.unwrap_err(),
            DomainError::forbidden("nope")
        );
    }
}
