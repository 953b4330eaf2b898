//! Synchronous event dispatch (routing table + fan-out mechanics).
//!
//! The dispatcher is an explicit, constructed object: whatever wires
//! subscribers at bootstrap and whatever drains aggregates receives a
//! reference to the same instance. There is no hidden global table, and
//! [`EventDispatcher::unregister`] / [`EventDispatcher::reset`] exist so
//! tests and bounded-lifetime hosts can tear registrations down.
//!
//! Dispatch is a single-shot synchronous fan-out, not a queue: no buffering,
//! no retry, no deferred delivery. A handler that performs asynchronous work
//! owns that work; the dispatcher does not wait for it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::event::DomainEvent;

/// Outcome of a single handler invocation. Failures are opaque to the
/// dispatcher; it only decides whether to keep going.
pub type HandlerResult = Result<(), anyhow::Error>;

/// A subscriber callback for one event type.
///
/// Implemented for free by any `Fn(&E) -> HandlerResult + Send + Sync`
/// closure, so wiring code can register plain closures or dedicated handler
/// types interchangeably.
pub trait EventHandler<E>: Send + Sync {
    fn handle(&self, event: &E) -> HandlerResult;
}

impl<E, F> EventHandler<E> for F
where
    F: Fn(&E) -> HandlerResult + Send + Sync,
{
    fn handle(&self, event: &E) -> HandlerResult {
        self(event)
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    /// A subscriber failed. Remaining subscribers for that event were not
    /// invoked; the failure propagates to the dispatching caller.
    #[error("handler for \"{event_type}\" failed")]
    Handler {
        event_type: String,
        #[source]
        source: anyhow::Error,
    },

    /// The routing table lock was poisoned by a panicking thread.
    #[error("dispatcher routing table poisoned")]
    Poisoned,
}

/// Routes each domain event to the handlers registered for its type.
///
/// The routing table maps an event type name to the subscribers for that
/// type, in registration order. Registration and dispatch are serialized by
/// a mutex, so a dispatcher can be shared across threads (typically as
/// `Arc<EventDispatcher<E>>`).
///
/// Delivery semantics:
/// - handlers run synchronously, in registration order;
/// - registering the same handler twice means it runs twice per dispatch;
/// - an event type with no subscribers dispatches as a silent no-op;
/// - the first handler failure aborts the remaining handlers for that event
///   and surfaces as [`DispatchError::Handler`].
pub struct EventDispatcher<E> {
    handlers: Mutex<HashMap<String, Vec<Arc<dyn EventHandler<E>>>>>,
}

impl<E> EventDispatcher<E> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self {
            handlers: Mutex::new(HashMap::new()),
        }
    }
}

impl<E> core::fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut dbg = f.debug_struct("EventDispatcher");
        if let Ok(table) = self.handlers.lock() {
            for (event_type, list) in table.iter() {
                dbg.field(event_type, &list.len());
            }
        }
        dbg.finish()
    }
}

impl<E> EventDispatcher<E>
where
    E: DomainEvent,
{
    /// Append `handler` to the subscriber list for `event_type`, creating the
    /// list on first registration. Invocation order follows registration
    /// order; duplicates are not detected.
    pub fn register<H>(&self, event_type: impl Into<String>, handler: H)
    where
        H: EventHandler<E> + 'static,
    {
        let event_type = event_type.into();
        if let Ok(mut table) = self.handlers.lock() {
            table.entry(event_type).or_default().push(Arc::new(handler));
        }
    }

    /// Drop every subscriber registered for `event_type`.
    pub fn unregister(&self, event_type: &str) {
        if let Ok(mut table) = self.handlers.lock() {
            table.remove(event_type);
        }
    }

    /// Drop every registration. Intended for test isolation and for hosts
    /// that outlive a wiring generation.
    pub fn reset(&self) {
        if let Ok(mut table) = self.handlers.lock() {
            table.clear();
        }
    }

    /// Number of subscribers currently registered for `event_type`.
    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers
            .lock()
            .map(|table| table.get(event_type).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    /// Synchronously invoke every subscriber registered for this event's
    /// type, in registration order.
    ///
    /// No subscribers is a no-op, not an error. The first failing subscriber
    /// aborts the rest and its error is returned.
    pub fn dispatch(&self, event: &E) -> Result<(), DispatchError> {
        let event_type = event.event_type();

        // Clone the subscriber list out of the lock so handlers run without
        // holding it; a handler may itself register or unregister.
        let subscribers: Vec<Arc<dyn EventHandler<E>>> = {
            let table = self.handlers.lock().map_err(|_| DispatchError::Poisoned)?;
            match table.get(event_type) {
                Some(list) => list.clone(),
                None => {
                    tracing::trace!(event_type, "no subscribers for domain event");
                    return Ok(());
                }
            }
        };

        tracing::debug!(
            event_type,
            subscribers = subscribers.len(),
            "dispatching domain event"
        );

        for handler in &subscribers {
            handler
                .handle(event)
                .map_err(|source| DispatchError::Handler {
                    event_type: event_type.to_string(),
                    source,
                })?;
        }

        Ok(())
    }

    /// Dispatch a sequence of events in order, stopping at the first failure.
    pub fn dispatch_all<'a, I>(&self, events: I) -> Result<(), DispatchError>
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        for event in events {
            self.dispatch(event)?;
        }
        Ok(())
    }
}
