//! `domainkit-events` — domain event contract and synchronous dispatch.
//!
//! An aggregate root records events while application code mutates it; at the
//! transaction boundary those events are drained and fanned out, one at a
//! time, to every handler registered for the event's type.

pub mod dispatcher;
pub mod drain;
pub mod event;

pub use dispatcher::{DispatchError, EventDispatcher, EventHandler, HandlerResult};
pub use drain::drain_and_dispatch;
pub use event::DomainEvent;
