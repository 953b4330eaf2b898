//! Transaction-boundary helper: drain an aggregate's buffered events into a
//! dispatcher.

use domainkit_core::AggregateRoot;

use crate::dispatcher::{DispatchError, EventDispatcher};
use crate::event::DomainEvent;

/// Take every event buffered on `aggregate` and dispatch each one in the
/// order it was recorded.
///
/// The buffer is emptied before dispatch begins, so a failing subscriber
/// never leaves events queued for redelivery - retry policy belongs to the
/// caller, not to this kernel. The drained events are returned so the caller
/// can log or persist them alongside the commit.
///
/// Dispatch stops at the first subscriber failure (see
/// [`EventDispatcher::dispatch`]).
pub fn drain_and_dispatch<P, E>(
    dispatcher: &EventDispatcher<E>,
    aggregate: &mut AggregateRoot<P, E>,
) -> Result<Vec<E>, DispatchError>
where
    E: DomainEvent,
{
    let events = aggregate.take_events();
    dispatcher.dispatch_all(events.iter())?;
    Ok(events)
}
