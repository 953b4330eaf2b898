use chrono::{DateTime, Utc};

/// A domain event: an immutable record of a fact that already happened
/// inside an aggregate.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **explicitly named** (the type discriminator is assigned at the event
///   definition, never inferred from a runtime type name, so it stays stable
///   across refactors)
/// - designed to be **append-only**
pub trait DomainEvent: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "orders.order.placed").
    ///
    /// This is the dispatcher's routing key; it must be unique per event
    /// kind within a process. Enum implementations return it from a `match`
    /// over their variants.
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
