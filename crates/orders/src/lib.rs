//! Orders domain module — a worked example of the kernel.
//!
//! This crate shows how an application-level domain builds on the kernel:
//! a `Money` value object, an `Order` aggregate root that buffers domain
//! events while it is mutated, and event types routed through the
//! dispatcher at the transaction boundary. No IO, no HTTP, no storage.

pub mod money;
pub mod order;

pub use money::Money;
pub use order::{
    LineAdded, Order, OrderCancelled, OrderEvent, OrderId, OrderLine, OrderPlaced, OrderStatus,
};
