use core::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domainkit_core::{AggregateRoot, DomainError, DomainResult, EntityId};
use domainkit_events::DomainEvent;

use crate::money::Money;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Draft,
    Placed,
    Cancelled,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub sku: String,
    pub quantity: u32,
    pub unit_price: Money,
}

/// Attribute state of an [`Order`]. Opaque outside this module; all
/// mutation goes through the aggregate's operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderProps {
    customer: String,
    status: OrderStatus,
    lines: Vec<OrderLine>,
}

/// Event: LineAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAdded {
    pub order_id: OrderId,
    pub sku: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderPlaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub order_id: OrderId,
    pub total: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OrderCancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancelled {
    pub order_id: OrderId,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    LineAdded(LineAdded),
    OrderPlaced(OrderPlaced),
    OrderCancelled(OrderCancelled),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::LineAdded(_) => "orders.order.line_added",
            OrderEvent::OrderPlaced(_) => "orders.order.placed",
            OrderEvent::OrderCancelled(_) => "orders.order.cancelled",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::LineAdded(e) => e.occurred_at,
            OrderEvent::OrderPlaced(e) => e.occurred_at,
            OrderEvent::OrderCancelled(e) => e.occurred_at,
        }
    }
}

/// Aggregate root: Order.
///
/// Mutations record the matching domain event on the inherited buffer; the
/// transaction-boundary collaborator drains them into the dispatcher after
/// committing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    root: AggregateRoot<OrderProps, OrderEvent>,
}

impl Order {
    /// Create a draft order with a generated identifier.
    pub fn new(customer: impl Into<String>) -> DomainResult<Self> {
        let customer = customer.into();
        if customer.trim().is_empty() {
            return Err(DomainError::validation("customer cannot be empty"));
        }
        Ok(Self {
            root: AggregateRoot::new(OrderProps {
                customer,
                status: OrderStatus::Draft,
                lines: Vec::new(),
            }),
        })
    }

    /// Rebuild an order around a pre-existing identifier.
    pub fn with_id(customer: impl Into<String>, id: OrderId) -> DomainResult<Self> {
        let mut order = Self::new(customer)?;
        order.root = AggregateRoot::with_id(order.root.props().clone(), id.0);
        Ok(order)
    }

    pub fn id(&self) -> OrderId {
        OrderId(self.root.id())
    }

    pub fn customer(&self) -> &str {
        &self.root.props().customer
    }

    pub fn status(&self) -> OrderStatus {
        self.root.props().status
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.root.props().lines
    }

    /// Add a line while the order is still a draft.
    pub fn add_line(
        &mut self,
        sku: impl Into<String>,
        quantity: u32,
        unit_price: Money,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_draft("add a line")?;
        if quantity == 0 {
            return Err(DomainError::validation("quantity cannot be zero"));
        }
        if let Some(first) = self.lines().first()
            && first.unit_price.currency() != unit_price.currency()
        {
            return Err(DomainError::invariant(format!(
                "order is priced in {}, line is {}",
                first.unit_price.currency(),
                unit_price.currency()
            )));
        }

        let sku = sku.into();
        let order_id = self.id();
        self.root.props_mut().lines.push(OrderLine {
            sku: sku.clone(),
            quantity,
            unit_price: unit_price.clone(),
        });
        self.root.record_event(OrderEvent::LineAdded(LineAdded {
            order_id,
            sku,
            quantity,
            unit_price,
            occurred_at,
        }));
        Ok(())
    }

    /// Sum of all line subtotals.
    pub fn total(&self) -> DomainResult<Money> {
        let lines = self.lines();
        let first = lines
            .first()
            .ok_or_else(|| DomainError::invariant("order has no lines"))?;

        let mut total = Money::zero(first.unit_price.currency())?;
        for line in lines {
            total = total.add(&line.unit_price.times(line.quantity)?)?;
        }
        Ok(total)
    }

    /// Place the order: drafts with at least one line only.
    pub fn place(&mut self, occurred_at: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_draft("place")?;
        let total = self.total()?;

        let order_id = self.id();
        self.root.props_mut().status = OrderStatus::Placed;
        self.root.record_event(OrderEvent::OrderPlaced(OrderPlaced {
            order_id,
            total,
            occurred_at,
        }));
        Ok(())
    }

    /// Cancel the order. The entity is soft-deleted: it stays addressable
    /// but is marked removed.
    pub fn cancel(
        &mut self,
        reason: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        if self.status() == OrderStatus::Cancelled {
            return Err(DomainError::conflict("order already cancelled"));
        }

        let order_id = self.id();
        self.root.props_mut().status = OrderStatus::Cancelled;
        self.root.delete();
        self.root
            .record_event(OrderEvent::OrderCancelled(OrderCancelled {
                order_id,
                reason: reason.into(),
                occurred_at,
            }));
        Ok(())
    }

    fn ensure_draft(&self, action: &str) -> DomainResult<()> {
        match self.status() {
            OrderStatus::Draft => Ok(()),
            OrderStatus::Placed => Err(DomainError::conflict(format!(
                "cannot {action}: order already placed"
            ))),
            OrderStatus::Cancelled => Err(DomainError::conflict(format!(
                "cannot {action}: order cancelled"
            ))),
        }
    }
}

impl Deref for Order {
    type Target = AggregateRoot<OrderProps, OrderEvent>;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl DerefMut for Order {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.root
    }
}
