use crate::order::{OrderId, Price, Quantity, Side, Timestamp};

/// A single entry of the market data log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new limit order joins the book.
    Add {
        timestamp: Timestamp,
        id: OrderId,
        side: Side,
        price: Price,
        size: Quantity,
    },
    /// A live order loses `size` units, through a fill or a cancel.
    Reduce {
        timestamp: Timestamp,
        id: OrderId,
        size: Quantity,
    },
}

impl Event {
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Event::Add { timestamp, .. } | Event::Reduce { timestamp, .. } => *timestamp,
        }
    }

    pub fn order_id(&self) -> &str {
        match self {
            Event::Add { id, .. } | Event::Reduce { id, .. } => id,
        }
    }
}
