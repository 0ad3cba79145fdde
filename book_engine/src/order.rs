use rust_decimal::Decimal;
use std::cmp::Ordering;

pub type OrderId = String;

// Decimal keeps notional sums exact across many partial fills
pub type Price = Decimal;
pub type Quantity = u64;
pub type Timestamp = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    /// Compares two prices by fill priority on this side.
    ///
    /// `Ordering::Less` means `a` is the better price: higher for bids,
    /// lower for asks.
    pub fn priority(self, a: Price, b: Price) -> Ordering {
        match self {
            Side::Bid => b.cmp(&a),
            Side::Ask => a.cmp(&b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price: Price,
    /// Remaining unfilled quantity.
    pub size: Quantity,
    pub timestamp: Timestamp,
}

impl Order {
    pub fn new(
        id: impl Into<OrderId>,
        side: Side,
        price: Price,
        size: Quantity,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            side,
            price,
            size,
            timestamp,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.size == 0
    }

    /// Value of executing `quantity` units at this order's price, or `None`
    /// if it does not fit in a [`Price`].
    pub fn notional(&self, quantity: Quantity) -> Option<Price> {
        Decimal::from(quantity).checked_mul(self.price)
    }
}
