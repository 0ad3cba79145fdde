use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::error::{BookError, Result};
use crate::order::{Order, OrderId, Price, Quantity, Side};

#[derive(Debug, Clone)]
struct PriceLevel {
    // Arrival order, which is also the tie-break at equal price
    orders: VecDeque<OrderId>,
    total_quantity: Quantity,
}

impl PriceLevel {
    fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: 0,
        }
    }

    fn push(&mut self, id: OrderId, total_quantity: Quantity) {
        self.total_quantity = total_quantity;
        self.orders.push_back(id);
    }

    fn remove(&mut self, id: &str) {
        if let Some(position) = self.orders.iter().position(|o| o == id) {
            self.orders.remove(position);
        }
    }

    fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Outcome of [`OrderBook::reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduction {
    /// Quantity actually taken off the order. Less than the requested
    /// amount when the request exceeded the remaining size.
    pub removed: Quantity,
    pub remaining: Quantity,
}

impl Reduction {
    pub fn closed_order(&self) -> bool {
        self.remaining == 0
    }
}

/// One side of the book for a single instrument.
///
/// Orders are owned by the id map; price levels only hold ids, so the two
/// views are updated together on every insert and removal.
#[derive(Debug, Clone)]
pub struct OrderBook {
    side: Side,
    // Sorted ascending by price. Bids are walked from the back.
    levels: BTreeMap<Price, PriceLevel>,
    orders: HashMap<OrderId, Order>,
    depth: Quantity,
}

impl OrderBook {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            orders: HashMap::new(),
            depth: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Sum of remaining sizes across live orders.
    pub fn depth(&self) -> Quantity {
        self.depth
    }

    pub fn contains(&self, id: &str) -> bool {
        self.orders.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Bid => self.levels.keys().next_back().copied(),
            Side::Ask => self.levels.keys().next().copied(),
        }
    }

    pub fn quantity_at_price(&self, price: Price) -> Quantity {
        self.levels
            .get(&price)
            .map_or(0, |level| level.total_quantity)
    }

    pub fn insert(&mut self, order: Order) -> Result<()> {
        if order.side != self.side {
            return Err(BookError::WrongSide {
                id: order.id,
                expected: self.side,
                got: order.side,
            });
        }
        if order.is_filled() {
            return Err(BookError::ZeroQuantity { id: order.id });
        }
        if self.orders.contains_key(&order.id) {
            return Err(BookError::DuplicateOrder { id: order.id });
        }

        // Both totals are checked before either changes
        let depth = self.depth.checked_add(order.size);
        let level_total = self.quantity_at_price(order.price).checked_add(order.size);
        let (Some(depth), Some(level_total)) = (depth, level_total) else {
            return Err(BookError::QuantityOverflow { id: order.id });
        };

        self.depth = depth;
        self.levels
            .entry(order.price)
            .or_insert_with(PriceLevel::new)
            .push(order.id.clone(), level_total);
        self.orders.insert(order.id.clone(), order);
        Ok(())
    }

    /// Takes `amount` off a live order, removing it once nothing remains.
    ///
    /// Requests larger than the remaining size are clamped to it.
    pub fn reduce(&mut self, id: &str, amount: Quantity) -> Result<Reduction> {
        let Some(order) = self.orders.get_mut(id) else {
            return Err(BookError::UnknownOrder { id: id.to_string() });
        };
        if amount == 0 {
            return Err(BookError::ZeroQuantity { id: id.to_string() });
        }

        let removed = amount.min(order.size);
        order.size -= removed;
        let remaining = order.size;
        let price = order.price;

        self.depth -= removed;
        if let Some(level) = self.levels.get_mut(&price) {
            level.total_quantity -= removed;
        }
        if remaining == 0 {
            self.remove(id, price);
        }

        Ok(Reduction { removed, remaining })
    }

    /// Live orders from the best price outward, oldest first within a price.
    pub fn best_first(&self) -> impl Iterator<Item = &Order> + '_ {
        let levels: Box<dyn Iterator<Item = &PriceLevel> + '_> = match self.side {
            Side::Bid => Box::new(self.levels.values().rev()),
            Side::Ask => Box::new(self.levels.values()),
        };
        levels.flat_map(move |level| level.orders.iter().filter_map(move |id| self.orders.get(id)))
    }

    fn remove(&mut self, id: &str, price: Price) {
        self.orders.remove(id);

        let Some(level) = self.levels.get_mut(&price) else {
            return;
        };
        level.remove(id);
        if level.is_empty() {
            self.levels.remove(&price);
        }
    }
}
