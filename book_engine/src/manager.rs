use tracing::{debug, warn};

use crate::book::OrderBook;
use crate::error::{BookError, Result};
use crate::event::Event;
use crate::order::{Order, Price, Quantity, Side, Timestamp};
use crate::quote::quote;

/// Direction of the quoted trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteSide {
    /// Proceeds from selling into the bids.
    Sell,
    /// Cost of buying from the asks.
    Buy,
}

impl QuoteSide {
    /// Evaluation and output order.
    pub const ALL: [QuoteSide; 2] = [QuoteSide::Sell, QuoteSide::Buy];

    /// The book whose liquidity the trade consumes.
    pub fn book_side(self) -> Side {
        match self {
            QuoteSide::Sell => Side::Bid,
            QuoteSide::Buy => Side::Ask,
        }
    }

    pub fn label(self) -> char {
        match self {
            QuoteSide::Sell => 'S',
            QuoteSide::Buy => 'B',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    #[default]
    Unavailable,
    Quoting(Price),
}

/// A change in one side's quote. `quote` is `None` when the book became
/// too thin to fill the target size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteUpdate {
    pub timestamp: Timestamp,
    pub side: QuoteSide,
    pub quote: Option<Price>,
}

/// What [`BookManager::handle`] did with one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handled {
    /// `Err` when the event was rejected and dropped.
    pub applied: Result<()>,
    pub updates: Vec<QuoteUpdate>,
}

/// Owns both books for the instrument and reports quote changes for a
/// fixed target size.
#[derive(Debug, Clone)]
pub struct BookManager {
    bids: OrderBook,
    asks: OrderBook,
    target_size: Quantity,
    sell: QuoteState,
    buy: QuoteState,
}

impl BookManager {
    pub fn new(target_size: Quantity) -> Self {
        Self {
            bids: OrderBook::new(Side::Bid),
            asks: OrderBook::new(Side::Ask),
            target_size,
            sell: QuoteState::Unavailable,
            buy: QuoteState::Unavailable,
        }
    }

    pub fn target_size(&self) -> Quantity {
        self.target_size
    }

    pub fn book(&self, side: Side) -> &OrderBook {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    fn book_mut(&mut self, side: Side) -> &mut OrderBook {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    pub fn state(&self, side: QuoteSide) -> QuoteState {
        match side {
            QuoteSide::Sell => self.sell,
            QuoteSide::Buy => self.buy,
        }
    }

    fn state_mut(&mut self, side: QuoteSide) -> &mut QuoteState {
        match side {
            QuoteSide::Sell => &mut self.sell,
            QuoteSide::Buy => &mut self.buy,
        }
    }

    /// The side currently holding a live order with this id.
    pub fn locate(&self, id: &str) -> Option<Side> {
        if self.bids.contains(id) {
            Some(Side::Bid)
        } else if self.asks.contains(id) {
            Some(Side::Ask)
        } else {
            None
        }
    }

    /// Applies one event to the books without touching quote state.
    ///
    /// Reduce events carry no side, so ids must be unique across both books.
    pub fn apply(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Add {
                timestamp,
                id,
                side,
                price,
                size,
            } => {
                if self.locate(id).is_some() {
                    return Err(BookError::DuplicateOrder { id: id.clone() });
                }
                self.book_mut(*side)
                    .insert(Order::new(id.clone(), *side, *price, *size, *timestamp))
            }
            Event::Reduce { id, size, .. } => {
                let side = self
                    .locate(id)
                    .ok_or_else(|| BookError::UnknownOrder { id: id.clone() })?;
                let reduction = self.book_mut(side).reduce(id, *size)?;

                if reduction.removed < *size {
                    warn!(
                        order_id = %id,
                        requested = *size,
                        removed = reduction.removed,
                        "Reduction exceeds remaining size, clamped"
                    );
                }
                if reduction.closed_order() {
                    debug!(order_id = %id, ?side, "Order removed from book");
                }
                Ok(())
            }
        }
    }

    /// Recomputes both quotes and returns the ones that changed, sell side first.
    pub fn refresh(&mut self, timestamp: Timestamp) -> Vec<QuoteUpdate> {
        QuoteSide::ALL
            .into_iter()
            .filter_map(|side| self.refresh_side(side, timestamp))
            .collect()
    }

    /// Applies the event and refreshes. A rejected event is logged and dropped;
    /// the refresh still runs.
    pub fn handle(&mut self, event: &Event) -> Handled {
        let applied = self.apply(event);
        if let Err(e) = &applied {
            warn!(
                timestamp = event.timestamp(),
                order_id = event.order_id(),
                "Dropping event: {}",
                e
            );
        }
        Handled {
            applied,
            updates: self.refresh(event.timestamp()),
        }
    }

    fn refresh_side(&mut self, side: QuoteSide, timestamp: Timestamp) -> Option<QuoteUpdate> {
        // A quote too large to represent cannot be printed either
        let quote = quote(self.book(side.book_side()), self.target_size).unwrap_or_else(|e| {
            warn!(?side, "Quote unavailable: {}", e);
            None
        });
        let state = self.state_mut(side);

        let changed = match (quote, *state) {
            (Some(price), QuoteState::Quoting(last)) => price != last,
            (Some(_), QuoteState::Unavailable) => true,
            (None, QuoteState::Quoting(_)) => true,
            (None, QuoteState::Unavailable) => false,
        };
        if !changed {
            return None;
        }

        *state = quote.map_or(QuoteState::Unavailable, QuoteState::Quoting);
        Some(QuoteUpdate {
            timestamp,
            side,
            quote,
        })
    }
}
