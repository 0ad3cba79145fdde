use rust_decimal::Decimal;

use crate::book::OrderBook;
use crate::error::{BookError, Result};
use crate::order::{Price, Quantity};

/// Result of walking a book best-first for a target quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    pub notional: Price,
    pub filled: Quantity,
    pub unfilled: Quantity,
}

impl Sweep {
    pub fn is_complete(&self) -> bool {
        self.unfilled == 0
    }
}

/// Fills `target` against the best orders of `book`, taking only part of
/// the last order touched. Stops as soon as the target is met.
pub fn sweep(book: &OrderBook, target: Quantity) -> Result<Sweep> {
    let overflow = || BookError::NotionalOverflow { side: book.side() };
    let mut notional = Decimal::ZERO;
    let mut remaining = target;

    for order in book.best_first() {
        if remaining == 0 {
            break;
        }
        let executable = remaining.min(order.size);
        notional = order
            .notional(executable)
            .and_then(|value| notional.checked_add(value))
            .ok_or_else(overflow)?;
        remaining -= executable;
    }

    Ok(Sweep {
        notional,
        filled: target - remaining,
        unfilled: remaining,
    })
}

/// Total value of trading `target` units against `book`, or `None` when the
/// book is not deep enough.
pub fn quote(book: &OrderBook, target: Quantity) -> Result<Option<Price>> {
    if book.depth() < target {
        return Ok(None);
    }
    Ok(Some(sweep(book, target)?.notional))
}
