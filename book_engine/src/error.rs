use thiserror::Error;

use crate::order::{OrderId, Side};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Unknown order: {id}")]
    UnknownOrder { id: OrderId },

    #[error("Duplicate order: {id} is already live")]
    DuplicateOrder { id: OrderId },

    #[error("Zero quantity for order {id}")]
    ZeroQuantity { id: OrderId },

    #[error("Quantity overflow adding order {id}")]
    QuantityOverflow { id: OrderId },

    #[error("Notional overflow pricing the {side:?} book")]
    NotionalOverflow { side: Side },

    #[error("Wrong side for order {id}: book holds {expected:?}, got {got:?}")]
    WrongSide {
        id: OrderId,
        expected: Side,
        got: Side,
    },
}

pub type Result<T> = std::result::Result<T, BookError>;
