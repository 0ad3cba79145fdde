//! Parser for the market data log.
//!
//! ```text
//! <timestamp> A <order-id> <B|S> <price> <size>
//! <timestamp> R <order-id> <size>
//! ```

use std::str::{FromStr, SplitWhitespace};

use book_engine::{Event, Price, Quantity, Side, Timestamp};
use rust_decimal::Decimal;

use crate::error::FeedError;

/// Largest size accepted on a single line.
pub const MAX_SIZE: Quantity = 1_000_000_000;

/// Largest price accepted on a single line.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

struct Fields<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn next(&mut self, field: &'static str) -> Result<&'a str, FeedError> {
        self.inner.next().ok_or(FeedError::MissingField(field))
    }

    fn size(&mut self) -> Result<Quantity, FeedError> {
        let value = self.next("size")?;
        match value.parse::<Quantity>() {
            Ok(size) if (1..=MAX_SIZE).contains(&size) => Ok(size),
            _ => Err(invalid("size", value)),
        }
    }

    fn finish(mut self) -> Result<(), FeedError> {
        match self.inner.next() {
            Some(extra) => Err(FeedError::TrailingField(extra.to_string())),
            None => Ok(()),
        }
    }
}

fn invalid(field: &'static str, value: &str) -> FeedError {
    FeedError::InvalidField {
        field,
        value: value.to_string(),
    }
}

fn parse_side(value: &str) -> Result<Side, FeedError> {
    match value {
        "B" => Ok(Side::Bid),
        "S" => Ok(Side::Ask),
        _ => Err(invalid("side", value)),
    }
}

fn parse_price(value: &str) -> Result<Price, FeedError> {
    match Price::from_str(value) {
        Ok(price) if !price.is_sign_negative() && price <= MAX_PRICE => Ok(price),
        _ => Err(invalid("price", value)),
    }
}

/// Parses one log line into an [`Event`].
pub fn parse_event(line: &str) -> Result<Event, FeedError> {
    let mut fields = Fields {
        inner: line.split_whitespace(),
    };

    let Some(first) = fields.inner.next() else {
        return Err(FeedError::Empty);
    };
    let timestamp: Timestamp = first.parse().map_err(|_| invalid("timestamp", first))?;

    let event = match fields.next("message type")? {
        "A" => {
            let id = fields.next("order id")?.to_string();
            let side = parse_side(fields.next("side")?)?;
            let price = parse_price(fields.next("price")?)?;
            let size = fields.size()?;
            Event::Add {
                timestamp,
                id,
                side,
                price,
                size,
            }
        }
        "R" => {
            let id = fields.next("order id")?.to_string();
            let size = fields.size()?;
            Event::Reduce {
                timestamp,
                id,
                size,
            }
        }
        other => return Err(FeedError::UnknownMessageType(other.to_string())),
    };

    fields.finish()?;
    Ok(event)
}
