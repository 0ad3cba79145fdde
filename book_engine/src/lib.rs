//! Order book for a single instrument that keeps a running quote for a
//! fixed trade size.
//!
//! Each side is an [`OrderBook`] of live limit orders walked best price
//! first. [`quote`] sums the value of filling a target quantity against a
//! book, and [`BookManager`] routes market data [`Event`]s to the right
//! side and reports a [`QuoteUpdate`] whenever a quote changes.

mod book;
mod error;
mod event;
mod manager;
mod order;
mod quote;

pub use book::*;
pub use error::*;
pub use event::*;
pub use manager::*;
pub use order::*;
pub use quote::*;
