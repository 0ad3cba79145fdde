//! Market data replay that prints the running cost of buying, and the
//! proceeds of selling, a fixed number of shares.

pub mod error;
pub mod feed;
pub mod output;
pub mod replay;

pub use error::{FeedError, PricerError};
pub use feed::parse_event;
pub use output::{QuoteLine, QuoteWriter};
pub use replay::{replay, ReplayConfig, ReplayStats};
