use book_engine::BookError;
use thiserror::Error;

/// Why a market data line could not be turned into an event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Empty line")]
    Empty,

    #[error("Unknown message type: {0:?}")]
    UnknownMessageType(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("Unexpected trailing field: {0:?}")]
    TrailingField(String),
}

#[derive(Error, Debug)]
pub enum PricerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: {source}")]
    Feed { line: usize, source: FeedError },

    #[error("Line {line}: {source}")]
    Book { line: usize, source: BookError },
}

pub type Result<T> = std::result::Result<T, PricerError>;
