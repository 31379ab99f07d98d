use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("code for symbol {symbol:#04x} is {length} bits long, the limit is {max}")]
    CodeTooLong {
        symbol: u8,
        length: usize,
        max: usize,
    },

    #[error("a code tree needs at least two symbols, got {0}")]
    NotEnoughSymbols(usize),

    #[error("frequencies add up to more than {}", u64::MAX)]
    FrequencyOverflow,

    #[error("priority queue is full (capacity {capacity})")]
    QueueOverflow { capacity: usize },

    #[error("priority queue is empty")]
    QueueEmpty,

    #[error("symbol {0:#04x} has no code")]
    UnknownSymbol(u8),

    #[error("encoded input is {length} bytes long, too short to hold the symbol count")]
    MissingTrailer { length: usize },

    #[error("encoded stream ended after {decoded} of {expected} symbols")]
    TruncatedStream { decoded: u64, expected: u64 },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
