//! Error types shared by every codec in the crate.

use thiserror::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the codecs.
///
/// None of these occur when encode and decode are paired with a consistent table;
/// each one points at a logic or input error on the caller's side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree builder was handed no symbols.
    #[error("cannot build a Huffman tree from an empty frequency table")]
    EmptyFrequencyTable,

    /// A symbol to encode has no entry in the code table.
    #[error("no code for symbol {symbol:?}")]
    MissingCode { symbol: char },

    /// The bit stream ended with bits that match no code.
    #[error("bit stream desynchronized at bit {position}: {pending} trailing bits match no code")]
    DecodeDesync { position: usize, pending: usize },

    /// LZ77 was configured with an empty sliding window.
    #[error("invalid window size {window_size}: must be at least 1")]
    InvalidWindow { window_size: usize },

    /// An LZ77 back-reference points before the start of the output.
    #[error("token {index} refers {distance} bytes back but only {available} are available")]
    InvalidToken {
        index: usize,
        distance: usize,
        available: usize,
    },

    /// Input contains a symbol reserved as a case-shift marker.
    #[error("reserved marker symbol {symbol:?} present in input")]
    ReservedSymbol { symbol: char },

    /// Generic argument error.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
