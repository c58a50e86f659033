//! Compression algorithms implementation.
//!
//! This module provides two independent text compression strategies and a
//! preprocessing transform:
//! - Frequency analysis over Unicode symbols
//! - Huffman coding (tree construction, code tables, encode/decode)
//! - A reversible case-shift transform that shrinks the alphabet before Huffman coding
//! - LZ77 sliding-window compression over raw bytes
//!
//! # Examples
//!
//! ```rust
//! use huffshift::compression::pipeline::{decode_text, encode_text};
//!
//! let encoded = encode_text("AbRaCaDaBrA", true).unwrap();
//! assert_eq!(decode_text(&encoded).unwrap(), "AbRaCaDaBrA");
//! ```

pub use crate::error::{Error, Result};

pub mod case_shift;
pub mod frequency;
pub mod huffman;
pub mod lz77;
pub mod pipeline;
pub mod stats;

pub use case_shift::{apply_shift, remove_shift, CaseShift, SHIFT_IN, SHIFT_OUT};
pub use frequency::{build_frequency_table, FrequencyEntry, FrequencyTable};
pub use huffman::{
    bit_string, build_code_table, build_huffman_tree, decode, encode, parse_bit_string,
    CodeTable, HuffmanNode,
};
pub use lz77::{Lz77, Token};
pub use stats::CompressionStats;
