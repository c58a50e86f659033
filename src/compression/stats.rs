//! Size figures for reporting how well a codec did.

use crate::compression::lz77::Token;
use std::cmp::Ordering;
use std::fmt;

/// Original and compressed sizes, in the same unit.
///
/// LZ77 figures count bytes against nominal token slots; Huffman figures count
/// bits against 8 bits per source symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    pub original_size: usize,
    pub compressed_size: usize,
}

impl CompressionStats {
    pub fn new(original_size: usize, compressed_size: usize) -> Self {
        Self {
            original_size,
            compressed_size,
        }
    }

    /// `tokens.len() * Token::SIZE` against `original_len` bytes.
    pub fn lz77(original_len: usize, tokens: &[Token]) -> Self {
        Self::new(original_len, tokens.len() * Token::SIZE)
    }

    /// Encoded bits against `symbol_count` 8-bit symbols.
    pub fn huffman(symbol_count: usize, encoded_bits: usize) -> Self {
        Self::new(symbol_count * 8, encoded_bits)
    }

    /// `compressed_size / original_size`, or `None` for empty input.
    pub fn ratio(&self) -> Option<f64> {
        (self.original_size > 0).then(|| self.compressed_size as f64 / self.original_size as f64)
    }

    /// How the ratio compares to `target`; `None` when there is no ratio.
    pub fn compare_to(&self, target: f64) -> Option<Ordering> {
        self.ratio()?.partial_cmp(&target)
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "original size: {}, compressed size: {}",
            self.original_size, self.compressed_size
        )?;
        match self.ratio() {
            Some(ratio) => write!(f, ", compression rate: {ratio:.2}"),
            None => Ok(()),
        }
    }
}
