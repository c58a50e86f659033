//! Text in, bits out: the optional case shift followed by Huffman coding.

use crate::compression::case_shift::CaseShift;
use crate::compression::frequency::build_frequency_table;
use crate::compression::huffman::{build_code_table, build_huffman_tree, decode, encode};
use crate::compression::huffman::{CodeTable, HuffmanNode};
use crate::compression::stats::CompressionStats;
use crate::error::Result;
use bitvec::vec::BitVec;

/// A Huffman-coded text with everything needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedText {
    pub bits: BitVec,
    pub table: CodeTable,
    pub tree: HuffmanNode,
    /// Whether the case shift was applied before coding.
    pub shifted: bool,
    /// Length in symbols of the text as given, before any shift.
    pub source_len: usize,
}

impl EncodedText {
    /// Encoded bits against 8 bits per source symbol.
    pub fn stats(&self) -> CompressionStats {
        CompressionStats::huffman(self.source_len, self.bits.len())
    }
}

/// Huffman-code `input`, applying the default case shift first when `shift` is set.
///
/// # Errors
///
/// - [`crate::Error::EmptyFrequencyTable`] for empty input.
/// - [`crate::Error::ReservedSymbol`] if `shift` is set and `input` contains a marker.
pub fn encode_text(input: &str, shift: bool) -> Result<EncodedText> {
    let shifted_input;
    let text = if shift {
        shifted_input = CaseShift::default().try_apply(input)?;
        shifted_input.as_str()
    } else {
        input
    };

    let freq = build_frequency_table(text);
    let tree = build_huffman_tree(&freq)?;
    let table = build_code_table(&tree);
    let bits = encode(text, &table)?;
    Ok(EncodedText {
        bits,
        table,
        tree,
        shifted: shift,
        source_len: input.chars().count(),
    })
}

/// Decode an [`EncodedText`], removing the case shift if it was applied.
pub fn decode_text(encoded: &EncodedText) -> Result<String> {
    let text = decode(&encoded.bits, &encoded.table)?;
    if encoded.shifted {
        Ok(CaseShift::default().remove(&text))
    } else {
        Ok(text)
    }
}
