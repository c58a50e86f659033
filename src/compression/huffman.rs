use crate::compression::frequency::{FrequencyEntry, FrequencyTable};
use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a character and its frequency.
    Leaf { ch: char, freq: usize },
    /// An internal node with left and right children and combined frequency.
    Internal {
        freq: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Number of leaves, i.e. distinct symbols, below this node.
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => deepest = deepest.max(depth),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        deepest
    }

    /// Depth of the leaf holding `symbol`, if the tree contains it.
    pub fn depth_of(&self, symbol: char) -> Option<usize> {
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { ch, .. } if *ch == symbol => return Some(depth),
                HuffmanNode::Leaf { .. } => {}
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        None
    }

    /// Leaves in left-to-right order.
    pub fn leaves(&self) -> Vec<FrequencyEntry> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                HuffmanNode::Leaf { ch, freq } => leaves.push(FrequencyEntry {
                    symbol: *ch,
                    count: *freq,
                }),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        leaves
    }
}

/// Heap slot ordering the lowest frequency first, then the lowest sequence number.
#[derive(Debug)]
struct NodeWrapper {
    node: HuffmanNode,
    seq: usize,
}

impl Ord for NodeWrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap.
        other
            .node
            .freq()
            .cmp(&self.node.freq())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeWrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeWrapper {}

/// Build the Huffman tree given a frequency table.
///
/// A table with a single symbol yields that leaf alone, without an internal node.
/// Heap ties go to the lower sequence number: leaves are numbered in ascending
/// symbol order and each merged node takes the next number, so the same table
/// always yields the same tree.
///
/// # Errors
///
/// [`Error::EmptyFrequencyTable`] if the table has no symbols.
pub fn build_huffman_tree(freq_table: &FrequencyTable) -> Result<HuffmanNode> {
    let mut heap: BinaryHeap<NodeWrapper> = freq_table
        .sorted_entries()
        .into_iter()
        .enumerate()
        .map(|(seq, entry)| NodeWrapper {
            node: HuffmanNode::Leaf {
                ch: entry.symbol,
                freq: entry.count,
            },
            seq,
        })
        .collect();
    let mut next_seq = heap.len();

    // Combine the two lightest trees until only one remains.
    let root = loop {
        let Some(left) = heap.pop() else {
            return Err(Error::EmptyFrequencyTable);
        };
        let Some(right) = heap.pop() else {
            break left.node;
        };
        let freq = left.node.freq() + right.node.freq();
        heap.push(NodeWrapper {
            node: HuffmanNode::Internal {
                freq,
                left: Box::new(left.node),
                right: Box::new(right.node),
            },
            seq: next_seq,
        });
        next_seq += 1;
    };

    log::trace!(
        "built Huffman tree: {} leaves, root frequency {}, depth {}",
        freq_table.len(),
        root.freq(),
        root.max_depth()
    );
    Ok(root)
}

/// Mapping from each symbol of a tree to its prefix-free bit code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, BitVec>,
}

impl CodeTable {
    /// Walk `tree` and collect the code of every leaf.
    ///
    /// A tree made of a single leaf assigns that symbol the one-bit code `0`, so
    /// every occurrence still contributes a bit to the stream.
    pub fn from_tree(tree: &HuffmanNode) -> Self {
        let mut codes = HashMap::new();
        let mut stack: Vec<(&HuffmanNode, BitVec)> = vec![(tree, BitVec::new())];
        while let Some((node, prefix)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { ch, .. } => {
                    let code = if prefix.is_empty() {
                        bitvec![0]
                    } else {
                        prefix
                    };
                    codes.insert(*ch, code);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut left_prefix = prefix.clone();
                    left_prefix.push(false);
                    let mut right_prefix = prefix;
                    right_prefix.push(true);
                    stack.push((right, right_prefix));
                    stack.push((left, left_prefix));
                }
            }
        }
        Self { codes }
    }

    /// Code assigned to `symbol`.
    pub fn get(&self, symbol: char) -> Option<&BitSlice> {
        self.codes.get(&symbol).map(|code| code.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &BitSlice)> + '_ {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Total number of bits needed to encode a sequence with the given frequencies.
    pub fn encoded_len(&self, freq_table: &FrequencyTable) -> Result<usize> {
        freq_table.entries().try_fold(0, |total, entry| {
            let code = self.get(entry.symbol).ok_or(Error::MissingCode {
                symbol: entry.symbol,
            })?;
            Ok(total + code.len() * entry.count)
        })
    }

    /// Whether no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitVec> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes.iter().skip(i + 1).all(|b| {
                let n = a.len().min(b.len());
                a[..n] != b[..n]
            })
        })
    }

    fn max_code_len(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }

    fn reversed(&self) -> HashMap<&BitSlice, char> {
        self.codes
            .iter()
            .map(|(&symbol, code)| (code.as_bitslice(), symbol))
            .collect()
    }
}

/// Build the code table mapping characters to their Huffman codes.
pub fn build_code_table(node: &HuffmanNode) -> CodeTable {
    let table = CodeTable::from_tree(node);
    log::trace!("code table: {:?}", table);
    table
}

/// Encode the input string using the provided code table.
///
/// # Errors
///
/// [`Error::MissingCode`] for the first symbol the table has no code for.
pub fn encode(input: &str, code_table: &CodeTable) -> Result<BitVec> {
    let mut bits = BitVec::new();
    for ch in input.chars() {
        let code = code_table
            .get(ch)
            .ok_or(Error::MissingCode { symbol: ch })?;
        bits.extend_from_bitslice(code);
    }
    log::debug!(
        "encoded {} symbols into {} bits",
        input.chars().count(),
        bits.len()
    );
    Ok(bits)
}

/// Decode an encoded bit stream using the code table it was encoded with.
///
/// Bits accumulate in a buffer until the buffer equals one of the codes, at which
/// point that symbol is emitted and the buffer cleared.
///
/// # Errors
///
/// [`Error::DecodeDesync`] if the buffer grows past the longest code or is not
/// empty when the stream ends.
pub fn decode(encoded: &BitSlice, code_table: &CodeTable) -> Result<String> {
    let reversed = code_table.reversed();
    let max_len = code_table.max_code_len();
    let mut result = String::new();
    let mut start = 0;

    for end in 1..=encoded.len() {
        let candidate = &encoded[start..end];
        if let Some(&ch) = reversed.get(candidate) {
            result.push(ch);
            start = end;
        } else if candidate.len() >= max_len {
            return Err(Error::DecodeDesync {
                position: end,
                pending: candidate.len(),
            });
        }
    }

    if start < encoded.len() {
        return Err(Error::DecodeDesync {
            position: encoded.len(),
            pending: encoded.len() - start,
        });
    }
    Ok(result)
}

/// Render bits as a string of `'0'` and `'1'` characters.
pub fn bit_string(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Parse a string of `'0'` and `'1'` characters into bits.
pub fn parse_bit_string(text: &str) -> Result<BitVec> {
    text.chars()
        .map(|ch| match ch {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(Error::InvalidInput(format!(
                "expected '0' or '1', found {other:?}"
            ))),
        })
        .collect()
}
