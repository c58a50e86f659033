use huffshift::compression::case_shift::{apply_shift, remove_shift, SHIFT_IN, SHIFT_OUT};
use huffshift::compression::frequency::build_frequency_table;
use huffshift::compression::huffman::{
    build_code_table, build_huffman_tree, decode, encode, HuffmanNode,
};
use huffshift::compression::lz77::{compress, decompress};
use huffshift::compression::pipeline::{decode_text, encode_text};
use proptest::prelude::*;

fn distinct_symbols(s: &str) -> usize {
    build_frequency_table(s).len()
}

/// Internal nodes whose frequency is not the sum of their children.
fn unbalanced_sums(root: &HuffmanNode) -> Vec<usize> {
    let mut bad = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if let HuffmanNode::Internal { freq, left, right } = node {
            if *freq != left.freq() + right.freq() {
                bad.push(*freq);
            }
            stack.push(left);
            stack.push(right);
        }
    }
    bad
}

proptest! {
    #[test]
    fn test_huffman_roundtrip(input in "\\PC{2,200}") {
        prop_assume!(distinct_symbols(&input) >= 2);
        let freq = build_frequency_table(&input);
        let tree = build_huffman_tree(&freq).unwrap();
        let table = build_code_table(&tree);
        let encoded = encode(&input, &table).unwrap();
        prop_assert_eq!(decode(&encoded, &table).unwrap(), input);
    }

    #[test]
    fn test_frequency_conservation(input in "\\PC{1,200}") {
        let freq = build_frequency_table(&input);
        prop_assert_eq!(freq.total(), input.chars().count());
        let tree = build_huffman_tree(&freq).unwrap();
        prop_assert_eq!(tree.freq(), freq.total());
        prop_assert_eq!(tree.leaf_count(), freq.len());
    }

    #[test]
    fn test_internal_frequency_is_sum_of_children(input in "\\PC{1,200}") {
        let tree = build_huffman_tree(&build_frequency_table(&input)).unwrap();
        prop_assert_eq!(unbalanced_sums(&tree), Vec::<usize>::new());
    }

    #[test]
    fn test_codes_are_prefix_free(input in "\\PC{2,200}") {
        prop_assume!(distinct_symbols(&input) >= 2);
        let tree = build_huffman_tree(&build_frequency_table(&input)).unwrap();
        let table = build_code_table(&tree);
        prop_assert!(table.is_prefix_free());
        for (symbol, code) in table.iter() {
            prop_assert_eq!(tree.depth_of(symbol), Some(code.len()));
        }
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes(input in "[a-e]{2,200}") {
        let freq = build_frequency_table(&input);
        let tree = build_huffman_tree(&freq).unwrap();
        let table = build_code_table(&tree);
        for a in freq.entries() {
            for b in freq.entries() {
                if a.count > b.count {
                    let a_len = table.get(a.symbol).unwrap().len();
                    let b_len = table.get(b.symbol).unwrap().len();
                    prop_assert!(a_len <= b_len, "{:?} vs {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_case_shift_involution(input in "\\PC*") {
        prop_assume!(!input.contains([SHIFT_IN, SHIFT_OUT]));
        prop_assert_eq!(remove_shift(&apply_shift(&input)), input);
    }

    #[test]
    fn test_pipeline_roundtrip(input in "[a-zA-Z0-9 .,]{1,200}", shift in any::<bool>()) {
        let encoded = encode_text(&input, shift).unwrap();
        prop_assert_eq!(decode_text(&encoded).unwrap(), input);
    }

    #[test]
    fn test_lz77_bounds_and_roundtrip(
        input in prop::collection::vec(0..4u8, 0..300),
        window_size in 1..64usize,
    ) {
        let tokens = compress(&input, window_size).unwrap();
        for token in &tokens {
            prop_assert!(token.distance <= window_size);
            prop_assert!(token.length < window_size);
        }
        prop_assert_eq!(decompress(&tokens).unwrap(), input);
    }
}
