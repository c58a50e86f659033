use huffshift::compression::huffman::bit_string;
use huffshift::compression::lz77::Lz77;
use huffshift::compression::pipeline::{decode_text, encode_text};
use huffshift::compression::stats::CompressionStats;
use std::{env, fs};

const LZ77_WINDOW: usize = 4096;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let samples: Vec<String> = match args.next() {
        Some(path) => vec![fs::read_to_string(path)?],
        None => ["abracadabra", "ABRACADABRA", "AbRaCaDaBrAAAAAbbbb"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };

    for sample in &samples {
        println!("Input: {} ({} bytes)", preview(sample), sample.len());
        for shift in [false, true] {
            let encoded = encode_text(sample, shift)?;
            let decoded = decode_text(&encoded)?;
            println!(
                "  huffman{}: {} symbols, {}",
                if shift { " (shifted)" } else { "" },
                encoded.table.len(),
                encoded.stats()
            );
            if encoded.bits.len() <= 128 {
                println!("    bits: {}", bit_string(&encoded.bits));
            }
            println!("    tree depth: {}", encoded.tree.max_depth());
            println!("    round trip ok: {}", decoded == *sample);
        }

        let tokens = Lz77::new(LZ77_WINDOW)?.compress(sample.as_bytes());
        println!(
            "  lz77 (window {}): {} tokens, {}",
            LZ77_WINDOW,
            tokens.len(),
            CompressionStats::lz77(sample.len(), &tokens)
        );
    }
    Ok(())
}

fn preview(text: &str) -> String {
    let head: String = text.chars().take(40).collect();
    if head.len() < text.len() {
        format!("{head:?}...")
    } else {
        format!("{head:?}")
    }
}
