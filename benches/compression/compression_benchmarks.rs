use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffshift::compression::case_shift::apply_shift;
use huffshift::compression::lz77::{compress, decompress};
use huffshift::compression::pipeline::{decode_text, encode_text};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8] = b"aaaabbcdeeeeffgHIJ  ..";

fn sample_text(len: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn bench_huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");
    for size in [1_000, 10_000] {
        let text = sample_text(size);
        group.bench_with_input(BenchmarkId::new("encode", size), &text, |b, text| {
            b.iter(|| encode_text(black_box(text), false).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("encode_shifted", size), &text, |b, text| {
            b.iter(|| encode_text(black_box(text), true).unwrap())
        });
        let encoded = encode_text(&text, true).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| decode_text(black_box(encoded)).unwrap())
        });
    }
    group.finish();
}

fn bench_case_shift(c: &mut Criterion) {
    let text = sample_text(10_000);
    c.bench_function("case_shift_apply", |b| b.iter(|| apply_shift(black_box(&text))));
}

fn bench_lz77(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77");
    let data = sample_text(10_000).into_bytes();
    for window in [32, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("compress", window), &window, |b, &window| {
            b.iter(|| compress(black_box(&data), window).unwrap())
        });
    }
    let tokens = compress(&data, 256).unwrap();
    group.bench_function("decompress", |b| {
        b.iter(|| decompress(black_box(&tokens)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_huffman, bench_case_shift, bench_lz77);
criterion_main!(benches);
