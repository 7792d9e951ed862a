//! Performance benchmarks for myarch-lz77
//!
//! This benchmark suite evaluates:
//! - Tokenize/detokenize speed across data patterns
//! - Throughput measurements (MB/s)
//! - Compression ratios for different scenarios

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use myarch_lz77::{detokenize, tokenize};
use std::hint::black_box;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes are the same (best compression)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Repetitive pattern - common in text files
    pub fn repetitive(size: usize) -> Vec<u8> {
        let pattern = b"TOBEORNOTTOBEORTOBEORNOT";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(pattern.len());
            data.extend_from_slice(&pattern[..chunk_size]);
        }
        data
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }
}

fn bench_tokenize(c: &mut Criterion) {
    let size = 16 * 1024;
    let patterns: [(&str, fn(usize) -> Vec<u8>); 4] = [
        ("uniform", test_data::uniform),
        ("random", test_data::random),
        ("repetitive", test_data::repetitive),
        ("text_like", test_data::text_like),
    ];

    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(size as u64));

    for (name, generator) in patterns {
        let data = generator(size);
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| tokenize(black_box(data)));
        });
    }

    group.finish();
}

fn bench_detokenize(c: &mut Criterion) {
    let size = 16 * 1024;
    let patterns: [(&str, fn(usize) -> Vec<u8>); 4] = [
        ("uniform", test_data::uniform),
        ("random", test_data::random),
        ("repetitive", test_data::repetitive),
        ("text_like", test_data::text_like),
    ];

    let mut group = c.benchmark_group("detokenize");
    group.throughput(Throughput::Bytes(size as u64));

    for (name, generator) in patterns {
        let tokens = tokenize(&generator(size));
        group.bench_with_input(BenchmarkId::from_parameter(name), &tokens, |b, tokens| {
            b.iter(|| detokenize(black_box(tokens)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_detokenize);
criterion_main!(benches);
