//! ProgPoW Primitive Benchmarks
//!
//! Keccak-f[800], KISS99 and the random math/merge operators in isolation.

#![allow(clippy::pedantic, clippy::nursery)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use progpow::kernels::keccak::{keccak_f800, KeccakState};
use progpow::kernels::kiss99::Kiss99;
use progpow::kernels::math::{random_math, random_merge};
use progpow::{init_mix, MemoryDataset, MixRngState, L1Cache};
use rand::prelude::*;
use std::hint::black_box;

// =============================================================================
// BENCHMARK 1: KECCAK
// =============================================================================

fn bench_keccak(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Keccak");
    group.throughput(Throughput::Elements(1));

    let mut header = [0u8; 32];
    let mut mix = [0u8; 32];
    rand::rng().fill(&mut header[..]);
    rand::rng().fill(&mut mix[..]);

    group.bench_function("f800", |b| {
        let mut state: KeccakState = [0u32; 25];
        b.iter(|| {
            keccak_f800(black_box(&mut state));
        })
    });

    group.bench_function("progpow-256", |b| {
        b.iter(|| progpow::keccak_progpow_256(black_box(&header), 7, black_box(&mix)))
    });

    group.bench_function("progpow-64", |b| {
        b.iter(|| progpow::keccak_progpow_64(black_box(&header), 7, black_box(&mix)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 2: RANDOM SOURCES
// =============================================================================

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Random");

    group.throughput(Throughput::Elements(1024));
    group.bench_function("kiss99", |b| {
        let mut rng = Kiss99::from_seed(0x1234_5678);
        b.iter(|| {
            let mut acc = 0u32;
            for _ in 0..1024 {
                acc ^= rng.next_u32();
            }
            acc
        })
    });

    group.throughput(Throughput::Elements(1));
    group.bench_function("mix-rng-state", |b| {
        let mut block = 0u64;
        b.iter(|| {
            block = block.wrapping_add(50);
            MixRngState::for_block(black_box(block))
        })
    });

    group.bench_function("init-mix", |b| b.iter(|| init_mix(black_box(0xdead_beef))));

    group.finish();
}

// =============================================================================
// BENCHMARK 3: OPERATORS
// =============================================================================

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Operators");
    group.throughput(Throughput::Elements(1024));

    let mut rng = rand::rng();
    let inputs: Vec<(u32, u32, u32)> = (0..1024)
        .map(|_| (rng.random(), rng.random(), rng.random()))
        .collect();

    group.bench_function("random-math", |b| {
        b.iter(|| {
            inputs
                .iter()
                .fold(0u32, |acc, &(a, bb, sel)| acc ^ random_math(a, bb, sel))
        })
    });

    group.bench_function("random-merge", |b| {
        b.iter(|| {
            let mut acc = 1u32;
            for &(a, _, sel) in &inputs {
                random_merge(&mut acc, a, sel);
            }
            acc
        })
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 4: L1 CACHE
// =============================================================================

fn bench_l1_cache(c: &mut Criterion) {
    let dataset = MemoryDataset::synthetic(1024, 1);
    c.bench_function("4-L1-Cache/build", |b| {
        b.iter(|| L1Cache::build(black_box(&dataset)))
    });
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_keccak,
    bench_random,
    bench_operators,
    bench_l1_cache
);
criterion_main!(benches);
