//! ProgPoW Criterion Benchmark
//!
//! Full-hash latency, program reuse, verification and search scaling.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use progpow::{MemoryDataset, Program, ProgramCache};
use rand::prelude::*;
use std::hint::black_box;

const BLOCK: u64 = 30_000;

fn random_header() -> [u8; 32] {
    let mut header = [0u8; 32];
    rand::rng().fill(&mut header[..]);
    header
}

// =============================================================================
// BENCHMARK 1: HASH LATENCY
// =============================================================================

/// One nonce against datasets from one L1 cache (256 KiB) up to 64 MiB.
fn bench_hash_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Hash-Latency");
    group.throughput(Throughput::Elements(1));

    let sizes = [(1024u32, "256KB"), (16 * 1024, "4MB"), (256 * 1024, "64MB")];

    for (items, name) in sizes {
        let dataset = MemoryDataset::synthetic(items, 1);
        let program = Program::build(&dataset, BLOCK);
        let header = random_header();

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &dataset,
            |b, ds| {
                let mut nonce = 0u64;
                b.iter(|| {
                    nonce = nonce.wrapping_add(1);
                    progpow::hash_with_program(ds, &program, black_box(&header), nonce)
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: PROGRAM REUSE
// =============================================================================

/// Cost of rebuilding the program per nonce vs reusing it.
fn bench_program_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Program-Reuse");
    group.throughput(Throughput::Elements(1));

    let dataset = MemoryDataset::synthetic(16 * 1024, 1);
    let header = random_header();

    group.bench_function("uncached", |b| {
        b.iter(|| progpow::hash(&dataset, black_box(BLOCK), &header, 7))
    });

    let mut cache = ProgramCache::new();
    group.bench_function("program-cache", |b| {
        b.iter(|| {
            let program = cache.get_or_build(&dataset, black_box(BLOCK));
            progpow::hash_with_program(&dataset, program, &header, 7)
        })
    });

    group.bench_function("program-build", |b| {
        b.iter(|| Program::build(&dataset, black_box(BLOCK)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 3: VERIFICATION
// =============================================================================

/// Light final-hash check vs full verification.
fn bench_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Verification");

    let dataset = MemoryDataset::synthetic(16 * 1024, 1);
    let header = random_header();
    let result = progpow::hash(&dataset, BLOCK, &header, 7);
    let open = [0xffu8; 32];

    group.bench_function("final-hash", |b| {
        b.iter(|| progpow::final_hash(black_box(&header), 7, black_box(&result.mix_hash)))
    });

    group.bench_function("verify", |b| {
        b.iter(|| progpow::verify(&dataset, BLOCK, &header, black_box(&result.mix_hash), 7, &open))
    });

    // Rejected by the boundary before the mix is recomputed
    let closed = [0u8; 32];
    group.bench_function("verify-rejected", |b| {
        b.iter(|| progpow::verify(&dataset, BLOCK, &header, black_box(&result.mix_hash), 7, &closed))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 4: THREAD SCALING
// =============================================================================

/// Search throughput using Rayon (1 to N threads).
#[cfg(feature = "multithread")]
fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Thread-Scaling");
    group.sample_size(20);

    let iterations = 256u64;
    let dataset = MemoryDataset::synthetic(16 * 1024, 1);
    let header = random_header();
    let impossible = [0u8; 32];
    group.throughput(Throughput::Elements(iterations));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{}threads", threads)),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| {
                    b.iter(|| {
                        progpow::search_parallel(
                            &dataset,
                            BLOCK,
                            black_box(&header),
                            &impossible,
                            0,
                            iterations,
                        )
                    })
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

#[cfg(feature = "multithread")]
criterion_group!(
    benches,
    bench_hash_latency,
    bench_program_reuse,
    bench_verification,
    bench_thread_scaling
);

#[cfg(not(feature = "multithread"))]
criterion_group!(
    benches,
    bench_hash_latency,
    bench_program_reuse,
    bench_verification
);

criterion_main!(benches);
