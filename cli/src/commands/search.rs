//! Search Command
//!
//! Nonce search across a rayon pool.

use anyhow::{Context, Result};
use progpow::MemoryDataset;
use std::time::Instant;
use tracing::info;

/// Search `iterations` nonces from `start_nonce`. Returns whether a nonce
/// was found.
pub fn search_nonces(
    dataset: &MemoryDataset,
    block: u64,
    header: &[u8; 32],
    boundary: &[u8; 32],
    start_nonce: u64,
    iterations: u64,
    threads: usize,
) -> Result<bool> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build thread pool")?;

    info!(
        block,
        start_nonce,
        iterations,
        threads = pool.current_num_threads(),
        "searching"
    );

    let start = Instant::now();
    let found = pool.install(|| {
        progpow::search_parallel(dataset, block, header, boundary, start_nonce, iterations)
    });
    let elapsed = start.elapsed();

    match found {
        Some(hit) => {
            let tried = hit.nonce.wrapping_sub(start_nonce).wrapping_add(1);
            info!(tried, elapsed = ?elapsed, "found nonce");
            println!("nonce  {:#018x}", hit.nonce);
            println!("final  {}", hex::encode(hit.result.final_hash));
            println!("mix    {}", hex::encode(hit.result.mix_hash));
            Ok(true)
        }
        None => {
            #[allow(clippy::cast_precision_loss)]
            let rate = iterations as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
            info!(hashes_per_sec = rate.round(), "range exhausted");
            println!("not found");
            Ok(false)
        }
    }
}
