//! Hash Commands
//!
//! Raw Keccak-f[800] digests and full ProgPoW evaluation of one nonce.

use progpow::{keccak_progpow_256, keccak_progpow_64, MemoryDataset};
use std::time::Instant;
use tracing::debug;

/// Print both Keccak-f[800] digests of `(header, nonce, mix)`.
pub fn keccak(header: &[u8; 32], nonce: u64, mix: &[u8; 32]) {
    println!("digest256  {}", hex::encode(keccak_progpow_256(header, nonce, mix)));
    println!("digest64   {:016x}", keccak_progpow_64(header, nonce, mix));
}

/// Print the final and mix hash of one nonce.
pub fn hash_nonce(dataset: &MemoryDataset, block: u64, header: &[u8; 32], nonce: u64) {
    let start = Instant::now();
    let result = progpow::hash(dataset, block, header, nonce);
    debug!(elapsed = ?start.elapsed(), "hash computed");

    println!("final  {}", hex::encode(result.final_hash));
    println!("mix    {}", hex::encode(result.mix_hash));
}
