//! Verify Command
//!
//! Check a sealed header (nonce + mix hash) against a boundary.

use progpow::{final_hash, meets_boundary, MemoryDataset};
use tracing::warn;

/// Verify one seal and print `OK` or `FAILED`. Returns whether it passed.
pub fn verify_seal(
    dataset: &MemoryDataset,
    block: u64,
    header: &[u8; 32],
    nonce: u64,
    mix: &[u8; 32],
    boundary: &[u8; 32],
) -> bool {
    let light = final_hash(header, nonce, mix);
    if !meets_boundary(&light, boundary) {
        warn!(final_hash = %hex::encode(light), "final hash above boundary");
        println!("FAILED (boundary)");
        return false;
    }

    if progpow::verify(dataset, block, header, mix, nonce, boundary) {
        println!("OK");
        true
    } else {
        warn!("mix hash does not match the dataset");
        println!("FAILED (mix)");
        false
    }
}
