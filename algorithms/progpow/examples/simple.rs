//! ProgPoW Basic Example
//!
//! Minimal usage: `let result = progpow::hash(&dataset, block, &header, nonce);`

#![allow(clippy::pedantic, clippy::nursery)]

use progpow::MemoryDataset;

fn main() {
    // Stand-in for a real epoch dataset:
    let dataset = MemoryDataset::synthetic(1024, 1);
    let header = [0x42u8; 32];

    let result = progpow::hash(&dataset, 30_000, &header, 0x1234);

    println!("Header: {}", hex::encode(header));
    println!("Mix:    {}", hex::encode(result.mix_hash));
    println!("Final:  {}", hex::encode(result.final_hash));
}
