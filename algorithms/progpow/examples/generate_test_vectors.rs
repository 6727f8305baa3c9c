//! Generator for ProgPoW test vectors
//!
//! Generates the JSON test vectors used by `tests/test_vectors.json`.
//! Includes the Keccak-f[800] primitives, full hashes over synthetic
//! datasets and nonce searches.
#![allow(clippy::unwrap_used, clippy::cast_possible_truncation)]
use progpow::{keccak_progpow_256, keccak_progpow_64, MemoryDataset};
use serde_json::json;

const HEADER_30000: &str = "ffeeddccbbaa9988776655443322110000112233445566778899aabbccddeeff";

fn hash256(hex_str: &str) -> [u8; 32] {
    hex::decode(hex_str).unwrap().try_into().unwrap()
}

fn main() {
    // =========================================================================
    // 1. KECCAK-f[800] VECTORS
    // =========================================================================

    let mut keccak = Vec::new();
    let header_nonce = hash256(&"ccddeeff8899aabb4455667700112233".repeat(2));
    let ascending: [u8; 32] = core::array::from_fn(|i| i as u8);
    let ascending_hi: [u8; 32] = core::array::from_fn(|i| i as u8 + 32);

    for (name, header, nonce, mix) in [
        ("zero", [0u8; 32], 0u64, [0u8; 32]),
        ("header_nonce", header_nonce, 0x1234_5678_9abc_def0, [0u8; 32]),
        ("with_mix", ascending, u64::MAX, ascending_hi),
    ] {
        keccak.push(json!({
            "name": name,
            "header_hash": hex::encode(header),
            "nonce": format!("{nonce:016x}"),
            "mix_hash": hex::encode(mix),
            "digest_256": hex::encode(keccak_progpow_256(&header, nonce, &mix)),
            "digest_64": format!("{:016x}", keccak_progpow_64(&header, nonce, &mix)),
        }));
    }

    // =========================================================================
    // 2. FULL HASH VECTORS
    // =========================================================================

    let mut hashes = Vec::new();
    for (name, items, seed, block, header, nonce) in [
        ("genesis_zero", 1024u32, 0u64, 0u64, [0u8; 32], 0u64),
        ("block_30000", 1024, 1, 30_000, hash256(HEADER_30000), 0x1234_5678_9abc_def0),
        // Last block of the same period
        ("same_period", 1024, 1, 30_049, hash256(HEADER_30000), 0x1234_5678_9abc_def0),
        // First block of the next period
        ("next_period", 1024, 1, 30_050, hash256(HEADER_30000), 0x1234_5678_9abc_def0),
        // Exactly one L1 cache worth of items
        ("small_dataset", 64, 7, 123_456, [0xab; 32], 42),
    ] {
        let dataset = MemoryDataset::synthetic(items, seed);
        let result = progpow::hash(&dataset, block, &header, nonce);
        hashes.push(json!({
            "name": name,
            "dataset_items": items,
            "dataset_seed": seed,
            "block_number": block,
            "header_hash": hex::encode(header),
            "nonce": format!("{nonce:016x}"),
            "final_hash": hex::encode(result.final_hash),
            "mix_hash": hex::encode(result.mix_hash),
        }));
    }

    // =========================================================================
    // 3. SEARCH VECTORS
    // =========================================================================

    let mut searches = Vec::new();
    let dataset = MemoryDataset::synthetic(1024, 1);
    for (name, lead, start) in [("first_hit", 0x00u8, 0u64), ("offset_start", 0x0f, 100)] {
        let mut boundary = [0xffu8; 32];
        boundary[0] = lead;
        let header = hash256(HEADER_30000);
        let found = progpow::search(&dataset, 30_000, &header, &boundary, start, 1000).unwrap();
        searches.push(json!({
            "name": name,
            "dataset_items": 1024,
            "dataset_seed": 1,
            "block_number": 30_000,
            "header_hash": HEADER_30000,
            "boundary": hex::encode(boundary),
            "start_nonce": start,
            "iterations": 1000,
            "nonce": found.nonce,
            "final_hash": hex::encode(found.result.final_hash),
            "mix_hash": hex::encode(found.result.mix_hash),
        }));
    }

    let output = json!({
        "keccak_progpow": keccak,
        "progpow": hashes,
        "search": searches,
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
