#![no_main]

use libfuzzer_sys::fuzz_target;
use progpow::{final_hash, verify, MemoryDataset, Program};
use std::sync::OnceLock;

static DATASET: OnceLock<MemoryDataset> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // Header (32) + nonce (8) + block number (8)
    if data.len() < 48 {
        return;
    }
    let mut header = [0u8; 32];
    header.copy_from_slice(&data[..32]);
    let nonce = u64::from_le_bytes(data[32..40].try_into().unwrap_or_default());
    let block = u64::from_le_bytes(data[40..48].try_into().unwrap_or_default());

    let dataset = DATASET.get_or_init(|| MemoryDataset::synthetic(64, 0x5EED));

    // =============================================================================
    // 1. PROGRAM REUSE
    // =============================================================================

    let program = Program::build(dataset, block);
    let result = progpow::hash_with_program(dataset, &program, &header, nonce);
    assert_eq!(result, progpow::hash(dataset, block, &header, nonce), "Program reuse diverged");

    // =============================================================================
    // 2. LIGHT CHECK + VERIFY
    // =============================================================================

    assert_eq!(final_hash(&header, nonce, &result.mix_hash), result.final_hash);
    assert!(
        verify(dataset, block, &header, &result.mix_hash, nonce, &result.final_hash),
        "Verification failed on its own final hash as boundary"
    );

    let mut bad_mix = result.mix_hash;
    bad_mix[data[0] as usize % 32] ^= 0x80;
    assert!(
        !verify(dataset, block, &header, &bad_mix, nonce, &[0xff; 32]),
        "Verification succeeded with corrupted mix"
    );
});
