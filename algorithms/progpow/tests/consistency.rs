//! Consistency & Regression Tests
//!
//! Verifies internal logic consistency and architectural invariants.
//! - Period stability of the random program
//! - Permutation validity and cursor cycling
//! - Parallel vs serial search
//! - Program reuse vs one-shot hashing

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use progpow::{period_of, MemoryDataset, MixRngState, Program};

const HEADER: [u8; 32] = [0x3c; 32];

fn is_permutation(seq: &[usize; 32]) -> bool {
    let mut seen = [false; 32];
    for &reg in seq {
        if reg >= 32 || seen[reg] {
            return false;
        }
        seen[reg] = true;
    }
    true
}

// =============================================================================
// PERIOD STABILITY
// =============================================================================

#[test]
fn test_same_period_same_program() {
    let pairs = [(0u64, 49u64), (50, 99), (30_000, 30_049), (1_000_000, 1_000_049)];
    for (a, b) in pairs {
        assert_eq!(period_of(a), period_of(b));
        assert_eq!(
            MixRngState::for_block(a),
            MixRngState::for_block(b),
            "Blocks {a} and {b} share a period"
        );
    }
}

#[test]
fn test_next_period_new_program() {
    for block in [0u64, 49, 29_999, 30_049, 7_777_777] {
        let here = MixRngState::for_block(block);
        let next = MixRngState::for_block(block + 50);
        assert_ne!(here.dst_seq(), next.dst_seq(), "dst unchanged after block {block}");
        assert_ne!(here.src_seq(), next.src_seq(), "src unchanged after block {block}");
    }
}

#[test]
fn test_period_hash_stability() {
    let dataset = MemoryDataset::synthetic(1024, 1);
    let a = progpow::hash(&dataset, 30_000, &HEADER, 5);
    let b = progpow::hash(&dataset, 30_049, &HEADER, 5);
    let c = progpow::hash(&dataset, 30_050, &HEADER, 5);

    assert_eq!(a, b, "Same period must hash identically");
    assert_ne!(a, c, "Next period must change the hash");
}

// =============================================================================
// PERMUTATIONS
// =============================================================================

#[test]
fn test_permutation_validity() {
    let seeds = (0u64..512).chain([u64::MAX, u64::MAX / 50, 1 << 32, 0xFFFF_FFFF]);
    for seed in seeds {
        let state = MixRngState::new(seed);
        assert!(is_permutation(state.dst_seq()), "dst not a permutation (seed {seed})");
        assert!(is_permutation(state.src_seq()), "src not a permutation (seed {seed})");
    }
}

#[test]
fn test_cursor_cycling() {
    for seed in [0u64, 1, 600, 12_345] {
        let mut state = MixRngState::new(seed);
        let dst: Vec<usize> = (0..33).map(|_| state.next_dst()).collect();
        let src: Vec<usize> = (0..33).map(|_| state.next_src()).collect();

        assert_eq!(dst[0], dst[32], "dst call 1 vs call 33 (seed {seed})");
        assert_eq!(src[0], src[32], "src call 1 vs call 33 (seed {seed})");
        assert_eq!(&dst[..32], &state.dst_seq()[..]);
        assert_eq!(&src[..32], &state.src_seq()[..]);
    }
}

// =============================================================================
// PARALLEL SEARCH CONSISTENCY
// =============================================================================

#[test]
fn test_parallel_search_matches_serial() {
    let dataset = MemoryDataset::synthetic(1024, 1);
    let header: [u8; 32] =
        hex::decode("ffeeddccbbaa9988776655443322110000112233445566778899aabbccddeeff")
            .unwrap()
            .try_into()
            .unwrap();

    for lead in [0x00u8, 0x0f, 0x3f] {
        let mut boundary = [0xffu8; 32];
        boundary[0] = lead;

        for start in [0u64, 100, 1_000] {
            let serial = progpow::search(&dataset, 30_000, &header, &boundary, start, 400);
            let parallel =
                progpow::search_parallel(&dataset, 30_000, &header, &boundary, start, 400);
            assert_eq!(
                serial, parallel,
                "Parallel search must return the lowest nonce (lead {lead:#04x}, start {start})"
            );
        }
    }
}

#[test]
fn test_parallel_search_empty_range() {
    let dataset = MemoryDataset::synthetic(64, 1);
    assert!(progpow::search_parallel(&dataset, 0, &HEADER, &[0xff; 32], 7, 0).is_none());
}

// =============================================================================
// PROGRAM REUSE
// =============================================================================

#[test]
fn test_program_matches_oneshot() {
    let dataset = MemoryDataset::synthetic(512, 9);
    let program = Program::build(&dataset, 30_000);

    for nonce in 0..16u64 {
        assert_eq!(
            progpow::hash_with_program(&dataset, &program, &HEADER, nonce),
            progpow::hash(&dataset, 30_000, &HEADER, nonce),
            "Program reuse diverged at nonce {nonce}"
        );
    }

    let seed = progpow::keccak_progpow_64(&HEADER, 3, &[0u8; 32]);
    assert_eq!(
        progpow::hash_mix_with_program(&dataset, &program, seed),
        progpow::hash_mix(&dataset, 30_000, seed)
    );
}

#[test]
fn test_rounds_replay_program() {
    // Hashing must not advance the program's state.
    let dataset = MemoryDataset::synthetic(64, 2);
    let program = Program::build(&dataset, 0);
    let before = *program.state();
    let _ = progpow::hash_with_program(&dataset, &program, &HEADER, 0);
    assert_eq!(*program.state(), before);
}
