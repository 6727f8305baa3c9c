use bolero::check;
use progpow::{MemoryDataset, Program};
use std::sync::OnceLock;

const BLOCK: u64 = 30_000;

fn fixture() -> &'static (MemoryDataset, Program) {
    static FIXTURE: OnceLock<(MemoryDataset, Program)> = OnceLock::new();
    FIXTURE.get_or_init(|| {
        let dataset = MemoryDataset::synthetic(64, 0xF022);
        let program = Program::build(&dataset, BLOCK);
        (dataset, program)
    })
}

#[test]
fn fuzz_verification_logic() {
    check!()
        .with_type::<([u8; 32], u64)>()
        .for_each(|(header, nonce)| {
            let (dataset, program) = fixture();
            let open = [0xffu8; 32];

            // =============================================================================
            // POSITIVE TEST
            // =============================================================================

            let result = progpow::hash_with_program(dataset, program, header, *nonce);
            assert_eq!(progpow::final_hash(header, *nonce, &result.mix_hash), result.final_hash);
            assert!(
                progpow::verify(dataset, BLOCK, header, &result.mix_hash, *nonce, &open),
                "verify() failed on correct mix"
            );

            // =============================================================================
            // NEGATIVE TESTS (CORRUPTION)
            // =============================================================================

            // 1. Mix Corruption
            let mut bad_mix = result.mix_hash;
            bad_mix[0] ^= 0x01;
            assert!(
                !progpow::verify(dataset, BLOCK, header, &bad_mix, *nonce, &open),
                "verify() succeeded on corrupted mix"
            );

            // 2. Boundary below the final hash
            if result.final_hash != [0u8; 32] {
                let tight = [0u8; 32];
                assert!(
                    !progpow::verify(dataset, BLOCK, header, &result.mix_hash, *nonce, &tight),
                    "verify() ignored the boundary"
                );
            }
        });
}
