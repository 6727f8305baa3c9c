use bolero::check;
use progpow::MixRngState;

fn assert_permutation(seq: &[usize; 32]) {
    let mut seen = 0u32;
    for &reg in seq {
        assert!(reg < 32, "register {reg} out of range");
        seen |= 1 << reg;
    }
    assert_eq!(seen, u32::MAX, "sequence is not a permutation");
}

#[test]
fn fuzz_program_permutations() {
    check!().with_type::<u64>().for_each(|&seed| {
        let state = MixRngState::new(seed);
        assert_permutation(state.dst_seq());
        assert_permutation(state.src_seq());
    });
}

#[test]
fn fuzz_program_period_mapping() {
    check!().with_type::<u64>().for_each(|&block_number| {
        let state = MixRngState::for_block(block_number);
        assert_eq!(state, MixRngState::new(block_number / 50));

        // Cursors cycle with period 32.
        let mut cursor = state;
        let first = (cursor.next_dst(), cursor.next_src());
        for _ in 0..31 {
            cursor.next_dst();
            cursor.next_src();
        }
        assert_eq!((cursor.next_dst(), cursor.next_src()), first);
    });
}
