//! Mixing Engine
//!
//! Lane initialization, the 64-round loop and the final lane reduction.
//! Everything here runs once per nonce; program construction lives in
//! [`crate::engine::program`].

use crate::dataset::EpochContext;
use crate::engine::program::Program;
use crate::kernels::constants::{
    FNV_OFFSET_BASIS, HASH_SIZE, HASH_WORDS, MAX_OPERATIONS, NUM_CACHE_ACCESSES, NUM_LANES,
    NUM_MATH_OPERATIONS, NUM_REGS, NUM_ROUNDS, NUM_WORDS_PER_LANE,
};
use crate::kernels::keccak::{keccak_progpow_256, keccak_progpow_64};
use crate::kernels::kiss99::Kiss99;
use crate::kernels::math::{fnv1a, random_math, random_merge};
use crate::types::{Hash256, ProgPowResult};

/// Register file of one lane.
pub type LaneRegisters = [u32; NUM_REGS];

/// Register files of all lanes.
pub type Mix = [LaneRegisters; NUM_LANES];

const ZERO_HASH: Hash256 = [0u8; HASH_SIZE];

// =============================================================================
// SEED
// =============================================================================

/// 64-bit seed binding the header and the nonce.
#[inline]
#[must_use]
pub fn seed_of(header_hash: &Hash256, nonce: u64) -> u64 {
    keccak_progpow_64(header_hash, nonce, &ZERO_HASH)
}

/// Initial lane registers for a seed.
///
/// All lanes share `z` and `w`; `jsr` and `jcong` fold in the lane index so
/// lanes diverge from the first word.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn init_mix(seed: u64) -> Mix {
    let z = fnv1a(FNV_OFFSET_BASIS, seed as u32);
    let w = fnv1a(z, (seed >> 32) as u32);

    let mut mix = [[0u32; NUM_REGS]; NUM_LANES];
    for (lane_id, lane) in (0u32..).zip(mix.iter_mut()) {
        let jsr = fnv1a(w, lane_id);
        let jcong = fnv1a(jsr, lane_id);
        let mut rng = Kiss99::new(z, w, jsr, jcong);
        for reg in lane.iter_mut() {
            *reg = rng.next_u32();
        }
    }
    mix
}

// =============================================================================
// ROUND LOOP
// =============================================================================

/// One round: a 2048-bit dataset load, 11 cache accesses, 18 math
/// operations, then the dataset words merged into every lane.
#[allow(clippy::cast_possible_truncation)]
fn round<C: EpochContext + ?Sized>(context: &C, program: &Program, r: u32, mix: &mut Mix) {
    // Selected before any register changes.
    let item_index = mix[r as usize % NUM_LANES][0] % context.num_items_2048();
    let item = context.item_2048(item_index);

    let mut state = *program.state();
    let l1 = program.l1_cache();

    for i in 0..MAX_OPERATIONS {
        if i < NUM_CACHE_ACCESSES {
            let src = state.next_src();
            let dst = state.next_dst();
            let sel = state.rng();

            for lane in mix.iter_mut() {
                let word = l1.get(lane[src]);
                random_merge(&mut lane[dst], word, sel);
            }
        }
        if i < NUM_MATH_OPERATIONS {
            // Two distinct source registers from one draw.
            let src_rnd = state.rng() as usize % (NUM_REGS * (NUM_REGS - 1));
            let src1 = src_rnd % NUM_REGS;
            let mut src2 = src_rnd / NUM_REGS;
            if src2 >= src1 {
                src2 += 1;
            }

            let sel1 = state.rng();
            let dst = state.next_dst();
            let sel2 = state.rng();

            for lane in mix.iter_mut() {
                let data = random_math(lane[src1], lane[src2], sel1);
                random_merge(&mut lane[dst], data, sel2);
            }
        }
    }

    // Register 0 always takes the first dataset word.
    let mut dsts = [0usize; NUM_WORDS_PER_LANE];
    let mut sels = [0u32; NUM_WORDS_PER_LANE];
    for (i, (dst, sel)) in dsts.iter_mut().zip(sels.iter_mut()).enumerate() {
        if i > 0 {
            *dst = state.next_dst();
        }
        *sel = state.rng();
    }

    for (lane_id, lane) in mix.iter_mut().enumerate() {
        let offset = ((lane_id ^ r as usize) % NUM_LANES) * NUM_WORDS_PER_LANE;
        let words = &item[offset..offset + NUM_WORDS_PER_LANE];
        for ((&word, &dst), &sel) in words.iter().zip(&dsts).zip(&sels) {
            random_merge(&mut lane[dst], word, sel);
        }
    }
}

/// Fold every lane to one word, then the lanes into eight words.
fn reduce(mix: &Mix) -> Hash256 {
    let mut words = [FNV_OFFSET_BASIS; HASH_WORDS];
    for (lane_id, lane) in mix.iter().enumerate() {
        let lane_hash = lane.iter().fold(FNV_OFFSET_BASIS, |h, &reg| fnv1a(h, reg));
        let slot = &mut words[lane_id % HASH_WORDS];
        *slot = fnv1a(*slot, lane_hash);
    }

    let mut out = [0u8; HASH_SIZE];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Run all rounds of `program` for a seed and reduce to the mix hash.
///
/// # Panics
/// Panics if the context has no items.
#[must_use]
pub fn hash_mix_with_program<C: EpochContext + ?Sized>(
    context: &C,
    program: &Program,
    seed: u64,
) -> Hash256 {
    let mut mix = init_mix(seed);
    for r in 0..NUM_ROUNDS {
        round(context, program, r, &mut mix);
    }
    reduce(&mix)
}

/// Full evaluation of one nonce against a pre-built program.
///
/// # Panics
/// Panics if the context has no items.
#[must_use]
pub fn evaluate<C: EpochContext + ?Sized>(
    context: &C,
    program: &Program,
    header_hash: &Hash256,
    nonce: u64,
) -> ProgPowResult {
    let seed = seed_of(header_hash, nonce);
    let mix_hash = hash_mix_with_program(context, program, seed);
    let final_hash = keccak_progpow_256(header_hash, seed, &mix_hash);
    ProgPowResult {
        final_hash,
        mix_hash,
    }
}
