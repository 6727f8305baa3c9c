//! Keccak-f[800] permutation and the two fixed-length ProgPoW hashes.
//!
//! The ProgPoW variant is not a sponge: it absorbs exactly 576 bits
//! (header hash, 64-bit value, 256 bits of mix) into a zeroed 800-bit state,
//! permutes once, and squeezes the first 256 bits. No padding is applied.

use crate::kernels::constants::{
    HASH_WORDS, KECCAK_PI, KECCAK_RHO, KECCAK_ROUND_CONSTANTS, KECCAK_STATE_WORDS,
};
use crate::types::Hash256;

/// Keccak-f[800] state: 25 lanes of 32 bits.
pub type KeccakState = [u32; KECCAK_STATE_WORDS];

// =============================================================================
// PERMUTATION
// =============================================================================

/// Apply the full 22-round Keccak-f[800] permutation in place.
pub fn keccak_f800(state: &mut KeccakState) {
    for rc in &KECCAK_ROUND_CONSTANTS {
        // Theta
        let mut column = [0u32; 5];
        for (x, c) in column.iter_mut().enumerate() {
            *c = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = column[(x + 4) % 5] ^ column[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[y * 5 + x] ^= d;
            }
        }

        // Rho + Pi
        let mut last = state[1];
        for (&pi, &rho) in KECCAK_PI.iter().zip(KECCAK_RHO.iter()) {
            let next = state[pi];
            state[pi] = last.rotate_left(rho);
            last = next;
        }

        // Chi
        for row in state.chunks_exact_mut(5) {
            let t = [row[0], row[1], row[2], row[3], row[4]];
            for (x, lane) in row.iter_mut().enumerate() {
                *lane = t[x] ^ (!t[(x + 1) % 5] & t[(x + 2) % 5]);
            }
        }

        // Iota
        state[0] ^= *rc;
    }
}

// =============================================================================
// PROGPOW HASHES
// =============================================================================

/// Keccak-f[800] hash over exactly 576 bits of input, no padding.
///
/// State layout: words 0..8 hold `header_hash`, words 8..10 hold `nonce`
/// (low half first), words 10..18 hold `mix_hash`. Hash bytes are read as
/// little-endian words and the output words are written back the same way.
///
/// # Example
/// ```rust
/// let digest = progpow::keccak_progpow_256(&[0u8; 32], 0, &[0u8; 32]);
/// assert_eq!(digest[..4], [0x5d, 0xd4, 0x31, 0xe5]);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn keccak_progpow_256(header_hash: &Hash256, nonce: u64, mix_hash: &Hash256) -> Hash256 {
    let mut state: KeccakState = [0; KECCAK_STATE_WORDS];

    load_words(&mut state[..HASH_WORDS], header_hash);
    state[HASH_WORDS] = nonce as u32;
    state[HASH_WORDS + 1] = (nonce >> 32) as u32;
    load_words(&mut state[HASH_WORDS + 2..2 * HASH_WORDS + 2], mix_hash);

    keccak_f800(&mut state);

    let mut output = [0u8; 32];
    for (chunk, word) in output.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    output
}

/// Same as [`keccak_progpow_256`] but returns the first 8 output bytes as a
/// big-endian integer.
#[must_use]
pub fn keccak_progpow_64(header_hash: &Hash256, nonce: u64, mix_hash: &Hash256) -> u64 {
    let h = keccak_progpow_256(header_hash, nonce, mix_hash);
    u64::from_be_bytes([h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7]])
}

/// Load 32 bytes into 8 state words (little-endian).
fn load_words(dst: &mut [u32], src: &Hash256) {
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}
