//! KISS99 pseudo-random generator (Marsaglia, 1999).
//!
//! Combines a pair of multiply-with-carry generators, a 3-shift register and
//! a linear congruential generator. Every program choice in ProgPoW (register
//! permutations, operand indexes, operator selectors) is drawn from it.

use crate::kernels::constants::{FNV_OFFSET_BASIS, KISS99_DEFAULT};
use crate::kernels::math::fnv1a;

/// KISS99 generator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kiss99 {
    z: u32,
    w: u32,
    jsr: u32,
    jcong: u32,
}

impl Kiss99 {
    /// Create a generator from its four sub-generator states.
    pub const fn new(z: u32, w: u32, jsr: u32, jcong: u32) -> Self {
        Self { z, w, jsr, jcong }
    }

    /// Seed from a 64-bit value by chaining FNV-1a over its halves.
    ///
    /// `z = fnv(basis, lo)`, `w = fnv(z, hi)`, `jsr = fnv(w, lo)`, `jcong = fnv(jsr, hi)`.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_seed(seed: u64) -> Self {
        let lo = seed as u32;
        let hi = (seed >> 32) as u32;

        let z = fnv1a(FNV_OFFSET_BASIS, lo);
        let w = fnv1a(z, hi);
        let jsr = fnv1a(w, lo);
        let jcong = fnv1a(jsr, hi);
        Self::new(z, w, jsr, jcong)
    }

    /// Draw the next 32-bit word.
    #[inline]
    pub const fn next_u32(&mut self) -> u32 {
        self.z = 36969u32
            .wrapping_mul(self.z & 0xFFFF)
            .wrapping_add(self.z >> 16);
        self.w = 18000u32
            .wrapping_mul(self.w & 0xFFFF)
            .wrapping_add(self.w >> 16);
        let mwc = (self.z << 16).wrapping_add(self.w);

        self.jsr ^= self.jsr << 17;
        self.jsr ^= self.jsr >> 13;
        self.jsr ^= self.jsr << 5;

        self.jcong = 69069u32.wrapping_mul(self.jcong).wrapping_add(1_234_567);

        (mwc ^ self.jcong).wrapping_add(self.jsr)
    }
}

impl Default for Kiss99 {
    fn default() -> Self {
        let (z, w, jsr, jcong) = KISS99_DEFAULT;
        Self::new(z, w, jsr, jcong)
    }
}

impl Iterator for Kiss99 {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}
