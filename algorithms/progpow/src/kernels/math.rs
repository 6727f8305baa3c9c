//! Random math and merge operator families, plus the FNV-1a step.
//!
//! Selectors come straight from the KISS99 stream and are always reduced
//! modulo the table size first, so every `u32` selects a defined operation.
//! Table order is consensus-critical.

use crate::kernels::constants::FNV_PRIME;

/// Number of operations in the random math table.
pub const NUM_MATH_OPS: u32 = 11;

/// Number of formulas in the merge table.
pub const NUM_MERGE_OPS: u32 = 4;

// =============================================================================
// FNV-1a
// =============================================================================

/// One FNV-1a step over a 32-bit word: `(u ^ v) * FNV_PRIME`.
#[inline]
pub const fn fnv1a(u: u32, v: u32) -> u32 {
    (u ^ v).wrapping_mul(FNV_PRIME)
}

// =============================================================================
// RANDOM MATH
// =============================================================================

/// Operations applied to two register values, indexed by `selector % 11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOp {
    /// `a + b` (wrapping)
    Add,
    /// `a * b` (wrapping)
    Mul,
    /// High 32 bits of the 64-bit product
    MulHi,
    /// `min(a, b)`
    Min,
    /// `a` rotated left by `b % 32`
    Rotl,
    /// `a` rotated right by `b % 32`
    Rotr,
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `a ^ b`
    Xor,
    /// Sum of leading zero counts
    Clz,
    /// Sum of population counts
    Popcount,
}

impl MathOp {
    /// All operations in selector order.
    pub const ALL: [Self; NUM_MATH_OPS as usize] = [
        Self::Add,
        Self::Mul,
        Self::MulHi,
        Self::Min,
        Self::Rotl,
        Self::Rotr,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Clz,
        Self::Popcount,
    ];

    /// Select the operation for a raw RNG word.
    #[inline]
    pub const fn from_selector(selector: u32) -> Self {
        Self::ALL[(selector % NUM_MATH_OPS) as usize]
    }

    /// Apply the operation.
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Mul => a.wrapping_mul(b),
            Self::MulHi => ((a as u64 * b as u64) >> 32) as u32,
            Self::Min => {
                if a < b {
                    a
                } else {
                    b
                }
            }
            Self::Rotl => a.rotate_left(b % 32),
            Self::Rotr => a.rotate_right(b % 32),
            Self::And => a & b,
            Self::Or => a | b,
            Self::Xor => a ^ b,
            Self::Clz => a.leading_zeros() + b.leading_zeros(),
            Self::Popcount => a.count_ones() + b.count_ones(),
        }
    }
}

/// Combine two register values with the operation picked by `selector`.
#[inline]
pub const fn random_math(a: u32, b: u32, selector: u32) -> u32 {
    MathOp::from_selector(selector).apply(a, b)
}

// =============================================================================
// RANDOM MERGE
// =============================================================================

/// Merge formulas, indexed by `selector % 4`.
///
/// Every formula keeps the entropy of `a` even when `b` is constant, so there
/// is no `a & b` style merge. Rotations use `((selector >> 16) % 31) + 1`,
/// which is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOp {
    /// `a * 33 + b`
    MulAdd,
    /// `(a ^ b) * 33`
    XorMul,
    /// `rotl(a, r) ^ b`
    RotlXor(u32),
    /// `rotr(a, r) ^ b`
    RotrXor(u32),
}

impl MergeOp {
    /// Select the merge formula for a raw RNG word.
    #[inline]
    pub const fn from_selector(selector: u32) -> Self {
        let rotation = ((selector >> 16) % 31) + 1;
        match selector % NUM_MERGE_OPS {
            0 => Self::MulAdd,
            1 => Self::XorMul,
            2 => Self::RotlXor(rotation),
            _ => Self::RotrXor(rotation),
        }
    }

    /// Apply the formula, returning the new value of `a`.
    #[inline]
    pub const fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            Self::MulAdd => a.wrapping_mul(33).wrapping_add(b),
            Self::XorMul => (a ^ b).wrapping_mul(33),
            Self::RotlXor(r) => a.rotate_left(r) ^ b,
            Self::RotrXor(r) => a.rotate_right(r) ^ b,
        }
    }
}

/// Merge `b` into `a` in place with the formula picked by `selector`.
#[inline]
pub const fn random_merge(a: &mut u32, b: u32, selector: u32) {
    *a = MergeOp::from_selector(selector).apply(*a, b);
}
