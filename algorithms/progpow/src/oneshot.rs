//! Public API Layer
//!
//! One-shot hashing, light and full verification and nonce search.

use crate::dataset::EpochContext;
use crate::engine::mix::{self, seed_of};
use crate::engine::parallel;
use crate::engine::program::Program;
use crate::kernels::keccak::keccak_progpow_256;
use crate::types::{meets_boundary, Hash256, ProgPowResult, SearchResult};
use subtle::ConstantTimeEq;

// =============================================================================
// HASHING
// =============================================================================

/// Compute ProgPoW for one nonce.
///
/// Builds the period's program from scratch. Callers hashing many nonces in
/// the same period should build a [`Program`] (or keep a
/// [`ProgramCache`](crate::ProgramCache)) and use [`hash_with_program`].
///
/// # Panics
/// Panics if the context has no items.
///
/// # Example
/// ```rust
/// use progpow::MemoryDataset;
///
/// let dataset = MemoryDataset::synthetic(1024, 0);
/// let result = progpow::hash(&dataset, 0, &[0u8; 32], 0);
/// assert_eq!(result, progpow::hash(&dataset, 0, &[0u8; 32], 0));
/// ```
#[must_use]
pub fn hash<C: EpochContext + ?Sized>(
    context: &C,
    block_number: u64,
    header_hash: &Hash256,
    nonce: u64,
) -> ProgPowResult {
    let program = Program::build(context, block_number);
    mix::evaluate(context, &program, header_hash, nonce)
}

/// Compute ProgPoW for one nonce against a pre-built program.
///
/// The block number is implied by the program's period.
///
/// # Panics
/// Panics if the context has no items.
#[must_use]
#[inline]
pub fn hash_with_program<C: EpochContext + ?Sized>(
    context: &C,
    program: &Program,
    header_hash: &Hash256,
    nonce: u64,
) -> ProgPowResult {
    mix::evaluate(context, program, header_hash, nonce)
}

/// Run the round loop for a seed and return the mix hash only.
///
/// # Panics
/// Panics if the context has no items.
#[must_use]
pub fn hash_mix<C: EpochContext + ?Sized>(context: &C, block_number: u64, seed: u64) -> Hash256 {
    let program = Program::build(context, block_number);
    mix::hash_mix_with_program(context, &program, seed)
}

/// Final hash from a claimed mix hash, without touching the dataset.
///
/// Lets a light client reject a header whose final hash misses the boundary
/// before paying for the full mix.
///
/// # Example
/// ```rust
/// use progpow::MemoryDataset;
///
/// let dataset = MemoryDataset::synthetic(64, 1);
/// let header = [7u8; 32];
/// let result = progpow::hash(&dataset, 10, &header, 99);
/// assert_eq!(progpow::final_hash(&header, 99, &result.mix_hash), result.final_hash);
/// ```
#[must_use]
pub fn final_hash(header_hash: &Hash256, nonce: u64, mix_hash: &Hash256) -> Hash256 {
    keccak_progpow_256(header_hash, seed_of(header_hash, nonce), mix_hash)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Check a sealed header: the final hash must meet `boundary` and the mix
/// hash must be the one the dataset produces.
///
/// The boundary check runs first and costs two Keccak-f[800] calls; the mix
/// is only recomputed when it passes. The mix comparison is constant time.
///
/// # Panics
/// Panics if the context has no items.
///
/// # Example
/// ```rust
/// use progpow::MemoryDataset;
///
/// let dataset = MemoryDataset::synthetic(64, 1);
/// let header = [7u8; 32];
/// let result = progpow::hash(&dataset, 10, &header, 99);
/// assert!(progpow::verify(&dataset, 10, &header, &result.mix_hash, 99, &[0xff; 32]));
/// assert!(!progpow::verify(&dataset, 10, &header, &[0u8; 32], 99, &[0xff; 32]));
/// ```
#[must_use]
pub fn verify<C: EpochContext + ?Sized>(
    context: &C,
    block_number: u64,
    header_hash: &Hash256,
    mix_hash: &Hash256,
    nonce: u64,
    boundary: &Hash256,
) -> bool {
    let seed = seed_of(header_hash, nonce);
    let final_hash = keccak_progpow_256(header_hash, seed, mix_hash);
    if !meets_boundary(&final_hash, boundary) {
        tracing::trace!(nonce, block_number, "final hash above boundary");
        return false;
    }

    let expected_mix = hash_mix(context, block_number, seed);
    expected_mix.ct_eq(mix_hash).into()
}

// =============================================================================
// SEARCH
// =============================================================================

/// Try `iterations` nonces from `start_nonce` on the calling thread and
/// return the first that meets `boundary`.
///
/// Nonces wrap around at `u64::MAX`.
///
/// # Panics
/// Panics if the context has no items.
#[must_use]
pub fn search<C: EpochContext + ?Sized>(
    context: &C,
    block_number: u64,
    header_hash: &Hash256,
    boundary: &Hash256,
    start_nonce: u64,
    iterations: u64,
) -> Option<SearchResult> {
    let program = Program::build(context, block_number);
    (0..iterations)
        .map(|i| start_nonce.wrapping_add(i))
        .find_map(|nonce| {
            let result = mix::evaluate(context, &program, header_hash, nonce);
            meets_boundary(&result.final_hash, boundary).then_some(SearchResult { nonce, result })
        })
}

/// Same as [`search`], spread over the rayon pool when `multithread` is on.
///
/// Returns the lowest matching nonce of the range, exactly like [`search`].
///
/// # Panics
/// Panics if the context has no items.
#[must_use]
pub fn search_parallel<C: EpochContext + ?Sized>(
    context: &C,
    block_number: u64,
    header_hash: &Hash256,
    boundary: &Hash256,
    start_nonce: u64,
    iterations: u64,
) -> Option<SearchResult> {
    let program = Program::build(context, block_number);
    parallel::scan(
        context,
        &program,
        header_hash,
        boundary,
        start_nonce,
        iterations,
    )
}
