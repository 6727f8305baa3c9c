#![cfg_attr(not(feature = "std"), no_std)]

//! # ProgPoW
//!
//! Programmatic proof-of-work (ProgPoW 0.9.2): a memory-hard mixing engine
//! over an epoch dataset, bracketed by two Keccak-f[800] calls.
//!
//! The dataset itself is external. Anything that can hand out 2048-bit
//! items implements [`EpochContext`]; [`MemoryDataset`] covers datasets
//! already in memory.

//! # Usage
//! ```rust
//! use progpow::{MemoryDataset, ProgramCache};
//!
//! let dataset = MemoryDataset::synthetic(1024, 1);
//! let header = [0x42u8; 32];
//!
//! // 1. One-shot hashing
//! let result = progpow::hash(&dataset, 30_000, &header, 7);
//!
//! // 2. Verification (boundary first, then the mix)
//! let boundary = [0xffu8; 32];
//! assert!(progpow::verify(&dataset, 30_000, &header, &result.mix_hash, 7, &boundary));
//!
//! // 3. Reusing the period's program across nonces
//! let mut cache = ProgramCache::new();
//! let program = cache.get_or_build(&dataset, 30_000);
//! assert_eq!(progpow::hash_with_program(&dataset, program, &header, 7), result);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod dataset;
mod engine;
// Re-export internal kernels for benchmarking/testing, hidden from docs
#[doc(hidden)]
pub mod kernels;
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use dataset::{build_l1_cache, EpochContext, L1Cache, MemoryDataset};
pub use engine::mix::{hash_mix_with_program, init_mix, LaneRegisters, Mix};
pub use engine::program::{period_of, MixRngState, Program, ProgramCache};
pub use kernels::keccak::{keccak_progpow_256, keccak_progpow_64};
pub use oneshot::{
    final_hash, hash, hash_mix, hash_with_program, search, search_parallel, verify,
};
pub use types::{
    meets_boundary, DatasetError, Hash2048Words, Hash256, ProgPowResult, SearchResult,
};
