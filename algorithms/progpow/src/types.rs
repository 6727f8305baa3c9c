//! Shared types used across the ProgPoW library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::{DATASET_ITEM_WORDS, HASH_SIZE};

// =============================================================================
// HASH VALUES
// =============================================================================

/// A 256-bit hash (header hash, mix hash, final hash or boundary).
pub type Hash256 = [u8; HASH_SIZE];

/// One 2048-bit dataset item as 64 little-endian words.
pub type Hash2048Words = [u32; DATASET_ITEM_WORDS];

/// Output of one ProgPoW evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgPowResult {
    /// Final digest compared against the boundary.
    pub final_hash: Hash256,
    /// Reduced lane state, published in the block header.
    pub mix_hash: Hash256,
}

/// A nonce that met the boundary, together with its hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchResult {
    /// Winning nonce.
    pub nonce: u64,
    /// Hashes for `nonce`.
    pub result: ProgPowResult,
}

/// True when `hash <= boundary`, both read as 256-bit big-endian integers.
///
/// # Example
/// ```rust
/// let mut boundary = [0xffu8; 32];
/// boundary[0] = 0x0f;
/// let mut hash = [0u8; 32];
/// hash[0] = 0x0f;
/// assert!(progpow::meets_boundary(&hash, &boundary));
/// hash[0] = 0x10;
/// assert!(!progpow::meets_boundary(&hash, &boundary));
/// ```
#[must_use]
#[inline]
pub fn meets_boundary(hash: &Hash256, boundary: &Hash256) -> bool {
    // Lexicographic byte order is big-endian integer order.
    hash <= boundary
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for dataset bytes that cannot back an epoch context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetError {
    /// No data at all.
    Empty,
    /// Length is not a whole number of 2048-bit items.
    Misaligned {
        /// Length of the rejected input in bytes.
        len: usize,
    },
    /// Fewer words than the L1 cache needs.
    TooSmall {
        /// Number of 32-bit words supplied.
        words: usize,
    },
    /// More 2048-bit items than a 32-bit item index can address.
    TooLarge {
        /// Number of 2048-bit items supplied.
        items: usize,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "dataset is empty"),
            Self::Misaligned { len } => write!(
                f,
                "dataset length {len} is not a multiple of the {}-byte item size",
                crate::kernels::constants::DATASET_ITEM_SIZE
            ),
            Self::TooSmall { words } => write!(
                f,
                "dataset has {words} words, the L1 cache needs at least {}",
                crate::kernels::constants::L1_CACHE_NUM_ITEMS
            ),
            Self::TooLarge { items } => {
                write!(f, "dataset has {items} items, at most {} are addressable", u32::MAX)
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for DatasetError {}
