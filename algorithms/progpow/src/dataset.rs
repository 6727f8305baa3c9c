//! Epoch dataset access and the L1 cache.
//!
//! The engine never builds an ethash DAG. It reads one through
//! [`EpochContext`], which any owner of an epoch dataset can implement.
//! [`MemoryDataset`] is the in-memory implementation used by the CLI, the
//! benches and the tests.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use crate::kernels::constants::{DATASET_ITEM_SIZE, DATASET_ITEM_WORDS, L1_CACHE_NUM_ITEMS};
use crate::kernels::kiss99::Kiss99;
use crate::types::{DatasetError, Hash2048Words};

// =============================================================================
// EPOCH CONTEXT
// =============================================================================

/// Read-only view of one epoch's dataset.
///
/// Implementations must be safe for unsynchronized concurrent reads; the
/// parallel search shares one context across all worker threads.
pub trait EpochContext: Sync {
    /// Number of 2048-bit items in the dataset. Must be non-zero.
    fn num_items_2048(&self) -> u32;

    /// Fetch item `index` (`index < num_items_2048()`).
    fn item_2048(&self, index: u32) -> Hash2048Words;

    /// Total number of 32-bit words.
    fn num_words(&self) -> usize {
        self.num_items_2048() as usize * DATASET_ITEM_WORDS
    }

    /// Fetch a single word (`index < num_words()`).
    #[allow(clippy::cast_possible_truncation)]
    fn word(&self, index: usize) -> u32 {
        self.item_2048((index / DATASET_ITEM_WORDS) as u32)[index % DATASET_ITEM_WORDS]
    }
}

impl<C: EpochContext + ?Sized> EpochContext for &C {
    fn num_items_2048(&self) -> u32 {
        (**self).num_items_2048()
    }

    fn item_2048(&self, index: u32) -> Hash2048Words {
        (**self).item_2048(index)
    }

    fn num_words(&self) -> usize {
        (**self).num_words()
    }

    fn word(&self, index: usize) -> u32 {
        (**self).word(index)
    }
}

// =============================================================================
// IN-MEMORY DATASET
// =============================================================================

/// Dataset held in memory as little-endian 32-bit words.
#[derive(Clone, PartialEq, Eq)]
pub struct MemoryDataset {
    words: Vec<u32>,
    num_items: u32,
}

impl MemoryDataset {
    /// Wrap a word vector.
    ///
    /// # Errors
    /// Rejects empty input, a length that is not a whole number of 2048-bit
    /// items, fewer words than one L1 cache and more items than a `u32` counts.
    pub fn from_words(words: Vec<u32>) -> Result<Self, DatasetError> {
        if words.is_empty() {
            return Err(DatasetError::Empty);
        }
        if !words.len().is_multiple_of(DATASET_ITEM_WORDS) {
            return Err(DatasetError::Misaligned {
                len: words.len() * core::mem::size_of::<u32>(),
            });
        }
        if words.len() < L1_CACHE_NUM_ITEMS {
            return Err(DatasetError::TooSmall { words: words.len() });
        }

        let items = words.len() / DATASET_ITEM_WORDS;
        let num_items = u32::try_from(items).map_err(|_| DatasetError::TooLarge { items })?;
        Ok(Self { words, num_items })
    }

    /// Decode raw little-endian dataset bytes.
    ///
    /// # Errors
    /// Same rules as [`MemoryDataset::from_words`], checked on the byte length.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, DatasetError> {
        if bytes.is_empty() {
            return Err(DatasetError::Empty);
        }
        if !bytes.len().is_multiple_of(DATASET_ITEM_SIZE) {
            return Err(DatasetError::Misaligned { len: bytes.len() });
        }

        let words = bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Self::from_words(words)
    }

    /// Pseudo-random dataset filled from a seeded KISS99 stream.
    ///
    /// Not an ethash DAG. Used to exercise the engine without a real epoch.
    ///
    /// # Panics
    /// Panics if `num_items` is zero.
    #[must_use]
    pub fn synthetic(num_items: u32, seed: u64) -> Self {
        assert!(num_items > 0, "synthetic dataset needs at least one item");

        let words = Kiss99::from_seed(seed)
            .take(num_items as usize * DATASET_ITEM_WORDS)
            .collect();

        tracing::debug!(num_items, seed, "built synthetic dataset");
        Self { words, num_items }
    }

    /// All dataset words.
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Dataset size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.words.len() * core::mem::size_of::<u32>()
    }
}

impl EpochContext for MemoryDataset {
    fn num_items_2048(&self) -> u32 {
        self.num_items
    }

    fn item_2048(&self, index: u32) -> Hash2048Words {
        let start = index as usize * DATASET_ITEM_WORDS;
        let mut item = [0u32; DATASET_ITEM_WORDS];
        item.copy_from_slice(&self.words[start..start + DATASET_ITEM_WORDS]);
        item
    }

    fn num_words(&self) -> usize {
        self.words.len()
    }

    fn word(&self, index: usize) -> u32 {
        self.words[index]
    }
}

impl fmt::Debug for MemoryDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDataset")
            .field("num_items", &self.num_items)
            .field("size_bytes", &self.size_bytes())
            .finish()
    }
}

// =============================================================================
// L1 CACHE
// =============================================================================

/// Copy the first `L1_CACHE_NUM_ITEMS` dataset words into `cache`.
///
/// Datasets smaller than the cache wrap around item by item.
///
/// # Panics
/// Panics if the context has no items.
pub fn build_l1_cache<C: EpochContext + ?Sized>(
    cache: &mut [u32; L1_CACHE_NUM_ITEMS],
    context: &C,
) {
    let num_items = context.num_items_2048();
    for (i, chunk) in (0u32..).zip(cache.chunks_exact_mut(DATASET_ITEM_WORDS)) {
        chunk.copy_from_slice(&context.item_2048(i % num_items));
    }
}

/// 16 KiB cache of the first dataset words, read by every cache access.
#[derive(Clone, PartialEq, Eq)]
pub struct L1Cache(Box<[u32; L1_CACHE_NUM_ITEMS]>);

impl L1Cache {
    /// Build the cache for `context`.
    ///
    /// # Panics
    /// Panics if the context has no items.
    #[must_use]
    pub fn build<C: EpochContext + ?Sized>(context: &C) -> Self {
        let mut cache = Box::new([0u32; L1_CACHE_NUM_ITEMS]);
        build_l1_cache(&mut cache, context);
        Self(cache)
    }

    /// Cached words.
    #[must_use]
    pub fn words(&self) -> &[u32; L1_CACHE_NUM_ITEMS] {
        &self.0
    }

    /// Word at `index % L1_CACHE_NUM_ITEMS`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: u32) -> u32 {
        self.0[index as usize % L1_CACHE_NUM_ITEMS]
    }
}

impl fmt::Debug for L1Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L1Cache([{:#010x}, ..])", self.0[0])
    }
}
