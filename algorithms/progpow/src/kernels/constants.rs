//! ProgPoW Kernel Constants
//!
//! Parameters of ProgPoW 0.9.2. Every value here is consensus-critical:
//! changing any of them changes every digest the engine produces.
//!
//! ```text
//! PERIOD_LENGTH       50      blocks sharing one random program
//! NUM_LANES           16      parallel register files
//! NUM_REGS            32      32-bit registers per lane
//! NUM_CACHE_ACCESSES  11      L1 cache reads per round
//! NUM_MATH_OPERATIONS 18      random math operations per round
//! NUM_ROUNDS          64      dataset accesses per hash
//! L1_CACHE_SIZE       16 KiB  first words of the dataset
//! ```

// =============================================================================
// PROGRAM SHAPE
// =============================================================================

/// Number of blocks sharing the same random program.
pub const PERIOD_LENGTH: u64 = 50;

/// Number of parallel lanes (independent register files).
pub const NUM_LANES: usize = 16;

/// Number of 32-bit registers per lane.
pub const NUM_REGS: usize = 32;

/// L1 cache accesses per round.
pub const NUM_CACHE_ACCESSES: usize = 11;

/// Random math operations per round.
pub const NUM_MATH_OPERATIONS: usize = 18;

/// Interleaved cache/math steps per round.
pub const MAX_OPERATIONS: usize = if NUM_CACHE_ACCESSES > NUM_MATH_OPERATIONS {
    NUM_CACHE_ACCESSES
} else {
    NUM_MATH_OPERATIONS
};

/// Rounds (dataset accesses) per hash.
pub const NUM_ROUNDS: u32 = 64;

// =============================================================================
// MEMORY LAYOUT
// =============================================================================

/// L1 cache size in bytes.
pub const L1_CACHE_SIZE: usize = 16 * 1024;

/// L1 cache size in 32-bit words.
pub const L1_CACHE_NUM_ITEMS: usize = L1_CACHE_SIZE / core::mem::size_of::<u32>();

/// Words in one 2048-bit dataset item (the unit of a round's dataset load).
pub const DATASET_ITEM_WORDS: usize = 64;

/// Bytes in one 2048-bit dataset item.
pub const DATASET_ITEM_SIZE: usize = DATASET_ITEM_WORDS * core::mem::size_of::<u32>();

/// Dataset words merged into each lane per round.
pub const NUM_WORDS_PER_LANE: usize = DATASET_ITEM_WORDS / NUM_LANES;

/// Hash output size in bytes (256-bit digest).
pub const HASH_SIZE: usize = 32;

/// Digest size in 32-bit words.
pub const HASH_WORDS: usize = HASH_SIZE / core::mem::size_of::<u32>();

// =============================================================================
// FNV-1a
// =============================================================================

/// 32-bit FNV prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

// =============================================================================
// KISS99
// =============================================================================

/// Marsaglia's reference KISS99 state (z, w, jsr, jcong).
pub const KISS99_DEFAULT: (u32, u32, u32, u32) =
    (362_436_069, 521_288_629, 123_456_789, 380_116_160);

// =============================================================================
// KECCAK-f[800]
// =============================================================================

/// Rounds of the 800-bit permutation (12 + 2·log2(32)).
pub const KECCAK_ROUNDS: usize = 22;

/// State width in 32-bit lanes.
pub const KECCAK_STATE_WORDS: usize = 25;

/// Round constants: the low 32 bits of the Keccak-f[1600] constants.
pub const KECCAK_ROUND_CONSTANTS: [u32; KECCAK_ROUNDS] = [
    0x0000_0001,
    0x0000_8082,
    0x0000_808A,
    0x8000_8000,
    0x0000_808B,
    0x8000_0001,
    0x8000_8081,
    0x0000_8009,
    0x0000_008A,
    0x0000_0088,
    0x8000_8009,
    0x8000_000A,
    0x8000_808B,
    0x0000_008B,
    0x0000_8089,
    0x0000_8003,
    0x0000_8002,
    0x0000_0080,
    0x0000_800A,
    0x8000_000A,
    0x8000_8081,
    0x0000_8080,
];

/// Rho rotation offsets in Pi traversal order, reduced modulo 32.
pub const KECCAK_RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 4, 13, 23, 2, 14, 27, 9, 24, 8, 25, 11, 30, 18, 7, 29, 20, 12,
];

/// Pi lane traversal order.
pub const KECCAK_PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];
