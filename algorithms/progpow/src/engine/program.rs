//! Per-period random program.
//!
//! Every `PERIOD_LENGTH` blocks the engine derives a new program: a KISS99
//! stream plus two shuffled register sequences that decide which registers
//! each cache access and math operation touches. A [`Program`] bundles that
//! state with the L1 cache so callers can reuse both across nonces.

use crate::dataset::{EpochContext, L1Cache};
use crate::kernels::constants::{NUM_REGS, PERIOD_LENGTH};
use crate::kernels::kiss99::Kiss99;

// =============================================================================
// MIX RNG STATE
// =============================================================================

/// Program state: the RNG and the destination/source register sequences.
///
/// Both sequences are permutations of `0..NUM_REGS`. The cursors wrap, so a
/// program can be replayed for any number of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixRngState {
    rng: Kiss99,
    dst_seq: [usize; NUM_REGS],
    src_seq: [usize; NUM_REGS],
    dst_counter: usize,
    src_counter: usize,
}

impl MixRngState {
    /// Derive the program for a period seed (`block_number / PERIOD_LENGTH`).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = Kiss99::from_seed(seed);

        let mut dst_seq: [usize; NUM_REGS] = core::array::from_fn(|i| i);
        let mut src_seq: [usize; NUM_REGS] = core::array::from_fn(|i| i);

        // Fisher-Yates, back to front, dst and src draws interleaved.
        for i in (2..=NUM_REGS).rev() {
            let j = rng.next_u32() as usize % i;
            dst_seq.swap(i - 1, j);
            let j = rng.next_u32() as usize % i;
            src_seq.swap(i - 1, j);
        }

        Self {
            rng,
            dst_seq,
            src_seq,
            dst_counter: 0,
            src_counter: 0,
        }
    }

    /// Program for the period containing `block_number`.
    #[must_use]
    pub fn for_block(block_number: u64) -> Self {
        Self::new(period_of(block_number))
    }

    /// Next destination register.
    #[inline]
    pub const fn next_dst(&mut self) -> usize {
        let reg = self.dst_seq[self.dst_counter % NUM_REGS];
        self.dst_counter = self.dst_counter.wrapping_add(1);
        reg
    }

    /// Next source register.
    #[inline]
    pub const fn next_src(&mut self) -> usize {
        let reg = self.src_seq[self.src_counter % NUM_REGS];
        self.src_counter = self.src_counter.wrapping_add(1);
        reg
    }

    /// Next raw RNG word (operator selectors, operand picks).
    #[inline]
    pub const fn rng(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Destination register sequence.
    #[must_use]
    pub const fn dst_seq(&self) -> &[usize; NUM_REGS] {
        &self.dst_seq
    }

    /// Source register sequence.
    #[must_use]
    pub const fn src_seq(&self) -> &[usize; NUM_REGS] {
        &self.src_seq
    }
}

/// Period index of a block.
#[inline]
#[must_use]
pub const fn period_of(block_number: u64) -> u64 {
    block_number / PERIOD_LENGTH
}

// =============================================================================
// PROGRAM
// =============================================================================

/// Everything a hash needs besides the dataset and the nonce: the period's
/// mix RNG state and the L1 cache of the epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    period: u64,
    state: MixRngState,
    l1_cache: L1Cache,
}

impl Program {
    /// Build the program for `block_number` against `context`.
    ///
    /// # Panics
    /// Panics if the context has no items.
    #[must_use]
    pub fn build<C: EpochContext + ?Sized>(context: &C, block_number: u64) -> Self {
        let period = period_of(block_number);
        let program = Self {
            period,
            state: MixRngState::new(period),
            l1_cache: L1Cache::build(context),
        };

        tracing::trace!(period, block_number, "built program");
        program
    }

    /// Period index this program belongs to.
    #[must_use]
    pub const fn period(&self) -> u64 {
        self.period
    }

    /// True when `block_number` runs this program.
    #[must_use]
    pub const fn covers(&self, block_number: u64) -> bool {
        period_of(block_number) == self.period
    }

    /// Mix RNG state at the start of every round.
    #[must_use]
    pub const fn state(&self) -> &MixRngState {
        &self.state
    }

    /// L1 cache of the epoch.
    #[must_use]
    pub const fn l1_cache(&self) -> &L1Cache {
        &self.l1_cache
    }
}

// =============================================================================
// PROGRAM CACHE
// =============================================================================

/// Caller-owned single-slot cache of the current period's [`Program`].
///
/// Keyed by period only. An epoch always spans whole periods, but a caller
/// that swaps datasets within one period must call
/// [`ProgramCache::invalidate`].
#[derive(Debug, Clone, Default)]
pub struct ProgramCache {
    program: Option<Program>,
}

impl ProgramCache {
    /// Empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { program: None }
    }

    /// Program for `block_number`, rebuilt only when the period changes.
    ///
    /// # Panics
    /// Panics if a rebuild is needed and the context has no items.
    pub fn get_or_build<C: EpochContext + ?Sized>(
        &mut self,
        context: &C,
        block_number: u64,
    ) -> &Program {
        if self
            .program
            .as_ref()
            .is_some_and(|program| !program.covers(block_number))
        {
            tracing::debug!(
                period = period_of(block_number),
                "period changed, rebuilding program"
            );
            self.program = None;
        }

        self.program
            .get_or_insert_with(|| Program::build(context, block_number))
    }

    /// Cached program, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    /// Drop the cached program.
    pub fn invalidate(&mut self) {
        self.program = None;
    }
}
