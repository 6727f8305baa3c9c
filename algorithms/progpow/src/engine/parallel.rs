//! Nonce Search Engine
//!
//! Scans a nonce range against one shared [`Program`]. With the
//! `multithread` feature the range is split across the rayon pool; the hit
//! returned is always the lowest matching nonce, so parallel and serial
//! scans agree.

use core::ops::Range;

use crate::dataset::EpochContext;
use crate::engine::mix::evaluate;
use crate::engine::program::Program;
use crate::types::{meets_boundary, Hash256, SearchResult};

/// Try `iterations` nonces from `start_nonce` (wrapping) and return the
/// first one whose final hash meets `boundary`.
///
/// # Panics
/// Panics if the context has no items.
pub fn scan<C: EpochContext + ?Sized>(
    context: &C,
    program: &Program,
    header_hash: &Hash256,
    boundary: &Hash256,
    start_nonce: u64,
    iterations: u64,
) -> Option<SearchResult> {
    let hit = (0..iterations).find_first_nonce(|i| {
        let nonce = start_nonce.wrapping_add(i);
        let result = evaluate(context, program, header_hash, nonce);
        meets_boundary(&result.final_hash, boundary).then_some(SearchResult { nonce, result })
    });

    match &hit {
        Some(found) => tracing::debug!(nonce = found.nonce, start_nonce, "boundary met"),
        None => tracing::debug!(start_nonce, iterations, "no nonce met the boundary"),
    }
    hit
}

/// Helper for feature-agnostic range scanning
trait NonceProcessor {
    fn find_first_nonce<F, R>(self, f: F) -> Option<R>
    where
        F: Fn(u64) -> Option<R> + Sync + Send,
        R: Send;
}

impl NonceProcessor for Range<u64> {
    fn find_first_nonce<F, R>(self, f: F) -> Option<R>
    where
        F: Fn(u64) -> Option<R> + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.into_par_iter().find_map_first(f)
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.filter_map(f).next()
        }
    }
}
