//! Hash Kernels
//!
//! Leaf primitives of the engine: Keccak-f[800], KISS99 and the random
//! math/merge operator tables.

pub mod constants;
pub mod keccak;
pub mod kiss99;
pub mod math;
